use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use viewer_logging::{viewer_debug, viewer_info};

use crate::parse::{LineParser, SourceParser, StructuredParser};
use crate::{decode_text, DecodeError, SourceFormat, SourceRecord};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("could not read {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("malformed sentence document: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("the source contains no sentences")]
    Empty,
}

/// Reads, decodes and parses the file at `path`.
pub fn load_path(path: &Path, format: SourceFormat) -> Result<Vec<SourceRecord>, SourceError> {
    let bytes = fs::read(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let decoded = decode_text(&bytes)?;
    viewer_debug!(
        "Read {} bytes from {:?} as {}",
        bytes.len(),
        path,
        decoded.encoding_label
    );

    let records = parse_text(&decoded.text, format)?;
    viewer_info!("Loaded {} sentences from {:?}", records.len(), path);
    Ok(records)
}

/// Parses already decoded text. An empty result is an error.
pub fn parse_text(text: &str, format: SourceFormat) -> Result<Vec<SourceRecord>, SourceError> {
    let records = match format {
        SourceFormat::Structured => StructuredParser.parse(text)?,
        SourceFormat::LineDelimited => LineParser.parse(text)?,
    };
    if records.is_empty() {
        return Err(SourceError::Empty);
    }
    Ok(records)
}
