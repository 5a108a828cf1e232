use std::path::Path;

use serde::{Deserialize, Serialize};

/// One sentence as read from the data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRecord {
    pub content: String,
    pub favorite: bool,
}

impl SourceRecord {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            favorite: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFormat {
    /// JSON document with `{content, favorite?}` records.
    Structured,
    /// Plain text, one sentence per line.
    LineDelimited,
}

impl SourceFormat {
    /// `.json` files are structured; everything else is read line by line.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SourceFormat::Structured,
            _ => SourceFormat::LineDelimited,
        }
    }
}
