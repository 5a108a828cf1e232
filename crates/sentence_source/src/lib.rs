//! Sentence source: reads a data file and normalizes it into sentence records.
mod decode;
mod load;
mod parse;
mod types;

pub use decode::{decode_text, DecodeError, DecodedText};
pub use load::{load_path, parse_text, SourceError};
pub use parse::{LineParser, SourceParser, StructuredParser};
pub use types::{SourceFormat, SourceRecord};
