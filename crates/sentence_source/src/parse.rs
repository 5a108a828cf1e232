use serde::Deserialize;

use crate::{SourceError, SourceRecord};

/// Turns decoded source text into sentence records.
pub trait SourceParser {
    fn parse(&self, text: &str) -> Result<Vec<SourceRecord>, SourceError>;
}

/// JSON parser accepting `{"sentences": [...]}` or a bare array, where each
/// entry is either `{ "content": ..., "favorite": ... }` or a plain string.
pub struct StructuredParser;

#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Wrapped { sentences: Vec<RawRecord> },
    Bare(Vec<RawRecord>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRecord {
    Text(String),
    Record {
        content: String,
        #[serde(default)]
        favorite: bool,
    },
}

impl SourceParser for StructuredParser {
    fn parse(&self, text: &str) -> Result<Vec<SourceRecord>, SourceError> {
        let document: Document = serde_json::from_str(text)?;
        let raw = match document {
            Document::Wrapped { sentences } => sentences,
            Document::Bare(records) => records,
        };
        Ok(raw
            .into_iter()
            .map(|record| match record {
                RawRecord::Text(content) => SourceRecord {
                    content,
                    favorite: false,
                },
                RawRecord::Record { content, favorite } => SourceRecord { content, favorite },
            })
            .filter_map(|record| {
                let content = record.content.trim();
                (!content.is_empty()).then(|| SourceRecord {
                    content: content.to_string(),
                    favorite: record.favorite,
                })
            })
            .collect())
    }
}

/// Plain text parser: one sentence per line.
///
/// Lines are trimmed, control characters are stripped, a leading
/// `<digits><whitespace>` numbering prefix is removed, and empty lines or a
/// lone `}` are skipped.
pub struct LineParser;

impl SourceParser for LineParser {
    fn parse(&self, text: &str) -> Result<Vec<SourceRecord>, SourceError> {
        Ok(text.lines().filter_map(clean_line).map(SourceRecord::new).collect())
    }
}

fn clean_line(line: &str) -> Option<String> {
    let stripped: String = line
        .chars()
        .filter(|c| !c.is_control() || c.is_whitespace())
        .collect();
    let cleaned = strip_numbering(stripped.trim());
    if cleaned.is_empty() || cleaned == "}" {
        None
    } else {
        Some(cleaned.to_string())
    }
}

fn strip_numbering(line: &str) -> &str {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == line.len() {
        return line;
    }
    let body = rest.trim_start();
    if body.len() == rest.len() {
        // Digits not followed by whitespace are part of the sentence.
        line
    } else {
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbering_requires_trailing_whitespace() {
        assert_eq!(strip_numbering("12 Hello"), "Hello");
        assert_eq!(strip_numbering("3\tTabbed"), "Tabbed");
        assert_eq!(strip_numbering("1984 was a novel"), "was a novel");
        assert_eq!(strip_numbering("42"), "42");
        assert_eq!(strip_numbering("7th heaven"), "7th heaven");
        assert_eq!(strip_numbering("No number"), "No number");
    }

    #[test]
    fn clean_line_drops_noise() {
        assert_eq!(clean_line("   "), None);
        assert_eq!(clean_line("}"), None);
        assert_eq!(clean_line("  } "), None);
        assert_eq!(clean_line("\u{0007}Bell\u{0000}"), Some("Bell".to_string()));
        assert_eq!(clean_line("5. Five"), Some("5. Five".to_string()));
    }
}
