use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use sentence_source::SourceFormat;

use super::logging::LogDestination;

#[derive(Debug, Parser)]
#[command(
    name = "sentence-viewer",
    version,
    about = "Step through a collection of sentences in the terminal"
)]
pub struct Cli {
    /// Sentence file (.json document or plain text, one sentence per line)
    pub data: Option<PathBuf>,

    /// Config file (defaults to ./sentence-viewer.ron when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Force the data format instead of guessing from the extension
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Seconds between automatic random advances (0 disables)
    #[arg(long)]
    pub interval: Option<u64>,

    /// Number of sentences drawn by the batch command
    #[arg(long)]
    pub batch: Option<usize>,

    /// Seed for a reproducible random order
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where log output goes
    #[arg(long, value_enum)]
    pub log: Option<LogDestination>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Lines,
}

impl From<FormatArg> for SourceFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => SourceFormat::Structured,
            FormatArg::Lines => SourceFormat::LineDelimited,
        }
    }
}
