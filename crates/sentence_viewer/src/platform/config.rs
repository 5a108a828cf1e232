use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{ensure, Context};
use sentence_core::{DEFAULT_AUTO_ADVANCE, DEFAULT_BATCH_SIZE};
use sentence_source::SourceFormat;
use serde::{Deserialize, Serialize};
use viewer_logging::viewer_debug;

use super::cli::Cli;
use super::logging::LogDestination;

const CONFIG_FILENAME: &str = "sentence-viewer.ron";
const DEFAULT_DATA_PATH: &str = "sentences.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub data_path: PathBuf,
    /// `None` picks the format from the file extension.
    pub format: Option<SourceFormat>,
    pub auto_advance_secs: u64,
    pub batch_size: usize,
    pub seed: Option<u64>,
    pub log: LogDestination,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            format: None,
            auto_advance_secs: DEFAULT_AUTO_ADVANCE.as_secs(),
            batch_size: DEFAULT_BATCH_SIZE,
            seed: None,
            log: LogDestination::default(),
        }
    }
}

impl ViewerConfig {
    /// Reads the config file (explicit path, or `./sentence-viewer.ron` when it
    /// exists) and applies command line overrides on top.
    pub fn resolve(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::read(path)?,
            None => {
                let default_path = Path::new(CONFIG_FILENAME);
                if default_path.exists() {
                    Self::read(default_path)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_cli(cli);
        ensure!(config.batch_size > 0, "batch size must be at least 1");
        Ok(config)
    }

    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Self = ron::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        viewer_debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(data) = &cli.data {
            self.data_path = data.clone();
        }
        if let Some(format) = cli.format {
            self.format = Some(format.into());
        }
        if let Some(interval) = cli.interval {
            self.auto_advance_secs = interval;
        }
        if let Some(batch) = cli.batch {
            self.batch_size = batch;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        if let Some(log) = cli.log {
            self.log = log;
        }
    }

    pub fn source_format(&self) -> SourceFormat {
        self.format
            .unwrap_or_else(|| SourceFormat::from_path(&self.data_path))
    }

    pub fn auto_advance(&self) -> Duration {
        Duration::from_secs(self.auto_advance_secs)
    }
}
