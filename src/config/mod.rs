//! @acp:module "Configuration"
//! @acp:summary "Tool configuration loading and defaults"
//! @acp:domain cli
//! @acp:layer config

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::design::ScoringWeights;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = ".uipro.config.json";

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_box_width() -> usize {
    90
}

fn default_parallel_search() -> bool {
    true
}

/// Main uipro configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding the style guide CSV files and `ui-reasoning.csv`
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Best-match scoring weights for the style domain
    #[serde(default)]
    pub scoring: ScoringWeights,

    /// Column width of the box report
    #[serde(default = "default_box_width")]
    pub box_width: usize,

    /// Dispatch the non-product domain searches concurrently
    #[serde(default = "default_parallel_search")]
    pub parallel_search: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            scoring: ScoringWeights::default(),
            box_width: default_box_width(),
            parallel_search: default_parallel_search(),
        }
    }
}

impl Config {
    /// Load config from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load from the given location, or fall back to defaults when absent
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Override the data directory (env var or CLI flag layer)
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        self
    }

    /// Resolve the data directory.
    ///
    /// A relative `data_dir` that does not exist in the working directory
    /// falls back to `<user data dir>/uipro/data` when that exists.
    pub fn resolved_data_dir(&self) -> PathBuf {
        if self.data_dir.is_absolute() || self.data_dir.exists() {
            return self.data_dir.clone();
        }
        dirs::data_dir()
            .map(|base| base.join("uipro").join(&self.data_dir))
            .filter(|candidate| candidate.exists())
            .unwrap_or_else(|| self.data_dir.clone())
    }

    fn validate(&self) -> crate::Result<()> {
        if self.box_width < 40 {
            return Err(crate::UiProError::Config(format!(
                "boxWidth must be at least 40, got {}",
                self.box_width
            )));
        }
        Ok(())
    }
}
