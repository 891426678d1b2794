// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{option} must be at least 1")]
    Zero { option: &'static str },
}

/// Options of a dashboard session.
///
/// Every field has a default, so a config file only needs to list what it changes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Seconds between two ticks.
    pub refresh_interval_secs: u64,

    /// Maximum number of observations kept, `0` keeps all of them.
    pub history_cap: usize,

    /// Number of most recent observations shown in the table.
    pub table_rows: usize,

    /// Seed for the random generator. A fresh seed is drawn when unset.
    pub seed: Option<u64>,

    /// Replay the built-in demo script instead of random readings.
    pub scripted: bool,
}

impl DashboardConfig {
    pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 10;
    pub const DEFAULT_HISTORY_CAP: usize = 5;
    pub const DEFAULT_TABLE_ROWS: usize = 5;

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config = serde_json::from_str::<Self>(json)?;
        config.validate()?;

        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        log::info!("Loaded dashboard config from {}", path.display());
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.refresh_interval_secs == 0 {
            return Err(ConfigError::Zero {
                option: "refresh_interval_secs",
            });
        }
        if self.table_rows == 0 {
            return Err(ConfigError::Zero {
                option: "table_rows",
            });
        }
        Ok(())
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    /// The history cap, `None` for an unbounded history.
    pub fn history_cap(&self) -> Option<NonZeroUsize> {
        NonZeroUsize::new(self.history_cap)
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: Self::DEFAULT_REFRESH_INTERVAL_SECS,
            history_cap: Self::DEFAULT_HISTORY_CAP,
            table_rows: Self::DEFAULT_TABLE_ROWS,
            seed: None,
            scripted: false,
        }
    }
}
