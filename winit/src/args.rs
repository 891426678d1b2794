use std::path::PathBuf;

use antarctic_dashboard_common::{ConfigError, DashboardConfig};
use clap::Parser;

/// Live temperature and barometric pressure readings from Antarctica.
///
/// Options given here override the ones from the config file.
#[derive(Parser, Debug, Default)]
#[command(version, about)]
pub struct Args {
    /// JSON config file
    #[arg(long, env = "DASHBOARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Seconds between two readings [default: 10]
    #[arg(long, env = "DASHBOARD_REFRESH_SECS")]
    pub refresh_secs: Option<u64>,

    /// Number of readings kept, 0 keeps all of them [default: 5]
    #[arg(long, env = "DASHBOARD_HISTORY_CAP")]
    pub history_cap: Option<usize>,

    /// Number of readings shown in the table [default: 5]
    #[arg(long, env = "DASHBOARD_TABLE_ROWS")]
    pub table_rows: Option<usize>,

    /// Seed for reproducible random readings
    #[arg(long, env = "DASHBOARD_SEED")]
    pub seed: Option<u64>,

    /// Replay the built-in demo readings instead of random ones
    #[arg(long)]
    pub scripted: bool,
}

impl Args {
    /// Merges the options into the config file (or the defaults) and validates the result.
    pub fn into_config(self) -> Result<DashboardConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => DashboardConfig::from_file(path)?,
            None => DashboardConfig::default(),
        };

        if let Some(refresh_secs) = self.refresh_secs {
            config.refresh_interval_secs = refresh_secs;
        }
        if let Some(history_cap) = self.history_cap {
            config.history_cap = history_cap;
        }
        if let Some(table_rows) = self.table_rows {
            config.table_rows = table_rows;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.scripted |= self.scripted;

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_options_gives_defaults() {
        let config = Args::default().into_config().unwrap();

        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "antarctic-dashboard",
            "--refresh-secs",
            "2",
            "--history-cap",
            "20",
            "--table-rows",
            "8",
            "--seed",
            "99",
            "--scripted",
        ])
        .unwrap();
        let config = args.into_config().unwrap();

        assert_eq!(config.refresh_interval_secs, 2);
        assert_eq!(config.history_cap, 20);
        assert_eq!(config.table_rows, 8);
        assert_eq!(config.seed, Some(99));
        assert!(config.scripted);
    }

    #[test]
    fn zero_refresh_is_rejected() {
        let args = Args {
            refresh_secs: Some(0),
            ..Default::default()
        };

        assert!(matches!(args.into_config(), Err(ConfigError::Zero { .. })));
    }
}
