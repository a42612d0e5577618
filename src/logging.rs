//! Log setup
//!
//! The terminal belongs to the UI, so logs always go to a file.
//! `FOLIO_TUI_LOG` takes an `EnvFilter` directive and defaults to `info`.

use crate::config::Config;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "FOLIO_TUI_LOG";

/// Resolve the log file from config, falling back to the config directory
pub fn log_path(config: &Config) -> Option<PathBuf> {
    config.log_file.clone().or_else(Config::default_log_path)
}

/// Install the global subscriber writing to `path`
pub fn init_logging(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_log_file_wins() {
        let config = Config {
            log_file: Some(PathBuf::from("/tmp/custom.log")),
            ..Config::default()
        };
        assert_eq!(log_path(&config), Some(PathBuf::from("/tmp/custom.log")));
    }

    #[test]
    fn test_default_log_file_lives_in_config_dir() {
        let config = Config::default();
        if let (Some(path), Some(dir)) = (log_path(&config), Config::config_dir()) {
            assert!(path.starts_with(dir));
        }
    }
}
