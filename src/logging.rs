//! File-backed tracing. The terminal belongs to the UI, so nothing is logged to stdout or stderr.

use crate::config::AppConfig;
use anyhow::{anyhow, Context, Result};
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins over the configured level.
pub fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("brand_genesis={}", log_level)))
}

/// Starts logging to the configured file. Without a log file, events are dropped.
pub fn init_logging(config: &AppConfig) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config.log_level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_without_log_file_is_a_no_op() {
        let config = AppConfig {
            log_file: None,
            ..AppConfig::default()
        };
        assert!(init_logging(&config).is_ok());
    }

    #[test]
    fn test_creates_log_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logs").join("brand-genesis.log");
        let config = AppConfig {
            log_file: Some(path.clone()),
            ..AppConfig::default()
        };

        // Another test may already own the global subscriber; the file is opened regardless.
        let _ = init_logging(&config);
        assert!(path.exists());
    }
}
