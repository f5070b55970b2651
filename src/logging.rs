//! Log setup.
//!
//! The terminal belongs to the game, so logs only ever go to a file, and only
//! when one is configured.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::SorterConfig;

/// Install the global subscriber. Returns `false` when logging is disabled.
pub fn init(config: &SorterConfig) -> Result<bool> {
    let Some(path) = &config.log_path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("install log subscriber: {e}"))?;
    Ok(true)
}

/// Log the error a binary is about to exit with, then hand it back.
pub fn report(result: Result<()>) -> Result<()> {
    if let Err(err) = &result {
        tracing::error!("{err:#}");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn report_logs_and_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sorter.log");
        let file = fs::File::create(&path).unwrap();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .finish();

        let result = tracing::subscriber::with_default(subscriber, || {
            report(Err(anyhow!("terminal went away")).context("draw frame"))
        });

        let err = result.unwrap_err();
        assert_eq!(format!("{err:#}"), "draw frame: terminal went away");
        let logged = fs::read_to_string(&path).unwrap();
        assert!(logged.contains("ERROR"));
        assert!(logged.contains("draw frame: terminal went away"));
    }

    #[test]
    fn report_passes_ok_through() {
        assert!(report(Ok(())).is_ok());
    }

    #[test]
    fn disabled_without_path() {
        let cfg = SorterConfig {
            log_path: None,
            ..SorterConfig::default()
        };
        assert!(!init(&cfg).unwrap());
    }
}
