//! Runtime configuration read from the environment.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Process configuration shared by both binaries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SorterConfig {
    /// File holding the high score
    pub highscore_path: PathBuf,
    /// Seed for letter and snowfall randomness
    pub seed: u32,
    /// Log file; logging is off when unset
    pub log_path: Option<PathBuf>,
    /// `tracing-subscriber` filter directive, e.g. `info` or `santa_sorter=debug`
    pub log_level: String,
    /// Silence the terminal bell
    pub mute: bool,
}

impl Default for SorterConfig {
    fn default() -> Self {
        Self {
            highscore_path: PathBuf::from("data/highscore.txt"),
            seed: clock_seed(),
            log_path: None,
            log_level: "info".to_string(),
            mute: false,
        }
    }
}

impl SorterConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup; unset or invalid values keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let highscore_path = non_empty("SANTA_SORTER_HIGHSCORE_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.highscore_path);

        let seed = non_empty("SANTA_SORTER_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.seed);

        let log_path = non_empty("SANTA_SORTER_LOG_PATH").map(PathBuf::from);

        let log_level = non_empty("SANTA_SORTER_LOG_LEVEL").unwrap_or(defaults.log_level);

        let mute = non_empty("SANTA_SORTER_MUTE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(defaults.mute);

        Self {
            highscore_path,
            seed,
            log_path,
            log_level,
            mute,
        }
    }
}

fn clock_seed() -> u32 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (now.as_secs() as u32) ^ now.subsec_nanos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = SorterConfig::from_lookup(lookup(&[]));
        assert_eq!(cfg.highscore_path, PathBuf::from("data/highscore.txt"));
        assert_eq!(cfg.log_path, None);
        assert_eq!(cfg.log_level, "info");
        assert!(!cfg.mute);
    }

    #[test]
    fn reads_every_variable() {
        let cfg = SorterConfig::from_lookup(lookup(&[
            ("SANTA_SORTER_HIGHSCORE_PATH", "/tmp/hs.txt"),
            ("SANTA_SORTER_SEED", "42"),
            ("SANTA_SORTER_LOG_PATH", "sorter.log"),
            ("SANTA_SORTER_LOG_LEVEL", "debug"),
            ("SANTA_SORTER_MUTE", "TRUE"),
        ]));
        assert_eq!(cfg.highscore_path, PathBuf::from("/tmp/hs.txt"));
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.log_path, Some(PathBuf::from("sorter.log")));
        assert_eq!(cfg.log_level, "debug");
        assert!(cfg.mute);
    }

    #[test]
    fn invalid_values_fall_back() {
        let cfg = SorterConfig::from_lookup(lookup(&[
            ("SANTA_SORTER_HIGHSCORE_PATH", "   "),
            ("SANTA_SORTER_SEED", "not-a-number"),
            ("SANTA_SORTER_LOG_PATH", ""),
            ("SANTA_SORTER_MUTE", "nope"),
        ]));
        assert_eq!(cfg.highscore_path, PathBuf::from("data/highscore.txt"));
        assert_eq!(cfg.log_path, None);
        assert!(!cfg.mute);
    }
}
