use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

/// High score stored as one integer in a text file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored value.
    pub fn try_load(&self) -> Result<i32> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("read high score from {}", self.path.display()))?;
        raw.trim()
            .parse::<i32>()
            .with_context(|| format!("parse high score {:?} in {}", raw.trim(), self.path.display()))
    }

    /// Read the stored value; a missing or unreadable file counts as 0.
    pub fn load(&self) -> i32 {
        match self.try_load() {
            Ok(score) => {
                debug!(path = %self.path.display(), score, "loaded high score");
                score
            }
            Err(err) => {
                warn!("no usable high score ({err:#}), starting from 0");
                0
            }
        }
    }

    /// Overwrite the stored value.
    ///
    /// Writes a sibling temp file first and renames it over the target, so a
    /// crash mid-write never leaves a truncated score behind. Missing parent
    /// directories are created.
    pub fn save(&self, score: i32) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("create high score directory {}", dir.display()))?;
        }

        let tmp = self.path.with_extension("tmp");
        {
            let mut f = fs::File::create(&tmp)
                .with_context(|| format!("create {}", tmp.display()))?;
            write!(f, "{score}")?;
            f.sync_all()?;
        }
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("replace {}", self.path.display()))?;

        info!(path = %self.path.display(), score, "saved high score");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = HighScoreFile::new(dir.path().join("highscore.txt"));
        assert_eq!(store.load(), 0);
        assert!(store.try_load().is_err());
    }

    #[test]
    fn corrupt_file_loads_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore.txt");
        fs::write(&path, "lots").unwrap();
        assert_eq!(HighScoreFile::new(&path).load(), 0);
    }

    #[test]
    fn surrounding_whitespace_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore.txt");
        fs::write(&path, " 85\n").unwrap();
        assert_eq!(HighScoreFile::new(&path).load(), 85);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = HighScoreFile::new(dir.path().join("nested/data/highscore.txt"));
        store.save(120).unwrap();
        assert_eq!(store.load(), 120);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "120");

        store.save(130).unwrap();
        assert_eq!(store.load(), 130);
        assert!(!store.path().with_extension("tmp").exists());
    }
}
