use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use super::HighScoreStore;

/// On-disk layout of the high score file
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct HighScoreRecord {
    high_score: u32,
}

/// High score kept in a small JSON document
///
/// The file is read once on open and rewritten on every new record.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    cached: u32,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cached = read_record(&path).map(|r| r.high_score).unwrap_or(0);
        Self { path, cached }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Missing file is silent, anything else is logged and treated as absent
fn read_record(path: &Path) -> Option<HighScoreRecord> {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
        Err(err) => {
            warn!(error = %err, ?path, "cannot read high score file");
            return None;
        }
    };

    match serde_json::from_str(&json) {
        Ok(record) => Some(record),
        Err(err) => {
            warn!(error = %err, ?path, "ignoring malformed high score file");
            None
        }
    }
}

impl HighScoreStore for JsonFileStore {
    fn high_score(&self) -> u32 {
        self.cached
    }

    fn set_high_score(&mut self, score: u32) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(&HighScoreRecord { high_score: score })
            .context("Failed to serialize high score")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write high score to {:?}", self.path))?;

        self.cached = score;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_zero() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(dir.path().join("high_score.json"));
        assert_eq!(store.high_score(), 0);
    }

    #[test]
    fn test_corrupt_file_reads_zero() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("high_score.json");
        std::fs::write(&path, "not json").unwrap();

        assert_eq!(JsonFileStore::open(&path).high_score(), 0);
    }

    #[test]
    fn test_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("high_score.json");

        let mut store = JsonFileStore::open(&path);
        store.set_high_score(80).unwrap();
        assert_eq!(store.high_score(), 80);

        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.high_score(), 80);
        assert_eq!(reopened.path(), path.as_path());
    }
}
