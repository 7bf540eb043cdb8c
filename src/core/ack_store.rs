//! Persistence for the acknowledged-announcement-id set.
//!
//! A single JSON array under a fixed path in the config directory. A
//! missing or corrupt file loads as the empty set (fail open). Every save
//! writes the full set, never a delta.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::errors::AppResult;

pub struct AckStore {
    path: PathBuf,
}

impl AckStore {
    pub fn open_default() -> Self {
        Self {
            path: Config::read_notifications_file(),
        }
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load(&self) -> HashSet<String> {
        match fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str::<Vec<String>>(&content) {
                Ok(ids) => ids.into_iter().collect(),
                Err(e) => {
                    tracing::warn!("ignoring corrupt {}: {}", self.path.display(), e);
                    HashSet::new()
                }
            },
            Err(_) => HashSet::new(),
        }
    }

    pub fn save(&self, ids: &HashSet<String>) -> AppResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        // Stable on-disk order keeps the file diffable.
        let mut sorted: Vec<&String> = ids.iter().collect();
        sorted.sort();
        let json = serde_json::to_string(&sorted)
            .map_err(|e| crate::errors::AppError::Other(format!("serialize read set: {e}")))?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let store = AckStore::at(dir.path().join("read.json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn corrupt_file_is_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("read.json");
        fs::write(&path, "{\"oops\": 1").unwrap();
        let store = AckStore::at(path);
        assert!(store.load().is_empty());
    }

    #[test]
    fn round_trip_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("read.json");

        let store = AckStore::at(path.clone());
        let ids: HashSet<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        store.save(&ids).unwrap();

        // Fresh store over the same path, as after a restart
        let reopened = AckStore::at(path);
        assert_eq!(reopened.load(), ids);
    }
}
