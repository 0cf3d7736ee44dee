//! Directory-backed key-value store
//!
//! Each key is kept in its own `<key>.json` file under the store directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::KeyValueStore;
use crate::errors::{Result, SehatError};

/// File-per-key store rooted at a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store, creating the directory if it doesn't exist
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| {
                SehatError::Storage(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`; characters outside `[A-Za-z0-9_-]` become `_`
    pub fn path_for(&self, key: &str) -> PathBuf {
        let file_stem: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{}.json", file_stem))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        log::debug!("reading '{}' from {}", key, path.display());
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        log::debug!("writing '{}' to {}", key, path.display());
        fs::write(&path, value)?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (FileStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("data")).unwrap();
        (store, temp_dir)
    }

    #[test]
    fn test_store_creates_directory() {
        let (store, _temp) = create_test_store();
        assert!(store.dir().is_dir());
    }

    #[test]
    fn test_round_trip_and_remove() {
        let (mut store, _temp) = create_test_store();
        store.set_item("medical_history", "{}").unwrap();
        assert_eq!(store.get_item("medical_history").unwrap().as_deref(), Some("{}"));
        assert!(store.path_for("medical_history").exists());

        store.remove_item("medical_history").unwrap();
        assert!(store.get_item("medical_history").unwrap().is_none());
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let (mut store, _temp) = create_test_store();
        assert!(store.remove_item("never-written").is_ok());
    }

    #[test]
    fn test_get_missing_key_is_none() {
        let (store, _temp) = create_test_store();
        assert!(store.get_item("never-written").unwrap().is_none());
    }

    #[test]
    fn test_unreadable_entry_is_an_error() {
        let (mut store, _temp) = create_test_store();
        fs::create_dir(store.path_for("blocked")).unwrap();

        assert!(matches!(store.get_item("blocked"), Err(SehatError::Io(_))));
        assert!(matches!(store.remove_item("blocked"), Err(SehatError::Io(_))));
        assert!(store.path_for("blocked").is_dir());
    }

    #[test]
    fn test_key_is_sanitized() {
        let (store, _temp) = create_test_store();
        let path = store.path_for("../escape/key");
        assert_eq!(path.parent(), Some(store.dir()));
        assert_eq!(path.file_name().unwrap(), "___escape_key.json");
    }
}
