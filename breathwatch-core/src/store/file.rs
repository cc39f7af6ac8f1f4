//! Directory-backed store: one JSON file per key.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{validate_key, KeyValueStore};
use crate::error::StoreError;

/// A [`KeyValueStore`] that keeps each key in `<dir>/<key>.json`.
///
/// The directory is created on first write. Writes go to a temporary sibling
/// file which is then renamed over the target, so a crash never leaves a
/// half-written value behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Returns the backing directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }

    fn io_error(path: &Path, source: io::Error) -> StoreError {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::io_error(&path, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).map_err(|e| Self::io_error(&self.dir, e))?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|e| Self::io_error(&tmp, e))?;
        fs::rename(&tmp, &path).map_err(|e| Self::io_error(&path, e))?;

        debug!(key, path = %path.display(), bytes = value.len(), "stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::io_error(&path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_key_is_none() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.get("health_profile").unwrap(), None);
    }

    #[test]
    fn test_set_creates_directory_and_file() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("data").join("breathwatch");
        let store = FileStore::new(&nested);

        store.set("temperature_history", "[]").unwrap();

        let path = nested.join("temperature_history.json");
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
        assert!(!nested.join("temperature_history.json.tmp").exists());
        assert_eq!(
            store.get("temperature_history").unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn test_set_replaces_whole_value() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());

        store.set("k", "a much longer first value").unwrap();
        store.set("k", "short").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("short"));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());

        store.set("k", "v").unwrap();
        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_path_traversal_rejected() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());

        let err = store.set("../escape", "x").unwrap_err();
        assert!(matches!(err, StoreError::InvalidKey(_)));
    }

    #[test]
    fn test_unreadable_path_reports_io_error() {
        let dir = TempDir::new().unwrap();
        // A directory where the value file should be makes the read fail.
        fs::create_dir(dir.path().join("k.json")).unwrap();
        let store = FileStore::new(dir.path());

        let err = store.get("k").unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        assert!(err.to_string().contains("k.json"));
    }
}
