//! Key-value preference storage.
//!
//! The site persists a single preference (the theme), but stores are
//! plain string maps so the format stays readable on disk.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// A string key-value store that survives across sessions.
pub trait PreferenceStore {
    /// Reads a value. `Ok(None)` means the key was never written.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes a value, replacing any previous one.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process store. Values last only as long as the store itself.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences kept as a JSON object in a single file.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// File name used by [`FileStore::in_dir`].
    pub const FILE_NAME: &'static str = "preferences.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<dir>/preferences.json`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(Self::FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl PreferenceStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = match self.read_all() {
            Ok(values) => values,
            Err(StorageError::Format(e)) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Replacing malformed preference file");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Atomic replace via rename
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(&values)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// A store that always fails, for sessions without usable storage.
#[derive(Clone, Debug)]
pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl PreferenceStore for UnavailableStore {
    fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable(self.reason.clone()))
    }

    fn save(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable(self.reason.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load("theme").unwrap(), None);
        store.save("theme", "dark").unwrap();
        assert_eq!(store.load("theme").unwrap(), Some("dark".to_string()));
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        let mut store = FileStore::in_dir(&nested);
        assert_eq!(store.load("theme").unwrap(), None);
        store.save("theme", "dark").unwrap();
        store.save("other", "value").unwrap();

        // A second handle on the same file sees both keys
        let reopened = FileStore::in_dir(&nested);
        assert_eq!(reopened.load("theme").unwrap(), Some("dark".to_string()));
        assert_eq!(reopened.load("other").unwrap(), Some("value".to_string()));
    }

    #[test]
    fn test_file_store_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::in_dir(dir.path());
        fs::write(store.path(), "{not json").unwrap();

        assert!(matches!(store.load("theme"), Err(StorageError::Format(_))));

        // Saving replaces the broken file
        store.save("theme", "light").unwrap();
        assert_eq!(store.load("theme").unwrap(), Some("light".to_string()));
    }

    #[test]
    fn test_file_store_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::in_dir(dir.path());
        fs::write(store.path(), "  \n").unwrap();
        assert_eq!(store.load("theme").unwrap(), None);
    }

    #[test]
    fn test_unavailable_store() {
        let mut store = UnavailableStore::new("read-only session");
        assert!(matches!(store.load("theme"), Err(StorageError::Unavailable(_))));
        assert!(matches!(
            store.save("theme", "dark"),
            Err(StorageError::Unavailable(_))
        ));
    }
}
