//! JSON file store emulating browser local storage
//!
//! The file holds one flat object of key to string. Every call reads or
//! rewrites the whole file, so the last writer wins across processes.

use super::{DraftStore, StorageError};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_all(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(items)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl DraftStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        // A corrupt file is replaced rather than blocking every save
        let mut items = self.read_all().unwrap_or_else(|e| {
            tracing::warn!("Discarding unreadable storage file {:?}: {}", self.path, e);
            BTreeMap::new()
        });
        items.insert(key.to_string(), value.to_string());
        self.write_all(&items)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        let mut items = self.read_all()?;
        if items.remove(key).is_some() {
            self.write_all(&items)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileStore {
        FileStore::new(dir.path().join("nested").join("storage.json"))
    }

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.get_item("wizardDraft").unwrap(), None);
    }

    #[test]
    fn test_values_survive_a_new_instance() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.set_item("a", "1").unwrap();
        store.set_item("b", "2").unwrap();

        let reopened = store_in(&dir);
        assert_eq!(reopened.get_item("a").unwrap().as_deref(), Some("1"));
        assert_eq!(reopened.get_item("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_remove_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.set_item("a", "1").unwrap();
        store.set_item("b", "2").unwrap();
        store.remove_item("a").unwrap();

        assert_eq!(store.get_item("a").unwrap(), None);
        assert_eq!(store.get_item("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_corrupt_file_is_an_error_on_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();
        let store = FileStore::new(path);
        assert!(matches!(store.get_item("a"), Err(StorageError::Corrupt(_))));
    }

    #[test]
    fn test_corrupt_file_is_replaced_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();
        let mut store = FileStore::new(path);
        store.set_item("a", "1").unwrap();
        assert_eq!(store.get_item("a").unwrap().as_deref(), Some("1"));
    }
}
