//! Trait abstraction for local key-value storage to enable mocking in tests

use super::StorageError;

/// Synchronous string store with local-storage semantics.
/// Each call is a single read or a single write.
#[cfg_attr(test, mockall::automock)]
pub trait DraftStore: Send {
    /// Read a key, `None` when absent
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a key, replacing any previous value
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a key; absent keys are not an error
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}
