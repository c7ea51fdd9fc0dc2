//! Local storage for in-progress drafts

mod file_store;
mod memory_store;
mod traits;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use traits::DraftStore;

#[cfg(test)]
pub use traits::MockDraftStore;

use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;

/// Key under which the draft is stored
pub const DRAFT_KEY: &str = "wizardDraft";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Platform data directory, shared with the log file
pub fn data_dir() -> Option<PathBuf> {
    ProjectDirs::from("io", "formwizard", "formwizard").map(|dirs| dirs.data_dir().to_path_buf())
}

/// Open the file-backed store, falling back to memory when no data directory exists
pub fn open_default() -> Box<dyn DraftStore> {
    match data_dir() {
        Some(dir) => Box::new(FileStore::new(dir.join("storage.json"))),
        None => {
            tracing::warn!("No data directory available, drafts will not survive a restart");
            Box::new(MemoryStore::default())
        }
    }
}
