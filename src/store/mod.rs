//! Persistence of the subscriber list.
//!
//! The list is always handled as a whole: it is loaded in full, changed in memory and saved in full.
//! Nothing guards the load-modify-save sequence, so two concurrent writers can lose an update.
//! A store that needs to survive real traffic has to offer an atomic append instead.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Capability to load and save the ordered list of normalized subscriber emails.
pub trait SubscriberStore: Send + Sync {
    /// Returns the persisted list. Missing or unreadable storage is an empty list.
    fn load(&self) -> Vec<String>;

    /// Overwrites the persisted list with `subscribers`.
    fn save(&self, subscribers: &[String]) -> StoreResult<()>;
}

// ###################################
// ->   ERROR
// ###################################
pub type StoreResult<T> = core::result::Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
