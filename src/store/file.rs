use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use super::{StoreResult, SubscriberStore};

/// Stores the subscribers as a pretty-printed JSON array of strings in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Strict version of `load`.
    /// Returns `Ok(None)` if the file doesn't exist yet and propagates read and parse errors.
    pub fn read(&self) -> StoreResult<Option<Vec<String>>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(er) if er.kind() == ErrorKind::NotFound => return Ok(None),
            Err(er) => return Err(er.into()),
        };

        let subscribers = serde_json::from_str(&content)?;
        Ok(Some(subscribers))
    }
}

impl SubscriberStore for JsonFileStore {
    fn load(&self) -> Vec<String> {
        match self.read() {
            Ok(subscribers) => subscribers.unwrap_or_default(),
            Err(er) => {
                warn!(
                    error = %er,
                    path = %self.path.display(),
                    "failed to load subscribers, continuing with an empty list"
                );
                Vec::new()
            }
        }
    }

    fn save(&self, subscribers: &[String]) -> StoreResult<()> {
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        let content = serde_json::to_string_pretty(subscribers)?;
        fs::write(&self.path, content)?;

        debug!(
            "{:<20} - {} subscribers to {}",
            "save",
            subscribers.len(),
            self.path.display()
        );
        Ok(())
    }
}
