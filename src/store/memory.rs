use std::sync::{Mutex, MutexGuard};

use super::{StoreResult, SubscriberStore};

/// Keeps the subscribers in memory. Used by tests and anywhere a file isn't wanted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    subscribers: Mutex<Vec<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_subscribers(subscribers: Vec<String>) -> Self {
        Self {
            subscribers: Mutex::new(subscribers),
        }
    }

    // A panic while holding the lock can't leave the Vec half written.
    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.subscribers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SubscriberStore for MemoryStore {
    fn load(&self) -> Vec<String> {
        self.lock().clone()
    }

    fn save(&self, subscribers: &[String]) -> StoreResult<()> {
        *self.lock() = subscribers.to_vec();
        Ok(())
    }
}
