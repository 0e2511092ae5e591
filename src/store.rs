//! Keyed byte-string storage for persisted games.
//!
//! The worker only needs get/set/delete over opaque bytes, so the
//! store is a trait the deployment fills in with its real backend. The
//! in-memory implementation backs tests and the local `play` mode.

use async_trait::async_trait;
use derive_more::{Display, Error};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument};

/// Storage error.
#[derive(Debug, Clone, Display, Error)]
#[display("Store error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Byte-string keyed storage for one persisted game per player key.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Fetches the value for a key, if present.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Writes the value for a key, overwriting any previous value.
    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;

    /// Removes the value for a key. Removing an absent key is not an
    /// error.
    async fn delete(&self, key: &str) -> Result<(), StoreError>;
}

/// In-memory session store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating in-memory session store");
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>>, StoreError> {
        self.entries
            .lock()
            .map_err(|_| StoreError::new("store mutex poisoned"))
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let entries = self.lock()?;
        let value = entries.get(key).cloned();
        debug!(found = value.is_some(), "Store lookup");
        Ok(value)
    }

    #[instrument(skip(self, value), fields(len = value.len()))]
    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        let mut entries = self.lock()?;
        let _ = entries.insert(key.to_string(), value);
        debug!("Store write");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.lock()?;
        let _ = entries.remove(key);
        debug!("Store delete");
        Ok(())
    }
}
