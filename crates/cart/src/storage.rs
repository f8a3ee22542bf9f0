//! Persistent slot storage for the serialized cart.
//!
//! The cart lives in a single named slot of a string key-value store (the
//! browser's persistent storage in the original deployment). [`StoragePort`]
//! is the raw slot access seam; [`SlotStore`] layers the JSON
//! (de)serialization of the entry list on top of any port. Tests and
//! headless embeddings use [`MemoryStorage`].

use std::collections::HashMap;

use thiserror::Error;

use crate::models::CartEntry;

/// Raw access to named string slots.
///
/// Implementations only move strings in and out; they never interpret the
/// payload. A slot that was never written reads as `None`.
pub trait StoragePort {
    /// Read the slot, `None` when it was never written.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] when the underlying store fails.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the slot with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] when the underlying store fails
    /// (for example on quota exhaustion).
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Errors from slot storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying store failed.
    #[error("storage backend error: {0}")]
    Backend(String),

    /// The slot holds something other than a valid entry list.
    ///
    /// Externally-written payloads that do not match the
    /// `[{id, name, price, image}, ...]` shape are rejected here; the slot
    /// is left untouched so a shopper's cart is not silently discarded.
    #[error("malformed cart payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The cart slot: JSON serialization of the entry list over a [`StoragePort`].
#[derive(Debug)]
pub struct SlotStore<P> {
    port: P,
    key: String,
}

impl<P: StoragePort> SlotStore<P> {
    /// Create a store over `port` using `key` as the slot name.
    pub fn new(port: P, key: impl Into<String>) -> Self {
        Self {
            port,
            key: key.into(),
        }
    }

    /// Load the full entry sequence.
    ///
    /// An absent or empty slot is an empty cart.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Malformed`] when the slot holds a payload
    /// that does not deserialize as an entry list.
    pub fn load(&self) -> Result<Vec<CartEntry>, StorageError> {
        match self.port.read(&self.key)? {
            None => Ok(Vec::new()),
            Some(raw) if raw.is_empty() => Ok(Vec::new()),
            Some(raw) => Ok(serde_json::from_str(&raw)?),
        }
    }

    /// Serialize `entries` and overwrite the slot with them.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the backing write fails.
    pub fn save(&mut self, entries: &[CartEntry]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(entries)?;
        self.port.write(&self.key, &raw)
    }

    /// The slot key this store writes to.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying port.
    #[must_use]
    pub fn port(&self) -> &P {
        &self.port
    }
}

/// In-memory [`StoragePort`].
///
/// The substitutable stand-in for the browser's persistent storage: used by
/// the test suites and by headless embeddings that do not need persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoragePort for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
