//! Key/value storage the wallet library persists its session into.

use std::collections::BTreeMap;

use parking_lot::Mutex;

use crate::error::SessionResult;

/// Key under which Stacks Connect persists its session.
pub const SESSION_STORAGE_KEY: &str = "blockstack-session";

/// Browser-style string storage.
///
/// The session gate only ever clears it. Reads and writes are used by
/// `MockIdentity`, which persists into a `MemoryStore` the way the wallet
/// library persists into `localStorage`.
pub trait LocalStore {
    /// Reads a value.
    fn get(&self, key: &str) -> SessionResult<Option<String>>;

    /// Writes a value.
    fn set(&self, key: &str, value: &str) -> SessionResult<()>;

    /// Removes a value.
    fn remove(&self, key: &str) -> SessionResult<()>;

    /// Removes every value.
    fn clear(&self) -> SessionResult<()>;

    /// Number of stored entries.
    fn len(&self) -> SessionResult<usize>;

    /// Whether nothing is stored.
    fn is_empty(&self) -> SessionResult<bool> {
        Ok(self.len()? == 0)
    }
}

/// In-memory [`LocalStore`] used off-browser and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with entries.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: Mutex::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Snapshot of the stored keys.
    pub fn keys(&self) -> Vec<String> {
        self.entries.lock().keys().cloned().collect()
    }
}

impl LocalStore for MemoryStore {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        self.entries.lock().remove(key);
        Ok(())
    }

    fn clear(&self) -> SessionResult<()> {
        self.entries.lock().clear();
        Ok(())
    }

    fn len(&self) -> SessionResult<usize> {
        Ok(self.entries.lock().len())
    }
}
