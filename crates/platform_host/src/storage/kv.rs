//! Whole-value key/value storage contracts and adapters.
//!
//! Browser `localStorage` is synchronous, so the contract is too: every call completes before
//! returning and callers never observe a half-written value.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
};

use serde::{de::DeserializeOwned, Serialize};

/// Host service for raw JSON text stored under string keys.
pub trait KeyValueStore {
    /// Loads the raw text stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage is unavailable.
    fn load_raw(&self, key: &str) -> Result<Option<String>, String>;

    /// Replaces the raw text stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage is unavailable or rejects the write (for example
    /// when a quota is exceeded).
    fn save_raw(&self, key: &str, raw_json: &str) -> Result<(), String>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn load_raw(&self, key: &str) -> Result<Option<String>, String> {
        (**self).load_raw(key)
    }

    fn save_raw(&self, key: &str, raw_json: &str) -> Result<(), String> {
        (**self).save_raw(key, raw_json)
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op store for unsupported targets: always empty, accepts every write.
pub struct NoopKeyValueStore;

impl KeyValueStore for NoopKeyValueStore {
    fn load_raw(&self, _key: &str) -> Result<Option<String>, String> {
        Ok(None)
    }

    fn save_raw(&self, _key: &str, _raw_json: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory store keyed by string.
///
/// Clones share the same map, which lets tests play the part of a second browser tab writing to
/// the same storage. Every successful [`KeyValueStore::save_raw`] bumps a write counter.
pub struct MemoryKeyValueStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<Cell<usize>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryKeyValueStore {
    /// Number of successful writes since creation, across all clones.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Makes subsequent writes fail, mimicking an exhausted storage quota.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn load_raw(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.inner.borrow().get(key).cloned())
    }

    fn save_raw(&self, key: &str, raw_json: &str) -> Result<(), String> {
        if self.fail_writes.get() {
            return Err(format!("quota exceeded while writing `{key}`"));
        }
        self.inner
            .borrow_mut()
            .insert(key.to_string(), raw_json.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// Loads and deserializes a typed value through a [`KeyValueStore`].
///
/// # Errors
///
/// Returns an error when the store or JSON deserialization fails.
pub fn load_json_with<S: KeyValueStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, String> {
    let Some(raw) = store.load_raw(key)? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw).map_err(|e| e.to_string())?;
    Ok(Some(value))
}

/// Serializes and saves a typed value through a [`KeyValueStore`].
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub fn save_json_with<S: KeyValueStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    store.save_raw(key, &raw)
}
