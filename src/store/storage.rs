// src/store/storage.rs
use crate::db::{kv, Database};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend error: {0}")]
    Db(String),
    #[error("storage quota exceeded")]
    QuotaExceeded,
    #[error("could not encode value: {0}")]
    Encode(String),
}

/// Durable string storage addressed by key. Writes replace the previous value.
pub trait KeyValueStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Key/value storage in the application's SQLite file.
#[derive(Clone, Debug)]
pub struct SqliteStorage {
    db: Database,
}

impl SqliteStorage {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl KeyValueStorage for SqliteStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.db
            .with_conn(|conn| kv::get_value(conn, key))
            .map_err(|e| StorageError::Db(e.to_string()))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.db
            .with_conn(|conn| kv::put_value(conn, key, value, Utc::now()))
            .map_err(|e| StorageError::Db(e.to_string()))
    }
}

/// Process-local storage. Lost on exit; used for tests and throwaway runs.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
    reject_writes: AtomicBool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following `set_item` fail with `QuotaExceeded`.
    #[cfg(test)]
    pub fn set_reject_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::SeqCst);
    }

    /// Store raw text as-is, bypassing any encoding.
    #[cfg(test)]
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self
            .items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.reject_writes.load(Ordering::SeqCst) {
            return Err(StorageError::QuotaExceeded);
        }
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
