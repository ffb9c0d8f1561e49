// src/store/persistence.rs
use crate::domain::BatchRecord;
use crate::store::storage::{KeyValueStorage, StorageError};
use serde_json::error::Category;
use std::sync::Arc;
use tracing::{debug, warn};

/// Storage key holding the serialized batch record.
pub const BATCH_STORAGE_KEY: &str = "tepache-batch-data";

/// Why `load` handed back the built-in record instead of a stored one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadFallback {
    /// Nothing stored yet.
    Missing,
    /// The storage backend could not be read.
    Unreadable(String),
    /// Stored text is not JSON, or lacks a required field.
    Malformed(String),
}

/// Result of [`BatchPersistence::load`]. Always carries a usable record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded {
    pub record: BatchRecord,
    pub fallback: Option<LoadFallback>,
}

/// Result of [`BatchPersistence::save`]. A failed write is reported, not raised.
#[derive(Debug)]
pub enum Saved {
    Persisted,
    NotPersisted(StorageError),
}

impl Saved {
    pub fn is_persisted(&self) -> bool {
        matches!(self, Saved::Persisted)
    }
}

/// Reads and writes the single batch record under [`BATCH_STORAGE_KEY`].
#[derive(Clone)]
pub struct BatchPersistence {
    storage: Arc<dyn KeyValueStorage>,
}

impl BatchPersistence {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    pub fn load(&self) -> Loaded {
        let fallback = match self.storage.get_item(BATCH_STORAGE_KEY) {
            Ok(Some(raw)) => match decode(&raw) {
                Ok(record) => {
                    return Loaded {
                        record,
                        fallback: None,
                    }
                }
                Err(reason) => reason,
            },
            Ok(None) => LoadFallback::Missing,
            Err(e) => LoadFallback::Unreadable(e.to_string()),
        };

        match &fallback {
            LoadFallback::Missing => debug!("no stored batch record, using default"),
            other => warn!(reason = ?other, "stored batch record rejected, using default"),
        }

        Loaded {
            record: BatchRecord::default(),
            fallback: Some(fallback),
        }
    }

    pub fn save(&self, record: &BatchRecord) -> Saved {
        let result = serde_json::to_string(record)
            .map_err(|e| StorageError::Encode(e.to_string()))
            .and_then(|json| self.storage.set_item(BATCH_STORAGE_KEY, &json));

        match result {
            Ok(()) => Saved::Persisted,
            Err(e) => {
                warn!(error = %e, batch_code = %record.batch_code, "batch record not persisted");
                Saved::NotPersisted(e)
            }
        }
    }
}

fn decode(raw: &str) -> Result<BatchRecord, LoadFallback> {
    serde_json::from_str::<BatchRecord>(raw).map_err(|e| match e.classify() {
        Category::Data => LoadFallback::Malformed(format!("unexpected shape: {e}")),
        _ => LoadFallback::Malformed(format!("not valid JSON: {e}")),
    })
}
