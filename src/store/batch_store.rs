// src/store/batch_store.rs
use crate::domain::BatchRecord;
use crate::store::persistence::{BatchPersistence, Saved};
use std::sync::{PoisonError, RwLock};
use tracing::info;

/// Authoritative in-memory copy of the batch record, written through to
/// storage on every update.
///
/// Created once at start-up and shared by handle; there is no "empty" state.
pub struct BatchStore {
    persistence: BatchPersistence,
    current: RwLock<BatchRecord>,
}

impl BatchStore {
    /// Seed the store from storage. This is the only `load` it performs.
    pub fn open(persistence: BatchPersistence) -> Self {
        let loaded = persistence.load();
        info!(
            batch_code = %loaded.record.batch_code,
            status = %loaded.record.status,
            from_default = loaded.fallback.is_some(),
            "batch store ready"
        );

        Self {
            persistence,
            current: RwLock::new(loaded.record),
        }
    }

    pub fn get(&self) -> BatchRecord {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the whole record and persist it.
    ///
    /// The save happens under the write lock so stored and in-memory order
    /// agree. A failed save leaves the new record in memory.
    pub fn update(&self, record: BatchRecord) -> Saved {
        let mut current = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        info!(
            batch_code = %record.batch_code,
            from = %current.status,
            to = %record.status,
            "batch record updated"
        );

        *current = record;
        self.persistence.save(&current)
    }
}
