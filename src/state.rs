// src/state.rs
use crate::config::AppConfig;
use crate::db::{init_db, Database};
use crate::errors::ServerError;
use crate::store::{BatchPersistence, BatchStore, KeyValueStorage, MemoryStorage, SqliteStorage};
use std::sync::Arc;
use tracing::warn;

/// Everything a request handler needs, built once in `main`.
#[derive(Clone)]
pub struct AppState {
    pub batch: Arc<BatchStore>,
    pub whatsapp_phone: String,
}

impl AppState {
    pub fn new(storage: Arc<dyn KeyValueStorage>, whatsapp_phone: impl Into<String>) -> Self {
        Self {
            batch: Arc::new(BatchStore::open(BatchPersistence::new(storage))),
            whatsapp_phone: whatsapp_phone.into(),
        }
    }

    /// Open the state described by `cfg`: SQLite-backed unless ephemeral.
    pub fn from_config(cfg: &AppConfig) -> Result<Self, ServerError> {
        if cfg.ephemeral {
            warn!("ephemeral mode: batch edits will not survive a restart");
            return Ok(Self::new(
                Arc::new(MemoryStorage::new()),
                cfg.whatsapp_phone.clone(),
            ));
        }

        let db = Database::new(cfg.db_path.clone());
        init_db(&db)?;

        Ok(Self::new(
            Arc::new(SqliteStorage::new(db)),
            cfg.whatsapp_phone.clone(),
        ))
    }
}
