pub mod batch_store;
pub mod persistence;
pub mod storage;

pub use batch_store::BatchStore;
pub use persistence::{BatchPersistence, Saved};
pub use storage::{KeyValueStorage, MemoryStorage, SqliteStorage};
