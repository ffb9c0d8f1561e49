use rusqlite::Connection;
use std::cell::RefCell;
use tracing::info;

use crate::errors::ServerError;

const SCHEMA_SQL: &str = include_str!("../../sql/schema.sql");

// Thread-local connection slot, tagged with the path it was opened for.
thread_local! {
    static DB_CONN: RefCell<Option<(String, Connection)>> = const { RefCell::new(None) };
}

#[derive(Clone, Debug)]
pub struct Database {
    path: String,
}

impl Database {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Provides a mutable connection to the closure.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut Connection) -> Result<T, ServerError>,
    {
        DB_CONN
            .try_with(|cell| {
                let mut slot = cell.borrow_mut();
                let stale = !matches!(&*slot, Some((path, _)) if *path == self.path);
                if stale {
                    let conn = Connection::open(&self.path)
                        .map_err(|e| ServerError::DbError(format!("Open DB failed: {e}")))?;
                    *slot = Some((self.path.clone(), conn));
                }
                match slot.as_mut() {
                    Some((_, conn)) => f(conn),
                    None => Err(ServerError::InternalError),
                }
            })
            .map_err(|_| ServerError::InternalError)?
    }
}

/// Apply the bundled schema. Safe to call on every start.
pub fn init_db(db: &Database) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        conn.execute_batch(SCHEMA_SQL)
            .map_err(|e| ServerError::DbError(format!("Failed to apply schema: {e}")))
    })?;

    info!(path = db.path(), "database initialized");
    Ok(())
}
