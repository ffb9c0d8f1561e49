// src/db/kv.rs
use crate::errors::ServerError;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

pub fn get_value(conn: &Connection, key: &str) -> Result<Option<String>, ServerError> {
    conn.query_row(
        "select value from kv_store where key = ?",
        params![key],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("kv lookup failed: {e}")))
}

pub fn put_value(
    conn: &Connection,
    key: &str,
    value: &str,
    now: DateTime<Utc>,
) -> Result<(), ServerError> {
    conn.execute(
        r#"
        insert into kv_store (key, value, updated_at)
        values (?, ?, ?)
        on conflict(key) do update set
            value = excluded.value,
            updated_at = excluded.updated_at
        "#,
        params![key, value, now],
    )
    .map_err(|e| ServerError::DbError(format!("kv write failed: {e}")))?;

    Ok(())
}
