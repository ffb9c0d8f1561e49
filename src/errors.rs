// errors.rs
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, malformed forms, etc.) or downstream layers (DB).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Database Error: {0}")]
    DbError(String),
    #[error("Internal Server Error")]
    InternalError,
}
