use crate::errors::ServerError;
use crate::templates::error_page;
use astra::{Body, Response, ResponseBuilder};
use tracing::{error, warn};

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into a proper HTML response
pub fn error_to_response(err: ServerError) -> Response {
    let (status, message) = match &err {
        ServerError::NotFound => (404, "Not Found".to_string()),
        ServerError::BadRequest(msg) => (400, msg.clone()),
        ServerError::DbError(msg) => (500, format!("Database Error: {msg}")),
        ServerError::InternalError => (500, "Internal Server Error".to_string()),
    };

    if status >= 500 {
        error!(error = %err, "request failed");
    } else if status == 400 {
        warn!(error = %err, "rejected request");
    }

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(error_page(status, &message).into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
