use crate::config::AppConfig;
use crate::state::AppState;
use crate::store::MemoryStorage;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

pub const TEST_PHONE: &str = "6285156083920";

/// App state over throwaway in-memory storage. The storage handle is
/// returned so tests can inspect or break it.
pub fn memory_state() -> (Arc<MemoryStorage>, AppState) {
    let storage = Arc::new(MemoryStorage::new());
    let state = AppState::new(storage.clone(), TEST_PHONE);
    (storage, state)
}

/// App state backed by a fresh SQLite file in `dir`, using the production schema.
pub fn sqlite_state(dir: &Path) -> AppState {
    let cfg = AppConfig {
        db_path: dir.join("tepache.sqlite3").to_string_lossy().into_owned(),
        ..AppConfig::default()
    };
    AppState::from_config(&cfg).unwrap_or_else(|e| panic!("Database initialization failed: {e}"))
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, pairs: &[(&str, &str)]) -> Request {
    let body = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();

    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn location(resp: &Response) -> String {
    resp.headers()
        .get("Location")
        .expect("Location header")
        .to_str()
        .unwrap()
        .to_string()
}
