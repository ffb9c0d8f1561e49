use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{body_string, get, memory_state};

#[test]
fn home_page_shows_current_batch() {
    let (_, state) = memory_state();

    let resp = handle(get("/"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Tepache"));
    assert!(body.contains("OBL-2026-001"));
    assert!(body.contains("Rp 15.000"));
    assert!(body.contains("Rp 12.000"));
}

#[test]
fn stylesheet_is_served() {
    let (_, state) = memory_state();

    let resp = handle(get("/static/main.css"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "text/css; charset=utf-8"
    );
    assert!(body_string(resp).contains(".checkpoint.done"));
}

#[test]
fn layout_links_only_served_assets() {
    let (_, state) = memory_state();

    let body = body_string(handle(get("/"), &state).unwrap());
    assert!(body.contains(r#"href="/static/main.css""#));
    assert!(!body.contains("htmx"));
    assert!(!body.contains("favicon"));
}

#[test]
fn unknown_route_is_not_found() {
    let (_, state) = memory_state();

    let err = handle(get("/nope"), &state).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));

    let resp = error_to_response(err);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));
}

#[test]
fn bad_request_renders_message() {
    let resp = error_to_response(ServerError::BadRequest("missing field status".into()));
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("missing field status"));
}
