use crate::domain::{BatchRecord, BatchStatus};
use crate::errors::ServerError;
use crate::router::handle;
use crate::store::persistence::BATCH_STORAGE_KEY;
use crate::store::KeyValueStorage;
use crate::tests::utils::{body_string, get, location, memory_state, post_form, sqlite_state};

const EDITED: [(&str, &str); 5] = [
    ("batchCode", "OBL-2026-099"),
    ("fermentationStarted", "1 Jan 2026"),
    ("harvestDate", "3 Jan 2026"),
    ("bestBefore", "1 Feb 2026"),
    ("status", "fermenting"),
];

fn edited_record() -> BatchRecord {
    BatchRecord {
        batch_code: "OBL-2026-099".into(),
        fermentation_started: "1 Jan 2026".into(),
        harvest_date: "3 Jan 2026".into(),
        best_before: "1 Feb 2026".into(),
        status: BatchStatus::Fermenting,
    }
}

#[test]
fn admin_form_is_prefilled() {
    let (_, state) = memory_state();

    let resp = handle(get("/admin"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Admin Panel"));
    assert!(body.contains(r#"value="OBL-2026-001""#));
    assert!(body.contains(r#"<option value="ready" selected>"#));
}

#[test]
fn admin_submit_replaces_record() {
    let (storage, state) = memory_state();

    let resp = handle(post_form("/admin", &EDITED), &state).expect("Handler failed");
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/admin?saved=1");

    assert_eq!(state.batch.get(), edited_record());

    let stored = storage.get_item(BATCH_STORAGE_KEY).unwrap().unwrap();
    assert!(stored.contains("OBL-2026-099"));

    let body = body_string(handle(get("/batch-tracker"), &state).unwrap());
    assert_eq!(body.matches("checkpoint done").count(), 1);
}

#[test]
fn saved_notice_is_shown() {
    let (_, state) = memory_state();

    let body = body_string(handle(get("/admin?saved=1"), &state).unwrap());
    assert!(body.contains("Batch Updated!"));

    let body = body_string(handle(get("/admin?saved=0"), &state).unwrap());
    assert!(body.contains("could not be saved"));
}

#[test]
fn storage_failure_still_updates_page() {
    let (storage, state) = memory_state();
    storage.set_reject_writes(true);

    let resp = handle(post_form("/admin", &EDITED), &state).expect("Handler failed");
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/admin?saved=0");

    assert_eq!(state.batch.get(), edited_record());
}

#[test]
fn partial_form_is_rejected() {
    let (_, state) = memory_state();

    let err = handle(post_form("/admin", &EDITED[..4]), &state).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
    assert_eq!(state.batch.get(), BatchRecord::default());
}

#[test]
fn oversized_form_is_rejected_without_saving() {
    let (storage, state) = memory_state();
    let huge = "x".repeat(70_000);
    let mut form = EDITED;
    form[3] = ("bestBefore", &huge);
    form.swap(3, 4);

    let err = handle(post_form("/admin", &form), &state).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));

    assert_eq!(state.batch.get(), BatchRecord::default());
    assert_eq!(storage.get_item(BATCH_STORAGE_KEY).unwrap(), None);
}

#[test]
fn form_at_size_limit_is_accepted() {
    let (_, state) = memory_state();
    let mut form = EDITED;
    form.swap(3, 4);
    let overhead = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(&form[..4])
        .append_pair("bestBefore", "")
        .finish()
        .len();
    let filler = "x".repeat(64 * 1024 - overhead);
    form[4] = ("bestBefore", &filler);

    let resp = handle(post_form("/admin", &form), &state).expect("Handler failed");
    assert_eq!(resp.status(), 303);
    assert_eq!(state.batch.get().best_before.len(), filler.len());
}

#[test]
fn unknown_status_is_rejected() {
    let (_, state) = memory_state();
    let mut form = EDITED;
    form[4] = ("status", "bottled");

    let err = handle(post_form("/admin", &form), &state).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
    assert_eq!(state.batch.get(), BatchRecord::default());
}

#[test]
fn update_survives_restart_with_sqlite() {
    let dir = tempfile::tempdir().unwrap();

    let state = sqlite_state(dir.path());
    handle(post_form("/admin", &EDITED), &state).expect("Handler failed");

    let restarted = sqlite_state(dir.path());
    assert_eq!(restarted.batch.get(), edited_record());
}
