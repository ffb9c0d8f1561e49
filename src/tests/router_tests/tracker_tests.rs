use crate::domain::{BatchRecord, BatchStatus};
use crate::router::handle;
use crate::tests::utils::{body_string, get, memory_state};

fn checkpoints_done(body: &str) -> usize {
    body.matches("checkpoint done").count()
}

#[test]
fn default_batch_shows_all_checkpoints_complete() {
    let (_, state) = memory_state();

    let resp = handle(get("/batch-tracker"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("OBL-2026-001"));
    assert!(body.contains("Ready to Enjoy"));
    assert!(body.contains("18 Jan 2026 | 10:00 PM"));
    assert_eq!(checkpoints_done(&body), 3);
}

#[test]
fn harvested_batch_shows_two_checkpoints() {
    let (_, state) = memory_state();
    state.batch.update(BatchRecord {
        status: BatchStatus::Harvested,
        ..BatchRecord::default()
    });

    let body = body_string(handle(get("/batch-tracker"), &state).unwrap());
    assert!(body.contains("Harvested"));
    assert_eq!(checkpoints_done(&body), 2);
}

#[test]
fn tracker_escapes_record_text() {
    let (_, state) = memory_state();
    state.batch.update(BatchRecord {
        batch_code: "<script>alert(1)</script>".into(),
        ..BatchRecord::default()
    });

    let body = body_string(handle(get("/batch-tracker"), &state).unwrap());
    assert!(!body.contains("<script>alert(1)</script>"));
    assert!(body.contains("&lt;script&gt;"));
}
