use crate::router::handle;
use crate::tests::utils::{body_string, get, location, memory_state, post_form, TEST_PHONE};
use url::Url;

fn chat_text(link: &str) -> String {
    Url::parse(link)
        .unwrap()
        .query_pairs()
        .find(|(k, _)| k == "text")
        .map(|(_, v)| v.into_owned())
        .unwrap()
}

#[test]
fn order_form_loads() {
    let (_, state) = memory_state();

    let resp = handle(get("/order"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Pesan Tepache"));
    assert!(body.contains("Total: Rp 15.000"));
}

#[test]
fn valid_order_redirects_to_chat() {
    let (_, state) = memory_state();

    let resp = handle(
        post_form(
            "/order",
            &[("name", "  Budi "), ("address", "Jl. Kenanga 5"), ("quantity", "5")],
        ),
        &state,
    )
    .expect("Handler failed");

    assert_eq!(resp.status(), 303);
    let link = location(&resp);
    assert!(link.starts_with(&format!("https://api.whatsapp.com/send?phone={TEST_PHONE}&text=")));

    let text = chat_text(&link);
    assert!(text.contains("Nama: Budi\n"));
    assert!(text.contains("Alamat CoD: Jl. Kenanga 5\n"));
    assert!(text.contains("Jumlah: 5 botol"));
    assert!(text.contains("Total: Rp 60.000"));
    assert!(text.contains("Hemat: Rp 15.000"));
}

#[test]
fn invalid_order_shows_every_error() {
    let (_, state) = memory_state();

    let resp = handle(
        post_form("/order", &[("name", " "), ("address", ""), ("quantity", "101")]),
        &state,
    )
    .expect("Handler failed");
    assert_eq!(resp.status(), 422);

    let body = body_string(resp);
    assert!(body.contains("Nama harus diisi"));
    assert!(body.contains("Alamat harus diisi"));
    assert!(body.contains("Maksimal pesan 100 botol"));
    assert!(body.contains(r#"value="101""#));
}

#[test]
fn non_numeric_quantity_becomes_one() {
    let (_, state) = memory_state();

    let resp = handle(
        post_form("/order", &[("name", "A"), ("address", "B"), ("quantity", "lots")]),
        &state,
    )
    .expect("Handler failed");

    assert_eq!(resp.status(), 303);
    let text = chat_text(&location(&resp));
    assert!(text.contains("Jumlah: 1 botol"));
    assert!(text.contains("Total: Rp 15.000"));
    assert!(!text.contains("Hemat"));
}

#[test]
fn recalculating_keeps_input_and_prices_quantity() {
    let (_, state) = memory_state();

    let body = body_string(
        handle(get("/order?name=Budi&address=Jl.+Kenanga+5&quantity=4"), &state).unwrap(),
    );
    assert!(body.contains("Total: Rp 60.000"));
    assert!(!body.contains("Hemat"));
    assert!(body.contains(r#"value="Budi""#));
    assert!(body.contains("Jl. Kenanga 5"));

    let body = body_string(handle(get("/order?quantity=5"), &state).unwrap());
    assert!(body.contains("Total: Rp 60.000"));
    assert!(body.contains("Hemat Rp 15.000"));

    let body = body_string(handle(get("/order?quantity=500"), &state).unwrap());
    assert!(!body.contains("Total:"));
    assert!(!body.contains("Nama harus diisi"));
}

#[test]
fn order_page_needs_no_script() {
    let (_, state) = memory_state();

    let body = body_string(handle(get("/order"), &state).unwrap());
    assert!(!body.contains("hx-"));
    assert!(!body.contains("<script"));
    assert!(body.contains(r#"formmethod="get""#));
}
