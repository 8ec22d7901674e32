use crate::responses::xlsx::XLSX_CONTENT_TYPE;
use crate::router::handle;
use crate::tests::utils::{fixture_state, get};
use std::io::Read;

#[test]
fn export_returns_workbook_for_selection() {
    let state = fixture_state();
    let req = get(
        "/export.xlsx",
        &[
            ("district", "송파구"),
            ("year", "2010년대"),
            ("kind", "아파트"),
            ("area", "30평대"),
            ("floor", "50층이하"),
            ("price", "25"),
        ],
    );

    let mut resp = handle(req, &state).unwrap();
    assert_eq!(resp.status(), 200);

    let content_type = resp
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert_eq!(content_type, XLSX_CONTENT_TYPE);

    let disposition = resp
        .headers()
        .get("Content-Disposition")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"seoul_listings_"));

    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}
