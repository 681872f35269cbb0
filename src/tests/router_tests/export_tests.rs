use crate::router::handle;
use crate::spreadsheets::export_xlsx::EXPORT_FILENAME;
use crate::tests::utils::{body_bytes, get, test_app, SAMPLE_CSV};

#[test]
fn export_returns_workbook_for_current_filters() {
    let (_dir, app) = test_app(SAMPLE_CSV);

    let mut resp = handle(get("/export.xlsx?applied=1&city=Durham"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()["Content-Type"],
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert_eq!(
        resp.headers()["Content-Disposition"],
        format!("attachment; filename=\"{EXPORT_FILENAME}\"").as_str()
    );

    // XLSX is a zip archive
    let bytes = body_bytes(&mut resp);
    assert!(bytes.starts_with(b"PK"));
}
