// src/tests/router_tests/dashboard_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, test_app, SAMPLE_CSV};
use scraper::{Html, Selector};

fn count(doc: &Html, selector: &str) -> usize {
    let sel = Selector::parse(selector).unwrap();
    doc.select(&sel).count()
}

#[test]
fn dashboard_renders_every_section() {
    let (_dir, app) = test_app(SAMPLE_CSV);

    let mut resp = handle(get("/"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    let doc = Html::parse_document(&body);

    assert!(body.contains("Apartment Shopping Process Dashboard"));
    assert_eq!(count(&doc, "#sankey svg.sankey"), 1);
    // Applied, Toured, Rejected, Signed
    assert_eq!(count(&doc, "#sankey g.nodes rect"), 4);
    assert_eq!(count(&doc, "svg.histogram"), 4);
    assert_eq!(count(&doc, "form.entry-form input"), 12);
    assert_eq!(count(&doc, "#map"), 1);
}

#[test]
fn table_lists_unique_addresses_without_sankey_columns() {
    let (_dir, app) = test_app(SAMPLE_CSV);

    let mut resp = handle(get("/"), &app).unwrap();
    let doc = Html::parse_document(&body_string(&mut resp));

    assert_eq!(count(&doc, "table.apartments tbody tr"), 3);

    let header_sel = Selector::parse("table.apartments thead th").unwrap();
    let headers: Vec<String> = doc
        .select(&header_sel)
        .map(|th| th.text().collect::<String>())
        .collect();
    assert!(headers.contains(&"Address".to_string()));
    assert!(!headers.iter().any(|h| h == "Source" || h == "Target" || h == "Value"));
}

#[test]
fn city_filter_narrows_table() {
    let (_dir, app) = test_app(SAMPLE_CSV);

    let mut resp = handle(get("/?applied=1&city=Raleigh&city=Cary"), &app).unwrap();
    let doc = Html::parse_document(&body_string(&mut resp));
    assert_eq!(count(&doc, "table.apartments tbody tr"), 2);
    assert_eq!(count(&doc, "input[name=city][checked]"), 2);
}

#[test]
fn submitted_form_with_no_city_shows_nothing() {
    let (_dir, app) = test_app(SAMPLE_CSV);

    let mut resp = handle(get("/?applied=1&price_min=0&price_max=5000"), &app).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("No apartments match the current filters."));
}

#[test]
fn price_bounds_are_inclusive() {
    let (_dir, app) = test_app(SAMPLE_CSV);

    let mut resp = handle(get("/?price_min=1200&price_max=1500"), &app).unwrap();
    let doc = Html::parse_document(&body_string(&mut resp));
    assert_eq!(count(&doc, "table.apartments tbody tr"), 2);
}

#[test]
fn map_only_carries_geocoded_apartments() {
    let (_dir, app) = test_app(SAMPLE_CSV);

    let mut resp = handle(get("/"), &app).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("2 of 3 apartments have coordinates."));
}

#[test]
fn missing_data_file_renders_empty_dashboard() {
    let (dir, app) = test_app("");
    std::fs::remove_file(dir.path().join("apartments_with_coordinates.csv")).unwrap();

    let mut resp = handle(get("/"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(&mut resp).contains("No stage transitions recorded yet."));
}

#[test]
fn bad_filter_value_is_bad_request() {
    let (_dir, app) = test_app(SAMPLE_CSV);
    assert!(matches!(
        handle(get("/?price_min=cheap"), &app),
        Err(ServerError::BadRequest(_))
    ));
}

#[test]
fn malformed_numbers_surface_as_data_error() {
    let (_dir, app) = test_app("Address,Price,City,State\n1 Main St,lots,Raleigh,NC\n");
    assert!(matches!(
        handle(get("/"), &app),
        Err(ServerError::DataError(_))
    ));
}

#[test]
fn unknown_route_is_not_found() {
    let (_dir, app) = test_app(SAMPLE_CSV);
    assert!(matches!(
        handle(get("/admin"), &app),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn static_assets_and_health() {
    let (_dir, app) = test_app(SAMPLE_CSV);

    let css = handle(get("/static/main.css"), &app).unwrap();
    assert_eq!(css.headers()["Content-Type"], "text/css; charset=utf-8");

    let mut health = handle(get("/health"), &app).unwrap();
    assert_eq!(body_string(&mut health), "ok");
}
