use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{post_form, test_app, SAMPLE_CSV};

const VALID_FORM: &str = "source=Toured&target=Applied+Again&value=1&address=9+Elm+St&price=1750\
&num_bedrooms=2&num_bathrooms=1.5&sqft=1000&city=Apex&state=NC&latitude=35.73&longitude=-78.85";

#[test]
fn valid_entry_is_appended_and_redirects() {
    let (_dir, app) = test_app(SAMPLE_CSV);

    let resp = handle(post_form("/entries", VALID_FORM), &app).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers()["Location"], "/?added=1");

    let records = app.store.load().unwrap();
    assert_eq!(records.len(), 5);
    let added = records.last().unwrap();
    assert_eq!(added.address, "9 Elm St");
    assert_eq!(added.target.as_deref(), Some("Applied Again"));
    assert_eq!(added.bathrooms, Some(1.5));
    assert_eq!(added.latitude, Some(35.73));
}

#[test]
fn invalid_entry_is_rejected_without_writing() {
    let (_dir, app) = test_app(SAMPLE_CSV);

    let form = VALID_FORM.replace("value=1", "value=0");
    match handle(post_form("/entries", &form), &app) {
        Err(ServerError::BadRequest(msg)) => assert!(msg.contains("Value")),
        Err(other) => panic!("expected bad request, got {other}"),
        Ok(resp) => panic!("expected bad request, got {}", resp.status()),
    }
    assert_eq!(app.store.load().unwrap().len(), 4);
}

#[test]
fn dashboard_confirms_added_entry() {
    let (_dir, app) = test_app(SAMPLE_CSV);

    let mut resp = handle(crate::tests::utils::get("/?added=1"), &app).unwrap();
    let body = crate::tests::utils::body_string(&mut resp);
    assert!(body.contains("New entry added!"));
}
