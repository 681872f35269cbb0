use crate::domain::entry::NewEntry;

fn form(overrides: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut fields: Vec<(String, String)> = [
        ("source", "Applied"),
        ("target", "Toured"),
        ("value", "1"),
        ("address", "1 Main St"),
        ("price", "1500"),
        ("num_bedrooms", "2"),
        ("num_bathrooms", "1"),
        ("sqft", "900"),
        ("city", "Raleigh"),
        ("state", "NC"),
        ("latitude", "35.78"),
        ("longitude", "-78.64"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    for (key, value) in overrides {
        if let Some(slot) = fields.iter_mut().find(|(k, _)| k.as_str() == *key) {
            slot.1 = value.to_string();
        }
    }
    fields
}

#[test]
fn parses_complete_form() {
    let entry = NewEntry::from_form(form(&[])).unwrap();
    assert_eq!(entry.source, "Applied");
    assert_eq!(entry.price, 1500.0);
    assert_eq!(entry.longitude, -78.64);
}

#[test]
fn enforces_numeric_minimums() {
    let err = NewEntry::from_form(form(&[("value", "0")])).unwrap_err();
    assert_eq!(err, "Value must be at least 1");

    let err = NewEntry::from_form(form(&[("sqft", "-5")])).unwrap_err();
    assert_eq!(err, "Square Feet must be at least 0");
}

#[test]
fn enforces_coordinate_ranges() {
    let err = NewEntry::from_form(form(&[("latitude", "90.5")])).unwrap_err();
    assert_eq!(err, "Latitude must be between -90 and 90");

    assert!(NewEntry::from_form(form(&[("longitude", "-180")])).is_ok());
}

#[test]
fn requires_address_and_stages() {
    assert_eq!(
        NewEntry::from_form(form(&[("address", "   ")])).unwrap_err(),
        "Address is required"
    );
    assert_eq!(
        NewEntry::from_form(form(&[("target", "")])).unwrap_err(),
        "Target is required"
    );
}

#[test]
fn rejects_non_numbers() {
    let err = NewEntry::from_form(form(&[("price", "cheap")])).unwrap_err();
    assert!(err.contains("Price must be a number"));
}

#[test]
fn row_follows_given_header_order() {
    let entry = NewEntry::from_form(form(&[])).unwrap();
    let row = entry.to_row(&["Address", "Notes", "Price", "Source", "Latitude"]);
    assert_eq!(row, vec!["1 Main St", "", "1500", "Applied", "35.78"]);
}
