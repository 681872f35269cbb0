use crate::domain::apartment::ApartmentRecord;
use crate::domain::filter::{FilterBounds, FilterState, RangeFilter};

fn apartment(address: &str, city: &str, price: Option<f64>, beds: f64) -> ApartmentRecord {
    ApartmentRecord {
        address: address.to_string(),
        city: city.to_string(),
        price,
        bedrooms: Some(beds),
        bathrooms: Some(1.0),
        sqft: Some(800.0),
        ..ApartmentRecord::default()
    }
}

fn sample() -> Vec<ApartmentRecord> {
    vec![
        apartment("1 Main St", "Raleigh", Some(1500.0), 2.0),
        apartment("2 Oak Ave", "Cary", Some(1200.0), 1.0),
        apartment("1 Main St", "Raleigh", Some(1500.0), 2.0),
        apartment("3 Pine Rd", "Durham", Some(2100.5), 3.0),
        apartment("4 Ash Ct", "Cary", None, 2.0),
    ]
}

#[test]
fn bounds_cover_every_value() {
    let bounds = FilterBounds::from_records(&sample());
    assert_eq!(bounds.price, RangeFilter::new(1200, 2101));
    assert_eq!(bounds.bedrooms, RangeFilter::new(1, 3));
    assert_eq!(bounds.cities, vec!["Raleigh", "Cary", "Durham"]);
}

#[test]
fn defaults_keep_everything_with_values_and_drop_duplicates() {
    let records = sample();
    let bounds = FilterBounds::from_records(&records);
    let filtered = FilterState::defaults(&bounds).apply(&records);

    let addresses: Vec<&str> = filtered.iter().map(|r| r.address.as_str()).collect();
    // 4 Ash Ct has no price, so no price range contains it.
    assert_eq!(addresses, vec!["1 Main St", "2 Oak Ave", "3 Pine Rd"]);
}

#[test]
fn range_ends_are_inclusive() {
    let range = RangeFilter::new(1200, 1500);
    assert!(range.contains(Some(1200.0)));
    assert!(range.contains(Some(1500.0)));
    assert!(!range.contains(Some(1500.5)));
    assert!(!range.contains(None));
}

#[test]
fn query_overrides_ranges_and_cities() {
    let records = sample();
    let bounds = FilterBounds::from_records(&records);
    let state = FilterState::from_query(
        &bounds,
        Some("applied=1&price_min=1200&price_max=1500&bedrooms_min=1&bedrooms_max=3&city=Cary"),
    )
    .unwrap();

    assert_eq!(state.price, RangeFilter::new(1200, 1500));
    assert_eq!(state.bathrooms, bounds.bathrooms);
    assert_eq!(state.cities, vec!["Cary"]);

    let filtered = state.apply(&records);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].address, "2 Oak Ave");
}

#[test]
fn cities_need_a_submitted_form() {
    let bounds = FilterBounds::from_records(&sample());

    let untouched = FilterState::from_query(&bounds, Some("price_min=0")).unwrap();
    assert_eq!(untouched.cities, bounds.cities);

    let cleared = FilterState::from_query(&bounds, Some("applied=1")).unwrap();
    assert!(cleared.cities.is_empty());
    assert!(cleared.apply(&sample()).is_empty());
}

#[test]
fn to_query_reproduces_state() {
    let bounds = FilterBounds::from_records(&sample());
    let mut state = FilterState::defaults(&bounds);
    state.sqft = RangeFilter::new(500, 900);
    state.cities = vec!["Cary".into(), "Winston Salem".into()];

    let parsed = FilterState::from_query(&bounds, Some(&state.to_query())).unwrap();
    assert_eq!(parsed, state);
}

#[test]
fn rejects_non_numeric_bounds() {
    let bounds = FilterBounds::from_records(&sample());
    let err = FilterState::from_query(&bounds, Some("sqft_max=big")).unwrap_err();
    assert!(err.contains("sqft_max"));
}
