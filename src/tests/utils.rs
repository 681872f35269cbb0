use crate::app::App;
use crate::config::MapConfig;
use crate::data::ApartmentStore;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use tempfile::TempDir;

pub const SAMPLE_CSV: &str = "\
Source,Target,Value,Address,Price,num_Bedrooms,num_Bathrooms,SqFt,City,State,Latitude,Longitude
Applied,Toured,1,1 Main St,1500,2,1,900,Raleigh,NC,35.78,-78.64
Applied,Rejected,1,2 Oak Ave,1200,1,1,650,Cary,NC,35.79,-78.78
Toured,Signed,1,1 Main St,1500,2,1,900,Raleigh,NC,35.78,-78.64
Applied,Toured,2,3 Pine Rd,2100,3,2,1400,Durham,NC,,
";

/// App backed by a scratch copy of `csv`. Keep the TempDir alive for the test.
pub fn test_app(csv: &str) -> (TempDir, App) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("apartments_with_coordinates.csv");
    std::fs::write(&path, csv).expect("write sample csv");
    (dir, App::new(ApartmentStore::new(path), MapConfig::default()))
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, form: &str) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

pub fn body_string(resp: &mut Response) -> String {
    let mut body = String::new();
    resp.body_mut()
        .reader()
        .read_to_string(&mut body)
        .unwrap();
    body
}

pub fn body_bytes(resp: &mut Response) -> Vec<u8> {
    let mut body = Vec::new();
    resp.body_mut().reader().read_to_end(&mut body).unwrap();
    body
}
