use serde::Deserialize;

// Nominatim /search?format=json returns an array of places:
// [
//   {
//     "place_id": 123,
//     "lat": "35.7795897",
//     "lon": "-78.6381787",
//     "display_name": "Raleigh, Wake County, North Carolina, United States",
//     ...
//   }
// ]
// Coordinates come back as strings.

#[derive(Debug, Deserialize)]
pub struct Place {
    pub lat: String,
    pub lon: String,
    pub display_name: Option<String>,
}
