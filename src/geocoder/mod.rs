mod cache;
mod client;
mod geocode_error;
mod job;
mod models;
mod throttle;

pub use cache::GeocodeCache;
pub use client::{parse_search_response, NominatimClient};
pub use geocode_error::GeocodeError;
pub use job::{geocode_table, GeocodeSummary};
pub use throttle::Throttle;

use crate::domain::apartment::Coordinates;

/// Resolves a free-form postal address to coordinates.
/// `Ok(None)` means the service answered but found nothing.
pub trait Geocoder {
    fn geocode(&self, query: &str) -> Result<Option<Coordinates>, GeocodeError>;
}
