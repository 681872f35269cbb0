// job.rs
use crate::data::Table;
use crate::domain::apartment::{columns, format_number};
use crate::errors::DataError;
use crate::geocoder::{GeocodeCache, Geocoder, Throttle};
use log::{info, warn};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct GeocodeSummary {
    pub input_rows: usize,
    pub unique_addresses: usize,
    pub resolved: usize,
    pub cache_hits: usize,
    pub failures: usize,
}

/// Geocodes every distinct address of `table`.
///
/// Returns the deduplicated rows with `Latitude` and `Longitude` filled in.
/// A failed lookup is logged and leaves both cells empty; the row stays.
pub fn geocode_table(
    table: &Table,
    geocoder: &dyn Geocoder,
    cache: &mut GeocodeCache,
    throttle: &mut Throttle,
) -> Result<(Table, GeocodeSummary), DataError> {
    let mut unique = table.dedup_by(columns::ADDRESS)?;
    let address_col = unique.require_column(columns::ADDRESS)?;
    let city_col = unique.require_column(columns::CITY)?;
    let state_col = unique.require_column(columns::STATE)?;
    let lat_col = unique.ensure_column(columns::LATITUDE);
    let lon_col = unique.ensure_column(columns::LONGITUDE);

    let mut summary = GeocodeSummary {
        input_rows: table.rows.len(),
        unique_addresses: unique.rows.len(),
        ..GeocodeSummary::default()
    };
    info!(
        "Geocoding {} unique addresses ({} rows read)",
        summary.unique_addresses, summary.input_rows
    );

    let total = unique.rows.len();
    for (i, row) in unique.rows.iter_mut().enumerate() {
        let query = format!(
            "{}, {}, {}",
            row[address_col].trim(),
            row[city_col].trim(),
            row[state_col].trim()
        );

        let coords = if let Some(hit) = cache.get(&query) {
            summary.cache_hits += 1;
            Some(hit)
        } else {
            throttle.wait();
            match geocoder.geocode(&query) {
                Ok(Some(coords)) => {
                    if let Err(e) = cache.insert(&query, coords) {
                        warn!("Could not cache coordinates for {query}: {e}");
                    }
                    Some(coords)
                }
                Ok(None) => {
                    warn!("No geocoding match for address {query}");
                    None
                }
                Err(e) => {
                    warn!("Geocoding error for address {query}: {e}");
                    None
                }
            }
        };

        match coords {
            Some(c) => {
                summary.resolved += 1;
                row[lat_col] = format_number(c.latitude);
                row[lon_col] = format_number(c.longitude);
                info!("[{}/{}] {query} -> ({}, {})", i + 1, total, c.latitude, c.longitude);
            }
            None => {
                summary.failures += 1;
                row[lat_col].clear();
                row[lon_col].clear();
            }
        }
    }

    Ok((unique, summary))
}
