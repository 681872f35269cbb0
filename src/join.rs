// join.rs
use crate::data::Table;
use crate::domain::apartment::columns;
use crate::errors::DataError;
use std::collections::HashMap;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct JoinSummary {
    pub rows: usize,
    pub matched: usize,
    pub unmatched: usize,
}

/// Left join of `apartments` onto `geocoded` by `Address`, taking only
/// `Latitude` and `Longitude` from the right side.
///
/// Every apartment row is kept in order. Rows without a match get empty
/// coordinates; an address listed more than once on the right yields one
/// output row per listing. Coordinate columns already on the left are replaced.
pub fn left_join_coordinates(
    apartments: &Table,
    geocoded: &Table,
) -> Result<(Table, JoinSummary), DataError> {
    let left_key = apartments.require_column(columns::ADDRESS)?;
    let right_key = geocoded.require_column(columns::ADDRESS)?;
    let right_lat = geocoded.require_column(columns::LATITUDE)?;
    let right_lon = geocoded.require_column(columns::LONGITUDE)?;

    let mut lookup: HashMap<&str, Vec<(&str, &str)>> = HashMap::new();
    for row in &geocoded.rows {
        lookup
            .entry(row[right_key].as_str())
            .or_default()
            .push((row[right_lat].as_str(), row[right_lon].as_str()));
    }

    // Coordinates go at the end, like a fresh merge.
    let base_headers: Vec<usize> = (0..apartments.headers.len())
        .filter(|&i| {
            let h = apartments.headers[i].as_str();
            h != columns::LATITUDE && h != columns::LONGITUDE
        })
        .collect();

    let mut headers: Vec<String> = base_headers
        .iter()
        .map(|&i| apartments.headers[i].clone())
        .collect();
    headers.push(columns::LATITUDE.to_string());
    headers.push(columns::LONGITUDE.to_string());

    let mut merged = Table::new(headers);
    let mut summary = JoinSummary::default();

    for row in &apartments.rows {
        let base: Vec<String> = base_headers.iter().map(|&i| row[i].clone()).collect();

        match lookup.get(row[left_key].as_str()) {
            Some(matches) => {
                summary.matched += 1;
                for (lat, lon) in matches {
                    let mut out = base.clone();
                    out.push(lat.to_string());
                    out.push(lon.to_string());
                    merged.rows.push(out);
                }
            }
            None => {
                summary.unmatched += 1;
                let mut out = base;
                out.push(String::new());
                out.push(String::new());
                merged.rows.push(out);
            }
        }
    }

    summary.rows = merged.rows.len();
    Ok((merged, summary))
}
