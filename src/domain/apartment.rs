// src/domain/apartment.rs

use serde::Deserialize;

/// Column names shared by every CSV stage of the pipeline.
pub mod columns {
    pub const SOURCE: &str = "Source";
    pub const TARGET: &str = "Target";
    pub const VALUE: &str = "Value";
    pub const ADDRESS: &str = "Address";
    pub const PRICE: &str = "Price";
    pub const BEDROOMS: &str = "num_Bedrooms";
    pub const BATHROOMS: &str = "num_Bathrooms";
    pub const SQFT: &str = "SqFt";
    pub const CITY: &str = "City";
    pub const STATE: &str = "State";
    pub const LATITUDE: &str = "Latitude";
    pub const LONGITUDE: &str = "Longitude";
}

/// Header written when the dashboard creates the coordinates file from scratch.
pub const CANONICAL_HEADERS: [&str; 12] = [
    columns::SOURCE,
    columns::TARGET,
    columns::VALUE,
    columns::ADDRESS,
    columns::PRICE,
    columns::BEDROOMS,
    columns::BATHROOMS,
    columns::SQFT,
    columns::CITY,
    columns::STATE,
    columns::LATITUDE,
    columns::LONGITUDE,
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One row of `apartments_with_coordinates.csv`.
///
/// The same file is the source of truth for the listing details and an
/// append log of Sankey transitions, so an address may show up once per
/// stage it has passed through.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApartmentRecord {
    #[serde(rename = "Source")]
    pub source: Option<String>,
    #[serde(rename = "Target")]
    pub target: Option<String>,
    #[serde(rename = "Value")]
    pub value: Option<f64>,

    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Price")]
    pub price: Option<f64>,
    #[serde(rename = "num_Bedrooms")]
    pub bedrooms: Option<f64>,
    #[serde(rename = "num_Bathrooms")]
    pub bathrooms: Option<f64>,
    #[serde(rename = "SqFt")]
    pub sqft: Option<f64>,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "State")]
    pub state: String,

    #[serde(rename = "Latitude")]
    pub latitude: Option<f64>,
    #[serde(rename = "Longitude")]
    pub longitude: Option<f64>,
}

impl ApartmentRecord {
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }

    /// Text shown in the map marker popup.
    pub fn popup_text(&self) -> String {
        format!(
            "{}\nPrice: ${}\nBedrooms: {}\nBathrooms: {}\nSqFt: {}",
            self.address,
            format_optional(self.price),
            format_optional(self.bedrooms),
            format_optional(self.bathrooms),
            format_optional(self.sqft),
        )
    }
}

/// Formats a CSV number without a trailing `.0` for whole values.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{n:.0}")
    } else {
        n.to_string()
    }
}

pub fn format_optional(n: Option<f64>) -> String {
    n.map(format_number).unwrap_or_default()
}
