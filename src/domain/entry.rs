// src/domain/entry.rs

use crate::domain::apartment::{columns, format_number};
use std::collections::HashMap;

/// A validated submission of the "Add New Entry" sidebar form.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub source: String,
    pub target: String,
    pub value: f64,
    pub address: String,
    pub price: f64,
    pub bedrooms: f64,
    pub bathrooms: f64,
    pub sqft: f64,
    pub city: String,
    pub state: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl NewEntry {
    /// Builds an entry from decoded `application/x-www-form-urlencoded` pairs.
    /// Returns a user-facing message naming the first invalid field.
    pub fn from_form<I, K, V>(pairs: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let form: HashMap<String, String> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        let text = |name: &str, label: &str| -> Result<String, String> {
            form.get(name)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .ok_or_else(|| format!("{label} is required"))
        };

        let optional_text = |name: &str| -> String {
            form.get(name).map(|s| s.trim().to_string()).unwrap_or_default()
        };

        let number = |name: &str, label: &str, min: f64, max: f64| -> Result<f64, String> {
            let raw = form
                .get(name)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .ok_or_else(|| format!("{label} is required"))?;

            let n: f64 = raw
                .parse()
                .map_err(|_| format!("{label} must be a number, got '{raw}'"))?;

            if !n.is_finite() || n < min || n > max {
                return Err(if max.is_infinite() {
                    format!("{label} must be at least {}", format_number(min))
                } else {
                    format!(
                        "{label} must be between {} and {}",
                        format_number(min),
                        format_number(max)
                    )
                });
            }
            Ok(n)
        };

        Ok(NewEntry {
            source: text("source", "Source")?,
            target: text("target", "Target")?,
            value: number("value", "Value", 1.0, f64::INFINITY)?,
            address: text("address", "Address")?,
            price: number("price", "Price", 0.0, f64::INFINITY)?,
            bedrooms: number("num_bedrooms", "Number of Bedrooms", 0.0, f64::INFINITY)?,
            bathrooms: number("num_bathrooms", "Number of Bathrooms", 0.0, f64::INFINITY)?,
            sqft: number("sqft", "Square Feet", 0.0, f64::INFINITY)?,
            city: optional_text("city"),
            state: optional_text("state"),
            latitude: number("latitude", "Latitude", -90.0, 90.0)?,
            longitude: number("longitude", "Longitude", -180.0, 180.0)?,
        })
    }

    /// Value for a CSV column, or an empty cell for columns the form
    /// doesn't know about.
    pub fn field(&self, column: &str) -> String {
        match column {
            columns::SOURCE => self.source.clone(),
            columns::TARGET => self.target.clone(),
            columns::VALUE => format_number(self.value),
            columns::ADDRESS => self.address.clone(),
            columns::PRICE => format_number(self.price),
            columns::BEDROOMS => format_number(self.bedrooms),
            columns::BATHROOMS => format_number(self.bathrooms),
            columns::SQFT => format_number(self.sqft),
            columns::CITY => self.city.clone(),
            columns::STATE => self.state.clone(),
            columns::LATITUDE => format_number(self.latitude),
            columns::LONGITUDE => format_number(self.longitude),
            _ => String::new(),
        }
    }

    /// Orders the entry's fields to match `headers`.
    pub fn to_row<S: AsRef<str>>(&self, headers: &[S]) -> Vec<String> {
        headers.iter().map(|h| self.field(h.as_ref().trim())).collect()
    }
}
