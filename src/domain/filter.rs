// src/domain/filter.rs

use crate::domain::apartment::ApartmentRecord;
use std::collections::HashSet;

/// Inclusive integer range, the shape of a two-handled slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RangeFilter {
    pub min: i64,
    pub max: i64,
}

impl RangeFilter {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Smallest integer range covering every value. `None` when there are no values.
    pub fn span<I: IntoIterator<Item = f64>>(values: I) -> Option<Self> {
        let (lo, hi) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });

        if lo > hi {
            return None;
        }
        Some(Self {
            min: lo.floor() as i64,
            max: hi.ceil() as i64,
        })
    }

    /// Missing values never match.
    pub fn contains(&self, value: Option<f64>) -> bool {
        match value {
            Some(v) => v >= self.min as f64 && v <= self.max as f64,
            None => false,
        }
    }
}

/// Full extent of each filterable column; the default slider positions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterBounds {
    pub price: RangeFilter,
    pub bedrooms: RangeFilter,
    pub bathrooms: RangeFilter,
    pub sqft: RangeFilter,
    /// Distinct cities in first-seen order.
    pub cities: Vec<String>,
}

impl FilterBounds {
    pub fn from_records(records: &[ApartmentRecord]) -> Self {
        let span = |f: fn(&ApartmentRecord) -> Option<f64>| {
            RangeFilter::span(records.iter().filter_map(f)).unwrap_or_default()
        };

        let mut seen = HashSet::new();
        let cities = records
            .iter()
            .filter(|r| seen.insert(r.city.as_str()))
            .map(|r| r.city.clone())
            .collect();

        Self {
            price: span(|r| r.price),
            bedrooms: span(|r| r.bedrooms),
            bathrooms: span(|r| r.bathrooms),
            sqft: span(|r| r.sqft),
            cities,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub price: RangeFilter,
    pub bedrooms: RangeFilter,
    pub bathrooms: RangeFilter,
    pub sqft: RangeFilter,
    pub cities: Vec<String>,
}

impl FilterState {
    /// Everything selected.
    pub fn defaults(bounds: &FilterBounds) -> Self {
        Self {
            price: bounds.price,
            bedrooms: bounds.bedrooms,
            bathrooms: bounds.bathrooms,
            sqft: bounds.sqft,
            cities: bounds.cities.clone(),
        }
    }

    /// Reads the filter form from a query string. Missing range ends fall back
    /// to the bounds. Cities are only taken from the query once the form has
    /// been submitted (`applied=1`), so an empty selection stays empty.
    pub fn from_query(bounds: &FilterBounds, query: Option<&str>) -> Result<Self, String> {
        let mut state = Self::defaults(bounds);
        let Some(query) = query else {
            return Ok(state);
        };

        let mut applied = false;
        let mut cities = Vec::new();

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            let value = value.trim();
            let slot = match &*key {
                "applied" => {
                    applied = value == "1";
                    continue;
                }
                "city" => {
                    cities.push(value.to_string());
                    continue;
                }
                "price_min" => &mut state.price.min,
                "price_max" => &mut state.price.max,
                "bedrooms_min" => &mut state.bedrooms.min,
                "bedrooms_max" => &mut state.bedrooms.max,
                "bathrooms_min" => &mut state.bathrooms.min,
                "bathrooms_max" => &mut state.bathrooms.max,
                "sqft_min" => &mut state.sqft.min,
                "sqft_max" => &mut state.sqft.max,
                _ => continue,
            };

            if value.is_empty() {
                continue;
            }
            *slot = value
                .parse::<f64>()
                .map(|v| v.round() as i64)
                .map_err(|_| format!("filter '{key}' must be a number, got '{value}'"))?;
        }

        if applied {
            state.cities = cities;
        }
        Ok(state)
    }

    /// Query string that reproduces this filter, for links such as the export.
    pub fn to_query(&self) -> String {
        let mut ser = url::form_urlencoded::Serializer::new(String::new());
        ser.append_pair("applied", "1");
        for (name, range) in [
            ("price", self.price),
            ("bedrooms", self.bedrooms),
            ("bathrooms", self.bathrooms),
            ("sqft", self.sqft),
        ] {
            ser.append_pair(&format!("{name}_min"), &range.min.to_string());
            ser.append_pair(&format!("{name}_max"), &range.max.to_string());
        }
        for city in &self.cities {
            ser.append_pair("city", city);
        }
        ser.finish()
    }

    pub fn matches(&self, record: &ApartmentRecord) -> bool {
        self.price.contains(record.price)
            && self.bedrooms.contains(record.bedrooms)
            && self.bathrooms.contains(record.bathrooms)
            && self.sqft.contains(record.sqft)
            && self.cities.iter().any(|c| *c == record.city)
    }

    /// Matching records with duplicate addresses removed, first occurrence kept.
    pub fn apply(&self, records: &[ApartmentRecord]) -> Vec<ApartmentRecord> {
        let mut seen = HashSet::new();
        records
            .iter()
            .filter(|r| self.matches(r))
            .filter(|r| seen.insert(r.address.as_str()))
            .cloned()
            .collect()
    }
}
