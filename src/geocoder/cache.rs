use crate::db::connection::{init_db, Database};
use crate::db::geocode_cache;
use crate::domain::apartment::Coordinates;
use crate::errors::DataError;
use log::info;
use std::collections::HashMap;

/// Resolved coordinates keyed by normalized address.
///
/// Lives in memory for one run; with a backing database every insert is
/// also written through so an interrupted run doesn't repeat its lookups.
pub struct GeocodeCache {
    entries: HashMap<String, Coordinates>,
    store: Option<Database>,
}

impl GeocodeCache {
    pub fn in_memory() -> Self {
        Self {
            entries: HashMap::new(),
            store: None,
        }
    }

    pub fn persistent(db: Database) -> Result<Self, DataError> {
        init_db(&db)?;
        let rows = db.with_conn(|conn| geocode_cache::load_all(conn))?;
        info!("Loaded {} cached coordinates", rows.len());

        Ok(Self {
            entries: rows.into_iter().collect(),
            store: Some(db),
        })
    }

    /// Trims, collapses runs of whitespace and lower-cases.
    pub fn normalize(address: &str) -> String {
        address
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }

    pub fn get(&self, address: &str) -> Option<Coordinates> {
        self.entries.get(&Self::normalize(address)).copied()
    }

    pub fn insert(&mut self, address: &str, coords: Coordinates) -> Result<(), DataError> {
        let key = Self::normalize(address);
        if let Some(db) = &self.store {
            let now = chrono::Utc::now().timestamp();
            db.with_conn(|conn| geocode_cache::upsert(conn, &key, coords, now))?;
        }
        self.entries.insert(key, coords);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
