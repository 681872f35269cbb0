use crate::config::{Config, MapConfig};
use crate::data::ApartmentStore;

/// Shared state handed to every request.
pub struct App {
    pub store: ApartmentStore,
    pub map: MapConfig,
}

impl App {
    pub fn new(store: ApartmentStore, map: MapConfig) -> Self {
        Self { store, map }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            ApartmentStore::new(config.data.merged_csv.clone()),
            config.map.clone(),
        )
    }
}
