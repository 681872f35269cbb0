use anyhow::{Context, Result};
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub data: DataConfig,
    pub geocoder: GeocoderConfig,
    pub server: ServerConfig,
    pub map: MapConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            data: DataConfig::default(),
            geocoder: GeocoderConfig::default(),
            server: ServerConfig::default(),
            map: MapConfig::default(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DataConfig {
    pub apartments_csv: PathBuf,
    pub geocoded_csv: PathBuf,
    pub merged_csv: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            apartments_csv: PathBuf::from("apartments.csv"),
            geocoded_csv: PathBuf::from("geocoded_addresses.csv"),
            merged_csv: PathBuf::from("apartments_with_coordinates.csv"),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct GeocoderConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Minimum gap between two outbound lookups.
    pub min_interval_ms: u64,
    /// SQLite file that keeps resolved coordinates between runs.
    pub cache_db: Option<PathBuf>,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            user_agent: "apartment-tracker".to_string(),
            timeout_secs: 10,
            min_interval_ms: 1000,
            cache_db: None,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    pub max_workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8501".to_string(),
            max_workers: 4,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MapConfig {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        // Raleigh, North Carolina
        Self {
            center_lat: 35.787743,
            center_lon: -78.644257,
            zoom: 8,
        }
    }
}

impl Config {
    pub fn log_filter(&self) -> log::LevelFilter {
        self.log_level
            .parse()
            .unwrap_or(log::LevelFilter::Info)
    }
}

/// Reads the TOML config from `explicit`, falling back to `$CONFIG_PATH`.
/// Without either, every setting takes its default.
pub fn read_config(explicit: Option<&Path>) -> Result<Config> {
    dotenv().ok();

    let path = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from),
    };

    match path {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            parse_config(&text).with_context(|| format!("invalid config {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}

pub fn parse_config(text: &str) -> Result<Config> {
    Ok(toml::from_str(text)?)
}
