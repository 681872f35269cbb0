pub mod connection;
pub mod geocode_cache;
