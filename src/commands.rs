use crate::app::App;
use crate::config::Config;
use crate::data::Table;
use crate::db::connection::Database;
use crate::geocoder::{geocode_table, GeocodeCache, GeocodeSummary, NominatimClient, Throttle};
use crate::join::{left_join_coordinates, JoinSummary};
use crate::responses::error_to_response;
use crate::router::handle;
use anyhow::{Context, Result};
use astra::Server;
use log::{error, info, warn};
use std::time::Duration;

pub fn run_geocode(config: &Config) -> Result<GeocodeSummary> {
    let input = &config.data.apartments_csv;
    let output = &config.data.geocoded_csv;

    let table = Table::read(input).with_context(|| format!("reading {}", input.display()))?;

    let geocoder = NominatimClient::new(&config.geocoder)?;
    let mut cache = match &config.geocoder.cache_db {
        Some(path) => GeocodeCache::persistent(Database::new(path.clone()))
            .with_context(|| format!("opening geocode cache {}", path.display()))?,
        None => GeocodeCache::in_memory(),
    };
    let mut throttle = Throttle::new(Duration::from_millis(config.geocoder.min_interval_ms));

    let (geocoded, summary) = geocode_table(&table, &geocoder, &mut cache, &mut throttle)?;
    geocoded
        .write(output)
        .with_context(|| format!("writing {}", output.display()))?;

    info!(
        "Geocoding complete: {} resolved, {} failed, {} cache hits. Results saved to {}",
        summary.resolved,
        summary.failures,
        summary.cache_hits,
        output.display()
    );
    Ok(summary)
}

pub fn run_join(config: &Config) -> Result<JoinSummary> {
    let data = &config.data;

    let apartments = Table::read(&data.apartments_csv)
        .with_context(|| format!("reading {}", data.apartments_csv.display()))?;
    let geocoded = Table::read(&data.geocoded_csv)
        .with_context(|| format!("reading {}", data.geocoded_csv.display()))?;

    let (merged, summary) = left_join_coordinates(&apartments, &geocoded)?;
    merged
        .write(&data.merged_csv)
        .with_context(|| format!("writing {}", data.merged_csv.display()))?;

    if summary.unmatched > 0 {
        warn!("{} apartment rows had no geocoded match", summary.unmatched);
    }
    info!(
        "Data merged ({} rows) and saved to {}",
        summary.rows,
        data.merged_csv.display()
    );
    Ok(summary)
}

pub fn run_serve(config: &Config, bind_override: Option<String>) -> Result<()> {
    let bind = bind_override.unwrap_or_else(|| config.server.bind_address.clone());
    let app = App::from_config(config);

    info!(
        "Serving {} at http://{bind}",
        app.store.path().display()
    );

    let server = Server::bind(bind.as_str()).max_workers(config.server.max_workers);

    server
        .serve(move |req, _info| match handle(req, &app) {
            Ok(resp) => resp,
            Err(err) => {
                error!("Request failed: {err}");
                error_to_response(err)
            }
        })
        .context("server ended with error")?;

    info!("Server shut down cleanly.");
    Ok(())
}
