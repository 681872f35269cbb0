use anyhow::Result;
use clap::{Parser, Subcommand};
use log::error;
use std::path::PathBuf;

mod app;
mod charts;
mod commands;
mod config;
mod data;
mod db;
mod domain;
mod errors;
mod geocoder;
mod join;
mod logger;
mod responses;
mod router;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

#[derive(Parser, Debug)]
#[command(
    name = "apartment-tracker",
    version,
    about = "Geocode, merge and chart an apartment search"
)]
struct Cli {
    /// TOML config file (defaults to $CONFIG_PATH, then built-in defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up coordinates for every unique address in the apartments file
    Geocode,
    /// Attach geocoded coordinates to the apartments file
    Join,
    /// Geocode, then join
    Pipeline,
    /// Run the dashboard
    Serve {
        /// Address to listen on, overriding the config
        #[arg(long)]
        bind: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::read_config(cli.config.as_deref())?;

    logger::setup_logger(config.log_filter())?;

    let result = match cli.command {
        Command::Geocode => commands::run_geocode(&config).map(|_| ()),
        Command::Join => commands::run_join(&config).map(|_| ()),
        Command::Pipeline => {
            commands::run_geocode(&config).and_then(|_| commands::run_join(&config).map(|_| ()))
        }
        Command::Serve { bind } => commands::run_serve(&config, bind),
    };

    if let Err(err) = &result {
        error!("{err:#}");
    }
    result
}
