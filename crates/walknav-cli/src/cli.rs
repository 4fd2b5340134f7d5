use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Walknav - Walking directions to a pinned destination
#[derive(Parser, Debug)]
#[command(name = "walknav")]
#[command(about = "Walking directions to a pinned destination", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a TOML configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Mapping service API key (overrides file and environment)
    #[arg(long, global = true, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Destination pin latitude
    #[arg(long, global = true, value_name = "LAT")]
    pub pin_lat: Option<f64>,

    /// Destination pin longitude
    #[arg(long, global = true, value_name = "LNG")]
    pub pin_lng: Option<f64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive map viewer
    View(ViewArgs),

    /// Acquire the current position once and print it
    Locate(LocateArgs),

    /// Request a walking route to the pinned destination
    Route(RouteArgs),

    /// Show the resolved configuration and where each value came from
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct ViewArgs {
    /// Rendered map image size, WIDTHxHEIGHT
    #[arg(long, default_value = "640x640", value_name = "SIZE")]
    pub map_size: String,
}

#[derive(Parser, Debug)]
pub struct LocateArgs {}

#[derive(Parser, Debug)]
pub struct RouteArgs {
    /// Origin as "lat,lng"; acquired from the location service when absent
    #[arg(long, value_name = "LAT,LNG")]
    pub from: Option<String>,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {}
