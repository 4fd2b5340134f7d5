//! Command implementations

mod config;
mod locate;
mod route;
mod view;

use crate::cli::{Cli, Commands};
use crate::errors::config_error;
use crate::output::OutputWriter;
use anyhow::{anyhow, Result};
use walknav_core::config::{CliConfigOverrides, MapConfigLoader};

/// Execute a CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);

    let loader = build_loader(&cli)?;

    match cli.command {
        // The config command inspects the loader itself, before resolution,
        // so it still works when no API key is configured yet.
        Commands::Config(args) => config::execute(args, &loader, &output),
        command => {
            let map_config = match loader.resolve() {
                Ok(config) => config,
                Err(err) => {
                    config_error(&err).display();
                    return Err(anyhow!(err));
                }
            };

            match command {
                Commands::View(args) => view::execute(args, &map_config, &output).await,
                Commands::Locate(args) => locate::execute(args, &map_config, &output).await,
                Commands::Route(args) => route::execute(args, &map_config, &output).await,
                Commands::Config(_) => Ok(()),
            }
        }
    }
}

fn build_loader(cli: &Cli) -> Result<MapConfigLoader> {
    let mut loader = MapConfigLoader::with_defaults();

    if let Some(ref path) = cli.config {
        loader = loader.load_from_file(path)?;
    }

    loader = loader.load_from_env();
    loader.update_from_cli(CliConfigOverrides {
        api_key: cli.api_key.clone(),
        pin_lat: cli.pin_lat,
        pin_lng: cli.pin_lng,
    });

    tracing::debug!(
        pin_lat = loader.pin_lat.value,
        pin_lng = loader.pin_lng.value,
        "configuration layered"
    );
    Ok(loader)
}

/// Parse a "lat,lng" pair as used by `--from`.
pub(crate) fn parse_position(s: &str) -> Result<walknav_core::models::GeoPosition> {
    let (lat, lng) = s
        .split_once(',')
        .ok_or_else(|| anyhow!("expected \"lat,lng\", got '{}'", s))?;
    Ok(walknav_core::models::GeoPosition::new(
        lat.trim().parse()?,
        lng.trim().parse()?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position() {
        let pos = parse_position("40.7580, -73.9855").unwrap();
        assert_eq!(pos.lat, 40.7580);
        assert_eq!(pos.lng, -73.9855);

        assert!(parse_position("not-a-pair").is_err());
        assert!(parse_position("40.0,east").is_err());
    }
}
