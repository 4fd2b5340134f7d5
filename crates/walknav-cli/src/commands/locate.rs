//! Locate command implementation

use crate::cli::LocateArgs;
use crate::output::OutputWriter;
use crate::panel::spinner;
use anyhow::Result;
use std::sync::Arc;
use walknav_core::config::MapConfig;
use walknav_core::workflow::LocationProvider;
use walknav_google::GoogleGeolocation;

pub async fn execute(_args: LocateArgs, config: &MapConfig, output: &OutputWriter) -> Result<()> {
    let source = Arc::new(GoogleGeolocation::new(config.api_key.clone()));
    let mut provider = LocationProvider::new(source, config);

    let state = if output.is_json() {
        provider.acquire().await.clone()
    } else {
        let bar = spinner("Getting your location...");
        let state = provider.acquire().await.clone();
        bar.finish_and_clear();
        state
    };

    if output.is_json() {
        return output.result(&state);
    }

    if let Some(position) = state.position {
        if state.fallback {
            output.kv("Position", position);
            output.kv(
                "Source",
                format!("default location ({})", config.default_location_label),
            );
        } else {
            output.success(format!("Located at {}", position));
        }
    }

    if let Some(ref notice) = state.notice {
        output.warning(notice);
        output.info("Re-run 'walknav locate' to try again");
    }

    Ok(())
}
