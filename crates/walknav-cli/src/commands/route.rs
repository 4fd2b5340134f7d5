//! Route command implementation

use crate::cli::RouteArgs;
use crate::commands::parse_position;
use crate::output::OutputWriter;
use crate::panel::spinner;
use anyhow::Result;
use std::sync::Arc;
use walknav_core::config::MapConfig;
use walknav_core::models::NavigationState;
use walknav_core::workflow::{LocationProvider, NavigationWorkflow};
use walknav_google::{GoogleDirections, GoogleGeolocation};

pub async fn execute(args: RouteArgs, config: &MapConfig, output: &OutputWriter) -> Result<()> {
    // Origin: explicit --from, otherwise a fresh acquisition (which itself
    // degrades to the configured fallback rather than failing).
    let origin = match args.from {
        Some(ref s) => parse_position(s)?,
        None => {
            let source = Arc::new(GoogleGeolocation::new(config.api_key.clone()));
            let mut provider = LocationProvider::new(source, config);

            let bar = (!output.is_json()).then(|| spinner("Getting your location..."));
            let state = provider.acquire().await.clone();
            if let Some(bar) = bar {
                bar.finish_and_clear();
            }

            if let Some(ref notice) = state.notice {
                output.warning(notice);
            }
            // Acquisition always settles to a position, real or fallback.
            state.position.unwrap_or(config.default_user_location)
        }
    };

    let mut workflow =
        NavigationWorkflow::new(Arc::new(GoogleDirections::new(config.api_key.clone())));

    let bar = (!output.is_json()).then(|| spinner("Requesting walking route..."));
    let state = workflow.start(origin, config.pinned_location).await.clone();
    if let Some(bar) = bar {
        bar.finish_and_clear();
    }

    match state {
        NavigationState::Active(ref info) => {
            if output.is_json() {
                output.result(info)?;
            } else {
                output.success("Walking route found");
                output.kv("From", origin);
                output.kv("To", config.pinned_location);
                output.kv("Distance", &info.distance_text);
                output.kv("Duration", &info.duration_text);
            }
        }
        NavigationState::Failed(ref message) => {
            output.error(message);
        }
        // start() settles to Active or Failed; nothing else escapes it.
        ref other => {
            output.error(format!("unexpected navigation state: {:?}", other));
        }
    }

    Ok(())
}
