//! Interactive viewer: the control panels and the delegated map canvas.

use crate::cli::ViewArgs;
use crate::output::OutputWriter;
use crate::panel;
use anyhow::{anyhow, bail, Result};
use dialoguer::Select;
use std::sync::Arc;
use walknav_core::config::MapConfig;
use walknav_core::models::{overlay_polygon, NavigationState};
use walknav_core::workflow::{LocationProvider, MapViewport, NavigationWorkflow};
use walknav_google::{GoogleDirections, GoogleGeolocation, StaticMapUrl};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    GetDirections,
    ClearRoute,
    RetryLocation,
    ZoomIn,
    ZoomOut,
    CenterOnMe,
    CenterOnDestination,
    ShowMapUrl,
    Quit,
}

pub async fn execute(args: ViewArgs, config: &MapConfig, output: &OutputWriter) -> Result<()> {
    if output.is_json() {
        bail!("the interactive viewer has no JSON mode; use 'locate' and 'route'");
    }

    let map_size = parse_size(&args.map_size)?;

    let mut provider = LocationProvider::new(
        Arc::new(GoogleGeolocation::new(config.api_key.clone())),
        config,
    );
    let mut navigation =
        NavigationWorkflow::new(Arc::new(GoogleDirections::new(config.api_key.clone())));
    let mut viewport = MapViewport::new(config);

    // Mount behavior: locate immediately, before the first menu.
    acquire(&mut provider).await;

    loop {
        panel::render(config, provider.state(), navigation.state(), &viewport);

        let actions = available_actions(&provider, &navigation);
        let labels: Vec<&str> = actions.iter().map(|a| label(*a)).collect();

        let choice = Select::new()
            .with_prompt("Action")
            .items(&labels)
            .default(0)
            .interact()?;

        match actions[choice] {
            Action::GetDirections => {
                // Guarded twice: the action is absent while loading, and the
                // workflow refuses to start without a known origin.
                let Some(origin) = provider.state().position else {
                    output.info("Still locating; try again in a moment");
                    continue;
                };
                let bar = panel::spinner("Requesting walking route...");
                navigation.start(origin, config.pinned_location).await;
                bar.finish_and_clear();
            }
            Action::ClearRoute => {
                navigation.clear();
            }
            Action::RetryLocation => {
                acquire(&mut provider).await;
            }
            Action::ZoomIn => viewport.zoom_in(),
            Action::ZoomOut => viewport.zoom_out(),
            Action::CenterOnMe => {
                if let Some(position) = provider.state().position {
                    viewport.center_on_user(position);
                }
            }
            Action::CenterOnDestination => {
                viewport.center_on_destination(config.pinned_location);
            }
            Action::ShowMapUrl => {
                output.info("Open this URL in a browser to see the rendered map:");
                println!("{}", map_url(config, &provider, &navigation, &viewport, map_size));
            }
            Action::Quit => break,
        }
    }

    Ok(())
}

async fn acquire(provider: &mut LocationProvider) {
    let bar = panel::spinner("Getting your location...");
    provider.acquire().await;
    bar.finish_and_clear();
}

/// Build the action menu for the current state. "Get Directions" is offered
/// only when the position is settled; "Clear Route" replaces it while a
/// route or failure is displayed.
fn available_actions(
    provider: &LocationProvider,
    navigation: &NavigationWorkflow,
) -> Vec<Action> {
    let mut actions = Vec::new();
    let location = provider.state();

    let position_known = !location.loading && location.position.is_some();
    match navigation.state() {
        NavigationState::Active(_) => {
            actions.push(Action::ClearRoute);
        }
        NavigationState::Failed(_) => {
            // A failure can be cleared or retried outright.
            actions.push(Action::ClearRoute);
            if position_known {
                actions.push(Action::GetDirections);
            }
        }
        _ => {
            if position_known {
                actions.push(Action::GetDirections);
            }
        }
    }

    if location.notice.is_some() {
        actions.push(Action::RetryLocation);
    }

    actions.push(Action::ZoomIn);
    actions.push(Action::ZoomOut);
    if location.position.is_some() {
        actions.push(Action::CenterOnMe);
    }
    actions.push(Action::CenterOnDestination);
    actions.push(Action::ShowMapUrl);
    actions.push(Action::Quit);

    actions
}

fn label(action: Action) -> &'static str {
    match action {
        Action::GetDirections => "Get Directions",
        Action::ClearRoute => "Clear Route",
        Action::RetryLocation => "Retry Location",
        Action::ZoomIn => "Zoom In",
        Action::ZoomOut => "Zoom Out",
        Action::CenterOnMe => "Center on My Location",
        Action::CenterOnDestination => "Center on Destination",
        Action::ShowMapUrl => "Show Map URL",
        Action::Quit => "Quit",
    }
}

fn map_url(
    config: &MapConfig,
    provider: &LocationProvider,
    navigation: &NavigationWorkflow,
    viewport: &MapViewport,
    size: (u32, u32),
) -> String {
    StaticMapUrl::new(config.api_key.clone(), viewport.center(), viewport.zoom())
        .size(size.0, size.1)
        .destination_marker(config.pinned_location)
        .user_marker(provider.state().position)
        .overlay(overlay_polygon(config.pinned_location))
        .route_polyline(
            navigation
                .active_route()
                .and_then(|r| r.overview_polyline.clone()),
        )
        .styles(&config.style_rules)
        .build()
}

fn parse_size(s: &str) -> Result<(u32, u32)> {
    let (w, h) = s
        .split_once('x')
        .ok_or_else(|| anyhow!("expected WIDTHxHEIGHT, got '{}'", s))?;
    Ok((w.trim().parse()?, h.trim().parse()?))
}
