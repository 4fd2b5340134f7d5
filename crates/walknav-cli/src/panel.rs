//! Status panel rendering and shared view helpers.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use walknav_core::config::MapConfig;
use walknav_core::models::{LocationState, NavigationState, NoticeKind};
use walknav_core::workflow::MapViewport;

/// Spinner shown while one of the two asynchronous waits is in flight.
pub fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}

/// Render the full status panel: destination, location state, route state,
/// and the current viewport.
pub fn render(
    config: &MapConfig,
    location: &LocationState,
    navigation: &NavigationState,
    viewport: &MapViewport,
) {
    println!();
    println!(
        "{}  {}",
        style("📍 Walk Navigator").bold(),
        style("walking directions to your destination").dim()
    );
    println!(
        "   {} {}",
        style("Destination:").bold(),
        config.pinned_location
    );

    render_location(config, location);
    render_navigation(navigation);

    println!(
        "   {} {} @ zoom {}",
        style("Viewport:").bold(),
        viewport.center(),
        viewport.zoom()
    );
    println!();
}

fn render_location(config: &MapConfig, location: &LocationState) {
    if location.loading {
        println!("   {} Getting your location...", style("⟳").cyan());
        return;
    }

    match location.position {
        Some(position) if !location.fallback => {
            println!(
                "   {} {} {}",
                style("Your position:").bold(),
                position,
                style("(located)").green()
            );
        }
        Some(position) => {
            println!("   {} {}", style("Your position:").bold(), position);
            println!(
                "     {}",
                style(format!(
                    "Using default location ({})",
                    config.default_location_label
                ))
                .dim()
            );
        }
        None => {
            println!("   {} unknown", style("Your position:").bold());
        }
    }

    if let Some(ref notice) = location.notice {
        let styled = match location.notice_kind {
            Some(NoticeKind::Error) => style(format!("⚠ {}", notice)).red(),
            _ => style(format!("ℹ {}", notice)).yellow(),
        };
        println!("     {}", styled);
    }
}

fn render_navigation(navigation: &NavigationState) {
    match navigation {
        NavigationState::Idle => {}
        NavigationState::Requesting => {
            println!("   {} requesting route...", style("Route:").bold());
        }
        NavigationState::Active(info) => {
            println!(
                "   {} {} · {} {}",
                style("Route:").bold(),
                style(&info.distance_text).cyan(),
                style(&info.duration_text).cyan(),
                style("(walking)").dim()
            );
        }
        NavigationState::Failed(message) => {
            println!("   {} {}", style("Route:").bold(), style(message).red());
        }
    }
}
