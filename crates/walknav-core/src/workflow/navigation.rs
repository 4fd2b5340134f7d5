//! The navigation request lifecycle.

use crate::models::{GeoPosition, NavigationState, Route, RouteInfo};
use crate::ports::DirectionsService;
use std::sync::Arc;

/// Fixed message shown for any routing failure or empty result.
pub const NO_ROUTE_MESSAGE: &str = "Unable to find a walking route. Try a different location.";

/// Coordinates a single outstanding routing request and its displayed
/// outcome.
///
/// State machine: `Idle` → `Requesting` → `Active`/`Failed`, with
/// [`clear`] returning to `Idle` from anywhere. A `start` issued while a
/// request is already in flight is ignored.
///
/// [`clear`]: NavigationWorkflow::clear
pub struct NavigationWorkflow {
    service: Arc<dyn DirectionsService>,
    state: NavigationState,
    /// The winning route, kept while `Active` so the view can render it.
    active_route: Option<Route>,
}

impl NavigationWorkflow {
    pub fn new(service: Arc<dyn DirectionsService>) -> Self {
        Self {
            service,
            state: NavigationState::Idle,
            active_route: None,
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// The route being displayed, present exactly while `Active`.
    pub fn active_route(&self) -> Option<&Route> {
        self.active_route.as_ref()
    }

    /// Request a walking route and settle into `Active` or `Failed`.
    ///
    /// Mode is always walking; callers guarantee `origin` is a known
    /// position (the view disables the trigger while location is loading).
    pub async fn start(
        &mut self,
        origin: GeoPosition,
        destination: GeoPosition,
    ) -> &NavigationState {
        if self.state.is_requesting() {
            tracing::debug!("navigation request already in flight, ignoring");
            return &self.state;
        }

        self.state = NavigationState::Requesting;
        self.active_route = None;
        tracing::debug!(%origin, %destination, "requesting walking route");

        match self.service.walking_route(origin, destination).await {
            Ok(routes) => match first_leg_info(&routes) {
                Some((info, route)) => {
                    tracing::debug!(
                        distance = %info.distance_text,
                        duration = %info.duration_text,
                        "route active"
                    );
                    self.active_route = Some(route);
                    self.state = NavigationState::Active(info);
                }
                None => {
                    tracing::debug!("routing service returned no usable leg");
                    self.state = NavigationState::Failed(NO_ROUTE_MESSAGE.to_string());
                }
            },
            Err(err) => {
                tracing::debug!(error = %err, "routing request failed");
                self.state = NavigationState::Failed(NO_ROUTE_MESSAGE.to_string());
            }
        }

        &self.state
    }

    /// Unconditionally return to `Idle`, discarding any route or failure.
    pub fn clear(&mut self) {
        self.state = NavigationState::Idle;
        self.active_route = None;
    }
}

/// Extract the displayed summary from the first leg of the first route.
fn first_leg_info(routes: &[Route]) -> Option<(RouteInfo, Route)> {
    let route = routes.first()?;
    let leg = route.legs.first()?;
    Some((RouteInfo::from_leg(leg), route.clone()))
}
