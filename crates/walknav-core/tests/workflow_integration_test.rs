//! End-to-end workflow tests: location acquisition feeding the navigation
//! request, the way the view layer drives both.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use walknav_core::config::{CliConfigOverrides, MapConfigLoader};
use walknav_core::error::{DirectionsError, LocationError};
use walknav_core::models::{GeoPosition, NavigationState, Route, RouteLeg};
use walknav_core::ports::{DirectionsService, FixOptions, LocationSource};
use walknav_core::workflow::{
    LocationProvider, MapViewport, NavigationWorkflow, NO_ROUTE_MESSAGE,
};

struct FailingThenFixedSource {
    calls: AtomicUsize,
}

#[async_trait]
impl LocationSource for FailingThenFixedSource {
    async fn current_position(
        &self,
        _opts: &FixOptions,
    ) -> Result<GeoPosition, LocationError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            Err(LocationError::PermissionDenied)
        } else {
            Ok(GeoPosition::new(40.7306, -73.9352))
        }
    }
}

struct CountingDirections {
    calls: AtomicUsize,
}

#[async_trait]
impl DirectionsService for CountingDirections {
    async fn walking_route(
        &self,
        _origin: GeoPosition,
        _destination: GeoPosition,
    ) -> Result<Vec<Route>, DirectionsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![Route {
            legs: vec![RouteLeg {
                distance_text: "1.2 km".to_string(),
                duration_text: "15 mins".to_string(),
            }],
            overview_polyline: None,
        }])
    }
}

fn config() -> walknav_core::config::MapConfig {
    let mut loader = MapConfigLoader::with_defaults();
    loader.update_from_cli(CliConfigOverrides {
        api_key: Some("test-key".to_string()),
        pin_lat: None,
        pin_lng: None,
    });
    loader.resolve().unwrap()
}

#[tokio::test]
async fn test_fallback_then_retry_then_route() {
    let config = config();
    let mut provider = LocationProvider::new(
        Arc::new(FailingThenFixedSource {
            calls: AtomicUsize::new(0),
        }),
        &config,
    );

    // First acquisition degrades to the fallback with a notice.
    let state = provider.acquire().await;
    assert!(state.fallback);
    assert_eq!(state.position, Some(config.default_user_location));
    assert_eq!(state.notice.as_deref(), Some("Location permission denied"));

    // "Try again" recovers the real fix and drops the notice.
    let state = provider.acquire().await.clone();
    assert!(!state.fallback);
    assert!(state.notice.is_none());

    // The recovered position feeds the navigation request.
    let directions = Arc::new(CountingDirections {
        calls: AtomicUsize::new(0),
    });
    let mut nav = NavigationWorkflow::new(directions.clone());
    let nav_state = nav
        .start(state.position.unwrap(), config.pinned_location)
        .await;

    match nav_state {
        NavigationState::Active(info) => {
            assert_eq!(info.distance_text, "1.2 km");
            assert_eq!(info.duration_text, "15 mins");
        }
        other => panic!("expected Active, got {:?}", other),
    }
    assert_eq!(directions.calls.load(Ordering::SeqCst), 1);

    // Clearing returns to Idle and a second run works from scratch.
    nav.clear();
    assert_eq!(*nav.state(), NavigationState::Idle);
    nav.start(state.position.unwrap(), config.pinned_location)
        .await;
    assert!(matches!(nav.state(), NavigationState::Active(_)));
    assert_eq!(directions.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_failed_route_message_is_fixed() {
    struct NoRouteDirections;

    #[async_trait]
    impl DirectionsService for NoRouteDirections {
        async fn walking_route(
            &self,
            _origin: GeoPosition,
            _destination: GeoPosition,
        ) -> Result<Vec<Route>, DirectionsError> {
            Err(DirectionsError::NoRoute)
        }
    }

    let mut nav = NavigationWorkflow::new(Arc::new(NoRouteDirections));
    let state = nav
        .start(
            GeoPosition::new(40.7580, -73.9855),
            GeoPosition::new(40.7128, -74.0060),
        )
        .await;

    assert_eq!(
        *state,
        NavigationState::Failed(NO_ROUTE_MESSAGE.to_string())
    );
}

#[tokio::test]
async fn test_viewport_follows_workflow_positions() {
    let config = config();
    let mut viewport = MapViewport::new(&config);
    assert_eq!(viewport.center(), config.pinned_location);

    let user = GeoPosition::new(40.7306, -73.9352);
    viewport.center_on_user(user);
    assert_eq!(viewport.center(), user);
    assert_eq!(viewport.zoom(), 15);

    viewport.center_on_destination(config.pinned_location);
    assert_eq!(viewport.center(), config.pinned_location);
    assert_eq!(viewport.zoom(), 16);
}
