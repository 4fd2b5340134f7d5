//! Google Directions API client.

use async_trait::async_trait;
use serde::Deserialize;
use walknav_core::error::DirectionsError;
use walknav_core::models::{GeoPosition, Route, RouteLeg};
use walknav_core::ports::DirectionsService;

const DIRECTIONS_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

/// Walking-route client for the Directions API.
pub struct GoogleDirections {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl GoogleDirections {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(DIRECTIONS_URL, api_key)
    }

    /// Point the client at a different endpoint. Used by tests and by
    /// proxy deployments.
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl DirectionsService for GoogleDirections {
    async fn walking_route(
        &self,
        origin: GeoPosition,
        destination: GeoPosition,
    ) -> Result<Vec<Route>, DirectionsError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("origin", format!("{},{}", origin.lat, origin.lng)),
                ("destination", format!("{},{}", destination.lat, destination.lng)),
                ("mode", "walking".to_string()),
                ("key", self.api_key.clone()),
            ])
            .send()
            .await
            .map_err(|e| DirectionsError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DirectionsError::Transport(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body: DirectionsResponse = response
            .json()
            .await
            .map_err(|e| DirectionsError::Transport(format!("bad response body: {}", e)))?;

        match body.status.as_str() {
            "OK" => Ok(body.routes.into_iter().map(Route::from).collect()),
            "ZERO_RESULTS" => Err(DirectionsError::NoRoute),
            status => {
                let detail = body
                    .error_message
                    .map(|m| format!("{}: {}", status, m))
                    .unwrap_or_else(|| status.to_string());
                tracing::warn!(%detail, "directions request rejected");
                Err(DirectionsError::Service(detail))
            }
        }
    }
}

/// Wire shape of a Directions API response, reduced to the fields walknav
/// consumes.
#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    status: String,
    #[serde(default)]
    routes: Vec<ApiRoute>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiRoute {
    #[serde(default)]
    legs: Vec<ApiLeg>,
    overview_polyline: Option<ApiPolyline>,
}

#[derive(Debug, Deserialize)]
struct ApiLeg {
    distance: ApiText,
    duration: ApiText,
}

#[derive(Debug, Deserialize)]
struct ApiText {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiPolyline {
    points: String,
}

impl From<ApiRoute> for Route {
    fn from(route: ApiRoute) -> Self {
        Route {
            legs: route
                .legs
                .into_iter()
                .map(|leg| RouteLeg {
                    distance_text: leg.distance.text,
                    duration_text: leg.duration.text,
                })
                .collect(),
            overview_polyline: route.overview_polyline.map(|p| p.points),
        }
    }
}
