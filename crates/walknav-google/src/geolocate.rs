//! Google Geolocation API client.
//!
//! Stands in for the browser geolocation capability: one asynchronous fix
//! request with a timeout, and a cached-fix allowance so a recent position
//! can be reused without another network round trip.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use std::time::Instant;
use walknav_core::error::LocationError;
use walknav_core::models::GeoPosition;
use walknav_core::ports::{FixOptions, LocationSource};

const GEOLOCATE_URL: &str = "https://www.googleapis.com/geolocation/v1/geolocate";

/// Position-fix client for the Geolocation API.
pub struct GoogleGeolocation {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
    /// Last successful fix, honored while younger than `max_fix_age`.
    cached: Mutex<Option<(GeoPosition, Instant)>>,
}

impl GoogleGeolocation {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(GEOLOCATE_URL, api_key)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
            cached: Mutex::new(None),
        }
    }

    fn cached_fix(&self, opts: &FixOptions) -> Option<GeoPosition> {
        let cached = *self.cached.lock().unwrap_or_else(|e| e.into_inner());
        cached.and_then(|(pos, at)| (at.elapsed() <= opts.max_fix_age).then_some(pos))
    }

    fn store_fix(&self, position: GeoPosition) {
        let mut cached = self.cached.lock().unwrap_or_else(|e| e.into_inner());
        *cached = Some((position, Instant::now()));
    }

    async fn request_fix(&self) -> Result<GeoPosition, LocationError> {
        let response = self
            .client
            .post(&self.base_url)
            .query(&[("key", self.api_key.as_str())])
            .json(&GeolocateRequest { consider_ip: true })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LocationError::Timeout
                } else {
                    LocationError::Other(e.to_string())
                }
            })?;

        match response.status().as_u16() {
            200 => {
                let body: GeolocateResponse = response
                    .json()
                    .await
                    .map_err(|e| LocationError::Other(format!("bad response body: {}", e)))?;
                Ok(GeoPosition::new(body.location.lat, body.location.lng))
            }
            403 => Err(LocationError::PermissionDenied),
            404 => Err(LocationError::Unavailable),
            status => Err(LocationError::Other(format!("HTTP {}", status))),
        }
    }
}

#[async_trait]
impl LocationSource for GoogleGeolocation {
    async fn current_position(
        &self,
        opts: &FixOptions,
    ) -> Result<GeoPosition, LocationError> {
        if let Some(position) = self.cached_fix(opts) {
            tracing::debug!(%position, "returning cached fix");
            return Ok(position);
        }

        let fix = tokio::time::timeout(opts.timeout, self.request_fix())
            .await
            .map_err(|_| LocationError::Timeout)??;

        self.store_fix(fix);
        Ok(fix)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeolocateRequest {
    consider_ip: bool,
}

#[derive(Debug, Deserialize)]
struct GeolocateResponse {
    location: ApiLatLng,
}

#[derive(Debug, Deserialize)]
struct ApiLatLng {
    lat: f64,
    lng: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_deserialize_geolocate_response() {
        let json = r#"{ "location": { "lat": 40.758, "lng": -73.9855 }, "accuracy": 20.0 }"#;
        let parsed: GeolocateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.location.lat, 40.758);
        assert_eq!(parsed.location.lng, -73.9855);
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(GeolocateRequest { consider_ip: true }).unwrap();
        assert_eq!(body, serde_json::json!({ "considerIp": true }));
    }

    #[tokio::test]
    async fn test_fresh_cache_is_returned_without_request() {
        // Unroutable base URL: any actual request would fail, so a
        // successful return proves the cache answered.
        let source = GoogleGeolocation::with_base_url("http://127.0.0.1:1", "key");
        let fix = GeoPosition::new(40.758, -73.9855);
        source.store_fix(fix);

        let opts = FixOptions::default();
        let got = source.current_position(&opts).await.unwrap();
        assert_eq!(got, fix);
    }

    #[tokio::test]
    async fn test_stale_cache_is_not_used() {
        let source = GoogleGeolocation::with_base_url("http://127.0.0.1:1", "key");
        source.store_fix(GeoPosition::new(40.758, -73.9855));

        let opts = FixOptions {
            max_fix_age: Duration::ZERO,
            ..FixOptions::default()
        };
        // Cache is too old, so the unroutable endpoint surfaces as an error.
        assert!(source.current_position(&opts).await.is_err());
    }
}
