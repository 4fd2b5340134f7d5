//! Location acquisition with deterministic fallback.

use crate::config::MapConfig;
use crate::error::LocationError;
use crate::models::{GeoPosition, LocationState, NoticeKind};
use crate::ports::{FixOptions, LocationSource};
use std::sync::Arc;

/// Obtains the best-available user position.
///
/// Every acquisition settles to a position: a real fix on success, or the
/// configured fallback plus a user-readable notice on any failure. Failure
/// is never fatal here; callers decide nothing beyond whether to offer a
/// retry.
pub struct LocationProvider {
    source: Arc<dyn LocationSource>,
    options: FixOptions,
    fallback_position: GeoPosition,
    state: LocationState,
}

impl LocationProvider {
    pub fn new(source: Arc<dyn LocationSource>, config: &MapConfig) -> Self {
        Self {
            source,
            options: FixOptions::default(),
            fallback_position: config.default_user_location,
            state: LocationState::pending(),
        }
    }

    /// Current lifecycle snapshot.
    pub fn state(&self) -> &LocationState {
        &self.state
    }

    /// Run one acquisition. Re-invocable on demand ("try again"): each call
    /// resets the loading flag and clears the prior notice before settling.
    pub async fn acquire(&mut self) -> &LocationState {
        self.state.loading = true;
        self.state.notice = None;
        self.state.notice_kind = None;

        if !self.source.is_supported() {
            tracing::debug!("location source not supported, using fallback");
            self.settle_fallback("Location services are not supported on this system");
            return &self.state;
        }

        match self.source.current_position(&self.options).await {
            Ok(position) => {
                tracing::debug!(%position, "position fix acquired");
                self.state = LocationState {
                    position: Some(position),
                    notice: None,
                    notice_kind: None,
                    loading: false,
                    fallback: false,
                };
            }
            Err(err) => {
                tracing::debug!(error = %err, "position fix failed, using fallback");
                self.settle_fallback(notice_for(&err));
            }
        }

        &self.state
    }

    fn settle_fallback(&mut self, notice: &str) {
        self.state = LocationState {
            position: Some(self.fallback_position),
            notice: Some(notice.to_string()),
            notice_kind: Some(NoticeKind::Informational),
            loading: false,
            fallback: true,
        };
    }
}

/// Fixed user-readable text for each failure reason.
fn notice_for(err: &LocationError) -> &'static str {
    match err {
        LocationError::PermissionDenied => "Location permission denied",
        LocationError::Unavailable => "Location information unavailable",
        LocationError::Timeout => "Location request timed out",
        LocationError::Other(_) => "Unable to determine your location",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapConfigLoader;
    use async_trait::async_trait;
    use std::sync::Mutex;

    fn test_config() -> MapConfig {
        let mut loader = MapConfigLoader::with_defaults();
        loader.update_from_cli(crate::config::CliConfigOverrides {
            api_key: Some("test".to_string()),
            ..Default::default()
        });
        loader.resolve().unwrap()
    }

    /// Returns each scripted outcome once, in order.
    struct ScriptedSource {
        supported: bool,
        outcomes: Mutex<Vec<Result<GeoPosition, LocationError>>>,
    }

    impl ScriptedSource {
        fn new(outcomes: Vec<Result<GeoPosition, LocationError>>) -> Self {
            Self {
                supported: true,
                outcomes: Mutex::new(outcomes),
            }
        }

        fn unsupported() -> Self {
            Self {
                supported: false,
                outcomes: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl LocationSource for ScriptedSource {
        fn is_supported(&self) -> bool {
            self.supported
        }

        async fn current_position(
            &self,
            _opts: &FixOptions,
        ) -> Result<GeoPosition, LocationError> {
            self.outcomes.lock().unwrap().remove(0)
        }
    }

    #[tokio::test]
    async fn test_initial_state_is_loading() {
        let provider = LocationProvider::new(
            Arc::new(ScriptedSource::new(vec![])),
            &test_config(),
        );
        assert!(provider.state().loading);
        assert!(provider.state().position.is_none());
    }

    #[tokio::test]
    async fn test_successful_fix() {
        let fix = GeoPosition::new(40.0, -73.0);
        let mut provider = LocationProvider::new(
            Arc::new(ScriptedSource::new(vec![Ok(fix)])),
            &test_config(),
        );

        let state = provider.acquire().await;
        assert_eq!(state.position, Some(fix));
        assert!(!state.loading);
        assert!(!state.fallback);
        assert!(state.notice.is_none());
    }

    #[tokio::test]
    async fn test_every_failure_degrades_to_fallback() {
        let failures = vec![
            (LocationError::PermissionDenied, "Location permission denied"),
            (
                LocationError::Unavailable,
                "Location information unavailable",
            ),
            (LocationError::Timeout, "Location request timed out"),
            (
                LocationError::Other("gps on fire".to_string()),
                "Unable to determine your location",
            ),
        ];

        for (err, expected_notice) in failures {
            let mut provider = LocationProvider::new(
                Arc::new(ScriptedSource::new(vec![Err(err)])),
                &test_config(),
            );

            let state = provider.acquire().await;
            assert_eq!(
                state.position,
                Some(GeoPosition::new(40.7580, -73.9855)),
                "fallback position expected"
            );
            assert!(state.fallback);
            assert!(!state.loading);
            assert_eq!(state.notice.as_deref(), Some(expected_notice));
            assert_eq!(state.notice_kind, Some(NoticeKind::Informational));
        }
    }

    #[tokio::test]
    async fn test_unsupported_source() {
        let mut provider =
            LocationProvider::new(Arc::new(ScriptedSource::unsupported()), &test_config());

        let state = provider.acquire().await;
        assert!(state.fallback);
        assert_eq!(
            state.notice.as_deref(),
            Some("Location services are not supported on this system")
        );
        assert_eq!(state.notice_kind, Some(NoticeKind::Informational));
    }

    #[tokio::test]
    async fn test_retry_clears_notice_and_recovers() {
        let fix = GeoPosition::new(40.1, -73.1);
        let mut provider = LocationProvider::new(
            Arc::new(ScriptedSource::new(vec![
                Err(LocationError::Timeout),
                Ok(fix),
            ])),
            &test_config(),
        );

        let state = provider.acquire().await;
        assert!(state.fallback);
        assert!(state.notice.is_some());

        let state = provider.acquire().await;
        assert_eq!(state.position, Some(fix));
        assert!(!state.fallback);
        assert!(state.notice.is_none());
    }
}
