//! Port trait definitions
//!
//! These traits define the interfaces that adapters must implement. The two
//! external capabilities (position fixes and route computation) are only
//! ever reached through them, which is also what makes the workflows
//! testable with scripted doubles.

use crate::error::{DirectionsError, LocationError};
use crate::models::{GeoPosition, Route};
use async_trait::async_trait;
use std::time::Duration;

/// Options for a single position-fix request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixOptions {
    /// Give up on the fix after this long.
    pub timeout: Duration,
    /// A cached fix younger than this may be returned without a fresh one.
    pub max_fix_age: Duration,
    /// Prefer a high-accuracy fix when the source supports the distinction.
    pub high_accuracy: bool,
}

impl Default for FixOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            max_fix_age: Duration::from_secs(300),
            high_accuracy: true,
        }
    }
}

/// Port for obtaining the user's current position.
#[async_trait]
pub trait LocationSource: Send + Sync {
    /// Whether the capability exists at all in this environment. When this
    /// returns false the caller must not invoke [`current_position`].
    ///
    /// [`current_position`]: LocationSource::current_position
    fn is_supported(&self) -> bool {
        true
    }

    /// Request a single position fix.
    async fn current_position(
        &self,
        opts: &FixOptions,
    ) -> std::result::Result<GeoPosition, LocationError>;
}

/// Port for computing a walking route between two coordinates.
///
/// Walknav implements no pathfinding of its own; routing is delegated
/// entirely to implementations of this trait.
#[async_trait]
pub trait DirectionsService: Send + Sync {
    /// Compute walking routes from `origin` to `destination`, ordered by
    /// preference. An empty vector is a valid "no route" answer.
    async fn walking_route(
        &self,
        origin: GeoPosition,
        destination: GeoPosition,
    ) -> std::result::Result<Vec<Route>, DirectionsError>;
}
