//! Canonical domain types used across all walknav crates.

pub mod geometry;
pub mod route;
pub mod style;

pub use geometry::{overlay_polygon, GeoPosition, OVERLAY_OFFSET_DEG};
pub use route::{NavigationState, Route, RouteInfo, RouteLeg};
pub use style::{default_style_rules, MapStyleRule};

use serde::{Deserialize, Serialize};

/// Severity of a user-facing location notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    /// Degraded but expected condition (fallback position in use).
    Informational,
    /// Something the user should act on.
    Error,
}

/// Snapshot of the location-acquisition lifecycle.
///
/// Created with `loading = true` and no position. Each acquisition settles
/// exactly once, to either a real fix or the configured fallback plus a
/// notice; re-triggering the acquisition restarts the lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationState {
    pub position: Option<GeoPosition>,
    pub notice: Option<String>,
    pub notice_kind: Option<NoticeKind>,
    pub loading: bool,
    pub fallback: bool,
}

impl LocationState {
    /// Initial state, before the first acquisition settles.
    pub fn pending() -> Self {
        Self {
            position: None,
            notice: None,
            notice_kind: None,
            loading: true,
            fallback: false,
        }
    }

    /// True once a position (real or fallback) is available.
    pub fn has_position(&self) -> bool {
        self.position.is_some()
    }
}

impl Default for LocationState {
    fn default() -> Self {
        Self::pending()
    }
}
