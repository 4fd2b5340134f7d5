//! Route results and the navigation state machine.

use serde::{Deserialize, Serialize};

/// One contiguous travel segment of a computed route, carrying the
/// human-readable distance and duration reported by the routing service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteLeg {
    pub distance_text: String,
    pub duration_text: String,
}

/// A route as returned by the external routing service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub legs: Vec<RouteLeg>,
    /// Encoded polyline of the whole route, when the service provides one.
    /// Consumed verbatim by the static-map composer; never decoded here.
    pub overview_polyline: Option<String>,
}

/// Summary shown while a route is active, taken from the first leg of the
/// first returned route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteInfo {
    pub distance_text: String,
    pub duration_text: String,
}

impl RouteInfo {
    pub fn from_leg(leg: &RouteLeg) -> Self {
        Self {
            distance_text: leg.distance_text.clone(),
            duration_text: leg.duration_text.clone(),
        }
    }
}

/// Lifecycle of a single routing request and its displayed outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationState {
    Idle,
    Requesting,
    Active(RouteInfo),
    Failed(String),
}

impl NavigationState {
    pub fn is_requesting(&self) -> bool {
        matches!(self, NavigationState::Requesting)
    }

    pub fn route_info(&self) -> Option<&RouteInfo> {
        match self {
            NavigationState::Active(info) => Some(info),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            NavigationState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}
