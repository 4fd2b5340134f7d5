//! Coordinate types and the destination overlay polygon.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A WGS 84 coordinate pair.
///
/// Immutable once produced; location updates replace the value wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPosition {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for GeoPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}

/// Angular half-width of the decorative overlay, roughly 300 m at
/// mid latitudes.
pub const OVERLAY_OFFSET_DEG: f64 = 0.003;

/// Derive the 5-point decorative overlay drawn around the destination.
///
/// Pure function of the center: the points are fixed angular offsets, listed
/// clockwise from the north-west corner.
pub fn overlay_polygon(center: GeoPosition) -> [GeoPosition; 5] {
    let d = OVERLAY_OFFSET_DEG;
    [
        GeoPosition::new(center.lat + d, center.lng - d),
        GeoPosition::new(center.lat + d, center.lng + d),
        GeoPosition::new(center.lat - d * 0.5, center.lng + d * 1.2),
        GeoPosition::new(center.lat - d, center.lng),
        GeoPosition::new(center.lat - d * 0.5, center.lng - d * 1.2),
    ]
}
