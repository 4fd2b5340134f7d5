//! Map viewport state: center and clamped zoom.

use crate::config::MapConfig;
use crate::models::GeoPosition;

/// Zoom used when centering on the user's position.
const USER_FOCUS_ZOOM: u8 = 15;
/// Zoom used when centering on the destination pin.
const PIN_FOCUS_ZOOM: u8 = 16;

/// The visible map window, owned by the view command and forwarded to the
/// external renderer. Zoom never leaves the configured bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct MapViewport {
    center: GeoPosition,
    zoom: u8,
    min_zoom: u8,
    max_zoom: u8,
}

impl MapViewport {
    /// Start centered on the destination at the configured initial zoom.
    pub fn new(config: &MapConfig) -> Self {
        Self {
            center: config.pinned_location,
            zoom: config.initial_zoom.clamp(config.min_zoom, config.max_zoom),
            min_zoom: config.min_zoom,
            max_zoom: config.max_zoom,
        }
    }

    pub fn center(&self) -> GeoPosition {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom.saturating_add(1)).min(self.max_zoom);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom.saturating_sub(1)).max(self.min_zoom);
    }

    /// Pan to a position, adopting the given zoom (clamped).
    pub fn center_on(&mut self, position: GeoPosition, zoom: u8) {
        self.center = position;
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    pub fn center_on_user(&mut self, position: GeoPosition) {
        self.center_on(position, USER_FOCUS_ZOOM);
    }

    pub fn center_on_destination(&mut self, pin: GeoPosition) {
        self.center_on(pin, PIN_FOCUS_ZOOM);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CliConfigOverrides, MapConfigLoader};

    fn viewport() -> MapViewport {
        let mut loader = MapConfigLoader::with_defaults();
        loader.update_from_cli(CliConfigOverrides {
            api_key: Some("test".to_string()),
            ..Default::default()
        });
        MapViewport::new(&loader.resolve().unwrap())
    }

    #[test]
    fn test_initial_viewport() {
        let vp = viewport();
        assert_eq!(vp.center(), GeoPosition::new(40.7128, -74.0060));
        assert_eq!(vp.zoom(), 14);
    }

    #[test]
    fn test_zoom_clamps_at_max() {
        let mut vp = viewport();
        for _ in 0..40 {
            vp.zoom_in();
        }
        assert_eq!(vp.zoom(), 20);
    }

    #[test]
    fn test_zoom_clamps_at_min() {
        let mut vp = viewport();
        for _ in 0..40 {
            vp.zoom_out();
        }
        assert_eq!(vp.zoom(), 3);
    }

    #[test]
    fn test_center_on_user_and_destination() {
        let mut vp = viewport();
        let user = GeoPosition::new(40.7580, -73.9855);

        vp.center_on_user(user);
        assert_eq!(vp.center(), user);
        assert_eq!(vp.zoom(), 15);

        vp.center_on_destination(GeoPosition::new(40.7128, -74.0060));
        assert_eq!(vp.zoom(), 16);
    }

    #[test]
    fn test_center_on_clamps_requested_zoom() {
        let mut vp = viewport();
        vp.center_on(GeoPosition::new(0.0, 0.0), 99);
        assert_eq!(vp.zoom(), 20);
        vp.center_on(GeoPosition::new(0.0, 0.0), 0);
        assert_eq!(vp.zoom(), 3);
    }
}
