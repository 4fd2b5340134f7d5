//! Static Maps URL composer.
//!
//! The delegated "map canvas": given a viewport, markers, the overlay
//! polygon, and an active route, produce the URL of a rendered map image.
//! Pure string assembly, no I/O.

use url::Url;
use walknav_core::models::{GeoPosition, MapStyleRule};

const STATIC_MAP_URL: &str = "https://maps.googleapis.com/maps/api/staticmap";

const DEFAULT_SIZE: (u32, u32) = (640, 640);

// Brand colors carried over from the panel styling: teal overlay/pin,
// navy route, blue user dot.
const OVERLAY_STROKE: &str = "0x0d9488cc";
const OVERLAY_FILL: &str = "0x0d948840";
const ROUTE_STROKE: &str = "0x1e3a5fcc";
const PIN_COLOR: &str = "0x0d9488";
const USER_COLOR: &str = "0x3b82f6";

/// Builder for a static map image URL.
#[derive(Debug, Clone)]
pub struct StaticMapUrl {
    api_key: String,
    center: GeoPosition,
    zoom: u8,
    size: (u32, u32),
    destination: Option<GeoPosition>,
    user: Option<GeoPosition>,
    overlay: Vec<GeoPosition>,
    route_polyline: Option<String>,
    styles: Vec<MapStyleRule>,
}

impl StaticMapUrl {
    pub fn new(api_key: impl Into<String>, center: GeoPosition, zoom: u8) -> Self {
        Self {
            api_key: api_key.into(),
            center,
            zoom,
            size: DEFAULT_SIZE,
            destination: None,
            user: None,
            overlay: Vec::new(),
            route_polyline: None,
            styles: Vec::new(),
        }
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    pub fn destination_marker(mut self, position: GeoPosition) -> Self {
        self.destination = Some(position);
        self
    }

    pub fn user_marker(mut self, position: Option<GeoPosition>) -> Self {
        self.user = position;
        self
    }

    pub fn overlay(mut self, polygon: impl IntoIterator<Item = GeoPosition>) -> Self {
        self.overlay = polygon.into_iter().collect();
        self
    }

    /// Encoded overview polyline of the active route, passed through
    /// verbatim as an `enc:` path.
    pub fn route_polyline(mut self, polyline: Option<String>) -> Self {
        self.route_polyline = polyline;
        self
    }

    pub fn styles(mut self, rules: &[MapStyleRule]) -> Self {
        self.styles = rules.to_vec();
        self
    }

    /// Assemble the final URL. Deterministic for a given builder state.
    pub fn build(&self) -> String {
        let mut url = Url::parse(STATIC_MAP_URL).expect("static map base URL is valid");

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("center", &coord(self.center));
            query.append_pair("zoom", &self.zoom.to_string());
            query.append_pair("size", &format!("{}x{}", self.size.0, self.size.1));

            if let Some(pin) = self.destination {
                query.append_pair(
                    "markers",
                    &format!("color:{}|label:D|{}", PIN_COLOR, coord(pin)),
                );
            }

            if let Some(user) = self.user {
                query.append_pair(
                    "markers",
                    &format!("size:small|color:{}|{}", USER_COLOR, coord(user)),
                );
            }

            if self.overlay.len() >= 3 {
                query.append_pair("path", &polygon_path(&self.overlay));
            }

            if let Some(ref polyline) = self.route_polyline {
                query.append_pair(
                    "path",
                    &format!("color:{}|weight:5|enc:{}", ROUTE_STROKE, polyline),
                );
            }

            for rule in &self.styles {
                query.append_pair("style", &style_param(rule));
            }

            query.append_pair("key", &self.api_key);
        }

        url.to_string()
    }
}

fn coord(position: GeoPosition) -> String {
    format!("{:.6},{:.6}", position.lat, position.lng)
}

/// Closed polygon path with the overlay stroke/fill colors.
fn polygon_path(points: &[GeoPosition]) -> String {
    let mut path = format!(
        "color:{}|weight:2|fillcolor:{}",
        OVERLAY_STROKE, OVERLAY_FILL
    );
    for p in points.iter().chain(points.first()) {
        path.push('|');
        path.push_str(&coord(*p));
    }
    path
}

fn style_param(rule: &MapStyleRule) -> String {
    let mut param = format!("feature:{}|element:{}", rule.feature, rule.element);
    for (key, value) in &rule.stylers {
        param.push('|');
        param.push_str(&format!("{}:{}", key, value));
    }
    param
}
