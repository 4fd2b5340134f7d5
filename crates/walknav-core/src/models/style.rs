//! Map styling rules forwarded to the external map renderer.

use serde::{Deserialize, Serialize};

/// One feature/element styling rule, in the shape the mapping service
/// understands (`feature:poi|element:labels|visibility:off`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapStyleRule {
    pub feature: String,
    pub element: String,
    /// `(property, value)` pairs, e.g. `("visibility", "off")`.
    pub stylers: Vec<(String, String)>,
}

impl MapStyleRule {
    pub fn new(feature: &str, element: &str, stylers: &[(&str, &str)]) -> Self {
        Self {
            feature: feature.to_string(),
            element: element.to_string(),
            stylers: stylers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

/// The built-in "cleaner look" style set: POI labels hidden, transit labels
/// simplified, muted water/landscape/road colors.
pub fn default_style_rules() -> Vec<MapStyleRule> {
    vec![
        MapStyleRule::new("poi", "labels", &[("visibility", "off")]),
        MapStyleRule::new("transit", "labels", &[("visibility", "simplified")]),
        MapStyleRule::new("water", "geometry", &[("color", "0xa8d5e5")]),
        MapStyleRule::new("landscape", "geometry", &[("color", "0xf5f5f5")]),
        MapStyleRule::new("road", "geometry", &[("color", "0xffffff")]),
        MapStyleRule::new("road", "geometry.stroke", &[("color", "0xe0e0e0")]),
    ]
}
