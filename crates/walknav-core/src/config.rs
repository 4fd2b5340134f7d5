use crate::error::{Result, WalknavError};
use crate::models::{default_style_rules, GeoPosition, MapStyleRule};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Immutable process-wide map configuration, produced once at startup by
/// [`MapConfigLoader::resolve`] and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct MapConfig {
    /// Credential for the external mapping service.
    pub api_key: String,
    /// The fixed destination pin.
    pub pinned_location: GeoPosition,
    /// Position used when the user's real position cannot be determined.
    pub default_user_location: GeoPosition,
    /// Human-readable label for the fallback position.
    pub default_location_label: String,
    pub initial_zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub style_rules: Vec<MapStyleRule>,
}

/// Layered loader for [`MapConfig`]: defaults, then config file, then
/// environment, then CLI overrides. Only the credential and the pin
/// coordinates are deployment-specific; everything else ships as fixed
/// defaults.
#[derive(Debug, Clone)]
pub struct MapConfigLoader {
    pub api_key: ConfigValue<String>,
    pub pin_lat: ConfigValue<f64>,
    pub pin_lng: ConfigValue<f64>,
}

pub const DEFAULT_PIN: GeoPosition = GeoPosition {
    lat: 40.7128,
    lng: -74.0060,
};

/// Times Square, used when geolocation is unavailable.
pub const DEFAULT_USER_LOCATION: GeoPosition = GeoPosition {
    lat: 40.7580,
    lng: -73.9855,
};

pub const DEFAULT_LOCATION_LABEL: &str = "Times Square, New York";

pub const INITIAL_ZOOM: u8 = 14;
pub const MIN_ZOOM: u8 = 3;
pub const MAX_ZOOM: u8 = 20;

impl MapConfigLoader {
    /// Create a new loader with default values
    pub fn with_defaults() -> Self {
        Self {
            api_key: ConfigValue::new(String::new(), ConfigSource::Default),
            pin_lat: ConfigValue::new(DEFAULT_PIN.lat, ConfigSource::Default),
            pin_lng: ConfigValue::new(DEFAULT_PIN.lng, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| WalknavError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| WalknavError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(api_key) = file_config.api_key {
            self.api_key.update(api_key, ConfigSource::File);
        }

        if let Some(lat) = file_config.pin_lat {
            self.pin_lat.update(lat, ConfigSource::File);
        }

        if let Some(lng) = file_config.pin_lng {
            self.pin_lng.update(lng, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    ///
    /// Non-numeric coordinate values are ignored with a warning, keeping the
    /// lower-precedence value in place.
    pub fn load_from_env(mut self) -> Self {
        if let Ok(api_key) = env::var("WALKNAV_API_KEY") {
            self.api_key.update(api_key, ConfigSource::Environment);
        }

        if let Ok(lat_str) = env::var("WALKNAV_PIN_LAT") {
            match lat_str.parse::<f64>() {
                Ok(lat) => self.pin_lat.update(lat, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid WALKNAV_PIN_LAT value '{}': expected decimal degrees",
                    lat_str
                ),
            }
        }

        if let Ok(lng_str) = env::var("WALKNAV_PIN_LNG") {
            match lng_str.parse::<f64>() {
                Ok(lng) => self.pin_lng.update(lng, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid WALKNAV_PIN_LNG value '{}': expected decimal degrees",
                    lng_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(api_key) = overrides.api_key {
            self.api_key.update(api_key, ConfigSource::Cli);
        }

        if let Some(lat) = overrides.pin_lat {
            self.pin_lat.update(lat, ConfigSource::Cli);
        }

        if let Some(lng) = overrides.pin_lng {
            self.pin_lng.update(lng, ConfigSource::Cli);
        }
    }

    /// Produce the immutable [`MapConfig`].
    ///
    /// A blank API key is a blocking startup error: nothing downstream can
    /// talk to the mapping service without it.
    pub fn resolve(self) -> Result<MapConfig> {
        if self.api_key.value.trim().is_empty() {
            return Err(WalknavError::ConfigMissing {
                key: "api_key".to_string(),
            });
        }

        Ok(MapConfig {
            api_key: self.api_key.value,
            pinned_location: GeoPosition::new(self.pin_lat.value, self.pin_lng.value),
            default_user_location: DEFAULT_USER_LOCATION,
            default_location_label: DEFAULT_LOCATION_LABEL.to_string(),
            initial_zoom: INITIAL_ZOOM,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            style_rules: default_style_rules(),
        })
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        let key_display = if self.api_key.value.is_empty() {
            "(not set)".to_string()
        } else {
            // Never echo the full credential. Truncate by characters, not
            // bytes, so non-ASCII keys cannot split a char boundary.
            let prefix: String = self.api_key.value.chars().take(6).collect();
            format!("{}…", prefix)
        };
        map.insert("api_key".to_string(), (key_display, self.api_key.source));

        map.insert(
            "pin_lat".to_string(),
            (format!("{:.4}", self.pin_lat.value), self.pin_lat.source),
        );

        map.insert(
            "pin_lng".to_string(),
            (format!("{:.4}", self.pin_lng.value), self.pin_lng.source),
        );

        map
    }
}

impl Default for MapConfigLoader {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    api_key: Option<String>,
    pin_lat: Option<f64>,
    pin_lng: Option<f64>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub api_key: Option<String>,
    pub pin_lat: Option<f64>,
    pub pin_lng: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_loader() {
        let loader = MapConfigLoader::with_defaults();
        assert_eq!(loader.pin_lat.value, 40.7128);
        assert_eq!(loader.pin_lat.source, ConfigSource::Default);
        assert_eq!(loader.pin_lng.value, -74.0060);
        assert!(loader.api_key.value.is_empty());
    }

    #[test]
    fn test_config_precedence() {
        let mut value = ConfigValue::new(100, ConfigSource::Default);

        value.update(200, ConfigSource::File);
        assert_eq!(value.value, 200);
        assert_eq!(value.source, ConfigSource::File);

        value.update(300, ConfigSource::Environment);
        assert_eq!(value.value, 300);

        value.update(400, ConfigSource::Cli);
        assert_eq!(value.value, 400);

        // Lower precedence should not override
        value.update(500, ConfigSource::File);
        assert_eq!(value.value, 400);
        assert_eq!(value.source, ConfigSource::Cli);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
api_key = "test-key"
pin_lat = 51.5074
pin_lng = -0.1278
"#
        )
        .unwrap();

        let loader = MapConfigLoader::with_defaults()
            .load_from_file(file.path())
            .unwrap();

        assert_eq!(loader.api_key.value, "test-key");
        assert_eq!(loader.api_key.source, ConfigSource::File);
        assert_eq!(loader.pin_lat.value, 51.5074);
        assert_eq!(loader.pin_lng.value, -0.1278);
    }

    #[test]
    fn test_cli_overrides() {
        let mut loader = MapConfigLoader::with_defaults();

        loader.update_from_cli(CliConfigOverrides {
            api_key: Some("cli-key".to_string()),
            pin_lat: Some(48.8566),
            pin_lng: None,
        });

        assert_eq!(loader.api_key.value, "cli-key");
        assert_eq!(loader.api_key.source, ConfigSource::Cli);
        assert_eq!(loader.pin_lat.value, 48.8566);
        // Untouched value stays at its default
        assert_eq!(loader.pin_lng.source, ConfigSource::Default);
    }

    #[test]
    fn test_resolve_requires_api_key() {
        let loader = MapConfigLoader::with_defaults();
        let err = loader.resolve().unwrap_err();
        assert!(matches!(err, WalknavError::ConfigMissing { ref key } if key == "api_key"));
    }

    #[test]
    fn test_resolve_fills_fixed_defaults() {
        let mut loader = MapConfigLoader::with_defaults();
        loader.update_from_cli(CliConfigOverrides {
            api_key: Some("k".to_string()),
            pin_lat: None,
            pin_lng: None,
        });

        let config = loader.resolve().unwrap();
        assert_eq!(config.pinned_location, DEFAULT_PIN);
        assert_eq!(config.default_user_location, DEFAULT_USER_LOCATION);
        assert_eq!(config.default_location_label, "Times Square, New York");
        assert_eq!(config.initial_zoom, 14);
        assert_eq!(config.min_zoom, 3);
        assert_eq!(config.max_zoom, 20);
        assert_eq!(config.style_rules.len(), 6);
    }

    #[test]
    fn test_inspection_map_redacts_key() {
        let mut loader = MapConfigLoader::with_defaults();
        loader.update_from_cli(CliConfigOverrides {
            api_key: Some("super-secret-key".to_string()),
            pin_lat: None,
            pin_lng: None,
        });

        let map = loader.to_inspection_map();
        let (key_value, key_source) = &map["api_key"];
        assert_eq!(key_value, "super-…");
        assert_eq!(*key_source, ConfigSource::Cli);
        assert!(map.contains_key("pin_lat"));
        assert!(map.contains_key("pin_lng"));
    }

    #[test]
    fn test_inspection_map_redacts_non_ascii_key() {
        let mut loader = MapConfigLoader::with_defaults();
        loader.update_from_cli(CliConfigOverrides {
            api_key: Some("aaaaaé-key".to_string()),
            pin_lat: None,
            pin_lng: None,
        });

        let (key_value, _) = &loader.to_inspection_map()["api_key"];
        assert_eq!(key_value, "aaaaaé…");
    }
}
