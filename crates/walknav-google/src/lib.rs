//! Walknav Google - Adapters for the Google Maps web services
//!
//! Implementations of the walknav-core ports on top of the Directions and
//! Geolocation APIs, plus the Static Maps URL composer the view layer uses
//! as its delegated map canvas.

pub mod directions;
pub mod geolocate;
pub mod static_map;

pub use directions::GoogleDirections;
pub use geolocate::GoogleGeolocation;
pub use static_map::StaticMapUrl;
