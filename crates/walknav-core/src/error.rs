//! Error types for walknav

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalknavError {
    // Configuration errors
    #[error("Missing required configuration: {key}")]
    ConfigMissing { key: String },

    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, WalknavError>;

/// Failure reasons for a position fix request.
///
/// Mirrors the categorized failures a geolocation capability reports. None of
/// these are fatal to the caller: the location workflow degrades every
/// variant to the configured fallback position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("permission denied")]
    PermissionDenied,

    #[error("position unavailable")]
    Unavailable,

    #[error("request timed out")]
    Timeout,

    #[error("{0}")]
    Other(String),
}

/// Failure reasons for a route request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectionsError {
    /// The service answered but found no route between the endpoints.
    #[error("no route found")]
    NoRoute,

    /// The service rejected the request (bad key, quota, malformed input).
    #[error("directions service error: {0}")]
    Service(String),

    /// The service could not be reached at all.
    #[error("transport error: {0}")]
    Transport(String),
}
