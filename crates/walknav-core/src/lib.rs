//! Walknav Core - Domain models, configuration, and navigation workflows
//!
//! This crate contains the core domain logic and port definitions for the
//! walknav system. External capabilities (position fixes, route computation,
//! map rendering) are reached only through the traits in [`ports`].

pub mod config;
pub mod error;
pub mod models;
pub mod ports;
pub mod workflow;

pub use error::{Result, WalknavError};
