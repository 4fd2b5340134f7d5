//! Workflow controllers
//!
//! The three stateful pieces of the system: location acquisition,
//! the navigation request lifecycle, and the map viewport. Each owns its
//! state exclusively; the view layer only reads snapshots.

mod location;
mod navigation;
mod viewport;

pub use location::LocationProvider;
pub use navigation::{NavigationWorkflow, NO_ROUTE_MESSAGE};
pub use viewport::MapViewport;
