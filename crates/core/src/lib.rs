//! Location model for Queryline
//!
//! This crate provides:
//! - Ordered query parameter mapping with form-urlencoded serialization
//! - Location snapshots (path + params)
//! - The `LocationProvider` seam the synchronizer commits through
//! - An in-memory, atomically-replaced location for hosts and tests

pub mod location;
pub mod params;

// Re-exports
pub use location::{Location, LocationProvider, SharedLocation};
pub use params::QueryParams;
