//! CLI command implementations

pub mod browse;
pub mod create;
pub mod list;
