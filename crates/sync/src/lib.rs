//! Debounced query-parameter synchronization
//!
//! This crate mirrors a piece of locally-held string state (a search box, a
//! filter select) into a shared URL location:
//! - One binding per query-string key, each owning a single debounce timer
//! - A new value always supersedes a pending commit, never queues behind it
//! - Commits compare against the *current* location and suppress no-ops
//! - Dropping a binding cancels its pending commit on every exit path

pub mod binding;
pub mod debounce;

// Re-exports
pub use binding::{ParamBinding, DEFAULT_DELAY, DEFAULT_KEY};
pub use debounce::{ParamSync, SyncState};
