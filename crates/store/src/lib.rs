//! Remote record store access for Queryline
//!
//! This crate provides:
//! - Record data structures and list filters
//! - 1-based page to inclusive row-range conversion
//! - A PostgREST-style store client with per-request bearer auth
//! - The store error taxonomy

pub mod client;
pub mod error;
pub mod record;

// Re-exports
pub use client::{StaticToken, StoreClient, TokenProvider};
pub use error::{Result, StoreError};
pub use record::{page_range, CreateRecord, Record, RecordFilter};
