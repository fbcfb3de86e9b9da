//! Store error taxonomy

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Failures reported by the record store or the transport underneath it
///
/// There is no retry or backoff; callers surface these as-is.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("store rejected request ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("insert returned no rows")]
    EmptyInsert,
}
