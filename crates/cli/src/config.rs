//! Environment-based configuration

use anyhow::{Context, Result};
use std::env;
use tracing::warn;

/// Store connection settings
pub struct Config {
    /// Base URL of the record store, e.g. `https://xyz.example.co`
    pub store_url: String,
    /// Project api key sent with every request
    pub api_key: String,
}

impl Config {
    /// Load from the environment
    ///
    /// `QL_STORE_URL` and `QL_API_KEY` are required; commands that talk to
    /// the store fail up front without them.
    pub fn load() -> Result<Self> {
        Ok(Self {
            store_url: require("QL_STORE_URL")?,
            api_key: require("QL_API_KEY")?,
        })
    }
}

fn require(key: &str) -> Result<String> {
    env::var(key)
        .map_err(|_| {
            warn!("Environment variable {key} not found");
        })
        .ok()
        .filter(|v| !v.is_empty())
        .with_context(|| format!("{key} is not set"))
}
