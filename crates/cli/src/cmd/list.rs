//! One-shot record listing

use crate::config::Config;
use crate::session::EnvSession;
use crate::util;
use anyhow::{Context, Result};
use ql_store::{RecordFilter, StoreClient};
use std::sync::Arc;

pub async fn run(subject: Option<String>, topic: Option<String>, page: u32, limit: u32) -> Result<()> {
    let config = Config::load()?;
    let client = StoreClient::new(&config.store_url, config.api_key, Arc::new(EnvSession))
        .context("Failed to build store client")?;

    let filter = RecordFilter { subject, topic };
    let records = client
        .list_records(&filter, page, limit)
        .await
        .context("Failed to list records")?;

    util::print_records(&records);
    Ok(())
}
