//! Record creation

use crate::config::Config;
use crate::session::EnvSession;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use ql_store::{CreateRecord, StoreClient};
use std::sync::Arc;

pub async fn run(name: String, subject: String, topic: String, author: &str) -> Result<()> {
    let config = Config::load()?;
    let client = StoreClient::new(&config.store_url, config.api_key, Arc::new(EnvSession))
        .context("Failed to build store client")?;

    let fields = CreateRecord {
        name,
        subject,
        topic,
    };
    let record = client
        .create_record(&fields, author)
        .await
        .context("Failed to create record")?;

    println!(
        "{} record {} ({})",
        "Created".green(),
        record.name,
        record.id.to_string().yellow()
    );
    Ok(())
}
