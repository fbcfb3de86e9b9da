//! Interactive filter session
//!
//! A text input bound to `topic` and a subject select bound to `subject`
//! drive a shared in-memory location; `list` queries the store with filters
//! derived from the current URL state. Filter edits reach the URL only
//! after their 500 ms quiet window, the same way the hosted page behaves.

use crate::config::Config;
use crate::filters::{SubjectSelect, TopicSearch, ALL_SUBJECTS, SUBJECTS};
use crate::session::EnvSession;
use crate::util;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use ql_core::{LocationProvider, SharedLocation};
use ql_store::{RecordFilter, StoreClient};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

pub async fn run(url: &str) -> Result<()> {
    let config = Config::load()?;
    let client = StoreClient::new(&config.store_url, config.api_key, Arc::new(EnvSession))
        .context("Failed to build store client")?;

    let location = SharedLocation::from_url(url);
    let provider: Arc<dyn LocationProvider> = Arc::new(location.clone());

    let mut search = TopicSearch::new(provider.clone());
    let mut subject = SubjectSelect::new(provider.clone());

    println!("{}", "Queryline browse".bold());
    println!("  topic <text>     set the topic search (empty clears)");
    println!("  subject <name>   pick a subject ({} or one of {})", ALL_SUBJECTS, SUBJECTS.join(", "));
    println!("  url              show the current URL");
    println!("  list             fetch page 1 with the URL's filters");
    println!("  quit             exit");
    println!();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (command, rest) = match line.split_once(' ') {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        match command {
            "topic" => search.input(rest),
            "subject" => {
                if !subject.select(rest) {
                    eprintln!(
                        "{} unknown subject '{rest}' (try {} or {})",
                        "error:".red(),
                        ALL_SUBJECTS,
                        SUBJECTS.join(", ")
                    );
                }
            }
            "url" => println!("{}", location.url().cyan()),
            "list" => {
                let filter = RecordFilter::from_params(&provider.params());
                match client.list_records(&filter, 1, 10).await {
                    Ok(records) => util::print_records(&records),
                    Err(e) => eprintln!("{} {e}", "error:".red()),
                }
            }
            "quit" | "exit" => break,
            "" => {}
            other => eprintln!("{} unknown command '{other}'", "error:".red()),
        }
    }

    Ok(())
}
