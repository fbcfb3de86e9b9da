//! Queryline CLI - ql command

use anyhow::Result;
use clap::{Parser, Subcommand};

mod cmd;
mod config;
mod filters;
mod session;
mod util;

/// Queryline - URL-synchronized record browsing
#[derive(Parser)]
#[command(name = "ql")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive filter session (topic search + subject select)
    Browse {
        /// Starting URL, e.g. "/library?subject=science"
        #[arg(long, default_value = "/library")]
        url: String,
    },
    /// List records matching the given filters
    List {
        /// Subject substring filter
        #[arg(long)]
        subject: Option<String>,
        /// Topic/name substring filter
        #[arg(long)]
        topic: Option<String>,
        /// Page number (1-based)
        #[arg(long, default_value = "1")]
        page: u32,
        /// Rows per page
        #[arg(long, default_value = "10")]
        limit: u32,
    },
    /// Create a record
    Create {
        /// Record name
        #[arg(long)]
        name: String,
        /// Subject
        #[arg(long)]
        subject: String,
        /// Topic
        #[arg(long)]
        topic: String,
        /// Author id to attach
        #[arg(long)]
        author: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Browse { url } => cmd::browse::run(&url).await,
        Commands::List {
            subject,
            topic,
            page,
            limit,
        } => cmd::list::run(subject, topic, page, limit).await,
        Commands::Create {
            name,
            subject,
            topic,
            author,
        } => cmd::create::run(name, subject, topic, &author).await,
    }
}
