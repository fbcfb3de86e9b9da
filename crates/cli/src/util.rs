//! Shared output helpers for CLI commands

use owo_colors::OwoColorize;
use ql_store::Record;

/// Print a record table, one line per row
pub fn print_records(records: &[Record]) {
    if records.is_empty() {
        println!("{}", "No records matched.".dimmed());
        return;
    }

    for record in records {
        let when = record
            .created_at
            .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        println!(
            "{:>6}  {:<24} {:<12} {:<20} {}",
            record.id.to_string().yellow(),
            record.name,
            record.subject.cyan(),
            record.topic,
            when.dimmed(),
        );
    }
    println!();
    println!("{} record(s)", records.len());
}
