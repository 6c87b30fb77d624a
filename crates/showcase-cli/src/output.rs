//! Terminal rendering of projects and request outcomes.

use anyhow::Result;
use colored::Colorize;

use showcase_core::format::{self, EMPTY_LIST, meta_line};
use showcase_core::{Cursor, DisplayRecord, FetchError, SubmitReceipt};

/// Print one project as a card: title, meta line, description and link.
fn card(record: &DisplayRecord) {
    println!("{}", record.title.bold());

    let meta = meta_line(record);
    if !meta.is_empty() {
        println!("  {}", meta.dimmed());
    }
    if !record.description.is_empty() {
        println!("  {}", record.description);
    }
    if record.has_link() {
        println!("  {}", record.repo_url.cyan());
    }
    println!();
}

/// Print a batch of projects, or the empty-list notice for an empty
/// first page. JSON output is one compact record per line.
pub fn projects(records: &[DisplayRecord], append: bool, as_json: bool) -> Result<()> {
    if records.is_empty() {
        if !append {
            eprintln!("{}", EMPTY_LIST.dimmed());
        }
        return Ok(());
    }

    for record in records {
        if as_json {
            println!("{}", serde_json::to_string(record)?);
        } else {
            card(record);
        }
    }
    Ok(())
}

/// Point at the page after this one.
pub fn next_cursor(cursor: &Cursor) {
    eprintln!();
    eprintln!("{}: {}", "Next cursor".dimmed(), cursor);
}

/// Confirm an accepted submission.
pub fn submitted(receipt: &SubmitReceipt) {
    println!("{} Submitted!", "✓".green());
    if let Some(id) = &receipt.id {
        println!("{}: {}", "id".dimmed(), id);
    }
    if let Some(created) = receipt.created_at.and_then(format::created_at) {
        println!("{}: {}", "created".dimmed(), created);
    }
    println!();
}

/// Report a request that failed without ending the session.
pub fn fetch_failed(e: &FetchError) {
    eprintln!("{} Error: {}", "✗".red(), e);
}

pub fn unknown_command(input: &str) {
    eprintln!("{} Unknown command: {}", "✗".red(), input);
}
