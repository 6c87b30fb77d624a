//! Browse command implementation.
//!
//! Loads the first page, then reads one command per line from stdin:
//! an empty line loads the next page, `r` reloads from the top and `q`
//! (or end of input) quits.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::error;

use showcase_core::{Batch, Feed, FetchError};
use showcase_http::HttpProjectsApi;

use crate::output;

#[derive(Args, Debug)]
pub struct BrowseArgs {
    /// Output normalized records as JSON, one per line
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: BrowseArgs, api: HttpProjectsApi) -> Result<()> {
    let feed = Feed::new(api);
    show(feed.refresh().await, args.json)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        prompt(feed.has_more());

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };

        let result = match line.trim() {
            "" if feed.has_more() => feed.load_more().await,
            "" => continue,
            "r" => feed.refresh().await,
            "q" => break,
            other => {
                output::unknown_command(other);
                continue;
            }
        };

        show(result, args.json)?;
    }

    Ok(())
}

/// Render a load result. Fetch failures are reported, not fatal.
fn show(result: Result<Option<Batch>, FetchError>, as_json: bool) -> Result<()> {
    match result {
        Ok(Some(batch)) => output::projects(&batch.records, batch.append, as_json),
        Ok(None) => Ok(()),
        Err(e) => {
            error!(error = %e, status = ?e.status, "Load failed");
            output::fetch_failed(&e);
            Ok(())
        }
    }
}

fn prompt(has_more: bool) {
    let keys = if has_more {
        "[Enter] more  [r] refresh  [q] quit > "
    } else {
        "[r] refresh  [q] quit > "
    };
    eprint!("{}", keys.dimmed());
}
