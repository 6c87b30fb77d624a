//! List command implementation.

use std::pin::pin;

use anyhow::Result;
use clap::Args;
use futures_util::StreamExt;

use showcase_core::{Cursor, ProjectsApi, pages_from};
use showcase_http::HttpProjectsApi;

use super::fetch_failed;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Continue from this cursor instead of the first page
    #[arg(long)]
    pub cursor: Option<String>,

    /// Keep fetching until the last page
    #[arg(long)]
    pub all: bool,

    /// Output normalized records as JSON, one per line
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ListArgs, api: HttpProjectsApi) -> Result<()> {
    let start = args.cursor.and_then(Cursor::new);

    if args.all {
        let mut append = start.is_some();
        let mut stream = pin!(pages_from(&api, start));

        while let Some(page) = stream.next().await {
            let page = page.map_err(|e| fetch_failed("List", e))?;
            output::projects(&page.normalized(), append, args.json)?;
            append = true;
        }
        return Ok(());
    }

    let page = api
        .fetch_page(start.as_ref())
        .await
        .map_err(|e| fetch_failed("List", e))?;

    output::projects(&page.normalized(), start.is_some(), args.json)?;

    if let Some(cursor) = &page.cursor {
        output::next_cursor(cursor);
    }

    Ok(())
}
