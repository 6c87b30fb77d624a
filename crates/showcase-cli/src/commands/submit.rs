//! Submit command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use tracing::error;

use showcase_core::{Feed, Submission};
use showcase_http::HttpProjectsApi;

use super::fetch_failed;
use crate::output;

#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Repository URL (e.g., https://github.com/<owner>/<repo>)
    #[arg(long)]
    pub repo_url: String,

    /// Project title
    #[arg(long, default_value = "")]
    pub title: String,

    /// Name to credit the submission to
    #[arg(long, default_value = "")]
    pub submitter: String,

    /// Short description
    #[arg(long, default_value = "")]
    pub description: String,

    /// Output the refreshed list as JSON, one record per line
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: SubmitArgs, api: HttpProjectsApi) -> Result<()> {
    let feed = Feed::new(api);
    let submission = Submission::new(
        &args.repo_url,
        &args.title,
        &args.submitter,
        &args.description,
    );

    eprintln!("{}", "Submitting...".dimmed());

    let submitted = feed
        .submit(&submission)
        .await
        .map_err(|e| fetch_failed("Submit", e))?;

    if !args.json {
        output::submitted(&submitted.receipt);
    }

    // The project is already accepted, so a failed reload is only reported.
    match submitted.refreshed {
        Ok(Some(batch)) => output::projects(&batch.records, false, args.json)?,
        Ok(None) => {}
        Err(e) => {
            error!(error = %e, status = ?e.status, "Reload after submit failed");
            output::fetch_failed(&e);
        }
    }

    Ok(())
}
