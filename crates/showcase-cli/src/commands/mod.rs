//! Subcommand implementations.

mod browse;
mod list;
mod submit;

use anyhow::Result;
use clap::Subcommand;
use tracing::error;

use showcase_core::FetchError;
use showcase_http::HttpProjectsApi;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List projects, one page or all of them
    List(list::ListArgs),

    /// Page through projects interactively
    Browse(browse::BrowseArgs),

    /// Submit a new project
    Submit(submit::SubmitArgs),
}

pub async fn handle(cmd: Commands, api: HttpProjectsApi) -> Result<()> {
    match cmd {
        Commands::List(args) => list::run(args, api).await,
        Commands::Browse(args) => browse::run(args, api).await,
        Commands::Submit(args) => submit::run(args, api).await,
    }
}

/// Log a fetch failure and turn it into the command's exit error.
///
/// The error is returned without added context so the process reports
/// exactly `Error: <message>`.
pub(crate) fn fetch_failed(action: &str, e: FetchError) -> anyhow::Error {
    error!(error = %e, status = ?e.status, "{action} failed");
    anyhow::Error::new(e)
}
