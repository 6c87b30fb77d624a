//! showcase - Terminal front end for the project showcase.
//!
//! Lists community-submitted projects page by page and submits new ones.
//! All paging and normalization lives in `showcase-core`; this binary only
//! renders and wires up input.

mod cli;
mod commands;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use showcase_core::ApiUrl;
use showcase_http::HttpProjectsApi;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    let api = ApiUrl::new(&cli.api).context("Invalid API URL")?;
    let api = HttpProjectsApi::new(api);

    commands::handle(cli.command, api).await
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    // Logs go to stderr so stdout stays clean for piping.
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
