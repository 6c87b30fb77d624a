//! CLI argument definitions.

use clap::Parser;

use showcase_core::DEFAULT_API_BASE;

use crate::commands::Commands;

/// Browse and submit community projects.
#[derive(Parser, Debug)]
#[command(name = "showcase")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Showcase API base URL
    #[arg(long, global = true, env = "SHOWCASE_API", default_value = DEFAULT_API_BASE)]
    pub api: String,

    #[command(subcommand)]
    pub command: Commands,
}
