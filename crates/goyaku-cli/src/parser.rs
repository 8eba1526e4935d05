//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface definition for the glossary lookup tool.
#[derive(Parser)]
#[command(name = "goyaku")]
#[command(about = "Look up Japanese meanings of Go terms", version)]
pub struct Cli {
    /// Skip the remote tier and resolve from cache or bundled data only
    #[arg(long = "offline", global = true)]
    pub offline: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
