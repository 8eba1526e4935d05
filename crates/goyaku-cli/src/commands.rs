//! Subcommand definitions.

use clap::Subcommand;

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Look up the Japanese meaning of one or more words
    Lookup {
        /// Words to look up
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Fetch the latest glossary and refresh the local cache
    Refresh,
}
