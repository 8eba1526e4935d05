//! CLI entry point - parses arguments, wires infrastructure, dispatches.

use clap::Parser;

use goyaku_cli::{Cli, Commands, bootstrap, handlers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    let ctx = bootstrap(cli.offline).await?;

    match command {
        Commands::Lookup { words } => {
            handlers::lookup::execute(&ctx, &words).await?;
        }
        Commands::Refresh => {
            handlers::refresh::execute(&ctx).await?;
        }
    }

    Ok(())
}
