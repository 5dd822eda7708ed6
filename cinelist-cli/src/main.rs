//! Cinelist CLI - Command-line interface
//!
//! Searches titles, shows details, and runs an interactive browsing session
//! with a watchlist that lasts for the session.

mod browse;
mod commands;

use cinelist_core::tracing_setup::init_tracing;
use clap::Parser;

#[derive(Parser)]
#[command(name = "cinelist")]
#[command(about = "Search movies and keep a session watchlist")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: commands::Commands,

    #[command(flatten)]
    options: commands::GlobalOptions,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(
        cli.options.log_level.as_tracing_level(),
        cli.options.logs_dir.as_deref(),
    )?;

    commands::handle_command(cli.command, &cli.options).await
}
