//! CLI command implementations

use std::path::PathBuf;

use anyhow::{Context, bail};
use cinelist_core::config::PlotMode;
use cinelist_core::tracing_setup::CliLogLevel;
use cinelist_core::{CinelistConfig, MediaId, RuntimeMode};
use cinelist_search::{DetailClient, SearchClient, provider_for};
use cinelist_view::{InteractionController, SearchState, components, text};
use clap::{Args, Subcommand};
use tracing::debug;

/// Options shared by every subcommand.
#[derive(Args, Debug)]
pub struct GlobalOptions {
    /// Metadata API access key (overrides OMDB_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Metadata API base URL (overrides CINELIST_API_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Where metadata comes from (overrides CINELIST_MODE)
    #[arg(long, global = true, value_enum)]
    pub mode: Option<RuntimeMode>,

    /// Plot length requested for details
    #[arg(long, global = true, value_enum)]
    pub plot: Option<PlotMode>,

    /// Start in dark theme
    #[arg(long, global = true)]
    pub dark: bool,

    /// Console log level
    #[arg(long, global = true, value_enum, default_value_t = CliLogLevel::Warn)]
    pub log_level: CliLogLevel,

    /// Also write a full trace log to this directory
    #[arg(long, global = true)]
    pub logs_dir: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search titles and print the result cards
    Search {
        /// Title text to search for
        query: String,
        /// Print the results container as HTML instead of text
        #[arg(long)]
        html: bool,
    },
    /// Show plot, rating, and cast for one title
    Details {
        /// Title identifier, e.g. tt0133093
        id: String,
    },
    /// Interactive session with expandable results and a watchlist
    Browse,
}

/// Handle the CLI command
///
/// # Errors
/// - Invalid configuration (missing key in production, bad base URL)
/// - Search or lookup failures for the one-shot commands
/// - Terminal I/O failures in the interactive session
pub async fn handle_command(command: Commands, options: &GlobalOptions) -> anyhow::Result<()> {
    let config = build_config(options);
    debug!(mode = %config.mode, base_url = %config.api.base_url, "Configuration loaded");

    let provider = provider_for(&config).map_err(|e| anyhow::anyhow!(e.user_message()))?;
    let search_client = SearchClient::new(provider.clone());
    let detail_client = DetailClient::new(provider);

    match command {
        Commands::Search { query, html } => {
            let controller = InteractionController::new(search_client, detail_client, &config.display);
            search_once(controller, &config, &query, html).await
        }
        Commands::Details { id } => show_details(&detail_client, &id).await,
        Commands::Browse => {
            let controller = InteractionController::new(search_client, detail_client, &config.display);
            crate::browse::run(controller, &config.display)
                .await
                .context("interactive session failed")
        }
    }
}

/// Layers CLI flags over environment overrides over defaults.
fn build_config(options: &GlobalOptions) -> CinelistConfig {
    let mut config = CinelistConfig::from_env();

    if let Some(ref api_key) = options.api_key {
        config.api.api_key = Some(api_key.clone());
    }
    if let Some(ref base_url) = options.base_url {
        config.api.base_url = base_url.clone();
    }
    if let Some(mode) = options.mode {
        config.mode = mode;
    }
    if let Some(plot) = options.plot {
        config.api.plot_mode = plot;
    }
    if options.dark {
        config.display.start_dark = true;
    }

    config
}

/// Runs a single search and prints the cards.
async fn search_once(
    mut controller: InteractionController,
    config: &CinelistConfig,
    query: &str,
    html: bool,
) -> anyhow::Result<()> {
    controller.set_input(query);
    if !controller.search().await {
        println!("Nothing to search for.");
        return Ok(());
    }

    if let SearchState::Error { message } = controller.state() {
        bail!("{message}");
    }

    let placeholder = config.display.poster_placeholder_url.as_str();
    if html {
        println!("{}", components::results_container(controller.results(), placeholder));
    } else {
        print!("{}", text::results(controller.results(), placeholder));
    }
    Ok(())
}

/// Fetches and prints details for one title.
async fn show_details(client: &DetailClient, id: &str) -> anyhow::Result<()> {
    let id = id.trim();
    if id.is_empty() {
        bail!("title identifier must not be blank");
    }

    match client.fetch_details(&MediaId::new(id)).await {
        Ok(details) => {
            println!("Plot: {}", details.plot);
            println!("Rating: {}", details.rating);
            println!("Actors: {}", details.actors);
            Ok(())
        }
        Err(e) => bail!("{}", e.user_message()),
    }
}
