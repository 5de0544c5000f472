// jokebox - ten random jokes by category, in your terminal
//
// Architecture:
// - Config: TOML file + env overrides, resolved once at startup
// - API client (reqwest): base URL, default headers, JSON bodies
// - Services: JokeService built by the ServiceLocator with the shared
//   client and error channel (MessageContext)
// - TUI (ratatui): category dropdown, fetch button, joke list; fetches run
//   on tokio tasks and report back to the event loop over mpsc
// - Headless: one fetch printed to stdout

mod api;
mod cli;
mod config;
mod headless;
mod logging;
mod message;
mod models;
mod services;
mod tui;

use anyhow::{Context, Result};
use api::ApiClient;
use clap::Parser;
use cli::{Cli, Commands};
use config::{Config, VERSION};
use logging::LogBuffer;
use message::MessageContext;
use services::ServiceLocator;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config management never touches the network or the terminal
    if let Some(Commands::Config {
        show,
        reset,
        edit,
        path,
    }) = cli.command
    {
        return cli::handle_config(show, reset, edit, path);
    }

    // Template on first run helps users discover options
    Config::ensure_config_exists();
    let config = Config::from_env()?;

    let headless = matches!(cli.command, Some(Commands::Fetch { .. })) || !config.enable_tui;

    // In TUI mode logs are captured for the logs panel; headless they go to
    // stderr. The guard keeps the file writer alive until exit.
    let log_buffer = LogBuffer::new();
    let _log_guard = logging::init(&config.logging, !headless, &log_buffer)?;

    let client = ApiClient::new(&config.api).context("Failed to build HTTP client")?;
    let locator = ServiceLocator::new(client, MessageContext::provider());

    tracing::info!("jokebox v{} using {}", VERSION, config.api.base_url);

    match cli.command {
        Some(Commands::Fetch { category, json }) => {
            let category = category.unwrap_or(config.ui.default_category);
            headless::run_fetch_command(&locator, category, json).await
        }
        _ if headless => {
            headless::run_fetch_command(&locator, config.ui.default_category, false).await
        }
        _ => tui::run_tui(config, log_buffer, locator).await,
    }
}
