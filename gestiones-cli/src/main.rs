//! Entry point: configuration, logging, the shared client, and dispatch.

mod api;
mod cli;
mod config;
mod tui;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use once_cell::sync::OnceCell;

use api::ItemsClient;
use cli::{BrowseArgs, Cli, Commands};
use config::Config;
use tui::Runtime;
use tui::apps::viewer::ViewerApp;
use tui::apps::viewer::state::ViewerParams;

static CLIENT: OnceCell<Arc<ItemsClient>> = OnceCell::new();

/// Shared HTTP client, set once at startup. Falls back to default settings
/// when accessed before initialization (tests).
pub fn global_client() -> Arc<ItemsClient> {
    CLIENT
        .get_or_init(|| Arc::new(ItemsClient::with_defaults()))
        .clone()
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::load().context("Failed to load configuration")?;
    log::debug!("service base_url = {}", config.service.base_url);

    let client = ItemsClient::new(&config.service)?;
    let _ = CLIENT.set(Arc::new(client));

    match cli.command.unwrap_or(Commands::Browse(BrowseArgs::default())) {
        Commands::Browse(args) => {
            let params = ViewerParams {
                status: args.status,
                from_date: args.from_date,
                to_date: args.to_date,
            };
            Runtime::run::<ViewerApp>(params).await
        }
        Commands::Fetch(args) => cli::commands::fetch::handle_fetch_command(args).await,
    }
}
