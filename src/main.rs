//! Token swap form - terminal front-end
//!
//! Loads the price list, then reads form commands (amount, from, to, flip,
//! swap, ...) from stdin until end of input or `quit`.
use anyhow::Context;
use dotenv::dotenv;
use log::info;
use std::sync::Arc;
use token_swap::{AppConfig, ServiceContainer, SwapPresenter, TerminalRouter, TerminalSwapView};
use tokio::io::BufReader;

/// Application entry point
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging with default level of "info"
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    info!("Starting token swap form v{}", token_swap::VERSION);

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    info!("Price source: {}", config.price_source);

    let services = ServiceContainer::new(config);
    let view = Arc::new(TerminalSwapView::stdout());
    let presenter = Arc::new(services.swap_presenter(view.clone()));

    presenter.load_prices().await?;
    presenter
        .show_usage(&token_swap::commands::register_commands())
        .await?;

    let router = TerminalRouter::new(presenter.clone());
    router.run(BufReader::new(tokio::io::stdin())).await?;

    presenter.shutdown().await;
    info!("Bye");

    Ok(())
}
