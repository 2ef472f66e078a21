mod bot;
mod config;
mod monitoring;
mod notify;
mod orchestrator;
mod registry;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use teloxide::Bot;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use orchestrator::Orchestrator;

#[derive(Parser)]
#[command(
    name = "linkwatch",
    version,
    about = "Telegram bot that watches URLs for availability"
)]
struct Cli {
    /// Path to the TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the check interval from the config file
    #[arg(long)]
    interval_minutes: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_config(cli.config.as_ref()).context("Failed to load config")?;
    if let Some(minutes) = cli.interval_minutes {
        config.check.interval_minutes = minutes;
    }
    anyhow::ensure!(
        config.check.interval_minutes > 0,
        "Check interval must be positive"
    );
    info!("{config}");

    let token =
        std::env::var("TELEGRAM_TOKEN").context("TELEGRAM_TOKEN is not set (env or .env file)")?;
    let bot = Bot::new(token);

    info!("Bot started...");
    Orchestrator::start(config, bot).await
}
