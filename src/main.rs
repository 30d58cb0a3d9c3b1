//! # Veracity - Terminal News Verifier
//!
//! A terminal client for a news-classification service: paste an article
//! or headline (or point at a file), get a REAL/FAKE verdict with a
//! confidence score, explanatory keywords, and an optional secondary
//! AI opinion.

mod api;
mod app;
mod config;
pub mod constants;
mod input;
mod models;
mod present;
mod ui;
mod utils;

use anyhow::Result;
use clap::Parser;

use config::Config;
use constants::MIN_REQUEST_TIMEOUT_SECS;

/// Veracity - terminal client for a news-classification service
#[derive(Parser, Debug)]
#[command(name = "veracity", version, about = "Check a news passage against a classification service")]
struct Cli {
    /// Base URL of the classification API
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Color theme (default, paper, midnight, or a custom TOML theme name)
    #[arg(long, short = 't')]
    theme: Option<String>,

    /// Network timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Start with the deep-scan toggle enabled
    #[arg(long)]
    deep_scan: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load and apply CLI overrides to config
    let mut config = Config::load();
    if let Some(url) = cli.api_url {
        config.api_base_url = url;
    }
    if let Some(ref theme_name) = cli.theme {
        config.theme = theme_name.clone();
    }
    if let Some(secs) = cli.timeout {
        config.request_timeout_secs = secs.max(MIN_REQUEST_TIMEOUT_SECS);
    }
    if cli.deep_scan {
        config.deep_scan = true;
    }

    // Build and run the application
    let mut app = app::App::new(&config)?;
    app.run().await
}
