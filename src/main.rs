//! Launch Dash Server
//!
//! Run with: cargo run --bin launch-dash
//!
//! # Configuration
//!
//! Settings come from (later wins):
//! - Built-in defaults
//! - `--config <file>`, else `~/.config/launch-dash/config.toml` or `./config.toml`
//! - Environment: `LAUNCH_DASH_DATA_PATH`, `LAUNCH_DASH_HOST`, `LAUNCH_DASH_PORT`,
//!   `LAUNCH_DASH_LOG_LEVEL`, `LAUNCH_DASH_LOG_FORMAT`
//! - Command-line flags
//!
//! `RUST_LOG` overrides the configured log level.

use anyhow::Context;
use clap::Parser;
use launch_dash::api::{serve, AppState};
use launch_dash::config::Config;
use launch_dash::dashboard::PageLayout;
use launch_dash::data::LaunchTable;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "launch-dash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve the launch records dashboard")]
struct Args {
    /// Config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Launch dataset CSV
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config_path = args.config.clone().or_else(Config::default_path);
    let mut config = match &config_path {
        Some(path) => Config::load_with_env(path)?,
        None => Config::from_env(),
    };

    config.apply_cli_overrides(args.data.as_deref(), args.host, args.port);

    launch_dash::logging::init(&config.logging);

    tracing::info!("Starting Launch Dash v{}", env!("CARGO_PKG_VERSION"));
    match &config_path {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::info!("Using default config with environment overrides"),
    }

    // A dashboard without data has nothing to serve
    let table = LaunchTable::from_path(&config.data.path)
        .with_context(|| format!("failed to load launch dataset {}", config.data.path))?;
    let table = Arc::new(table);

    let layout = PageLayout::build(&table, &config.layout);
    let state = AppState::new(Arc::clone(&table), layout);

    serve(state, &config.api).await?;

    Ok(())
}
