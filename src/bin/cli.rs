//! Launch Dash CLI
//!
//! Offline inspection of the launch dataset and the charts the dashboard
//! would render:
//! - Summarize the dataset
//! - Print the page layout
//! - Compute either chart for given control values
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use launch_dash::config::{generate_default_config, Config, LoggingConfig};
use launch_dash::dashboard::{outcome_distribution, payload_correlation, PageLayout};
use launch_dash::data::{LaunchTable, PayloadRange, SiteSelection, ALL_SITES_VALUE};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "launch-dash-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect the launch dataset and dashboard charts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Launch dataset CSV (overrides config)
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show record count, sites and payload bounds
    Summary,

    /// Print the page layout as JSON
    Layout,

    /// Compute the outcome pie chart
    Outcomes {
        /// Launch site ("ALL" for every site)
        #[arg(short, long, default_value = ALL_SITES_VALUE)]
        site: String,
    },

    /// Compute the payload scatter chart
    Payload {
        /// Launch site ("ALL" for every site)
        #[arg(short, long, default_value = ALL_SITES_VALUE)]
        site: String,
        /// Lower payload bound in kg (default: dataset minimum)
        #[arg(long)]
        low: Option<f64>,
        /// Upper payload bound in kg (default: dataset maximum)
        #[arg(long)]
        high: Option<f64>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match cli.config.clone().or_else(Config::default_path) {
        Some(path) => Config::load_with_env(&path)?,
        None => Config::from_env(),
    };
    config.apply_cli_overrides(cli.data.as_deref(), None, None);

    // Keep stdout clean for JSON output
    launch_dash::logging::init(&LoggingConfig {
        level: "warn".to_string(),
        ..config.logging.clone()
    });

    let data_path = config.data.path.clone();
    let load_table = || {
        LaunchTable::from_path(&data_path)
            .with_context(|| format!("failed to load launch dataset {}", data_path))
    };

    match cli.command {
        Commands::Summary => print_summary(&load_table()?),
        Commands::Layout => {
            let table = load_table()?;
            let layout = PageLayout::build(&table, &config.layout);
            println!("{}", serde_json::to_string_pretty(&layout)?);
        }
        Commands::Outcomes { site } => {
            let table = load_table()?;
            let site = SiteSelection::from_control_value(&site);
            let chart = outcome_distribution(&table, &site);
            println!("{}", serde_json::to_string_pretty(&chart)?);
        }
        Commands::Payload { site, low, high } => {
            let table = load_table()?;
            let site = SiteSelection::from_control_value(&site);
            let range = PayloadRange::new(
                low.unwrap_or_else(|| table.payload_min()),
                high.unwrap_or_else(|| table.payload_max()),
            );
            let chart = payload_correlation(&table, &site, range);
            println!("{}", serde_json::to_string_pretty(&chart)?);
        }
        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("Wrote config to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn print_summary(table: &LaunchTable) {
    println!("Records:   {}", table.len());
    println!("Successes: {}", table.success_count());
    println!(
        "Payload:   {} .. {} kg",
        table.payload_min(),
        table.payload_max()
    );
    println!();
    println!("{:<20} {:>8} {:>10}", "SITE", "LAUNCHES", "SUCCESSES");
    println!("{}", "-".repeat(40));

    for site in table.sites() {
        let launches = table
            .records()
            .iter()
            .filter(|r| r.launch_site == site);
        let (total, successes) = launches.fold((0usize, 0usize), |(total, ok), r| {
            (total + 1, ok + usize::from(r.is_success()))
        });
        println!("{:<20} {:>8} {:>10}", site, total, successes);
    }

    println!();
    println!("Booster categories: {}", table.booster_categories().join(", "));
}
