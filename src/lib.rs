//! # Launch Dash
//!
//! A single-page interactive dashboard over a static table of launch records.
//!
//! ## Features
//!
//! - **Load once**: The launch CSV is read at startup into an immutable table
//! - **Site selector**: Dropdown of every launch site plus "All Sites"
//! - **Payload slider**: Range control seeded from the data's payload bounds
//! - **Two charts**: Outcome pie and payload-vs-outcome scatter, recomputed
//!   on every control change
//!
//! ## Modules
//!
//! - [`data`]: Launch records and the in-memory table
//! - [`dashboard`]: Page layout, chart specifications and chart handlers
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use launch_dash::dashboard::{outcome_distribution, payload_correlation};
//! use launch_dash::data::{LaunchTable, SiteSelection};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let table = LaunchTable::from_path("data/spacex_launch_dash.csv")?;
//!
//!     // Successful launches per site
//!     let pie = outcome_distribution(&table, &SiteSelection::AllSites);
//!     println!("{}", pie.title());
//!
//!     // Every launch, payload against outcome
//!     let scatter = payload_correlation(&table, &SiteSelection::AllSites, table.payload_bounds());
//!     println!("{}", serde_json::to_string_pretty(&scatter)?);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod logging;

// Re-export top-level types for convenience
pub use data::{
    DataError, DataResult, LaunchRecord, LaunchTable, Outcome, PayloadRange, SiteSelection,
};

pub use dashboard::{
    dispatch, outcome_distribution, payload_correlation, Callback, CallbackError, ChartSpec,
    ControlValues, PageLayout,
};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApiConfig, Config, ConfigError, DataConfig, LayoutConfig, LoggingConfig};
