//! Launch Data
//!
//! The in-memory launch table the dashboard reads from:
//!
//! - **types**: Launch records and the control values that filter them
//! - **loader**: CSV loading and the immutable `LaunchTable`
//! - **error**: Error types
//!
//! The table is loaded exactly once at startup and never mutated afterwards.
//!
//! # Example
//!
//! ```rust,no_run
//! use launch_dash::data::LaunchTable;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let table = LaunchTable::from_path("data/spacex_launch_dash.csv")?;
//!
//!     println!(
//!         "{} launches, payload {}..{} kg",
//!         table.len(),
//!         table.payload_min(),
//!         table.payload_max()
//!     );
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod loader;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;

pub use error::{DataError, DataResult};
pub use loader::LaunchTable;
pub use types::{
    LaunchRecord, Outcome, PayloadRange, SiteSelection, ALL_SITES_LABEL, ALL_SITES_VALUE,
};
