//! Dashboard
//!
//! Everything between the launch table and the browser:
//!
//! - **layout**: The static page description (controls and graph slots)
//! - **chart**: Chart specifications returned to the browser
//! - **handlers**: The two chart computations
//! - **callbacks**: Control-change dispatch onto the handlers
//!
//! # Flow
//!
//! ```text
//! Startup:      LaunchTable → PageLayout
//! Interaction:  ControlValues → Callback → handler(LaunchTable) → ChartSpec
//! ```

pub mod callbacks;
pub mod chart;
pub mod handlers;
pub mod layout;

pub use callbacks::{dispatch, Callback, CallbackError, CallbackResult, ControlValues};
pub use chart::{ChartSpec, PieChart, PieSlice, ScatterChart, ScatterPoint, ScatterSeries};
pub use handlers::{outcome_distribution, payload_correlation};
pub use layout::{
    CallbackSpec, Component, Dropdown, DropdownOption, Heading, PageLayout, RangeSlider,
    OUTCOME_CHART_ID, PAYLOAD_CHART_ID, PAYLOAD_SLIDER_ID, SITE_DROPDOWN_ID,
};
