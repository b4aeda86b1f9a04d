//! Application State
//!
//! Shared state accessible by all handlers.
//! Everything here is read-only after startup, so it is shared through
//! `Arc` without locks.

use std::sync::Arc;

use crate::dashboard::PageLayout;
use crate::data::LaunchTable;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Launch table loaded at startup
    pub table: Arc<LaunchTable>,
    /// Page layout built from the table
    pub layout: Arc<PageLayout>,
}

impl AppState {
    pub fn new(table: Arc<LaunchTable>, layout: PageLayout) -> Self {
        Self {
            table,
            layout: Arc::new(layout),
        }
    }
}
