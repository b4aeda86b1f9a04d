//! Data Transfer Objects
//!
//! Request and response types for the callback endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dashboard::ChartSpec;

/// A control changed; recompute one graph
#[derive(Debug, Deserialize, Serialize)]
pub struct CallbackRequest {
    /// Graph id to recompute
    pub output: String,
    /// Current values of the callback's input controls
    #[serde(default)]
    pub inputs: Vec<CallbackInput>,
}

/// One control's current value
#[derive(Debug, Deserialize, Serialize)]
pub struct CallbackInput {
    /// Control id
    pub id: String,
    /// Raw control value (string for the dropdown, `[low, high]` for the slider)
    pub value: Value,
}

/// Recomputed graph
#[derive(Debug, Serialize, Deserialize)]
pub struct CallbackResponse {
    /// Graph id the figure belongs to
    pub output: String,
    pub figure: ChartSpec,
}
