//! Callback dispatch
//!
//! Maps a graph id plus the current control values onto the handler that
//! recomputes that graph. This is the whole of the event wiring: the
//! browser reports a control change, we run the matching handler.

use serde_json::Value;
use thiserror::Error;

use super::chart::ChartSpec;
use super::handlers::{outcome_distribution, payload_correlation};
use super::layout::{OUTCOME_CHART_ID, PAYLOAD_CHART_ID, PAYLOAD_SLIDER_ID, SITE_DROPDOWN_ID};
use crate::data::{LaunchTable, PayloadRange, SiteSelection};

/// Errors in a callback request's shape
///
/// Empty or contradictory filters are not errors; they yield empty charts.
#[derive(Error, Debug)]
pub enum CallbackError {
    /// No callback produces this output
    #[error("Unknown callback output: {0}")]
    UnknownOutput(String),

    /// A required control value was not supplied
    #[error("Missing input: {0}")]
    MissingInput(&'static str),

    /// A control value had the wrong shape
    #[error("Invalid value for {id}: {reason}")]
    InvalidInput { id: String, reason: String },
}

/// Result type for callback dispatch
pub type CallbackResult<T> = Result<T, CallbackError>;

/// The dashboard's reactive callbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Callback {
    /// Site dropdown → outcome pie
    OutcomeDistribution,
    /// Site dropdown + payload slider → payload scatter
    PayloadCorrelation,
}

impl Callback {
    pub fn all() -> &'static [Callback] {
        &[Callback::OutcomeDistribution, Callback::PayloadCorrelation]
    }

    /// Find the callback that renders a graph id
    pub fn for_output(output: &str) -> CallbackResult<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|cb| cb.output_id() == output)
            .ok_or_else(|| CallbackError::UnknownOutput(output.to_string()))
    }

    pub fn output_id(self) -> &'static str {
        match self {
            Callback::OutcomeDistribution => OUTCOME_CHART_ID,
            Callback::PayloadCorrelation => PAYLOAD_CHART_ID,
        }
    }

    pub fn input_ids(self) -> &'static [&'static str] {
        match self {
            Callback::OutcomeDistribution => &[SITE_DROPDOWN_ID],
            Callback::PayloadCorrelation => &[SITE_DROPDOWN_ID, PAYLOAD_SLIDER_ID],
        }
    }
}

/// Current values of the page controls, as reported by the browser
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlValues {
    pub site: Option<SiteSelection>,
    pub payload_range: Option<PayloadRange>,
}

impl ControlValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set site selection
    pub fn site(mut self, site: SiteSelection) -> Self {
        self.site = Some(site);
        self
    }

    /// Builder: set payload range
    pub fn payload_range(mut self, range: PayloadRange) -> Self {
        self.payload_range = Some(range);
        self
    }

    /// Decode a control value by component id
    ///
    /// Unknown ids are ignored so the browser can send its full control
    /// state with every request.
    pub fn set(&mut self, id: &str, value: &Value) -> CallbackResult<()> {
        match id {
            SITE_DROPDOWN_ID => {
                let site = value.as_str().ok_or_else(|| CallbackError::InvalidInput {
                    id: id.to_string(),
                    reason: "expected a string".to_string(),
                })?;
                self.site = Some(SiteSelection::from_control_value(site));
            }
            PAYLOAD_SLIDER_ID => {
                let range: PayloadRange = serde_json::from_value(value.clone()).map_err(|e| {
                    CallbackError::InvalidInput {
                        id: id.to_string(),
                        reason: format!("expected [low, high]: {}", e),
                    }
                })?;
                self.payload_range = Some(range);
            }
            other => {
                tracing::debug!(id = other, "Ignoring value for unknown control");
            }
        }
        Ok(())
    }

    fn require_site(&self) -> CallbackResult<&SiteSelection> {
        self.site
            .as_ref()
            .ok_or(CallbackError::MissingInput(SITE_DROPDOWN_ID))
    }

    fn require_payload_range(&self) -> CallbackResult<PayloadRange> {
        self.payload_range
            .ok_or(CallbackError::MissingInput(PAYLOAD_SLIDER_ID))
    }
}

/// Run a callback against the table
pub fn dispatch(
    table: &LaunchTable,
    callback: Callback,
    controls: &ControlValues,
) -> CallbackResult<ChartSpec> {
    match callback {
        Callback::OutcomeDistribution => {
            let site = controls.require_site()?;
            Ok(outcome_distribution(table, site))
        }
        Callback::PayloadCorrelation => {
            let site = controls.require_site()?;
            let range = controls.require_payload_range()?;
            Ok(payload_correlation(table, site, range))
        }
    }
}
