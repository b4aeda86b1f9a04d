//! Core data types for the launch dashboard
//!
//! This module defines the fundamental types shared by the loader and the
//! chart handlers:
//! - `LaunchRecord`: One row of the launch dataset
//! - `Outcome`: Binary launch result (the `class` column)
//! - `SiteSelection`: The site dropdown's value
//! - `PayloadRange`: The payload slider's value

use serde::{Deserialize, Serialize};

/// Wire value of the "no site filter" dropdown option.
///
/// Never a valid launch site: the loader rejects datasets that use it.
pub const ALL_SITES_VALUE: &str = "ALL";

/// Display label of the "no site filter" dropdown option.
///
/// Also reserved: a site with this name would be indistinguishable from it.
pub const ALL_SITES_LABEL: &str = "All Sites";

/// A single launch attempt
///
/// Field names follow the dataset's CSV headers; unrelated columns are
/// ignored on load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LaunchRecord {
    /// Sequential flight number, if the dataset carries one
    #[serde(rename = "Flight Number", default)]
    pub flight_number: Option<u32>,
    /// Launch site name
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    /// Payload mass in kilograms
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    /// Mission outcome
    #[serde(rename = "class")]
    pub outcome: Outcome,
    /// Specific booster serial, if present
    #[serde(rename = "Booster Version", default)]
    pub booster_version: Option<String>,
    /// Booster family used to color scatter points
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
}

impl LaunchRecord {
    /// Create a record with the four columns the dashboard reads
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        outcome: Outcome,
        booster_version_category: impl Into<String>,
    ) -> Self {
        Self {
            flight_number: None,
            launch_site: launch_site.into(),
            payload_mass_kg,
            outcome,
            booster_version: None,
            booster_version_category: booster_version_category.into(),
        }
    }

    /// Builder: set flight number
    pub fn flight_number(mut self, number: u32) -> Self {
        self.flight_number = Some(number);
        self
    }

    /// Builder: set booster version
    pub fn booster_version(mut self, version: impl Into<String>) -> Self {
        self.booster_version = Some(version.into());
        self
    }

    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }
}

/// Launch outcome, stored as `class` 0/1 in the dataset
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub enum Outcome {
    /// class = 0
    Failure,
    /// class = 1
    Success,
}

impl Outcome {
    /// Numeric class value as stored in the dataset
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    /// Slice label used in outcome pie charts
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failure => "failure",
            Outcome::Success => "success",
        }
    }
}

impl TryFrom<u8> for Outcome {
    type Error = String;

    fn try_from(class: u8) -> Result<Self, Self::Error> {
        match class {
            0 => Ok(Outcome::Failure),
            1 => Ok(Outcome::Success),
            other => Err(format!("class must be 0 or 1, got {}", other)),
        }
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> Self {
        outcome.class()
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Current value of the site dropdown
///
/// On the wire this is a plain string; `ALL_SITES_VALUE` maps to `AllSites`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    /// No site filter
    #[default]
    AllSites,
    /// Restrict to one launch site
    Site(String),
}

impl SiteSelection {
    /// Parse a dropdown value
    pub fn from_control_value(value: &str) -> Self {
        if value == ALL_SITES_VALUE {
            SiteSelection::AllSites
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    /// Value sent by the dropdown for this selection
    pub fn control_value(&self) -> &str {
        match self {
            SiteSelection::AllSites => ALL_SITES_VALUE,
            SiteSelection::Site(name) => name,
        }
    }

    /// Check whether a record passes this site filter
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::AllSites => true,
            SiteSelection::Site(name) => record.launch_site == *name,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteSelection::AllSites)
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == ALL_SITES_VALUE {
            SiteSelection::AllSites
        } else {
            SiteSelection::Site(value)
        }
    }
}

impl From<SiteSelection> for String {
    fn from(selection: SiteSelection) -> Self {
        match selection {
            SiteSelection::AllSites => ALL_SITES_VALUE.to_string(),
            SiteSelection::Site(name) => name,
        }
    }
}

impl std::fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteSelection::AllSites => write!(f, "all sites"),
            SiteSelection::Site(name) => write!(f, "{}", name),
        }
    }
}

/// Payload slider value (closed interval: [low, high])
///
/// `low > high` is accepted and simply contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct PayloadRange {
    /// Lower bound (inclusive), in kilograms
    pub low: f64,
    /// Upper bound (inclusive), in kilograms
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Check if a payload mass falls within this range
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }

    /// True when no value can satisfy the range
    pub fn is_empty(&self) -> bool {
        self.low > self.high
    }
}

impl From<[f64; 2]> for PayloadRange {
    fn from([low, high]: [f64; 2]) -> Self {
        Self { low, high }
    }
}

impl From<PayloadRange> for [f64; 2] {
    fn from(range: PayloadRange) -> Self {
        [range.low, range.high]
    }
}

impl std::fmt::Display for PayloadRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}] kg", self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_selection_sentinel() {
        assert_eq!(
            SiteSelection::from_control_value("ALL"),
            SiteSelection::AllSites
        );
        assert_eq!(
            SiteSelection::from_control_value("KSC LC-39A"),
            SiteSelection::Site("KSC LC-39A".to_string())
        );
        // Sentinel matching is exact
        assert_eq!(
            SiteSelection::from_control_value("all"),
            SiteSelection::Site("all".to_string())
        );
        assert_eq!(SiteSelection::AllSites.control_value(), ALL_SITES_VALUE);
    }

    #[test]
    fn test_site_selection_matches() {
        let record = LaunchRecord::new("KSC LC-39A", 2490.0, Outcome::Success, "FT");

        assert!(SiteSelection::AllSites.matches(&record));
        assert!(SiteSelection::Site("KSC LC-39A".to_string()).matches(&record));
        assert!(!SiteSelection::Site("CCAFS LC-40".to_string()).matches(&record));
    }

    #[test]
    fn test_site_selection_json() {
        let all: SiteSelection = serde_json::from_str("\"ALL\"").unwrap();
        assert!(all.is_all());

        let site = SiteSelection::Site("VAFB SLC-4E".to_string());
        assert_eq!(serde_json::to_string(&site).unwrap(), "\"VAFB SLC-4E\"");
    }

    #[test]
    fn test_payload_range_inclusive() {
        let range = PayloadRange::new(1000.0, 5000.0);
        assert!(range.contains(1000.0));
        assert!(range.contains(5000.0));
        assert!(range.contains(2500.0));
        assert!(!range.contains(999.9));
        assert!(!range.contains(5000.1));
        assert!(!range.is_empty());
    }

    #[test]
    fn test_payload_range_inverted_is_empty() {
        let range = PayloadRange::new(5000.0, 1000.0);
        assert!(range.is_empty());
        assert!(!range.contains(3000.0));
        assert!(!range.contains(1000.0));
        assert!(!range.contains(5000.0));
    }

    #[test]
    fn test_payload_range_from_array() {
        let range: PayloadRange = serde_json::from_str("[0, 9600.5]").unwrap();
        assert_eq!(range, PayloadRange::new(0.0, 9600.5));
    }

    #[test]
    fn test_outcome_class() {
        assert_eq!(Outcome::try_from(0u8).unwrap(), Outcome::Failure);
        assert_eq!(Outcome::try_from(1u8).unwrap(), Outcome::Success);
        assert!(Outcome::try_from(2u8).is_err());
        assert_eq!(Outcome::Success.class(), 1);
        assert_eq!(Outcome::Failure.to_string(), "failure");
    }

    #[test]
    fn test_record_builder() {
        let record = LaunchRecord::new("CCAFS LC-40", 525.0, Outcome::Success, "v1.0")
            .flight_number(3)
            .booster_version("F9 v1.0  B0005");

        assert_eq!(record.flight_number, Some(3));
        assert_eq!(record.booster_version.as_deref(), Some("F9 v1.0  B0005"));
        assert!(record.is_success());
    }
}
