//! Chart specifications
//!
//! Serializable descriptions of the two dashboard charts. The browser turns
//! these into Plotly traces; nothing here knows about rendering.

use serde::{Deserialize, Serialize};

/// A complete chart handed to the rendering layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ChartSpec {
    Pie(PieChart),
    Scatter(ScatterChart),
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        match self {
            ChartSpec::Pie(pie) => &pie.title,
            ChartSpec::Scatter(scatter) => &scatter.title,
        }
    }

    pub fn as_pie(&self) -> Option<&PieChart> {
        match self {
            ChartSpec::Pie(pie) => Some(pie),
            ChartSpec::Scatter(_) => None,
        }
    }

    pub fn as_scatter(&self) -> Option<&ScatterChart> {
        match self {
            ChartSpec::Scatter(scatter) => Some(scatter),
            ChartSpec::Pie(_) => None,
        }
    }
}

/// Pie chart: one slice per group, sized by record count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    /// Dataset column the slices are grouped by
    pub names_field: String,
    /// What the slice size measures
    pub values_field: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    /// Sum of all slice counts
    pub fn total(&self) -> u64 {
        self.slices.iter().map(|s| s.count).sum()
    }

    /// Count for a slice label, if the slice exists
    pub fn slice(&self, label: &str) -> Option<u64> {
        self.slices
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.count)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub count: u64,
}

/// Scatter chart: one point per record, grouped into colored series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_field: String,
    pub y_field: String,
    /// Dataset column that determines series membership
    pub color_field: String,
    pub series: Vec<ScatterSeries>,
}

impl ScatterChart {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    /// All points across every series
    pub fn points(&self) -> impl Iterator<Item = &ScatterPoint> {
        self.series.iter().flat_map(|s| s.points.iter())
    }

    pub fn series(&self, name: &str) -> Option<&ScatterSeries> {
        self.series.iter().find(|s| s.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSeries {
    pub name: String,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    /// Payload mass (kg)
    pub x: f64,
    /// Outcome class (0 or 1)
    pub y: u8,
}
