//! Page layout
//!
//! Static description of the dashboard page, built once at startup from the
//! loaded table. The browser runtime renders the components in order and
//! uses `callbacks` to know which graph to refresh when a control changes.

use serde::{Deserialize, Serialize};

use super::callbacks::Callback;
use crate::config::LayoutConfig;
use crate::data::{LaunchTable, ALL_SITES_LABEL, ALL_SITES_VALUE};

pub const SITE_DROPDOWN_ID: &str = "site-dropdown";
pub const OUTCOME_CHART_ID: &str = "success-pie-chart";
pub const PAYLOAD_SLIDER_ID: &str = "payload-slider";
pub const PAYLOAD_CHART_ID: &str = "success-payload-scatter-chart";

/// The whole page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    /// Browser tab title
    pub title: String,
    /// Components in render order
    pub components: Vec<Component>,
    /// Control → graph wiring
    pub callbacks: Vec<CallbackSpec>,
}

/// A single page element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Component {
    Heading(Heading),
    Dropdown(Dropdown),
    Break,
    Graph { id: String },
    Paragraph { text: String },
    RangeSlider(RangeSlider),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub text: String,
    pub text_align: String,
    pub color: String,
    pub font_size_px: u32,
}

/// Single-select control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dropdown {
    pub id: String,
    pub options: Vec<DropdownOption>,
    /// Initially selected option value
    pub value: String,
    pub placeholder: String,
    pub searchable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

/// Two-handle numeric range control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeSlider {
    pub id: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Initial `[low, high]`
    pub value: [f64; 2],
}

/// Which control ids trigger a refresh of which graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackSpec {
    pub output: String,
    pub inputs: Vec<String>,
}

impl PageLayout {
    /// Build the page for a loaded table
    pub fn build(table: &LaunchTable, config: &LayoutConfig) -> Self {
        let components = vec![
            Component::Heading(Heading {
                text: config.title.clone(),
                text_align: "center".to_string(),
                color: "#503D36".to_string(),
                font_size_px: 40,
            }),
            Component::Dropdown(site_dropdown(table)),
            Component::Break,
            Component::Graph {
                id: OUTCOME_CHART_ID.to_string(),
            },
            Component::Break,
            Component::Paragraph {
                text: "Payload range (Kg):".to_string(),
            },
            Component::RangeSlider(payload_slider(table, config)),
            Component::Graph {
                id: PAYLOAD_CHART_ID.to_string(),
            },
        ];

        let callbacks = Callback::all()
            .iter()
            .map(|cb| CallbackSpec {
                output: cb.output_id().to_string(),
                inputs: cb.input_ids().iter().map(|id| id.to_string()).collect(),
            })
            .collect();

        let layout = Self {
            title: config.title.clone(),
            components,
            callbacks,
        };

        tracing::info!(
            components = layout.components.len(),
            callbacks = layout.callbacks.len(),
            "Built dashboard layout"
        );

        layout
    }

    pub fn dropdown(&self) -> Option<&Dropdown> {
        self.components.iter().find_map(|c| match c {
            Component::Dropdown(dropdown) => Some(dropdown),
            _ => None,
        })
    }

    pub fn range_slider(&self) -> Option<&RangeSlider> {
        self.components.iter().find_map(|c| match c {
            Component::RangeSlider(slider) => Some(slider),
            _ => None,
        })
    }

    /// Ids of every graph placeholder, in page order
    pub fn graph_ids(&self) -> Vec<&str> {
        self.components
            .iter()
            .filter_map(|c| match c {
                Component::Graph { id } => Some(id.as_str()),
                _ => None,
            })
            .collect()
    }
}

fn site_dropdown(table: &LaunchTable) -> Dropdown {
    let mut options = vec![DropdownOption {
        label: ALL_SITES_LABEL.to_string(),
        value: ALL_SITES_VALUE.to_string(),
    }];
    options.extend(table.sites().into_iter().map(|site| DropdownOption {
        label: site.to_string(),
        value: site.to_string(),
    }));

    Dropdown {
        id: SITE_DROPDOWN_ID.to_string(),
        options,
        value: ALL_SITES_VALUE.to_string(),
        placeholder: "Select a Launch Site here".to_string(),
        searchable: true,
    }
}

fn payload_slider(table: &LaunchTable, config: &LayoutConfig) -> RangeSlider {
    let min = config.slider_min.unwrap_or_else(|| table.payload_min());
    let max = config.slider_max.unwrap_or_else(|| table.payload_max());

    // Configured bounds are kept as-is even when they clip the data.
    if min > table.payload_min() || max < table.payload_max() {
        tracing::warn!(
            slider_min = min,
            slider_max = max,
            payload_min = table.payload_min(),
            payload_max = table.payload_max(),
            "Payload slider bounds do not cover the dataset's payload range"
        );
    }

    RangeSlider {
        id: PAYLOAD_SLIDER_ID.to_string(),
        min,
        max,
        step: config.slider_step,
        value: [table.payload_min(), table.payload_max()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::sample_table;

    #[test]
    fn test_dropdown_options() {
        let table = sample_table();
        let layout = PageLayout::build(&table, &LayoutConfig::default());
        let dropdown = layout.dropdown().unwrap();

        assert_eq!(dropdown.id, SITE_DROPDOWN_ID);
        assert_eq!(dropdown.value, ALL_SITES_VALUE);
        assert_eq!(dropdown.options.len(), table.sites().len() + 1);
        assert_eq!(
            dropdown.options[0],
            DropdownOption {
                label: ALL_SITES_LABEL.to_string(),
                value: ALL_SITES_VALUE.to_string(),
            }
        );

        let values: Vec<&str> = dropdown.options[1..]
            .iter()
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(values, table.sites());
        assert!(dropdown.options[1..]
            .iter()
            .all(|o| o.value != ALL_SITES_VALUE && o.label != ALL_SITES_LABEL));
    }

    #[test]
    fn test_dropdown_labels_unique() {
        let table = sample_table();
        let layout = PageLayout::build(&table, &LayoutConfig::default());
        let labels: Vec<&str> = layout
            .dropdown()
            .unwrap()
            .options
            .iter()
            .map(|o| o.label.as_str())
            .collect();

        for label in &labels {
            assert_eq!(labels.iter().filter(|l| *l == label).count(), 1);
        }
        assert!(!table.sites().contains(&ALL_SITES_LABEL));
    }

    #[test]
    fn test_slider_defaults_to_data_bounds() {
        let table = sample_table();
        let layout = PageLayout::build(&table, &LayoutConfig::default());
        let slider = layout.range_slider().unwrap();

        assert_eq!(slider.id, PAYLOAD_SLIDER_ID);
        assert_eq!(slider.min, 0.0);
        assert_eq!(slider.max, 9600.0);
        assert_eq!(slider.step, 1000.0);
        assert_eq!(slider.value, [0.0, 9600.0]);
    }

    #[test]
    fn test_slider_configured_bounds_keep_data_value() {
        let table = sample_table();
        let config = LayoutConfig {
            slider_min: Some(0.0),
            slider_max: Some(5000.0),
            ..LayoutConfig::default()
        };
        let layout = PageLayout::build(&table, &config);
        let slider = layout.range_slider().unwrap();

        assert_eq!(slider.max, 5000.0);
        // Initial value still spans the data, even past the declared max
        assert_eq!(slider.value, [0.0, 9600.0]);
    }

    #[test]
    fn test_page_structure() {
        let table = sample_table();
        let layout = PageLayout::build(&table, &LayoutConfig::default());

        assert!(matches!(
            &layout.components[0],
            Component::Heading(h) if h.text == "SpaceX Launch Records Dashboard"
        ));
        assert_eq!(layout.graph_ids(), vec![OUTCOME_CHART_ID, PAYLOAD_CHART_ID]);

        let outputs: Vec<&str> = layout.callbacks.iter().map(|c| c.output.as_str()).collect();
        assert_eq!(outputs, vec![OUTCOME_CHART_ID, PAYLOAD_CHART_ID]);
        assert_eq!(layout.callbacks[1].inputs, vec![SITE_DROPDOWN_ID, PAYLOAD_SLIDER_ID]);
    }

    #[test]
    fn test_layout_json_tags() {
        let table = sample_table();
        let layout = PageLayout::build(&table, &LayoutConfig::default());
        let json = serde_json::to_value(&layout).unwrap();

        assert_eq!(json["components"][0]["type"], "heading");
        assert_eq!(json["components"][1]["type"], "dropdown");
        assert_eq!(json["components"][2]["type"], "break");
        assert_eq!(json["components"][3]["type"], "graph");
        assert_eq!(json["components"][3]["id"], OUTCOME_CHART_ID);
        assert_eq!(json["components"][6]["type"], "range_slider");
    }
}
