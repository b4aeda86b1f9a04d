//! Chart handlers
//!
//! The two reactive computations behind the dashboard charts. Each is a pure
//! function of the launch table and the current control values:
//!
//! ```text
//! Controls → Filter → Group/Count → ChartSpec
//! ```
//!
//! Empty selections are never errors; they produce charts with no slices or
//! no points.

use super::chart::{ChartSpec, PieChart, PieSlice, ScatterChart, ScatterPoint, ScatterSeries};
use crate::data::{LaunchRecord, LaunchTable, Outcome, PayloadRange, SiteSelection};

pub const SITE_FIELD: &str = "Launch Site";
pub const PAYLOAD_FIELD: &str = "Payload Mass (kg)";
pub const CLASS_FIELD: &str = "class";
pub const BOOSTER_CATEGORY_FIELD: &str = "Booster Version Category";
const COUNT_FIELD: &str = "count";

/// Pie chart of launch outcomes for the selected site
///
/// - `AllSites`: successful launches counted per site (sites without a
///   success get no slice)
/// - `Site(s)`: launches at `s` counted per outcome class, largest first
pub fn outcome_distribution(table: &LaunchTable, site: &SiteSelection) -> ChartSpec {
    let pie = match site {
        SiteSelection::AllSites => {
            let successes = table.records().iter().filter(|r| r.is_success());

            PieChart {
                title: "Total Successful Launches by Site".to_string(),
                names_field: SITE_FIELD.to_string(),
                values_field: COUNT_FIELD.to_string(),
                slices: count_by(successes, |r| r.launch_site.as_str()),
            }
        }
        SiteSelection::Site(name) => {
            let at_site = table.records().iter().filter(|r| site.matches(r));

            let mut slices = count_by(at_site, |r| r.outcome.label());
            // value_counts ordering: largest group first, success wins ties
            slices.sort_by(|a, b| {
                b.count
                    .cmp(&a.count)
                    .then_with(|| outcome_rank(&a.label).cmp(&outcome_rank(&b.label)))
            });

            PieChart {
                title: format!("Total Launch Outcomes for site {}", name),
                names_field: CLASS_FIELD.to_string(),
                values_field: COUNT_FIELD.to_string(),
                slices,
            }
        }
    };

    tracing::debug!(
        site = %site,
        slices = pie.slices.len(),
        total = pie.total(),
        "Computed outcome distribution"
    );

    ChartSpec::Pie(pie)
}

/// Scatter chart of payload mass against outcome
///
/// Keeps records whose payload lies in `range` (inclusive) and, unless
/// `site` is `AllSites`, that launched from the selected site. Points are
/// grouped into one series per booster version category.
pub fn payload_correlation(
    table: &LaunchTable,
    site: &SiteSelection,
    range: PayloadRange,
) -> ChartSpec {
    let title = match site {
        SiteSelection::AllSites => {
            "Correlation between Payload and Success for all Sites".to_string()
        }
        SiteSelection::Site(name) => {
            format!("Correlation between Payload and Success for {}", name)
        }
    };

    let mut series: Vec<ScatterSeries> = Vec::new();
    let selected = table
        .records()
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg))
        .filter(|r| site.matches(r));

    for record in selected {
        let point = ScatterPoint {
            x: record.payload_mass_kg,
            y: record.outcome.class(),
        };

        match series
            .iter_mut()
            .find(|s| s.name == record.booster_version_category)
        {
            Some(existing) => existing.points.push(point),
            None => series.push(ScatterSeries {
                name: record.booster_version_category.clone(),
                points: vec![point],
            }),
        }
    }

    let scatter = ScatterChart {
        title,
        x_field: PAYLOAD_FIELD.to_string(),
        y_field: CLASS_FIELD.to_string(),
        color_field: BOOSTER_CATEGORY_FIELD.to_string(),
        series,
    };

    tracing::debug!(
        site = %site,
        range = %range,
        points = scatter.point_count(),
        "Computed payload correlation"
    );

    ChartSpec::Scatter(scatter)
}

/// Count records per key, keeping keys in first-appearance order
fn count_by<'a, I, F>(records: I, key: F) -> Vec<PieSlice>
where
    I: Iterator<Item = &'a LaunchRecord>,
    F: Fn(&'a LaunchRecord) -> &'a str,
{
    let mut slices: Vec<PieSlice> = Vec::new();
    for record in records {
        let label = key(record);
        match slices.iter_mut().find(|s| s.label == label) {
            Some(slice) => slice.count += 1,
            None => slices.push(PieSlice {
                label: label.to_string(),
                count: 1,
            }),
        }
    }
    slices
}

fn outcome_rank(label: &str) -> u8 {
    if label == Outcome::Success.label() {
        0
    } else {
        1
    }
}
