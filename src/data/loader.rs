//! Launch table loading
//!
//! Reads the launch dataset CSV exactly once and keeps it in memory together
//! with the payload bounds used to seed the payload slider.

use super::error::{DataError, DataResult};
use super::types::{LaunchRecord, ALL_SITES_LABEL, ALL_SITES_VALUE};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Immutable in-memory launch table
///
/// There are no mutators: once built, the table is shared read-only by
/// every chart handler for the life of the process.
#[derive(Debug, Clone)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
    payload_min: f64,
    payload_max: f64,
}

impl LaunchTable {
    /// Load the table from a CSV file
    pub fn from_path(path: impl AsRef<Path>) -> DataResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let table = Self::from_reader(file)?;

        tracing::info!(
            path = %path.display(),
            records = table.len(),
            sites = table.sites().len(),
            payload_min = table.payload_min,
            payload_max = table.payload_max,
            "Loaded launch dataset"
        );

        Ok(table)
    }

    /// Load the table from any CSV source (header row required)
    pub fn from_reader<R: Read>(reader: R) -> DataResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let mut records = Vec::new();

        for result in reader.records() {
            let row = result?;
            let line = row.position().map(|p| p.line()).unwrap_or(0);

            let record: LaunchRecord = row.deserialize(Some(&headers)).map_err(|e| DataError::Csv {
                line,
                message: e.to_string(),
            })?;

            validate_record(line, &record)?;
            records.push(record);
        }

        Self::build(records)
    }

    /// Build the table from records already in memory
    ///
    /// Applies the same checks as CSV loading; `line` in errors is the
    /// 1-based record index.
    pub fn from_records(records: Vec<LaunchRecord>) -> DataResult<Self> {
        for (idx, record) in records.iter().enumerate() {
            validate_record(idx as u64 + 1, record)?;
        }
        Self::build(records)
    }

    fn build(records: Vec<LaunchRecord>) -> DataResult<Self> {
        if records.is_empty() {
            return Err(DataError::Empty);
        }

        let payload_min = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::INFINITY, f64::min);
        let payload_max = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::NEG_INFINITY, f64::max);

        Ok(Self {
            records,
            payload_min,
            payload_max,
        })
    }

    /// All records, in dataset order
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Smallest payload mass in the dataset
    pub fn payload_min(&self) -> f64 {
        self.payload_min
    }

    /// Largest payload mass in the dataset
    pub fn payload_max(&self) -> f64 {
        self.payload_max
    }

    /// Full payload interval `[min, max]`
    pub fn payload_bounds(&self) -> super::PayloadRange {
        super::PayloadRange::new(self.payload_min, self.payload_max)
    }

    /// Distinct launch sites, in order of first appearance
    pub fn sites(&self) -> Vec<&str> {
        distinct(self.records.iter().map(|r| r.launch_site.as_str()))
    }

    /// Distinct booster version categories, in order of first appearance
    pub fn booster_categories(&self) -> Vec<&str> {
        distinct(
            self.records
                .iter()
                .map(|r| r.booster_version_category.as_str()),
        )
    }

    /// Number of successful launches in the table
    pub fn success_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_success()).count()
    }
}

fn validate_record(line: u64, record: &LaunchRecord) -> DataResult<()> {
    if record.launch_site == ALL_SITES_VALUE || record.launch_site == ALL_SITES_LABEL {
        return Err(DataError::ReservedSiteName(record.launch_site.clone()));
    }

    if !record.payload_mass_kg.is_finite() {
        return Err(DataError::InvalidRecord {
            line,
            message: format!(
                "payload mass must be a finite number, got {}",
                record.payload_mass_kg
            ),
        });
    }

    Ok(())
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}
