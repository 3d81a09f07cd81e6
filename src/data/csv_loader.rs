use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::Record;
use crate::error::{PlotError, PlotResult};

/// Header names of the columns feeding a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvColumns {
    pub x: String,
    pub y: String,
    pub condition: String,
}

impl Default for CsvColumns {
    fn default() -> Self {
        Self {
            x: "area".to_owned(),
            y: "D".to_owned(),
            condition: "condition".to_owned(),
        }
    }
}

/// Unit conversion applied to a parsed measurement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum ValueTransform {
    #[default]
    Identity,
    Log10,
    NaturalLog,
    Scale(f64),
}

impl ValueTransform {
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Identity => value,
            Self::Log10 => value.log10(),
            Self::NaturalLog => value.ln(),
            Self::Scale(factor) => value * factor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CsvLoadOptions {
    #[serde(default)]
    pub columns: CsvColumns,
    #[serde(default)]
    pub x_transform: ValueTransform,
    #[serde(default)]
    pub y_transform: ValueTransform,
}

/// Row accounting for one load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoadReport {
    pub rows_read: usize,
    pub records_kept: usize,
    pub rows_skipped: usize,
}

pub fn load_records_from_path(
    path: impl AsRef<Path>,
    options: &CsvLoadOptions,
) -> PlotResult<(Vec<Record>, LoadReport)> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading records from csv");
    let file = File::open(path)?;
    load_records_from_reader(file, options)
}

/// Reads records from CSV with a header row.
///
/// Rows whose measurements are missing, unparsable or non-finite after the
/// transform are skipped and counted in the report. Missing header columns
/// fail the whole load.
pub fn load_records_from_reader<R: Read>(
    reader: R,
    options: &CsvLoadOptions,
) -> PlotResult<(Vec<Record>, LoadReport)> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let column_index = |name: &str| -> PlotResult<usize> {
        headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| PlotError::InvalidData(format!("csv is missing column `{name}`")))
    };
    let x_index = column_index(&options.columns.x)?;
    let y_index = column_index(&options.columns.y)?;
    let condition_index = column_index(&options.columns.condition)?;

    let mut records = Vec::new();
    let mut report = LoadReport::default();

    for (row, row_result) in csv_reader.records().enumerate() {
        let row_record = row_result?;
        report.rows_read += 1;

        let x = parse_measurement(row_record.get(x_index)).map(|v| options.x_transform.apply(v));
        let y = parse_measurement(row_record.get(y_index)).map(|v| options.y_transform.apply(v));
        let condition = row_record.get(condition_index).unwrap_or_default();

        match (x, y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() && !condition.is_empty() => {
                records.push(Record {
                    x,
                    y,
                    condition: condition.into(),
                });
            }
            _ => {
                trace!(row, "skipping csv row with unusable fields");
                report.rows_skipped += 1;
            }
        }
    }

    report.records_kept = records.len();
    if report.rows_skipped > 0 {
        warn!(
            rows_read = report.rows_read,
            rows_skipped = report.rows_skipped,
            "dropped csv rows with missing or non-finite measurements"
        );
    }
    debug!(records = report.records_kept, "loaded csv records");
    Ok((records, report))
}

fn parse_measurement(field: Option<&str>) -> Option<f64> {
    field
        .filter(|text| !text.is_empty())
        .and_then(|text| text.parse::<f64>().ok())
}
