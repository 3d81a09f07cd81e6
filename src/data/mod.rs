//! Record ingestion: CSV loading and synthetic data generation.

mod csv_loader;
mod synthetic;

pub use csv_loader::{
    CsvColumns, CsvLoadOptions, LoadReport, ValueTransform, load_records_from_path,
    load_records_from_reader,
};
pub use synthetic::{SyntheticCondition, default_synthetic_conditions, generate_records};
