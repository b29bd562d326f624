//! Export file writers
//!
//! - [`CsvDirectoryWriter`] - one CSV file per sheet
//! - [`JsonBundleWriter`] - the whole bundle as one JSON document

pub mod csv_dir;
pub mod factory;
pub mod json_file;
pub mod traits;

pub use csv_dir::CsvDirectoryWriter;
pub use factory::create_writer;
pub use json_file::JsonBundleWriter;
pub use traits::SheetWriter;

use crate::domain::{QuireError, Result};
use std::fmt;
use std::str::FromStr;

/// Output file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One CSV file per sheet
    Csv,
    /// Single JSON document
    Json,
}

impl FromStr for OutputFormat {
    type Err = QuireError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(QuireError::Configuration(format!(
                "Invalid output format: {s}. Expected 'csv' or 'json'"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => f.write_str("csv"),
            Self::Json => f.write_str("json"),
        }
    }
}
