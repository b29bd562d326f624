//! Sheet writer factory
//!
//! This module creates the writer selected by the export configuration.

use super::csv_dir::CsvDirectoryWriter;
use super::json_file::JsonBundleWriter;
use super::traits::SheetWriter;
use super::OutputFormat;
use crate::config::ExportConfig;
use crate::domain::Result;
use std::path::Path;
use std::str::FromStr;

/// Create a sheet writer based on the export configuration
///
/// # Arguments
///
/// * `config` - Export settings (format, delimiter, output directory)
/// * `output_dir` - Overrides `config.output_dir` when set
///
/// # Errors
///
/// Returns an error if the configured format or delimiter is invalid
pub fn create_writer(
    config: &ExportConfig,
    output_dir: Option<&Path>,
) -> Result<Box<dyn SheetWriter>> {
    let dir = output_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.output_dir.clone().into());

    match OutputFormat::from_str(&config.format)? {
        OutputFormat::Csv => {
            tracing::debug!(output_dir = %dir.display(), "Creating CSV writer");
            let delimiter = config.delimiter_byte()?;
            Ok(Box::new(CsvDirectoryWriter::new(dir).with_delimiter(delimiter)))
        }
        OutputFormat::Json => {
            tracing::debug!(output_dir = %dir.display(), "Creating JSON writer");
            Ok(Box::new(JsonBundleWriter::new(dir)))
        }
    }
}
