//! CSV directory writer
//!
//! Writes one CSV file per sheet. Files are numbered so the directory listing
//! keeps bundle order: `01-dashboard-summary.csv`, `02-revenue.csv`, ...

use super::traits::SheetWriter;
use crate::domain::{ExportBundle, QuireError, Result, Row, Sheet};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes each sheet of a bundle to its own CSV file
#[derive(Debug, Clone)]
pub struct CsvDirectoryWriter {
    output_dir: PathBuf,
    delimiter: u8,
}

impl CsvDirectoryWriter {
    /// Creates a comma-separated writer targeting `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            delimiter: b',',
        }
    }

    /// Sets the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Directory files are written to
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// File name used for the sheet at `index` (0-based)
    pub fn file_name(index: usize, sheet: &Sheet) -> String {
        format!("{:02}-{}.csv", index + 1, slugify(&sheet.title))
    }

    fn write_one(&self, path: &Path, sheet: &Sheet) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .from_path(path)?;

        for row in &sheet.preamble {
            writer.write_record(render(row))?;
        }
        writer.write_record(&sheet.headings)?;
        for row in &sheet.rows {
            writer.write_record(render(row))?;
        }

        writer.flush().map_err(|e| {
            QuireError::Io(format!("Failed to flush {}: {}", path.display(), e))
        })?;
        Ok(())
    }
}

impl SheetWriter for CsvDirectoryWriter {
    fn format_name(&self) -> &'static str {
        "csv"
    }

    fn write_bundle(&self, bundle: &ExportBundle) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.output_dir).map_err(|e| {
            QuireError::Io(format!(
                "Failed to create output directory {}: {}",
                self.output_dir.display(),
                e
            ))
        })?;

        let mut written = Vec::with_capacity(bundle.len());
        for (index, sheet) in bundle.iter().enumerate() {
            let path = self.output_dir.join(Self::file_name(index, sheet));
            self.write_one(&path, sheet)?;
            tracing::debug!(path = %path.display(), rows = sheet.row_count(), "Wrote CSV sheet");
            written.push(path);
        }

        tracing::info!(
            output_dir = %self.output_dir.display(),
            files = written.len(),
            "CSV export written"
        );
        Ok(written)
    }
}

fn render(row: &Row) -> Vec<String> {
    row.iter().map(ToString::to_string).collect()
}

/// Lower-case file-name-safe form of a sheet title
fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "sheet".to_string()
    } else {
        slug.to_string()
    }
}
