//! JSON bundle writer
//!
//! Writes the whole bundle as one pretty-printed JSON array of sheets.

use super::traits::SheetWriter;
use crate::domain::{ExportBundle, QuireError, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// File name of the JSON bundle inside the output directory
pub const BUNDLE_FILE_NAME: &str = "bundle.json";

/// Writes a bundle to `<output_dir>/bundle.json`
#[derive(Debug, Clone)]
pub struct JsonBundleWriter {
    output_dir: PathBuf,
}

impl JsonBundleWriter {
    /// Creates a writer targeting `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Directory the bundle file is written to
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl SheetWriter for JsonBundleWriter {
    fn format_name(&self) -> &'static str {
        "json"
    }

    fn write_bundle(&self, bundle: &ExportBundle) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.output_dir)?;

        let path = self.output_dir.join(BUNDLE_FILE_NAME);
        let file = File::create(&path).map_err(|e| {
            QuireError::Io(format!("Failed to create {}: {}", path.display(), e))
        })?;

        let mut out = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut out, bundle)?;
        out.flush()?;

        tracing::info!(path = %path.display(), sheets = bundle.len(), "JSON export written");
        Ok(vec![path])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cell, Sheet};
    use serde_json::{json, Value};
    use tempfile::TempDir;

    #[test]
    fn test_write_bundle_as_json() {
        let dir = TempDir::new().unwrap();
        let writer = JsonBundleWriter::new(dir.path());
        let bundle = ExportBundle::from(vec![Sheet {
            title: "Revenue".to_string(),
            preamble: vec![],
            headings: vec!["Metric".to_string(), "Value".to_string()],
            rows: vec![vec![Cell::from("Revenue"), Cell::Integer(42)]],
        }]);

        let written = writer.write_bundle(&bundle).unwrap();
        assert_eq!(written, vec![dir.path().join(BUNDLE_FILE_NAME)]);

        let value: Value = serde_json::from_str(&fs::read_to_string(&written[0]).unwrap()).unwrap();
        assert_eq!(
            value,
            json!([{
                "title": "Revenue",
                "headings": ["Metric", "Value"],
                "rows": [["Revenue", 42]]
            }])
        );
    }
}
