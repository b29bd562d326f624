//! Export command implementations
//!
//! `export-dashboard` and `export-widget` read a JSON request, build the
//! sheets and hand them to the configured writer.

use crate::adapters::writer::{create_writer, OutputFormat};
use crate::cli::{EXIT_CONFIG_ERROR, EXIT_FATAL, EXIT_INPUT_ERROR, EXIT_SUCCESS};
use crate::config::{load_config_or_default, QuireConfig};
use crate::core::export::ExportComposer;
use crate::domain::request::{load_dashboard_request, load_widget_request};
use crate::domain::{ExportBundle, QuireError};
use clap::Args;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

/// Arguments shared by the export commands
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Path to the JSON export request
    #[arg(short, long)]
    pub input: String,

    /// Override the output directory
    #[arg(short, long)]
    pub output: Option<String>,

    /// Override the output format (csv or json)
    #[arg(short, long)]
    pub format: Option<String>,
}

impl ExportArgs {
    /// Execute the export-dashboard command
    pub async fn execute_dashboard(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(input = %self.input, "Starting dashboard export command");

        let config = match self.load_config(config_path) {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };
        let composer = match config.export.export_options() {
            Ok(options) => ExportComposer::new(options),
            Err(e) => return Ok(config_error(&e)),
        };

        let request = match load_dashboard_request(&self.input) {
            Ok(r) => r,
            Err(e) => return Ok(input_error(&e)),
        };

        println!("🚀 Exporting dashboard: {}", request.dashboard.name);
        println!();

        let started = Instant::now();
        let (bundle, summary) = match composer.export_dashboard_with_summary(
            &request.dashboard,
            &request.widgets,
            &request.filters,
        ) {
            Ok(r) => r,
            Err(e) => return Ok(input_error(&e)),
        };

        let files = match self.write(&config, &bundle) {
            Ok(files) => files,
            Err(code) => return Ok(code),
        };
        crate::log_export_complete!(bundle.len(), started.elapsed());

        println!("📊 Export Summary:");
        println!("  Widgets: {}", summary.total_widgets);
        println!("  Successful: {}", summary.successful_widgets);
        println!("  Failed: {}", summary.failed_widgets);
        println!("  Skipped (no data): {}", summary.skipped_empty);
        println!("  Sheets: {}", summary.total_sheets);
        println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
        println!();

        if !summary.failures.is_empty() {
            println!("⚠️  Widgets that failed upstream:");
            for failure in &summary.failures {
                println!(
                    "  - {}: {}",
                    failure.widget_id.as_deref().unwrap_or("?"),
                    failure.message
                );
            }
            println!();
        }

        print_files(&files);
        println!("✅ Export completed!");
        Ok(EXIT_SUCCESS)
    }

    /// Execute the export-widget command
    pub async fn execute_widget(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(input = %self.input, "Starting widget export command");

        let config = match self.load_config(config_path) {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };
        let composer = match config.export.export_options() {
            Ok(options) => ExportComposer::new(options),
            Err(e) => return Ok(config_error(&e)),
        };

        let request = match load_widget_request(&self.input) {
            Ok(r) => r,
            Err(e) => return Ok(input_error(&e)),
        };

        println!("🚀 Exporting widget: {}", request.widget.title);
        println!();

        let started = Instant::now();
        let sheet = match composer.export_widget(&request.widget, &request.result, &request.filters)
        {
            Ok(s) => s,
            Err(e) => return Ok(input_error(&e)),
        };
        let rows = sheet.row_count();
        let bundle = ExportBundle::from(vec![sheet]);

        let files = match self.write(&config, &bundle) {
            Ok(files) => files,
            Err(code) => return Ok(code),
        };
        crate::log_export_complete!(bundle.len(), started.elapsed());

        println!("📊 Rows exported: {rows}");
        println!();
        print_files(&files);
        println!("✅ Export completed!");
        Ok(EXIT_SUCCESS)
    }

    /// Loads the configuration and applies CLI overrides
    fn load_config(&self, config_path: &str) -> Result<QuireConfig, i32> {
        let mut config = load_config_or_default(config_path).map_err(|e| config_error(&e))?;

        if let Some(format) = &self.format {
            let format = OutputFormat::from_str(format).map_err(|e| config_error(&e))?;
            tracing::info!(format = %format, "Overriding output format from CLI");
            config.export.format = format.to_string();
        }

        if let Some(output) = &self.output {
            tracing::info!(output = %output, "Overriding output directory from CLI");
            config.export.output_dir = output.clone();
        }

        Ok(config)
    }

    fn write(&self, config: &QuireConfig, bundle: &ExportBundle) -> Result<Vec<PathBuf>, i32> {
        let writer = create_writer(&config.export, None).map_err(|e| config_error(&e))?;

        writer.write_bundle(bundle).map_err(|e| {
            crate::log_error_with_context!(&e, "Failed to write export files");
            eprintln!("Failed to write export files: {e}");
            EXIT_FATAL
        })
    }
}

fn config_error(err: &QuireError) -> i32 {
    crate::log_error_with_context!(err, "Invalid configuration");
    eprintln!("Configuration error: {err}");
    EXIT_CONFIG_ERROR
}

fn input_error(err: &QuireError) -> i32 {
    crate::log_error_with_context!(err, "Invalid export request");
    eprintln!("Export failed: {err}");
    EXIT_INPUT_ERROR
}

fn print_files(files: &[PathBuf]) {
    println!("📁 Files written:");
    for file in files {
        println!("  {}", file.display());
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const DASHBOARD_REQUEST: &str = r#"{
        "dashboard": {"name": "Sales", "owner_name": "Dana", "created_at": "2024-05-01T09:30:00Z"},
        "widgets": [
            {
                "widget": {"id": "w1", "title": "Revenue", "type": "kpi"},
                "result": {"status": "success", "payload": {"value": 1200, "label": "Revenue"}}
            },
            {
                "widget": {"id": "w2", "title": "Broken", "type": "table"},
                "result": {"status": "error", "message": "timeout"}
            }
        ],
        "filters": {"region": "EU"}
    }"#;

    fn args(dir: &TempDir, input: &Path, format: Option<&str>) -> ExportArgs {
        ExportArgs {
            input: input.to_string_lossy().to_string(),
            output: Some(dir.path().join("out").to_string_lossy().to_string()),
            format: format.map(String::from),
        }
    }

    #[tokio::test]
    async fn test_export_dashboard_writes_csv_files() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("request.json");
        fs::write(&input, DASHBOARD_REQUEST).unwrap();
        let config = dir.path().join("missing.toml");

        let code = args(&dir, &input, None)
            .execute_dashboard(&config.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(code, EXIT_SUCCESS);
        let mut names: Vec<String> = fs::read_dir(dir.path().join("out"))
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        assert_eq!(names, vec!["01-dashboard-summary.csv", "02-revenue.csv"]);
    }

    #[tokio::test]
    async fn test_export_dashboard_missing_input() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("missing.toml");

        let code = args(&dir, &dir.path().join("nope.json"), None)
            .execute_dashboard(&config.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(code, EXIT_INPUT_ERROR);
    }

    #[tokio::test]
    async fn test_export_rejects_unknown_format() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("request.json");
        fs::write(&input, DASHBOARD_REQUEST).unwrap();
        let config = dir.path().join("missing.toml");

        let code = args(&dir, &input, Some("xlsx"))
            .execute_dashboard(&config.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(code, EXIT_CONFIG_ERROR);
    }

    #[tokio::test]
    async fn test_export_widget_as_json() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("widget.json");
        fs::write(
            &input,
            r#"{
                "widget": {"id": "w1", "title": "Revenue", "type": "kpi"},
                "result": {"status": "success", "payload": {"value": 5}},
                "filters": {}
            }"#,
        )
        .unwrap();
        let config = dir.path().join("missing.toml");

        let code = args(&dir, &input, Some("json"))
            .execute_widget(&config.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(code, EXIT_SUCCESS);
        assert!(dir.path().join("out").join("bundle.json").exists());
    }

    #[tokio::test]
    async fn test_export_widget_failure_result() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("widget.json");
        fs::write(
            &input,
            r#"{
                "widget": {"id": "w1", "title": "Revenue", "type": "kpi"},
                "result": {"status": "error", "message": "upstream down"}
            }"#,
        )
        .unwrap();
        let config = dir.path().join("missing.toml");

        let code = args(&dir, &input, None)
            .execute_widget(&config.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(code, EXIT_INPUT_ERROR);
    }
}
