//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use crate::cli::{EXIT_CONFIG_ERROR, EXIT_FATAL, EXIT_SUCCESS};
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "quire.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Quire configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIG_ERROR);
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: quire validate-config");
                println!("  3. Run export: quire export-dashboard --input request.json");
                println!();
                Ok(EXIT_SUCCESS)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(EXIT_FATAL)
            }
        }
    }

    /// Sample configuration with every key at its default
    fn generate_config() -> String {
        r#"# Quire Configuration File
# Dashboard widget data exporter
#
# Every value below is the default. Values may reference environment
# variables with ${VAR_NAME}, and QUIRE_<SECTION>_<KEY> variables override
# any key (for example QUIRE_EXPORT_FORMAT=json).

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

[export]
# Directory export files are written to
output_dir = "exports"

# Output format: "csv" (one file per sheet) or "json" (bundle.json)
format = "csv"

# Rows whose length differs from the headings:
# - pad: pad short rows with empty cells, cut long rows
# - raw: keep rows as they are
row_shape = "pad"

# CSV field delimiter (single character)
csv_delimiter = ","

# Title of the dashboard summary sheet
summary_sheet_title = "Dashboard Summary"

[logging]
# Write JSON logs to files in local_path
local_enabled = false
local_path = "logs"

# Log rotation (daily, hourly or never)
local_rotation = "daily"
"#
        .to_string()
    }
}
