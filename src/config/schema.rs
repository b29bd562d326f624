//! Configuration schema types
//!
//! This module defines the configuration structure for Quire. Every section
//! and every key is optional; a missing file section takes its defaults.

use crate::core::export::{ExportOptions, SUMMARY_SHEET_TITLE};
use crate::core::sheet::RowShape;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Main Quire configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuireConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl QuireConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory export files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Output format ("csv" or "json")
    #[serde(default = "default_format")]
    pub format: String,

    /// Handling of rows whose length differs from the heading row ("pad" or "raw")
    #[serde(default = "default_row_shape")]
    pub row_shape: String,

    /// CSV field delimiter, a single ASCII character
    #[serde(default = "default_csv_delimiter")]
    pub csv_delimiter: String,

    /// Title of the dashboard summary sheet
    #[serde(default = "default_summary_sheet_title")]
    pub summary_sheet_title: String,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.output_dir.trim().is_empty() {
            return Err("export.output_dir cannot be empty".to_string());
        }

        let valid_formats = ["csv", "json"];
        if !valid_formats.contains(&self.format.as_str()) {
            return Err(format!(
                "Invalid export.format '{}'. Must be one of: {}",
                self.format,
                valid_formats.join(", ")
            ));
        }

        RowShape::from_str(&self.row_shape).map_err(|e| e.to_string())?;
        self.delimiter_byte().map_err(|e| e.to_string())?;

        if self.summary_sheet_title.trim().is_empty() {
            return Err("export.summary_sheet_title cannot be empty".to_string());
        }

        Ok(())
    }

    /// The CSV delimiter as a byte
    ///
    /// # Errors
    ///
    /// Returns a configuration error unless the delimiter is exactly one ASCII character
    pub fn delimiter_byte(&self) -> crate::domain::Result<u8> {
        match self.csv_delimiter.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(crate::domain::QuireError::Configuration(format!(
                "export.csv_delimiter must be a single ASCII character, got '{}'",
                self.csv_delimiter
            ))),
        }
    }

    /// Composer options derived from this section
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `row_shape` is invalid
    pub fn export_options(&self) -> crate::domain::Result<ExportOptions> {
        Ok(ExportOptions {
            row_shape: RowShape::from_str(&self.row_shape)?,
            summary_sheet_title: self.summary_sheet_title.clone(),
        })
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            format: default_format(),
            row_shape: default_row_shape(),
            csv_delimiter: default_csv_delimiter(),
            summary_sheet_title: default_summary_sheet_title(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_output_dir() -> String {
    "exports".to_string()
}

fn default_format() -> String {
    "csv".to_string()
}

fn default_row_shape() -> String {
    RowShape::default().to_string()
}

fn default_csv_delimiter() -> String {
    ",".to_string()
}

fn default_summary_sheet_title() -> String {
    SUMMARY_SHEET_TITLE.to_string()
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
