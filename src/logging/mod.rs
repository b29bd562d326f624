//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Human-readable console output
//! - Configurable log levels
//! - JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use quire::logging::init_logging;
//! use quire::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of an export operation
///
/// # Example
///
/// ```no_run
/// use quire::log_export_start;
///
/// log_export_start!("dashboard", "Sales Overview");
/// ```
#[macro_export]
macro_rules! log_export_start {
    ($kind:expr, $name:expr) => {
        tracing::info!(kind = $kind, name = %$name, "Starting export");
    };
}

/// Log the completion of an export operation
///
/// # Example
///
/// ```no_run
/// use quire::log_export_complete;
/// use std::time::Duration;
///
/// log_export_complete!(4, Duration::from_millis(12));
/// ```
#[macro_export]
macro_rules! log_export_complete {
    ($sheets:expr, $duration:expr) => {
        tracing::info!(
            sheets = $sheets,
            duration_ms = $duration.as_millis() as u64,
            "Export completed"
        );
    };
}

/// Log a finished sheet
#[macro_export]
macro_rules! log_sheet_built {
    ($sheet:expr) => {
        tracing::debug!(
            title = %$sheet.title,
            rows = $sheet.rows.len(),
            columns = $sheet.headings.len(),
            "Sheet built"
        );
    };
}

/// Log a widget that gets no detail sheet
///
/// # Example
///
/// ```no_run
/// use quire::log_widget_skipped;
///
/// log_widget_skipped!("w-42", "empty payload");
/// ```
#[macro_export]
macro_rules! log_widget_skipped {
    ($widget_id:expr, $reason:expr) => {
        tracing::info!(widget_id = %$widget_id, reason = $reason, "Widget skipped");
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use quire::log_error_with_context;
/// use quire::domain::QuireError;
///
/// let error = QuireError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(error = %$error, context = $context, "Error occurred");
    };
}
