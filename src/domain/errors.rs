//! Domain error types
//!
//! This module defines the error hierarchy for Quire.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Quire error type
///
/// This is the primary error type used throughout the application.
/// Missing or malformed widget payload fields are never reported through it:
/// the formatter resolves them to defaults. Upstream widget failures are data
/// (see [`crate::domain::WidgetResult::Failure`]), not errors.
#[derive(Debug, Error)]
pub enum QuireError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid caller input (duplicate widget ids, malformed requests)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export process errors
    #[error("Export error: {0}")]
    Export(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Context attached to a failed widget when it is reported
///
/// Used by the CLI and the export summary to point at the widget that
/// caused a problem without carrying the whole payload around.
#[derive(Debug, Clone)]
pub struct WidgetErrorDetail {
    /// Widget ID associated with the error
    pub widget_id: Option<String>,

    /// Widget title associated with the error
    pub widget_title: Option<String>,

    /// Error message
    pub message: String,
}

impl WidgetErrorDetail {
    /// Creates a new widget error detail
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            widget_id: None,
            widget_title: None,
            message: message.into(),
        }
    }

    /// Sets the widget ID
    pub fn with_widget_id(mut self, widget_id: impl Into<String>) -> Self {
        self.widget_id = Some(widget_id.into());
        self
    }

    /// Sets the widget title
    pub fn with_widget_title(mut self, title: impl Into<String>) -> Self {
        self.widget_title = Some(title.into());
        self
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for QuireError {
    fn from(err: std::io::Error) -> Self {
        QuireError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for QuireError {
    fn from(err: serde_json::Error) -> Self {
        QuireError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for QuireError {
    fn from(err: toml::de::Error) -> Self {
        QuireError::Configuration(format!("TOML parse error: {err}"))
    }
}

// Conversion from csv writer errors
impl From<csv::Error> for QuireError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            QuireError::Io(err.to_string())
        } else {
            QuireError::Serialization(format!("CSV error: {err}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quire_error_display() {
        let err = QuireError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_widget_error_detail_builder() {
        let detail = WidgetErrorDetail::new("timeout")
            .with_widget_id("w-1")
            .with_widget_title("Revenue");

        assert_eq!(detail.widget_id, Some("w-1".to_string()));
        assert_eq!(detail.widget_title, Some("Revenue".to_string()));
        assert_eq!(detail.message, "timeout");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let quire_err: QuireError = io_err.into();
        assert!(matches!(quire_err, QuireError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let quire_err: QuireError = json_err.into();
        assert!(matches!(quire_err, QuireError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let quire_err: QuireError = toml_err.into();
        assert!(matches!(quire_err, QuireError::Configuration(_)));
        assert!(quire_err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_quire_error_implements_std_error() {
        let err = QuireError::Validation("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
