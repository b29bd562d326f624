//! Export request documents
//!
//! The widget resolver hands its output over as JSON. These types describe
//! that document and load it from disk.

use super::dashboard::Dashboard;
use super::errors::QuireError;
use super::filters::FilterSet;
use super::result::Result;
use super::widget::{Widget, WidgetResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A widget together with its resolved result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetEntry {
    /// The widget
    pub widget: Widget,

    /// Its resolved data
    pub result: WidgetResult,
}

impl WidgetEntry {
    /// Creates a new entry
    pub fn new(widget: Widget, result: WidgetResult) -> Self {
        Self { widget, result }
    }
}

/// Request to export a whole dashboard
///
/// `widgets` order is the order detail sheets appear in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardExportRequest {
    /// Dashboard metadata
    pub dashboard: Dashboard,

    /// Widgets with their results
    #[serde(default)]
    pub widgets: Vec<WidgetEntry>,

    /// Filters active when the results were computed
    #[serde(default)]
    pub filters: FilterSet,
}

/// Request to export a single widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetExportRequest {
    /// The widget
    pub widget: Widget,

    /// Its resolved data
    pub result: WidgetResult,

    /// Filters active when the result was computed
    #[serde(default)]
    pub filters: FilterSet,
}

/// Loads a dashboard export request from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid request
pub fn load_dashboard_request(path: impl AsRef<Path>) -> Result<DashboardExportRequest> {
    let contents = read_request(path.as_ref())?;
    parse_request(&contents)
}

/// Loads a single-widget export request from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid request
pub fn load_widget_request(path: impl AsRef<Path>) -> Result<WidgetExportRequest> {
    let contents = read_request(path.as_ref())?;
    parse_request(&contents)
}

/// Parses any request document from a JSON string
pub fn parse_request<T: for<'de> Deserialize<'de>>(contents: &str) -> Result<T> {
    serde_json::from_str(contents)
        .map_err(|e| QuireError::Validation(format!("Invalid export request: {e}")))
}

fn read_request(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(QuireError::Validation(format!(
            "Request file not found: {}",
            path.display()
        )));
    }

    fs::read_to_string(path).map_err(|e| {
        QuireError::Io(format!(
            "Failed to read request file {}: {}",
            path.display(),
            e
        ))
    })
}
