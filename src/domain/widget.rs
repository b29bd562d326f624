//! Widget domain model
//!
//! A widget is a named, typed unit of dashboard content. Its data is resolved
//! upstream into a [`WidgetResult`] before an export ever sees it.

use super::ids::WidgetId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Kind of widget, which decides the sheet layout used to export it
///
/// Unrecognised type names are kept in [`WidgetType::Unknown`] so the summary
/// sheet can still show what the dashboard called them.
///
/// # Examples
///
/// ```
/// use quire::domain::WidgetType;
/// use std::str::FromStr;
///
/// assert_eq!(WidgetType::from_str("pie_chart").unwrap(), WidgetType::PieChart);
/// assert_eq!(WidgetType::from_str("lineChart").unwrap(), WidgetType::LineChart);
/// assert_eq!(WidgetType::from_str("gauge").unwrap().to_string(), "gauge");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WidgetType {
    /// Single headline metric
    Kpi,
    /// Free-form tabular data
    Table,
    /// Category breakdown rendered as a pie
    PieChart,
    /// Category breakdown rendered as bars
    BarChart,
    /// Time series
    LineChart,
    /// Two-dimensional intensity grid
    Heatmap,
    /// Anything else, with the raw type name
    Unknown(String),
}

impl WidgetType {
    /// Wire name of the widget type
    pub fn as_str(&self) -> &str {
        match self {
            Self::Kpi => "kpi",
            Self::Table => "table",
            Self::PieChart => "pie_chart",
            Self::BarChart => "bar_chart",
            Self::LineChart => "line_chart",
            Self::Heatmap => "heatmap",
            Self::Unknown(raw) => raw,
        }
    }

    /// Whether the type is one of the known layouts
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl FromStr for WidgetType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        Ok(match normalized.as_str() {
            "kpi" => Self::Kpi,
            "table" => Self::Table,
            "piechart" | "pie" => Self::PieChart,
            "barchart" | "bar" => Self::BarChart,
            "linechart" | "line" => Self::LineChart,
            "heatmap" => Self::Heatmap,
            _ => Self::Unknown(s.to_string()),
        })
    }
}

impl From<String> for WidgetType {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(widget_type) => widget_type,
            Err(never) => match never {},
        }
    }
}

impl From<WidgetType> for String {
    fn from(value: WidgetType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dashboard widget as seen by the exporter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    /// Widget identifier
    pub id: WidgetId,

    /// Display title, also used as the sheet title
    #[serde(alias = "name")]
    pub title: String,

    /// Widget type
    #[serde(rename = "type", alias = "widget_type")]
    pub widget_type: WidgetType,
}

impl Widget {
    /// Creates a new widget
    pub fn new(id: WidgetId, title: impl Into<String>, widget_type: WidgetType) -> Self {
        Self {
            id,
            title: title.into(),
            widget_type,
        }
    }
}

/// Size information reported by the resolver next to a payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSummary {
    /// Number of plotted data points
    #[serde(default, alias = "dataPoints", skip_serializing_if = "Option::is_none")]
    pub data_points: Option<u64>,

    /// Number of underlying records
    #[serde(default, alias = "totalRecords", skip_serializing_if = "Option::is_none")]
    pub total_records: Option<u64>,
}

impl ResultSummary {
    /// Data point count shown in the summary sheet
    ///
    /// Falls back to `total_records`, then to 0.
    pub fn data_point_count(&self) -> u64 {
        self.data_points.or(self.total_records).unwrap_or(0)
    }
}

/// Outcome of resolving a widget's data
///
/// # Examples
///
/// ```
/// use quire::domain::WidgetResult;
///
/// let ok: WidgetResult = serde_json::from_str(
///     r#"{"status": "success", "payload": {"value": 42}}"#
/// ).unwrap();
/// assert!(ok.is_success());
///
/// let failed: WidgetResult = serde_json::from_str(
///     r#"{"status": "error", "message": "timeout"}"#
/// ).unwrap();
/// assert_eq!(failed.failure_message(), Some("timeout"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum WidgetResult {
    /// Data was resolved
    Success {
        /// Type-specific payload
        #[serde(default)]
        payload: Value,

        /// Size information
        #[serde(default)]
        summary: ResultSummary,
    },

    /// Resolution failed upstream
    #[serde(rename = "error", alias = "failure")]
    Failure {
        /// Failure message reported by the resolver
        #[serde(default)]
        message: String,
    },
}

impl WidgetResult {
    /// Creates a successful result with an empty summary
    pub fn success(payload: Value) -> Self {
        Self::Success {
            payload,
            summary: ResultSummary::default(),
        }
    }

    /// Creates a failed result
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    /// Attaches a summary to a successful result; failures are returned unchanged
    pub fn with_summary(self, summary: ResultSummary) -> Self {
        match self {
            Self::Success { payload, .. } => Self::Success { payload, summary },
            failure => failure,
        }
    }

    /// Whether the result is a success
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Failure message, if this is a failure
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Failure { message } => Some(message),
            Self::Success { .. } => None,
        }
    }

    /// Data point count, 0 for failures
    pub fn data_point_count(&self) -> u64 {
        match self {
            Self::Success { summary, .. } => summary.data_point_count(),
            Self::Failure { .. } => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case("kpi", WidgetType::Kpi)]
    #[test_case("KPI", WidgetType::Kpi)]
    #[test_case("table", WidgetType::Table)]
    #[test_case("pie_chart", WidgetType::PieChart)]
    #[test_case("pieChart", WidgetType::PieChart)]
    #[test_case("bar-chart", WidgetType::BarChart)]
    #[test_case("line_chart", WidgetType::LineChart)]
    #[test_case("heatmap", WidgetType::Heatmap)]
    fn test_widget_type_from_str(input: &str, expected: WidgetType) {
        assert_eq!(WidgetType::from_str(input).unwrap(), expected);
    }

    #[test]
    fn test_unknown_widget_type_keeps_raw_name() {
        let widget_type = WidgetType::from_str("Gauge").unwrap();
        assert_eq!(widget_type, WidgetType::Unknown("Gauge".to_string()));
        assert_eq!(widget_type.to_string(), "Gauge");
        assert!(!widget_type.is_known());
    }

    #[test]
    fn test_widget_deserialize() {
        let widget: Widget = serde_json::from_value(json!({
            "id": 7,
            "title": "Revenue",
            "type": "kpi"
        }))
        .unwrap();
        assert_eq!(widget.id.as_str(), "7");
        assert_eq!(widget.widget_type, WidgetType::Kpi);
    }

    #[test]
    fn test_summary_data_point_fallbacks() {
        let both = ResultSummary {
            data_points: Some(3),
            total_records: Some(10),
        };
        assert_eq!(both.data_point_count(), 3);

        let records_only = ResultSummary {
            data_points: None,
            total_records: Some(10),
        };
        assert_eq!(records_only.data_point_count(), 10);

        assert_eq!(ResultSummary::default().data_point_count(), 0);
    }

    #[test]
    fn test_result_deserialize_with_camel_case_summary() {
        let result: WidgetResult = serde_json::from_value(json!({
            "status": "success",
            "payload": {"rows": []},
            "summary": {"totalRecords": 12}
        }))
        .unwrap();
        assert_eq!(result.data_point_count(), 12);
    }

    #[test]
    fn test_failure_has_no_data_points() {
        let result = WidgetResult::failure("timeout");
        assert!(!result.is_success());
        assert_eq!(result.data_point_count(), 0);
        assert_eq!(result.failure_message(), Some("timeout"));
    }

    #[test]
    fn test_with_summary_ignored_for_failure() {
        let result = WidgetResult::failure("boom").with_summary(ResultSummary {
            data_points: Some(5),
            total_records: None,
        });
        assert_eq!(result, WidgetResult::failure("boom"));
    }
}
