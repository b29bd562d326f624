//! Widget payload formatting
//!
//! Turns a resolved widget payload into a heading row and data rows. Layouts
//! are described declaratively: each `(WidgetType, Profile)` pair maps to a
//! [`FormatRule`] listing its columns and where each column's value comes
//! from. The two profiles differ only in which rule they pick.
//!
//! | Type | Summary headings | Detailed adds |
//! |---|---|---|
//! | KPI | Metric, Value, Change, Change % | Period |
//! | Table | payload `columns`, else Data | |
//! | Pie / Bar chart | Category, Value, Percentage | Color |
//! | Line chart | Date, Value, Series | Trend (and `Date/Period` heading) |
//! | Heatmap | X Axis, Y Axis, Value, Intensity | Color |
//! | Unknown | Data | Value |

pub mod fields;

use crate::domain::{Cell, Row, Widget, WidgetType};
use serde_json::Value;

/// Text placed in the single row of an unrecognised widget type
pub const NO_DATA_TEXT: &str = "No data available";

/// Heading used for tables without declared columns
pub const DEFAULT_TABLE_HEADING: &str = "Data";

/// Which schema a widget is exported with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profile {
    /// Narrow schema used for detail sheets in a dashboard bundle
    Summary,
    /// Rich schema used when exporting a single widget
    Detailed,
}

/// Headings and rows produced for one widget
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tabular {
    /// Column headings
    pub headings: Vec<String>,
    /// Data rows
    pub rows: Vec<Row>,
}

impl Tabular {
    /// Whether no data rows were produced
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Where a column's value comes from
#[derive(Debug, Clone, Copy)]
enum Source {
    /// The widget title
    Title,
    /// A fixed value
    Literal(&'static str),
    /// A scalar field, first non-null key wins, text default
    Scalar(&'static [&'static str], &'static str),
    /// A numeric field, first non-null key wins, zero default
    Number(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy)]
struct Column {
    heading: &'static str,
    source: Source,
}

const fn col(heading: &'static str, source: Source) -> Column {
    Column { heading, source }
}

/// How many rows a layout produces
#[derive(Debug, Clone, Copy)]
enum RowSource {
    /// Exactly one row built from the payload itself
    Single,
    /// One row per element of the payload's `data` list
    PerPoint,
    /// Caller-defined columns and rows
    Table,
}

/// Layout for one `(WidgetType, Profile)` pair
#[derive(Debug, Clone, Copy)]
pub struct FormatRule {
    columns: &'static [Column],
    rows: RowSource,
}

const KPI_SUMMARY: &[Column] = &[
    col("Metric", Source::Title),
    col("Value", Source::Number(&["value"])),
    col("Change", Source::Number(&["change"])),
    col("Change %", Source::Number(&["changePercentage", "change_percentage"])),
];

const KPI_DETAILED: &[Column] = &[
    col("Metric", Source::Title),
    col("Value", Source::Number(&["value"])),
    col("Change", Source::Number(&["change"])),
    col("Change %", Source::Number(&["changePercentage", "change_percentage"])),
    col("Period", Source::Scalar(&["period"], "Current")),
];

const CATEGORY_SUMMARY: &[Column] = &[
    col("Category", Source::Scalar(&["category", "name"], "")),
    col("Value", Source::Number(&["value"])),
    col("Percentage", Source::Number(&["percentage"])),
];

const CATEGORY_DETAILED: &[Column] = &[
    col("Category", Source::Scalar(&["category", "name"], "")),
    col("Value", Source::Number(&["value"])),
    col("Percentage", Source::Number(&["percentage"])),
    col("Color", Source::Scalar(&["color"], "")),
];

const SERIES_SUMMARY: &[Column] = &[
    col("Date", Source::Scalar(&["date", "x"], "")),
    col("Value", Source::Number(&["value", "y"])),
    col("Series", Source::Scalar(&["series"], "")),
];

const SERIES_DETAILED: &[Column] = &[
    col("Date/Period", Source::Scalar(&["date", "x"], "")),
    col("Value", Source::Number(&["value", "y"])),
    col("Series", Source::Scalar(&["series"], "Default")),
    col("Trend", Source::Scalar(&["trend"], "")),
];

const HEATMAP_SUMMARY: &[Column] = &[
    col("X Axis", Source::Scalar(&["x"], "")),
    col("Y Axis", Source::Scalar(&["y"], "")),
    col("Value", Source::Number(&["value"])),
    col("Intensity", Source::Number(&["intensity"])),
];

const HEATMAP_DETAILED: &[Column] = &[
    col("X Axis", Source::Scalar(&["x"], "")),
    col("Y Axis", Source::Scalar(&["y"], "")),
    col("Value", Source::Number(&["value"])),
    col("Intensity", Source::Number(&["intensity"])),
    col("Color", Source::Scalar(&["color"], "")),
];

const PLACEHOLDER_SUMMARY: &[Column] = &[col("Data", Source::Literal(NO_DATA_TEXT))];

const PLACEHOLDER_DETAILED: &[Column] = &[
    col("Data", Source::Literal(NO_DATA_TEXT)),
    col("Value", Source::Literal("")),
];

impl FormatRule {
    /// Dispatch table from widget type and profile to layout
    pub fn for_widget(widget_type: &WidgetType, profile: Profile) -> Self {
        use Profile::{Detailed, Summary};

        let (columns, rows) = match (widget_type, profile) {
            (WidgetType::Kpi, Summary) => (KPI_SUMMARY, RowSource::Single),
            (WidgetType::Kpi, Detailed) => (KPI_DETAILED, RowSource::Single),
            (WidgetType::Table, _) => (&[][..], RowSource::Table),
            (WidgetType::PieChart | WidgetType::BarChart, Summary) => {
                (CATEGORY_SUMMARY, RowSource::PerPoint)
            }
            (WidgetType::PieChart | WidgetType::BarChart, Detailed) => {
                (CATEGORY_DETAILED, RowSource::PerPoint)
            }
            (WidgetType::LineChart, Summary) => (SERIES_SUMMARY, RowSource::PerPoint),
            (WidgetType::LineChart, Detailed) => (SERIES_DETAILED, RowSource::PerPoint),
            (WidgetType::Heatmap, Summary) => (HEATMAP_SUMMARY, RowSource::PerPoint),
            (WidgetType::Heatmap, Detailed) => (HEATMAP_DETAILED, RowSource::PerPoint),
            (WidgetType::Unknown(_), Summary) => (PLACEHOLDER_SUMMARY, RowSource::Single),
            (WidgetType::Unknown(_), Detailed) => (PLACEHOLDER_DETAILED, RowSource::Single),
        };

        Self { columns, rows }
    }

    /// Heading row for a payload
    ///
    /// Only tables look at the payload; every other layout has fixed headings.
    pub fn headings(&self, payload: &Value) -> Vec<String> {
        match self.rows {
            RowSource::Table => table_headings(payload),
            RowSource::Single | RowSource::PerPoint => self
                .columns
                .iter()
                .map(|column| column.heading.to_string())
                .collect(),
        }
    }

    /// Data rows for a payload
    pub fn rows(&self, title: &str, payload: &Value) -> Vec<Row> {
        match self.rows {
            RowSource::Single => vec![self.extract(title, payload)],
            RowSource::PerPoint => fields::list(payload, "data")
                .iter()
                .map(|point| self.extract(title, point))
                .collect(),
            RowSource::Table => table_rows(payload),
        }
    }

    fn extract(&self, title: &str, record: &Value) -> Row {
        self.columns
            .iter()
            .map(|column| match column.source {
                Source::Title => Cell::Text(title.to_string()),
                Source::Literal(text) => Cell::Text(text.to_string()),
                Source::Scalar(keys, default) => fields::scalar(record, keys, default),
                Source::Number(keys) => fields::number(record, keys, 0),
            })
            .collect()
    }
}

/// Formats one widget payload under a fixed profile
///
/// # Examples
///
/// ```
/// use quire::core::format::{Profile, WidgetFormatter};
/// use quire::domain::{Cell, Widget, WidgetId, WidgetType};
/// use serde_json::json;
///
/// let widget = Widget::new(WidgetId::new("w1").unwrap(), "Revenue", WidgetType::Kpi);
/// let formatter = WidgetFormatter::new(Profile::Summary);
/// let tabular = formatter.format(&widget, &json!({"value": 42}));
///
/// assert_eq!(tabular.headings, vec!["Metric", "Value", "Change", "Change %"]);
/// assert_eq!(tabular.rows[0][1], Cell::Integer(42));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WidgetFormatter {
    profile: Profile,
}

impl WidgetFormatter {
    /// Creates a formatter for the given profile
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }

    /// Profile this formatter applies
    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Formats a widget's payload
    pub fn format(&self, widget: &Widget, payload: &Value) -> Tabular {
        format_payload(&widget.widget_type, self.profile, &widget.title, payload)
    }
}

/// Formats a payload for the given widget type and profile
///
/// Never fails: absent or malformed fields resolve to their defaults.
pub fn format_payload(
    widget_type: &WidgetType,
    profile: Profile,
    title: &str,
    payload: &Value,
) -> Tabular {
    let rule = FormatRule::for_widget(widget_type, profile);
    Tabular {
        headings: rule.headings(payload),
        rows: rule.rows(title, payload),
    }
}

fn table_headings(payload: &Value) -> Vec<String> {
    let headings: Vec<String> = match payload.get("columns") {
        Some(Value::Array(columns)) => columns.iter().filter_map(column_label).collect(),
        _ => Vec::new(),
    };

    if headings.is_empty() {
        vec![DEFAULT_TABLE_HEADING.to_string()]
    } else {
        headings
    }
}

/// Column declarations are either plain names or objects naming a label
fn column_label(column: &Value) -> Option<String> {
    match column {
        Value::String(name) => Some(name.clone()),
        Value::Number(_) | Value::Bool(_) => Some(column.to_string()),
        Value::Object(_) => {
            let label = fields::text(column, &["label", "title", "key", "name"], "");
            (!label.is_empty()).then_some(label)
        }
        _ => None,
    }
}

fn table_rows(payload: &Value) -> Vec<Row> {
    fields::list(payload, "rows")
        .iter()
        .map(|row| match row {
            Value::Object(record) => record.values().map(Cell::from_json).collect(),
            Value::Array(cells) => cells.iter().map(Cell::from_json).collect(),
            scalar => vec![Cell::from_json(scalar)],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    fn headings(widget_type: WidgetType, profile: Profile) -> Vec<String> {
        format_payload(&widget_type, profile, "T", &json!({})).headings
    }

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    #[test_case(WidgetType::Kpi, Profile::Summary, &["Metric", "Value", "Change", "Change %"])]
    #[test_case(WidgetType::Kpi, Profile::Detailed, &["Metric", "Value", "Change", "Change %", "Period"])]
    #[test_case(WidgetType::Table, Profile::Summary, &["Data"])]
    #[test_case(WidgetType::PieChart, Profile::Summary, &["Category", "Value", "Percentage"])]
    #[test_case(WidgetType::BarChart, Profile::Detailed, &["Category", "Value", "Percentage", "Color"])]
    #[test_case(WidgetType::LineChart, Profile::Summary, &["Date", "Value", "Series"])]
    #[test_case(WidgetType::LineChart, Profile::Detailed, &["Date/Period", "Value", "Series", "Trend"])]
    #[test_case(WidgetType::Heatmap, Profile::Summary, &["X Axis", "Y Axis", "Value", "Intensity"])]
    #[test_case(WidgetType::Heatmap, Profile::Detailed, &["X Axis", "Y Axis", "Value", "Intensity", "Color"])]
    #[test_case(WidgetType::Unknown("gauge".into()), Profile::Summary, &["Data"])]
    #[test_case(WidgetType::Unknown("gauge".into()), Profile::Detailed, &["Data", "Value"])]
    fn test_headings(widget_type: WidgetType, profile: Profile, expected: &[&str]) {
        assert_eq!(headings(widget_type, profile), expected);
    }

    #[test]
    fn test_kpi_row() {
        let payload = json!({"value": 42, "change": -3, "changePercentage": 6.5, "period": "Q1"});
        let summary = format_payload(&WidgetType::Kpi, Profile::Summary, "Revenue", &payload);
        assert_eq!(
            summary.rows,
            vec![vec![
                text("Revenue"),
                Cell::Integer(42),
                Cell::Integer(-3),
                Cell::Float(6.5)
            ]]
        );

        let detailed = format_payload(&WidgetType::Kpi, Profile::Detailed, "Revenue", &payload);
        assert_eq!(detailed.rows[0][4], text("Q1"));
    }

    #[test]
    fn test_kpi_defaults() {
        let detailed = format_payload(&WidgetType::Kpi, Profile::Detailed, "Revenue", &json!({}));
        assert_eq!(
            detailed.rows,
            vec![vec![
                text("Revenue"),
                Cell::Integer(0),
                Cell::Integer(0),
                Cell::Integer(0),
                text("Current")
            ]]
        );
    }

    #[test]
    fn test_category_rows_with_name_fallback() {
        let payload = json!({"data": [
            {"category": "North", "value": 10, "percentage": 25, "color": "#f00"},
            {"name": "South", "value": 30},
            {}
        ]});
        let tabular = format_payload(&WidgetType::PieChart, Profile::Detailed, "Regions", &payload);
        assert_eq!(
            tabular.rows,
            vec![
                vec![text("North"), Cell::Integer(10), Cell::Integer(25), text("#f00")],
                vec![text("South"), Cell::Integer(30), Cell::Integer(0), text("")],
                vec![text(""), Cell::Integer(0), Cell::Integer(0), text("")],
            ]
        );
    }

    #[test]
    fn test_line_chart_fallbacks_and_series_default() {
        let payload = json!([
            {"date": "2024-01-01", "value": 5, "series": "Web", "trend": "up"},
            {"x": "2024-01-02", "y": 7}
        ]);

        let summary = format_payload(&WidgetType::LineChart, Profile::Summary, "Visits", &payload);
        assert_eq!(
            summary.rows[1],
            vec![text("2024-01-02"), Cell::Integer(7), text("")]
        );

        let detailed = format_payload(&WidgetType::LineChart, Profile::Detailed, "Visits", &payload);
        assert_eq!(
            detailed.rows[0],
            vec![text("2024-01-01"), Cell::Integer(5), text("Web"), text("up")]
        );
        assert_eq!(
            detailed.rows[1],
            vec![text("2024-01-02"), Cell::Integer(7), text("Default"), text("")]
        );
    }

    #[test]
    fn test_heatmap_rows() {
        let payload = json!({"data": [{"x": "Mon", "y": 9, "value": 3, "intensity": 0.4}]});
        let tabular = format_payload(&WidgetType::Heatmap, Profile::Summary, "Load", &payload);
        assert_eq!(
            tabular.rows,
            vec![vec![text("Mon"), Cell::Integer(9), Cell::Integer(3), Cell::Float(0.4)]]
        );
    }

    #[test_case(WidgetType::PieChart, Profile::Summary, vec![text(""), Cell::Integer(0), Cell::Integer(0)])]
    #[test_case(WidgetType::BarChart, Profile::Detailed, vec![text(""), Cell::Integer(0), Cell::Integer(0), text("")])]
    #[test_case(WidgetType::LineChart, Profile::Summary, vec![text(""), Cell::Integer(0), text("")])]
    #[test_case(WidgetType::LineChart, Profile::Detailed, vec![text(""), Cell::Integer(0), text("Default"), text("")])]
    #[test_case(WidgetType::Heatmap, Profile::Summary, vec![text(""), text(""), Cell::Integer(0), Cell::Integer(0)])]
    #[test_case(WidgetType::Heatmap, Profile::Detailed, vec![text(""), text(""), Cell::Integer(0), Cell::Integer(0), text("")])]
    fn test_empty_point_defaults(widget_type: WidgetType, profile: Profile, expected: Row) {
        let tabular = format_payload(&widget_type, profile, "T", &json!({"data": [{}]}));
        assert_eq!(tabular.rows, vec![expected]);
    }

    #[test]
    fn test_table_columns_and_rows() {
        let payload = json!({
            "columns": ["Name", {"label": "Total"}, {"key": "region"}],
            "rows": [
                {"name": "a", "total": 1, "region": "eu"},
                ["b", 2, "us"],
                "c"
            ]
        });
        let tabular = format_payload(&WidgetType::Table, Profile::Summary, "Orders", &payload);
        assert_eq!(tabular.headings, vec!["Name", "Total", "region"]);
        assert_eq!(
            tabular.rows,
            vec![
                vec![text("a"), Cell::Integer(1), text("eu")],
                vec![text("b"), Cell::Integer(2), text("us")],
                vec![text("c")],
            ]
        );
    }

    #[test]
    fn test_table_without_rows_is_empty() {
        let tabular = format_payload(&WidgetType::Table, Profile::Detailed, "Orders", &json!({}));
        assert_eq!(tabular.headings, vec!["Data"]);
        assert!(tabular.is_empty());
    }

    #[test]
    fn test_chart_without_points_is_empty() {
        let tabular = format_payload(&WidgetType::BarChart, Profile::Summary, "Sales", &json!({}));
        assert!(tabular.is_empty());
    }

    #[test]
    fn test_unknown_placeholder_rows() {
        let kind = WidgetType::Unknown("gauge".to_string());
        let summary = format_payload(&kind, Profile::Summary, "G", &json!({"value": 1}));
        assert_eq!(summary.rows, vec![vec![text(NO_DATA_TEXT)]]);

        let detailed = format_payload(&kind, Profile::Detailed, "G", &json!({"value": 1}));
        assert_eq!(detailed.rows, vec![vec![text(NO_DATA_TEXT), text("")]]);
    }

    #[test]
    fn test_malformed_payload_degrades_to_defaults() {
        let payload = json!({"data": [42, "text", null, {"value": {"nested": 1}}]});
        let tabular = format_payload(&WidgetType::PieChart, Profile::Summary, "P", &payload);
        assert_eq!(tabular.rows.len(), 4);
        for row in &tabular.rows {
            assert_eq!(row, &vec![text(""), Cell::Integer(0), Cell::Integer(0)]);
        }
    }

    #[test]
    fn test_formatter_uses_profile() {
        let widget = Widget::new(
            crate::domain::WidgetId::new("w").unwrap(),
            "Visits",
            WidgetType::LineChart,
        );
        let formatter = WidgetFormatter::new(Profile::Detailed);
        assert_eq!(formatter.profile(), Profile::Detailed);
        assert_eq!(formatter.format(&widget, &json!([])).headings.len(), 4);
    }
}
