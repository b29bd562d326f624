//! Export composition
//!
//! Builds the sheets for a single widget or a whole dashboard from resolved
//! widget results. Everything here is synchronous and pure apart from reading
//! the clock once per dashboard export.

use super::clock::{format_timestamp, Clock, SystemClock};
use super::summary::ExportSummary;
use crate::core::annotate;
use crate::core::format::{fields, Profile, WidgetFormatter};
use crate::core::sheet::{RowShape, SheetBuilder};
use crate::domain::{
    Cell, Dashboard, ExportBundle, FilterSet, QuireError, Result, Row, Sheet, Widget,
    WidgetEntry, WidgetErrorDetail, WidgetResult,
};
use std::collections::HashSet;
use std::time::Instant;

/// Default title of the first sheet of a dashboard bundle
pub const SUMMARY_SHEET_TITLE: &str = "Dashboard Summary";

/// Headings of the summary sheet
pub const SUMMARY_HEADINGS: [&str; 5] = [
    "Dashboard Name",
    "Owner",
    "Created At",
    "Exported At",
    "Total Widgets",
];

/// Marker row that introduces the per-widget block of the summary sheet
pub const WIDGET_SUMMARY_MARKER: &str = "Widget Summary:";

/// Header row of the per-widget block
pub const WIDGET_SUMMARY_HEADINGS: [&str; 5] =
    ["Widget Name", "Type", "Data Points", "Status", "Notes"];

/// Status cell for a resolved widget
pub const STATUS_SUCCESS: &str = "Success";

/// Status cell for a failed widget
pub const STATUS_ERROR: &str = "Error";

/// Options controlling sheet assembly
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Row shape policy applied to every sheet
    pub row_shape: RowShape,

    /// Title of the summary sheet
    pub summary_sheet_title: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            row_shape: RowShape::default(),
            summary_sheet_title: SUMMARY_SHEET_TITLE.to_string(),
        }
    }
}

/// Builds export sheets and bundles
///
/// # Examples
///
/// ```
/// use quire::core::export::{ExportComposer, ExportOptions, FixedClock};
/// use quire::domain::{Dashboard, FilterSet, Widget, WidgetEntry, WidgetId, WidgetResult, WidgetType};
/// use chrono::{TimeZone, Utc};
/// use serde_json::json;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
/// let composer = ExportComposer::new(ExportOptions::default()).with_clock(FixedClock::new(at));
///
/// let dashboard = Dashboard::builder().name("Sales").created_at(at).build()?;
/// let entries = vec![WidgetEntry::new(
///     Widget::new(WidgetId::new("w1")?, "Revenue", WidgetType::Kpi),
///     WidgetResult::success(json!({"value": 42})),
/// )];
///
/// let bundle = composer.export_dashboard(&dashboard, &entries, &FilterSet::new())?;
/// assert_eq!(bundle.len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ExportComposer<C = SystemClock> {
    options: ExportOptions,
    clock: C,
    sheets: SheetBuilder,
    detailed: WidgetFormatter,
    summary: WidgetFormatter,
}

impl ExportComposer<SystemClock> {
    /// Creates a composer reading the system clock
    pub fn new(options: ExportOptions) -> Self {
        Self {
            sheets: SheetBuilder::new(options.row_shape),
            detailed: WidgetFormatter::new(Profile::Detailed),
            summary: WidgetFormatter::new(Profile::Summary),
            options,
            clock: SystemClock,
        }
    }
}

impl<C: Clock> ExportComposer<C> {
    /// Replaces the clock used for the "Exported At" timestamp
    pub fn with_clock<D: Clock>(self, clock: D) -> ExportComposer<D> {
        ExportComposer {
            options: self.options,
            clock,
            sheets: self.sheets,
            detailed: self.detailed,
            summary: self.summary,
        }
    }

    /// Options in use
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Exports a single widget with the detailed schema
    ///
    /// Active filters are written as a single preamble cell above the headings.
    ///
    /// # Errors
    ///
    /// Returns [`QuireError::Export`] if the widget's result is a failure.
    pub fn export_widget(
        &self,
        widget: &Widget,
        result: &WidgetResult,
        filters: &FilterSet,
    ) -> Result<Sheet> {
        let payload = match result {
            WidgetResult::Success { payload, .. } => payload,
            WidgetResult::Failure { message } => {
                return Err(QuireError::Export(format!(
                    "Widget '{}' has no data to export: {}",
                    widget.id, message
                )));
            }
        };

        crate::log_export_start!("widget", widget.title);

        let tabular = self.detailed.format(widget, payload);
        let mut sheet = self
            .sheets
            .build(&widget.title, tabular.headings, tabular.rows);

        if let Some(header) = annotate::render_for_header(filters) {
            sheet = sheet.with_preamble(vec![vec![Cell::Text(header)]]);
        }

        crate::log_sheet_built!(sheet);
        Ok(sheet)
    }

    /// Exports a dashboard as a summary sheet plus one sheet per widget with data
    ///
    /// # Errors
    ///
    /// Returns [`QuireError::Validation`] if two entries share a widget id.
    pub fn export_dashboard(
        &self,
        dashboard: &Dashboard,
        entries: &[WidgetEntry],
        filters: &FilterSet,
    ) -> Result<ExportBundle> {
        self.export_dashboard_with_summary(dashboard, entries, filters)
            .map(|(bundle, _)| bundle)
    }

    /// Same as [`ExportComposer::export_dashboard`], also returning counts
    pub fn export_dashboard_with_summary(
        &self,
        dashboard: &Dashboard,
        entries: &[WidgetEntry],
        filters: &FilterSet,
    ) -> Result<(ExportBundle, ExportSummary)> {
        let started = Instant::now();
        ensure_unique_ids(entries)?;

        crate::log_export_start!("dashboard", dashboard.name);

        let mut report = ExportSummary::new();
        report.total_widgets = entries.len();

        let mut bundle = ExportBundle::new();
        bundle.push(self.summary_sheet(dashboard, entries, filters));

        for entry in entries {
            match &entry.result {
                WidgetResult::Failure { message } => {
                    crate::log_widget_skipped!(entry.widget.id, "upstream failure");
                    report.add_failure(
                        WidgetErrorDetail::new(message.clone())
                            .with_widget_id(entry.widget.id.as_str())
                            .with_widget_title(entry.widget.title.clone()),
                    );
                }
                WidgetResult::Success { payload, .. } => {
                    report.successful_widgets += 1;

                    if fields::is_empty_payload(payload) {
                        crate::log_widget_skipped!(entry.widget.id, "empty payload");
                        report.skipped_empty += 1;
                        continue;
                    }

                    let tabular = self.summary.format(&entry.widget, payload);
                    if tabular.is_empty() {
                        crate::log_widget_skipped!(entry.widget.id, "no rows");
                        report.skipped_empty += 1;
                        continue;
                    }

                    let sheet =
                        self.sheets
                            .build(&entry.widget.title, tabular.headings, tabular.rows);
                    crate::log_sheet_built!(sheet);
                    bundle.push(sheet);
                    report.detail_sheets += 1;
                }
            }
        }

        report.total_sheets = bundle.len();
        let report = report.with_duration(started.elapsed());
        report.log_summary();

        Ok((bundle, report))
    }

    fn summary_sheet(
        &self,
        dashboard: &Dashboard,
        entries: &[WidgetEntry],
        filters: &FilterSet,
    ) -> Sheet {
        let exported_at = self.clock.now();

        let mut rows: Vec<Row> = vec![vec![
            Cell::from(dashboard.name.as_str()),
            Cell::from(dashboard.owner_display_name()),
            Cell::Text(format_timestamp(&dashboard.created_at)),
            Cell::Text(format_timestamp(&exported_at)),
            Cell::from(entries.len()),
        ]];

        rows.extend(annotate::render_for_summary(filters));

        rows.push(Vec::new());
        rows.push(vec![Cell::from(WIDGET_SUMMARY_MARKER)]);
        rows.push(WIDGET_SUMMARY_HEADINGS.iter().map(|h| Cell::from(*h)).collect());
        rows.extend(entries.iter().map(widget_summary_row));

        let headings = SUMMARY_HEADINGS.iter().map(|h| h.to_string()).collect();
        self.sheets
            .build(&self.options.summary_sheet_title, headings, rows)
    }
}

fn widget_summary_row(entry: &WidgetEntry) -> Row {
    let (status, notes) = match &entry.result {
        WidgetResult::Success { .. } => (STATUS_SUCCESS, String::new()),
        WidgetResult::Failure { message } => (STATUS_ERROR, message.clone()),
    };

    vec![
        Cell::from(entry.widget.title.as_str()),
        Cell::Text(entry.widget.widget_type.to_string()),
        Cell::from(entry.result.data_point_count()),
        Cell::from(status),
        Cell::Text(notes),
    ]
}

fn ensure_unique_ids(entries: &[WidgetEntry]) -> Result<()> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(&entry.widget.id) {
            return Err(QuireError::Validation(format!(
                "Duplicate widget id in export request: {}",
                entry.widget.id
            )));
        }
    }
    Ok(())
}
