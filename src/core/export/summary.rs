//! Export summary and reporting
//!
//! This module defines structures for tracking and reporting export results.

use crate::domain::WidgetErrorDetail;
use std::time::Duration;

/// Summary of a dashboard export
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Total number of widgets in the request
    pub total_widgets: usize,

    /// Widgets that resolved successfully
    pub successful_widgets: usize,

    /// Widgets whose resolution failed upstream
    pub failed_widgets: usize,

    /// Successful widgets skipped because they had nothing to show
    pub skipped_empty: usize,

    /// Number of detail sheets produced
    pub detail_sheets: usize,

    /// Total number of sheets in the bundle, summary sheet included
    pub total_sheets: usize,

    /// Duration of the export
    pub duration: Duration,

    /// Upstream failures, in request order
    pub failures: Vec<WidgetErrorDetail>,
}

impl ExportSummary {
    /// Create a new empty export summary
    pub fn new() -> Self {
        Self {
            total_widgets: 0,
            successful_widgets: 0,
            failed_widgets: 0,
            skipped_empty: 0,
            detail_sheets: 0,
            total_sheets: 0,
            duration: Duration::from_secs(0),
            failures: Vec::new(),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record an upstream widget failure
    pub fn add_failure(&mut self, failure: WidgetErrorDetail) {
        self.failed_widgets += 1;
        self.failures.push(failure);
    }

    /// Check if every widget resolved
    pub fn is_successful(&self) -> bool {
        self.failed_widgets == 0
    }

    /// Share of widgets that resolved, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_widgets == 0 {
            return 100.0;
        }
        (self.successful_widgets as f64 / self.total_widgets as f64) * 100.0
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            total_widgets = self.total_widgets,
            successful = self.successful_widgets,
            failed = self.failed_widgets,
            skipped_empty = self.skipped_empty,
            sheets = self.total_sheets,
            duration_ms = self.duration.as_millis() as u64,
            success_rate = format!("{:.2}%", self.success_rate()),
            "Dashboard export completed"
        );

        if !self.failures.is_empty() {
            tracing::warn!(
                failure_count = self.failures.len(),
                "Dashboard export contains failed widgets"
            );
            for failure in &self.failures {
                tracing::warn!(
                    widget_id = failure.widget_id.as_deref().unwrap_or_default(),
                    message = %failure.message,
                    "Widget failed upstream"
                );
            }
        }
    }
}

impl Default for ExportSummary {
    fn default() -> Self {
        Self::new()
    }
}
