//! Core business logic for Quire.
//!
//! # Modules
//!
//! - [`format`] - Widget payload to headings and rows, per widget type and profile
//! - [`annotate`] - Rendering of applied filters
//! - [`sheet`] - Sheet assembly and title truncation
//! - [`export`] - Single-widget and dashboard export composition
//!
//! # Export Workflow
//!
//! 1. **Summary**: Dashboard metadata, applied filters and one status row per widget
//! 2. **Format**: Each resolved widget payload becomes headings and rows
//! 3. **Assemble**: Rows are shaped to the heading width and titles are truncated
//! 4. **Report**: An export summary is logged
//!
//! # Example
//!
//! ```rust
//! use quire::core::export::{ExportComposer, ExportOptions};
//! use quire::domain::{FilterSet, Widget, WidgetId, WidgetResult, WidgetType};
//! use serde_json::json;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let composer = ExportComposer::new(ExportOptions::default());
//! let widget = Widget::new(WidgetId::new("w1")?, "Traffic", WidgetType::LineChart);
//! let result = WidgetResult::success(json!({"data": [{"date": "2024-01-01", "value": 10}]}));
//!
//! let sheet = composer.export_widget(&widget, &result, &FilterSet::new())?;
//! assert_eq!(sheet.headings, vec!["Date/Period", "Value", "Series", "Trend"]);
//! # Ok(())
//! # }
//! ```

pub mod annotate;
pub mod export;
pub mod format;
pub mod sheet;
