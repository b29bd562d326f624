//! Domain models and types for Quire.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Identifiers** ([`WidgetId`])
//! - **Inputs** ([`Dashboard`], [`Widget`], [`WidgetResult`], [`FilterSet`])
//! - **Outputs** ([`Sheet`], [`Cell`], [`ExportBundle`])
//! - **Request documents** ([`DashboardExportRequest`], [`WidgetExportRequest`])
//! - **Error types** ([`QuireError`]) and the [`Result`] alias
//!
//! # Example
//!
//! ```rust
//! use quire::domain::{Widget, WidgetId, WidgetResult, WidgetType};
//! use serde_json::json;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let widget = Widget::new(WidgetId::new("w-1")?, "Revenue", WidgetType::Kpi);
//! let result = WidgetResult::success(json!({"value": 42}));
//! assert!(result.is_success());
//! # Ok(())
//! # }
//! ```

pub mod dashboard;
pub mod errors;
pub mod filters;
pub mod ids;
pub mod request;
pub mod result;
pub mod sheet;
pub mod widget;

// Re-export commonly used types for convenience
pub use dashboard::{Dashboard, DashboardBuilder, UNKNOWN_OWNER};
pub use errors::{QuireError, WidgetErrorDetail};
pub use filters::FilterSet;
pub use ids::WidgetId;
pub use request::{DashboardExportRequest, WidgetEntry, WidgetExportRequest};
pub use result::Result;
pub use sheet::{Cell, ExportBundle, Row, Sheet};
pub use widget::{ResultSummary, Widget, WidgetResult, WidgetType};
