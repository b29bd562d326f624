// Quire - Dashboard Widget Data Exporter
// Copyright (c) 2025 Quire Contributors
// Licensed under the MIT License

//! # Quire - Dashboard Widget Data Exporter
//!
//! Quire turns resolved dashboard widget data into tabular export bundles:
//! a dashboard summary sheet followed by one sheet per widget that has data,
//! written as CSV files or a single JSON document.
//!
//! ## Overview
//!
//! This library provides:
//! - **Formatting** of widget payloads into headings and rows, per widget type
//! - **Annotation** of sheets with the filters that were active
//! - **Composition** of dashboard and single-widget exports
//! - **Writing** bundles to disk
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Formatting, annotation, sheet assembly and export composition
//! - [`adapters`] - Output writers
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use quire::core::export::{ExportComposer, ExportOptions, FixedClock};
//! use quire::domain::{
//!     Dashboard, FilterSet, Widget, WidgetEntry, WidgetId, WidgetResult, WidgetType,
//! };
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dashboard = Dashboard::builder()
//!     .name("Sales")
//!     .owner_name("Dana")
//!     .created_at(Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap())
//!     .build()?;
//!
//! let entries = vec![WidgetEntry::new(
//!     Widget::new(WidgetId::new("w1")?, "Revenue", WidgetType::Kpi),
//!     WidgetResult::success(json!({ "value": 1200, "label": "Revenue" })),
//! )];
//!
//! let composer = ExportComposer::new(ExportOptions::default())
//!     .with_clock(FixedClock::new(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()));
//! let bundle = composer.export_dashboard(&dashboard, &entries, &FilterSet::new())?;
//!
//! assert_eq!(bundle.len(), 2);
//! assert_eq!(bundle.sheets()[0].title, "Dashboard Summary");
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`domain::QuireError`]. Missing or malformed
//! payload fields are never errors; they render as documented defaults.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
