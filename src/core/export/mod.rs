//! Export composition and reporting
//!
//! This module provides the export logic for Quire:
//! - Composition of single-widget sheets and dashboard bundles
//! - Export timestamps via a replaceable clock
//! - Summary and reporting

pub mod clock;
pub mod composer;
pub mod summary;

pub use clock::{format_timestamp, Clock, FixedClock, SystemClock, TIMESTAMP_FORMAT};
pub use composer::{ExportComposer, ExportOptions, SUMMARY_SHEET_TITLE};
pub use summary::ExportSummary;
