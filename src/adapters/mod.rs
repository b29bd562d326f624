//! External integrations for Quire.
//!
//! - [`writer`] - Serialization of export bundles to CSV or JSON files
//!
//! # Design Pattern
//!
//! Writers sit behind the [`writer::SheetWriter`] trait so the export core
//! stays free of I/O and tests can inspect bundles directly.
//!
//! ```rust,no_run
//! use quire::adapters::writer::{CsvDirectoryWriter, SheetWriter};
//! use quire::domain::ExportBundle;
//!
//! # fn example(bundle: &ExportBundle) -> Result<(), Box<dyn std::error::Error>> {
//! let writer = CsvDirectoryWriter::new("exports");
//! let files = writer.write_bundle(bundle)?;
//! println!("Wrote {} files", files.len());
//! # Ok(())
//! # }
//! ```

pub mod writer;
