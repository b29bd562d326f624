//! Sheet writer abstraction
//!
//! Writers turn an [`ExportBundle`] into files. The export core never touches
//! the filesystem; everything on disk goes through this trait.

use crate::domain::{ExportBundle, Result, Sheet};
use std::path::PathBuf;

/// Serializes export bundles
pub trait SheetWriter: Send + Sync {
    /// Short name of the output format, used in logs
    fn format_name(&self) -> &'static str;

    /// Writes every sheet of the bundle
    ///
    /// # Returns
    ///
    /// Paths of the files written, in sheet order
    ///
    /// # Errors
    ///
    /// Returns an error if any file cannot be created or written. Files
    /// written before the failure are left in place.
    fn write_bundle(&self, bundle: &ExportBundle) -> Result<Vec<PathBuf>>;

    /// Writes a single sheet as a one-sheet bundle
    fn write_sheet(&self, sheet: &Sheet) -> Result<Vec<PathBuf>> {
        self.write_bundle(&ExportBundle::from(vec![sheet.clone()]))
    }
}
