//! Sheet assembly
//!
//! Builds titled sheets from headings and rows. Titles are cut to a length
//! every spreadsheet application accepts as a tab name.

use crate::domain::{Cell, QuireError, Row, Sheet};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum sheet title length in characters, suffix included
pub const SHEET_TITLE_MAX_CHARS: usize = 30;

/// Appended to titles that were cut
pub const TRUNCATION_SUFFIX: &str = "...";

/// Title used when a widget has a blank title
pub const UNTITLED_SHEET: &str = "Untitled";

/// What to do with rows whose length differs from the heading row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowShape {
    /// Pad short rows with empty cells and cut long rows to the heading width
    #[default]
    Pad,
    /// Keep rows exactly as produced and let the writer cope
    Raw,
}

impl FromStr for RowShape {
    type Err = QuireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pad" => Ok(Self::Pad),
            "raw" => Ok(Self::Raw),
            _ => Err(QuireError::Configuration(format!(
                "Invalid row shape: {s}. Expected 'pad' or 'raw'"
            ))),
        }
    }
}

impl fmt::Display for RowShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pad => f.write_str("pad"),
            Self::Raw => f.write_str("raw"),
        }
    }
}

/// Cuts a title to [`SHEET_TITLE_MAX_CHARS`] characters
///
/// Titles that fit are returned unchanged. Longer titles keep their first
/// characters and end in [`TRUNCATION_SUFFIX`], for a total of exactly
/// [`SHEET_TITLE_MAX_CHARS`] characters.
///
/// # Examples
///
/// ```
/// use quire::core::sheet::truncate_title;
///
/// assert_eq!(truncate_title("Revenue"), "Revenue");
///
/// let long = "Quarterly revenue by region and product line";
/// let cut = truncate_title(long);
/// assert_eq!(cut.chars().count(), 30);
/// assert!(cut.ends_with("..."));
/// ```
pub fn truncate_title(title: &str) -> String {
    let title = title.trim();
    if title.is_empty() {
        return UNTITLED_SHEET.to_string();
    }

    if title.chars().count() <= SHEET_TITLE_MAX_CHARS {
        return title.to_string();
    }

    let keep = SHEET_TITLE_MAX_CHARS - TRUNCATION_SUFFIX.chars().count();
    let mut cut: String = title.chars().take(keep).collect();
    cut.push_str(TRUNCATION_SUFFIX);
    cut
}

/// Assembles sheets under a fixed row shape policy
#[derive(Debug, Clone, Copy, Default)]
pub struct SheetBuilder {
    row_shape: RowShape,
}

impl SheetBuilder {
    /// Creates a builder with the given row shape policy
    pub fn new(row_shape: RowShape) -> Self {
        Self { row_shape }
    }

    /// Row shape policy in use
    pub fn row_shape(&self) -> RowShape {
        self.row_shape
    }

    /// Builds a sheet
    ///
    /// Always succeeds. Sheets without headings keep their rows as they are.
    pub fn build(&self, title: &str, headings: Vec<String>, rows: Vec<Row>) -> Sheet {
        let rows = match self.row_shape {
            RowShape::Pad if !headings.is_empty() => {
                let width = headings.len();
                rows.into_iter().map(|row| fit_row(row, width)).collect()
            }
            _ => rows,
        };

        Sheet {
            title: truncate_title(title),
            preamble: Vec::new(),
            headings,
            rows,
        }
    }
}

fn fit_row(mut row: Row, width: usize) -> Row {
    row.resize(width, Cell::Empty);
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headings(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_short_title_unchanged() {
        assert_eq!(truncate_title("Revenue"), "Revenue");
        let exact = "a".repeat(SHEET_TITLE_MAX_CHARS);
        assert_eq!(truncate_title(&exact), exact);
    }

    #[test]
    fn test_long_title_is_exactly_max_chars() {
        let title = "x".repeat(45);
        let cut = truncate_title(&title);
        assert_eq!(cut.chars().count(), 30);
        assert_eq!(cut, format!("{}...", "x".repeat(27)));
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let title = "é".repeat(40);
        let cut = truncate_title(&title);
        assert_eq!(cut.chars().count(), 30);
        assert!(cut.starts_with("ééé"));
    }

    #[test]
    fn test_blank_title() {
        assert_eq!(truncate_title("   "), UNTITLED_SHEET);
    }

    #[test]
    fn test_pad_policy_pads_and_cuts() {
        let builder = SheetBuilder::new(RowShape::Pad);
        let sheet = builder.build(
            "T",
            headings(&["A", "B"]),
            vec![
                vec![Cell::from("1")],
                vec![Cell::from("1"), Cell::from("2"), Cell::from("3")],
                vec![],
            ],
        );
        assert!(sheet.is_rectangular());
        assert_eq!(sheet.rows[0], vec![Cell::from("1"), Cell::Empty]);
        assert_eq!(sheet.rows[1], vec![Cell::from("1"), Cell::from("2")]);
        assert_eq!(sheet.rows[2], vec![Cell::Empty, Cell::Empty]);
    }

    #[test]
    fn test_raw_policy_keeps_rows() {
        let builder = SheetBuilder::new(RowShape::Raw);
        let sheet = builder.build("T", headings(&["A", "B"]), vec![vec![Cell::from("1")]]);
        assert!(!sheet.is_rectangular());
        assert_eq!(sheet.rows[0].len(), 1);
    }

    #[test]
    fn test_pad_without_headings_keeps_rows() {
        let sheet = SheetBuilder::default().build("T", vec![], vec![vec![Cell::from("x")]]);
        assert_eq!(sheet.rows, vec![vec![Cell::from("x")]]);
    }

    #[test]
    fn test_row_shape_from_str() {
        assert_eq!(RowShape::from_str("PAD").unwrap(), RowShape::Pad);
        assert_eq!(RowShape::from_str("raw").unwrap(), RowShape::Raw);
        assert!(RowShape::from_str("stretch").is_err());
        assert_eq!(RowShape::Raw.to_string(), "raw");
    }
}
