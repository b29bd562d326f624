//! Tabular output model
//!
//! Sheets are the unit handed to the writers. They hold plain scalars only;
//! any structure in widget payloads is flattened before it gets here.

use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// A single scalar cell value
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Blank cell
    Empty,
    /// Boolean value
    Bool(bool),
    /// Integral number
    Integer(i64),
    /// Floating point number
    Float(f64),
    /// Text
    Text(String),
}

impl Cell {
    /// Converts an arbitrary JSON value into a cell
    ///
    /// Arrays and objects are kept as compact JSON text so nothing is lost.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Self::Empty,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Integer(i),
                None => Self::Float(n.as_f64().unwrap_or_default()),
            },
            Value::String(s) => Self::Text(s.clone()),
            Value::Array(_) | Value::Object(_) => Self::Text(value.to_string()),
        }
    }

    /// Whether the cell is blank
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Empty => serializer.serialize_none(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Integer(i) => serializer.serialize_i64(*i),
            Self::Float(x) => serializer.serialize_f64(*x),
            Self::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u64> for Cell {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Self::Float(value as f64), Self::Integer)
    }
}

impl From<usize> for Cell {
    fn from(value: usize) -> Self {
        Self::from(value as u64)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// One row of cells
pub type Row = Vec<Cell>;

/// One titled table in an export
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sheet {
    /// Sheet (tab) title, already truncated
    pub title: String,

    /// Annotation rows written above the heading row
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub preamble: Vec<Row>,

    /// Column headings
    pub headings: Vec<String>,

    /// Data rows
    pub rows: Vec<Row>,
}

impl Sheet {
    /// Number of heading columns
    pub fn width(&self) -> usize {
        self.headings.len()
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether every data row has exactly as many cells as there are headings
    pub fn is_rectangular(&self) -> bool {
        self.rows.iter().all(|row| row.len() == self.headings.len())
    }

    /// Attaches preamble rows
    pub fn with_preamble(mut self, preamble: Vec<Row>) -> Self {
        self.preamble = preamble;
        self
    }
}

/// Ordered sheets produced by a single export call
///
/// For dashboard exports the first sheet is the summary sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ExportBundle(Vec<Sheet>);

impl ExportBundle {
    /// Creates an empty bundle
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a sheet
    pub fn push(&mut self, sheet: Sheet) {
        self.0.push(sheet);
    }

    /// Number of sheets
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the bundle has no sheets
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All sheets in order
    pub fn sheets(&self) -> &[Sheet] {
        &self.0
    }

    /// Iterates over the sheets in order
    pub fn iter(&self) -> std::slice::Iter<'_, Sheet> {
        self.0.iter()
    }

    /// Looks a sheet up by its (truncated) title
    pub fn sheet(&self, title: &str) -> Option<&Sheet> {
        self.0.iter().find(|sheet| sheet.title == title)
    }
}

impl From<Vec<Sheet>> for ExportBundle {
    fn from(sheets: Vec<Sheet>) -> Self {
        Self(sheets)
    }
}

impl IntoIterator for ExportBundle {
    type Item = Sheet;
    type IntoIter = std::vec::IntoIter<Sheet>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ExportBundle {
    type Item = &'a Sheet;
    type IntoIter = std::slice::Iter<'a, Sheet>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
