//! Domain identifier types with validation
//!
//! Newtype wrappers keep widget identifiers from being mixed up with titles
//! and other free-form strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Widget identifier newtype wrapper
///
/// Identifies a widget within a dashboard. The resolver that produces widget
/// results keys them by this value, so it must be unique per export request.
///
/// # Examples
///
/// ```
/// use quire::domain::ids::WidgetId;
/// use std::str::FromStr;
///
/// let id = WidgetId::from_str("revenue-kpi").unwrap();
/// assert_eq!(id.as_str(), "revenue-kpi");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "IdRepr", into = "String")]
pub struct WidgetId(String);

impl WidgetId {
    /// Creates a new WidgetId from a string
    ///
    /// # Returns
    ///
    /// Returns `Ok(WidgetId)` if the ID is non-blank, `Err` otherwise
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Widget ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the widget ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WidgetId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for WidgetId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<WidgetId> for String {
    fn from(id: WidgetId) -> Self {
        id.0
    }
}

/// Dashboards commonly use numeric primary keys, so both JSON strings and
/// integers are accepted on input.
#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Text(String),
    Number(u64),
}

impl TryFrom<IdRepr> for WidgetId {
    type Error = String;

    fn try_from(value: IdRepr) -> Result<Self, Self::Error> {
        match value {
            IdRepr::Text(s) => Self::new(s),
            IdRepr::Number(n) => Self::new(n.to_string()),
        }
    }
}
