//! Dashboard domain model

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Owner display name used when the dashboard has none
pub const UNKNOWN_OWNER: &str = "Unknown";

/// A dashboard as seen by the exporter
///
/// Only the metadata shown in the summary sheet is carried; widgets travel
/// separately with their resolved results.
///
/// # Examples
///
/// ```
/// use quire::domain::DashboardBuilder;
/// use chrono::{TimeZone, Utc};
///
/// let dashboard = DashboardBuilder::new()
///     .name("Sales Overview")
///     .owner_name("Dana")
///     .created_at(Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap())
///     .build()
///     .unwrap();
/// assert_eq!(dashboard.owner_display_name(), "Dana");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    /// Dashboard name
    pub name: String,

    /// Display name of the owning user
    #[serde(default, alias = "owner")]
    pub owner_name: Option<String>,

    /// Creation timestamp
    ///
    /// Accepts RFC 3339, or `YYYY-MM-DD HH:MM:SS` read as UTC.
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Dashboard {
    /// Creates a new builder for constructing a Dashboard
    pub fn builder() -> DashboardBuilder {
        DashboardBuilder::default()
    }

    /// Owner name, or [`UNKNOWN_OWNER`] when absent or blank
    pub fn owner_display_name(&self) -> &str {
        self.owner_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_OWNER)
    }
}

/// Builder for constructing Dashboard instances
#[derive(Debug, Default)]
pub struct DashboardBuilder {
    name: Option<String>,
    owner_name: Option<String>,
    created_at: Option<DateTime<Utc>>,
}

impl DashboardBuilder {
    /// Creates a new DashboardBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the dashboard name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the owner display name
    pub fn owner_name(mut self, owner_name: impl Into<String>) -> Self {
        self.owner_name = Some(owner_name.into());
        self
    }

    /// Sets the creation timestamp
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Builds the Dashboard
    ///
    /// # Errors
    ///
    /// Returns an error if the name or creation timestamp is missing
    pub fn build(self) -> Result<Dashboard, String> {
        Ok(Dashboard {
            name: self.name.ok_or("name is required")?,
            owner_name: self.owner_name,
            created_at: self.created_at.ok_or("created_at is required")?,
        })
    }
}

/// Parses an RFC 3339 timestamp, or a naive `YYYY-MM-DD HH:MM:SS` as UTC
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    let raw = raw.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Ok(at.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .map(|naive| Utc.from_utc_datetime(&naive))
        .map_err(|_| {
            format!("invalid timestamp '{raw}': expected RFC 3339 or YYYY-MM-DD HH:MM:SS")
        })
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}
