//! Filter annotation
//!
//! Renders the applied filter set into exports, either as one header cell
//! (single-widget export) or as a block of rows (dashboard summary sheet).

use crate::domain::filters::is_blank;
use crate::domain::{Cell, FilterSet, Row};
use serde_json::Value;

/// Marker row that introduces the filter block in the summary sheet
pub const APPLIED_FILTERS_MARKER: &str = "Applied Filters:";

/// Separator between filter lines in a single header cell
pub const HEADER_SEPARATOR: &str = " | ";

/// Separator between items of a list-valued filter
pub const LIST_SEPARATOR: &str = ", ";

/// One `"<Label>: <value>"` line per active filter, in insertion order
///
/// # Examples
///
/// ```
/// use quire::core::annotate::render;
/// use quire::domain::FilterSet;
/// use serde_json::json;
///
/// let filters = FilterSet::new()
///     .with("status", json!("active"))
///     .with("region", json!(["us", "eu"]));
///
/// assert_eq!(render(&filters), vec!["Status: active", "Region: us, eu"]);
/// ```
pub fn render(filters: &FilterSet) -> Vec<String> {
    filters
        .active()
        .map(|(key, value)| format!("{}: {}", label(key), render_value(value)))
        .collect()
}

/// All filter lines joined into a single cell, `None` when nothing is active
pub fn render_for_header(filters: &FilterSet) -> Option<String> {
    let lines = render(filters);
    (!lines.is_empty()).then(|| lines.join(HEADER_SEPARATOR))
}

/// Filter block for the summary sheet
///
/// A blank separator row, the [`APPLIED_FILTERS_MARKER`] row, then one row per
/// filter line. Empty when no filter is active.
pub fn render_for_summary(filters: &FilterSet) -> Vec<Row> {
    let lines = render(filters);
    if lines.is_empty() {
        return Vec::new();
    }

    let mut rows = Vec::with_capacity(lines.len() + 2);
    rows.push(Vec::new());
    rows.push(vec![Cell::from(APPLIED_FILTERS_MARKER)]);
    rows.extend(lines.into_iter().map(|line| vec![Cell::Text(line)]));
    rows
}

/// Turns a filter key into a display label
///
/// Underscores become spaces and the first letter of every word is
/// upper-cased; the rest of each word is left alone.
pub fn label(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut at_word_start = true;

    for c in key.chars() {
        let c = if c == '_' { ' ' } else { c };
        if at_word_start && !c.is_whitespace() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace();
    }

    out
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Array(items) => items
            .iter()
            .filter(|item| !is_blank(item))
            .map(render_scalar)
            .collect::<Vec<_>>()
            .join(LIST_SEPARATOR),
        other => render_scalar(other),
    }
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case("status", "Status")]
    #[test_case("date_range", "Date Range")]
    #[test_case("owner_ID", "Owner ID")]
    #[test_case("already Spaced", "Already Spaced")]
    #[test_case("_leading", " Leading")]
    #[test_case("", "")]
    fn test_label(key: &str, expected: &str) {
        assert_eq!(label(key), expected);
    }

    #[test]
    fn test_render_empty() {
        let filters = FilterSet::new();
        assert!(render(&filters).is_empty());
        assert_eq!(render_for_header(&filters), None);
        assert!(render_for_summary(&filters).is_empty());
    }

    #[test]
    fn test_render_skips_blank_values() {
        let filters = FilterSet::new()
            .with("status", json!(""))
            .with("owner", json!(null))
            .with("tags", json!([]));
        assert!(render(&filters).is_empty());
        assert_eq!(render_for_header(&filters), None);
    }

    #[test]
    fn test_render_skips_lists_of_blanks() {
        let filters = FilterSet::new()
            .with("tags", json!(["", null]))
            .with("owners", json!(["", "dana", null]));
        assert_eq!(render(&filters), vec!["Owners: dana"]);
        assert_eq!(
            render_for_header(&FilterSet::new().with("tags", json!(["", null]))),
            None
        );
    }

    #[test]
    fn test_render_scalars_and_lists() {
        let filters = FilterSet::new()
            .with("min_amount", json!(100))
            .with("archived", json!(false))
            .with("ids", json!([1, 2, null, 3]));
        assert_eq!(
            render(&filters),
            vec!["Min Amount: 100", "Archived: false", "Ids: 1, 2, 3"]
        );
    }

    #[test]
    fn test_render_for_header() {
        let filters = FilterSet::new()
            .with("status", json!("active"))
            .with("region", json!(["us", "eu"]));
        assert_eq!(
            render_for_header(&filters),
            Some("Status: active | Region: us, eu".to_string())
        );
    }

    #[test]
    fn test_render_for_summary() {
        let filters = FilterSet::new().with("status", json!("active"));
        let rows = render_for_summary(&filters);
        assert_eq!(
            rows,
            vec![
                vec![],
                vec![Cell::from("Applied Filters:")],
                vec![Cell::from("Status: active")],
            ]
        );
    }
}
