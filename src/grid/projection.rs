//! The pure projection pipeline: date filter, categorical filter, free-text
//! filter, then comparator sort, producing a key-ordered view of the rows.
//!
//! Every function here is deterministic and side-effect free. The pipeline
//! takes the arena slice plus the current filter and sort state and returns
//! the ordered list of surviving row keys; the paginator slices that list
//! and the renderer draws the slice. Stage order is fixed: each filter only
//! sees what the previous stage passed.

use super::types::{Direction, FilterState, Row, RowKey, Sort};
use chrono::{DateTime, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::cmp::Ordering;

/// Matches strings that look like ISO-8601 instants, e.g.
/// `2024-01-10T00:00:00.000Z`. Used by the comparator to decide between
/// chronological and lexicographic ordering.
static ISO_DATETIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}T").expect("static pattern"));

/// Sentinel for timestamps that failed to parse. Sorts before every real
/// instant and fails any lower date bound, so malformed data degrades
/// instead of erroring.
pub(crate) const INVALID_INSTANT: i64 = i64::MIN;

/// Resolves a field path against a row, supporting exactly one dot level of
/// nesting. `"place.display_name"` reads `row["place"]["display_name"]`.
pub(crate) fn field_value<'a>(row: &'a Row, path: &str) -> Option<&'a Value> {
    match path.split_once('.') {
        Some((parent, child)) => row.get(parent)?.as_object()?.get(child),
        None => row.get(path),
    }
}

/// Stringifies a cell value for filtering and comparison. Missing and null
/// become the empty string, which never substring-matches a non-empty term.
pub(crate) fn display_string(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Parses a timestamp string to epoch milliseconds, accepting full ISO-8601
/// instants and bare `YYYY-MM-DD` dates (anchored to UTC midnight).
/// Unparsable input yields [`INVALID_INSTANT`].
pub(crate) fn parse_instant_millis(raw: &str) -> i64 {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.timestamp_millis();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return dt.and_utc().timestamp_millis();
        }
    }
    INVALID_INSTANT
}

/// Runs the full pipeline and returns the ordered surviving keys.
///
/// `date_field` and `category_field` name the designated columns for the
/// date-range and categorical filters; when unset, those stages are skipped
/// regardless of filter state.
pub(crate) fn project(
    rows: &[Row],
    filter: &FilterState,
    sort: Option<&Sort>,
    date_field: Option<&str>,
    category_field: Option<&str>,
) -> Vec<RowKey> {
    let mut keys: Vec<RowKey> = (0..rows.len()).map(RowKey).collect();

    // Stage 1: date range.
    if let Some(field) = date_field {
        if filter.date_from.is_some() || filter.date_to.is_some() {
            let from_ms = filter
                .date_from
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|dt| dt.and_utc().timestamp_millis());
            let to_ms = filter
                .date_to
                .and_then(|d| d.and_hms_opt(23, 59, 59))
                .map(|dt| dt.and_utc().timestamp_millis());
            keys.retain(|key| passes_date_range(&rows[key.0], field, from_ms, to_ms));
        }
    }

    // Stage 2: categorical membership.
    if let Some(field) = category_field {
        if !filter.categories.is_empty() {
            keys.retain(|key| match field_value(&rows[key.0], field) {
                Some(Value::String(s)) => filter.categories.contains(s),
                _ => false,
            });
        }
    }

    // Stage 3: free text.
    if let Some(field) = &filter.search_field {
        let needle = filter.search_term.trim().to_lowercase();
        if !needle.is_empty() {
            keys.retain(|key| {
                display_string(field_value(&rows[key.0], field))
                    .to_lowercase()
                    .contains(&needle)
            });
        }
    }

    // Stage 4: sort. `sort_by` is stable, so ties keep their filtered order.
    if let Some(sort) = sort {
        keys.sort_by(|a, b| {
            let ord = compare_cells(
                field_value(&rows[a.0], &sort.field),
                field_value(&rows[b.0], &sort.field),
            );
            match sort.direction {
                Direction::Ascending => ord,
                Direction::Descending => ord.reverse(),
            }
        });
    }

    keys
}

fn passes_date_range(row: &Row, field: &str, from_ms: Option<i64>, to_ms: Option<i64>) -> bool {
    // A row without the designated field is out once either bound is set.
    let raw = match field_value(row, field) {
        Some(Value::String(s)) if !s.is_empty() => s,
        _ => return false,
    };
    let instant = parse_instant_millis(raw);
    if let Some(from) = from_ms {
        if instant < from {
            return false;
        }
    }
    if let Some(to) = to_ms {
        if instant > to {
            return false;
        }
    }
    true
}

/// Compares two cell values for sorting.
///
/// Dispatch order: both numbers compare numerically; both ISO-instant-like
/// strings compare chronologically (unparsable instants sort lowest);
/// everything else falls back to a case-insensitive string comparison.
pub(crate) fn compare_cells(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    if let (Some(Value::Number(x)), Some(Value::Number(y))) = (a, b) {
        let x = x.as_f64().unwrap_or(0.0);
        let y = y.as_f64().unwrap_or(0.0);
        return x.partial_cmp(&y).unwrap_or(Ordering::Equal);
    }
    if let (Some(Value::String(x)), Some(Value::String(y))) = (a, b) {
        if ISO_DATETIME.is_match(x) && ISO_DATETIME.is_match(y) {
            return parse_instant_millis(x).cmp(&parse_instant_millis(y));
        }
    }
    display_string(a)
        .to_lowercase()
        .cmp(&display_string(b).to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> Row {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("test rows are objects"),
        }
    }

    #[test]
    fn field_value_resolves_one_dot_level() {
        let r = row(json!({"place": {"display_name": "Rosario"}, "name": "a"}));
        assert_eq!(
            field_value(&r, "place.display_name"),
            Some(&json!("Rosario"))
        );
        assert_eq!(field_value(&r, "name"), Some(&json!("a")));
        assert_eq!(field_value(&r, "place.missing"), None);
        assert_eq!(field_value(&r, "name.too_deep"), None);
    }

    #[test]
    fn display_string_handles_non_strings() {
        assert_eq!(display_string(Some(&json!(42))), "42");
        assert_eq!(display_string(Some(&json!(true))), "true");
        assert_eq!(display_string(Some(&Value::Null)), "");
        assert_eq!(display_string(None), "");
    }

    #[test]
    fn malformed_instants_hit_the_sentinel() {
        assert_eq!(parse_instant_millis("not a date"), INVALID_INSTANT);
        assert!(parse_instant_millis("2024-01-10T00:00:00.000Z") > INVALID_INSTANT);
        assert!(parse_instant_millis("2024-01-10") > INVALID_INSTANT);
    }

    #[test]
    fn comparator_prefers_numbers_then_dates_then_strings() {
        assert_eq!(
            compare_cells(Some(&json!(2)), Some(&json!(10))),
            Ordering::Less
        );
        assert_eq!(
            compare_cells(
                Some(&json!("2024-02-10T00:00:00.000Z")),
                Some(&json!("2024-01-10T00:00:00.000Z")),
            ),
            Ordering::Greater
        );
        // Lexicographically "10" < "9" would hold, but these are not dates
        // or numbers, so case-insensitive string order applies.
        assert_eq!(
            compare_cells(Some(&json!("Banana")), Some(&json!("apple"))),
            Ordering::Greater
        );
    }

    #[test]
    fn invalid_dates_sort_lowest() {
        // Shaped like an instant, but month 13 does not parse.
        assert_eq!(
            compare_cells(
                Some(&json!("2024-13-45T00:00:00Z")),
                Some(&json!("1970-01-01T00:00:00.000Z")),
            ),
            Ordering::Less
        );
    }
}
