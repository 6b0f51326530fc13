//! Per-type value comparators.
//!
//! A field's declared type decides how two of its values order against each
//! other. Fields without a type compare numerically when both values are
//! numbers and as text otherwise.

use super::value::FieldValue;
use super::view::SortDirection;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Integer,
    Datetime,
}

impl FieldType {
    pub fn compare(self, a: &FieldValue, b: &FieldValue, direction: SortDirection) -> Ordering {
        let ordering = match self {
            FieldType::Text => compare_text(a, b),
            FieldType::Integer => compare_numbers(a, b),
            FieldType::Datetime => compare_datetimes(a, b),
        };
        direction.apply(ordering)
    }
}

/// Comparator for a field that may or may not declare a type.
pub fn compare_values(
    field_type: Option<FieldType>,
    a: &FieldValue,
    b: &FieldValue,
    direction: SortDirection,
) -> Ordering {
    match field_type {
        Some(field_type) => field_type.compare(a, b, direction),
        None => {
            let ordering = match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                _ => compare_text(a, b),
            };
            direction.apply(ordering)
        }
    }
}

// Values that are not numbers order before every number.
fn compare_numbers(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_text(a: &FieldValue, b: &FieldValue) -> Ordering {
    let (a, b) = (a.to_string(), b.to_string());
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(&b))
}

fn compare_datetimes(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (parse_datetime(a), parse_datetime(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        _ => compare_text(a, b),
    }
}

/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS` (read as UTC), or a bare date.
fn parse_datetime(value: &FieldValue) -> Option<DateTime<Utc>> {
    let text = value.as_str()?.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return Some(parsed.and_utc());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|parsed| parsed.and_utc())
}
