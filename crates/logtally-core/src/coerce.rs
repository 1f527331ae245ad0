//! Total conversions from loosely-typed JSON values.
//!
//! None of these functions fail. A value of the wrong shape degrades to an
//! empty string, zero, or `None` for timestamps, and the normalizer picks the
//! fallback from there.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;

/// Numeric epoch values above this are read as milliseconds, the rest as
/// seconds.
pub const MILLIS_THRESHOLD: f64 = 1e12;

/// Textual timestamp layouts, tried in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextLayout {
    /// RFC 3339 with or without fractional seconds, `Z` or a numeric offset.
    Rfc3339,
    /// A zone-less layout, read as UTC.
    Naive(&'static str),
}

const TEXT_LAYOUTS: &[TextLayout] = &[TextLayout::Rfc3339, TextLayout::Naive("%Y-%m-%d %H:%M:%S")];

impl TextLayout {
    fn parse(self, s: &str) -> Option<DateTime<Utc>> {
        match self {
            TextLayout::Rfc3339 => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|ts| ts.with_timezone(&Utc)),
            TextLayout::Naive(fmt) => NaiveDateTime::parse_from_str(s, fmt)
                .ok()
                .map(|ts| ts.and_utc()),
        }
    }
}

/// Render a value as a string.
///
/// Absent and `null` become `""`, strings are returned as-is, and anything
/// else is rendered as compact JSON (`42`, `true`, `{"a":1}`).
pub fn to_string(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Convert a numeric value to `i64`, truncating floats toward zero.
///
/// Out-of-range values saturate. Non-numeric values become `0`.
pub fn to_i64(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        _ => 0,
    }
}

/// Parse a timestamp from a string or a Unix epoch number.
///
/// Returns `None` when the value is of another type, when no layout matches,
/// or when the epoch is outside the representable range. Callers substitute
/// ingest time for `None`.
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => TEXT_LAYOUTS.iter().find_map(|layout| layout.parse(s)),
        Value::Number(n) => {
            let epoch = n.as_f64()?;
            if epoch > MILLIS_THRESHOLD {
                DateTime::from_timestamp_millis(epoch as i64)
            } else {
                DateTime::from_timestamp(epoch as i64, 0)
            }
        }
        _ => None,
    }
}
