//! Core types for logtally-core.
//!
//! This module defines the data shared across the pipeline: the untyped
//! [`RawRecord`] produced by the JSON layer and the canonical [`LogEntry`]
//! the normalizer builds from it.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One deserialised ndjson line: string keys mapped to tagged JSON values.
///
/// A missing key is the "absent" case; lookups return `Option<&Value>`.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

/// A normalised log entry produced by the normalizer.
///
/// Every string field may be empty when the source record did not carry it.
/// `timestamp` is always set: either the value parsed from the record or the
/// time the record was normalised.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    /// Parsed record timestamp, or ingest time when none could be parsed.
    pub timestamp: DateTime<Utc>,
    /// Log level exactly as written in the record (no case folding).
    pub level: String,
    /// Emitting subsystem, e.g. `user_behavior` or `system`.
    pub source: String,
    pub user_id: String,
    pub action: String,
    pub duration_ms: i64,
    pub message: String,
    /// The full source record, including the keys promoted to the fields
    /// above.
    pub metadata: RawRecord,
}
