//! Normalizer: maps one [`RawRecord`] into a canonical [`LogEntry`].
//!
//! Each canonical field is read from a list of candidate keys; the first key
//! present in the record wins, even if its value turns out to be unusable.
//! Nothing here fails: missing or ill-typed fields fall back to an empty
//! string, zero, or the current time for the timestamp.

use chrono::Utc;
use serde_json::Value;

use crate::coerce;
use crate::config::FieldConfig;
use crate::types::{LogEntry, RawRecord};

/// Record normalizer configured with the candidate key names for each field.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    fields: FieldConfig,
}

impl Normalizer {
    pub fn new(fields: FieldConfig) -> Self {
        Self { fields }
    }

    /// Build a [`LogEntry`] from `record`, which is kept whole as the entry's
    /// metadata.
    pub fn normalize(&self, record: RawRecord) -> LogEntry {
        let fields = &self.fields;

        let timestamp = first_present(&record, &fields.timestamp)
            .and_then(coerce::parse_timestamp)
            .unwrap_or_else(|| {
                tracing::trace!("no usable timestamp in record, using ingest time");
                Utc::now()
            });

        LogEntry {
            timestamp,
            level: coerce::to_string(first_present(&record, &fields.level)),
            source: coerce::to_string(record.get(&fields.source)),
            user_id: coerce::to_string(record.get(&fields.user_id)),
            action: coerce::to_string(record.get(&fields.action)),
            duration_ms: coerce::to_i64(record.get(&fields.duration_ms)),
            message: coerce::to_string(first_present(&record, &fields.message)),
            metadata: record,
        }
    }
}

/// Normalise `record` with the default field names.
pub fn normalize(record: RawRecord) -> LogEntry {
    Normalizer::default().normalize(record)
}

fn first_present<'a>(record: &'a RawRecord, keys: &[String]) -> Option<&'a Value> {
    keys.iter().find_map(|key| record.get(key))
}
