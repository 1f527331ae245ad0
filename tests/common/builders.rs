//! Test builders: ergonomic constructors for `LogEntry` and raw records.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use logtally::{LogEntry, RawRecord};

// ---------------------------------------------------------------------------
// LogEntryBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`LogEntry`] test fixtures.
///
/// # Example
///
/// ```rust
/// let entry = LogEntryBuilder::new()
///     .level("error")
///     .user("u-1001")
///     .action("chat")
///     .build();
/// ```
pub struct LogEntryBuilder {
    ts: chrono::DateTime<chrono::Utc>,
    level: String,
    source: String,
    user_id: String,
    action: String,
    duration_ms: i64,
    message: String,
}

impl LogEntryBuilder {
    pub fn new() -> Self {
        Self {
            ts: chrono::Utc::now(),
            level: String::new(),
            source: String::new(),
            user_id: String::new(),
            action: String::new(),
            duration_ms: 0,
            message: String::new(),
        }
    }

    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn build(self) -> LogEntry {
        LogEntry {
            timestamp: self.ts,
            level: self.level,
            source: self.source,
            user_id: self.user_id,
            action: self.action,
            duration_ms: self.duration_ms,
            message: self.message,
            metadata: RawRecord::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Build an entry with only `level` set.
pub fn level_entry(level: &str) -> LogEntry {
    LogEntryBuilder::new().level(level).build()
}

/// Build one entry per level, in order.
pub fn entries_with_levels(levels: &[&str]) -> Vec<LogEntry> {
    levels.iter().map(|level| level_entry(level)).collect()
}

/// Parse a JSON object literal into a [`RawRecord`]. Panics on non-objects.
pub fn raw_record(line: &str) -> RawRecord {
    serde_json::from_str(line).unwrap_or_else(|err| panic!("bad test record {line:?}: {err}"))
}

/// Normalise one ndjson line with the default field names.
pub fn entry_from_line(line: &str) -> LogEntry {
    logtally::normalizer::normalize(raw_record(line))
}
