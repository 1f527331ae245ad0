//! Domain-specific assertion macros for logtally harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that say *which*
//! pipeline invariant broke and on what input.

use logtally::metrics::FrequencyTable;
use logtally::{LogEntry, Metrics};

// ---------------------------------------------------------------------------
// Entry assertions
// ---------------------------------------------------------------------------

/// Assert that the levels of `entries` are exactly `expected`, in order.
///
/// ```rust
/// assert_levels!(outcome.entries, ["info", "error"]);
/// ```
#[macro_export]
macro_rules! assert_levels {
    ($entries:expr, $expected:expr) => {{
        let entries: &[logtally::LogEntry] = &$entries;
        let actual: Vec<&str> = entries.iter().map(|e| e.level.as_str()).collect();
        let expected: Vec<&str> = $expected.iter().map(|s| &**s).collect();
        pretty_assertions::assert_eq!(actual, expected, "entry levels differ");
    }};
}

/// Assert that an entry's timestamp was taken at ingest time, i.e. falls
/// inside `[before, after]`.
pub fn assert_ingest_time(
    entry: &LogEntry,
    before: chrono::DateTime<chrono::Utc>,
    after: chrono::DateTime<chrono::Utc>,
) {
    assert!(
        entry.timestamp >= before && entry.timestamp <= after,
        "expected ingest-time timestamp in [{before}, {after}], got {}\n  metadata: {:?}",
        entry.timestamp,
        entry.metadata
    );
}

// ---------------------------------------------------------------------------
// Metrics invariants
// ---------------------------------------------------------------------------

/// Check the invariants every [`Metrics`] must satisfy for `entries`.
pub fn assert_metrics_invariants(metrics: &Metrics, entries: &[LogEntry]) {
    assert_eq!(metrics.total, entries.len(), "total must equal entry count");

    let with_user = entries.iter().filter(|e| !e.user_id.is_empty()).count();
    assert!(
        metrics.active_users() <= with_user && metrics.active_users() <= metrics.total,
        "active users {} exceeds entries with a user ({with_user}) or total ({})",
        metrics.active_users(),
        metrics.total
    );

    let tables: [(&FrequencyTable, fn(&LogEntry) -> &str); 3] = [
        (&metrics.by_level, |e| e.level.as_str()),
        (&metrics.by_action, |e| e.action.as_str()),
        (&metrics.by_source, |e| e.source.as_str()),
    ];
    for (table, field) in tables {
        for (key, count) in table {
            assert!(!key.is_empty(), "frequency tables must not count empty values");
            let expected = entries.iter().filter(|e| field(e) == key.as_str()).count();
            assert_eq!(*count, expected, "count for {key:?}");
        }
        let counted: usize = table.values().sum();
        let non_empty = entries.iter().filter(|e| !field(e).is_empty()).count();
        assert_eq!(counted, non_empty, "every non-empty value must be counted");
    }

    let errors = entries
        .iter()
        .filter(|e| e.level == "error" || e.level == "ERROR")
        .count();
    assert_eq!(metrics.errors, errors, "errors must count exactly `error`/`ERROR`");
}
