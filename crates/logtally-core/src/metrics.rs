//! Metrics aggregation over normalised entries.
//!
//! [`Analyzer`] folds entries into [`Metrics`] in a single forward pass. It
//! can also be fed one entry at a time through [`Analyzer::record`] when
//! entries are produced incrementally.

use std::collections::{BTreeMap, HashSet};

use crate::config::MetricsConfig;
use crate::types::LogEntry;

/// Category value → number of entries carrying it. Ordered by key so
/// renderers can list it directly.
pub type FrequencyTable = BTreeMap<String, usize>;

/// Summary statistics over a sequence of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metrics {
    /// Number of entries folded in.
    pub total: usize,
    pub by_level: FrequencyTable,
    pub by_action: FrequencyTable,
    pub by_source: FrequencyTable,
    /// Distinct non-empty user ids.
    pub users: HashSet<String>,
    /// Entries whose level is one of the configured error spellings.
    pub errors: usize,
}

impl Metrics {
    pub fn active_users(&self) -> usize {
        self.users.len()
    }

    /// Error percentage in `0.0..=100.0`, or `None` for an empty set.
    pub fn error_rate(&self) -> Option<f64> {
        (self.total > 0).then(|| self.errors as f64 / self.total as f64 * 100.0)
    }
}

/// Folds [`LogEntry`] values into [`Metrics`].
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: MetricsConfig,
}

impl Analyzer {
    pub fn new(config: MetricsConfig) -> Self {
        Self { config }
    }

    /// Aggregate `entries` in order into a fresh [`Metrics`].
    pub fn analyze<'a, I>(&self, entries: I) -> Metrics
    where
        I: IntoIterator<Item = &'a LogEntry>,
    {
        let mut metrics = Metrics::default();
        for entry in entries {
            self.record(&mut metrics, entry);
        }
        metrics
    }

    /// Fold a single entry into `metrics`.
    pub fn record(&self, metrics: &mut Metrics, entry: &LogEntry) {
        metrics.total += 1;

        bump(&mut metrics.by_level, &entry.level);
        bump(&mut metrics.by_action, &entry.action);
        bump(&mut metrics.by_source, &entry.source);

        if !entry.user_id.is_empty() && !metrics.users.contains(&entry.user_id) {
            metrics.users.insert(entry.user_id.clone());
        }

        if self.is_error(&entry.level) {
            metrics.errors += 1;
        }
    }

    /// Exact, case-sensitive match against the configured spellings.
    pub fn is_error(&self, level: &str) -> bool {
        self.config.error_levels.iter().any(|spelling| spelling == level)
    }
}

/// Aggregate `entries` with the default error spellings (`error`, `ERROR`).
pub fn analyze(entries: &[LogEntry]) -> Metrics {
    Analyzer::default().analyze(entries)
}

fn bump(table: &mut FrequencyTable, key: &str) {
    if key.is_empty() {
        return;
    }
    match table.get_mut(key) {
        Some(count) => *count += 1,
        None => {
            table.insert(key.to_owned(), 1);
        }
    }
}
