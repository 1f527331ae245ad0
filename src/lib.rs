//! logtally: summarise newline-delimited JSON logs.
//!
//! This crate re-exports the workspace layers so that integration tests and
//! benches can import them from one place, and provides [`summarize_file`],
//! the whole read → normalise → aggregate pass used by the binary.
//!
//! # Architecture
//!
//! ```text
//! feeds (read + normalize) ──► core::metrics (aggregate) ──► report (render)
//! ```
//!
//! Everything runs on the calling thread, one pass over the input.

use std::path::Path;

pub use logtally_core::{coerce, config, metrics, normalizer, types};
pub use logtally_core::{Analyzer, Config, LogEntry, Metrics, Normalizer, RawRecord};
pub use logtally_feeds::{read_entries, read_file, IngestError, ReadOutcome, SkippedLine};
pub use logtally_report::{render, render_to_string};

/// Result of summarising one file.
#[derive(Debug, Clone)]
pub struct Summary {
    pub metrics: Metrics,
    /// Lines that were skipped as malformed, in stream order.
    pub skipped: Vec<SkippedLine>,
}

/// Read `path` and aggregate its entries using `config`.
pub fn summarize_file(path: impl AsRef<Path>, config: &Config) -> Result<Summary, IngestError> {
    let normalizer = Normalizer::new(config.fields.clone());
    let outcome = read_file(path, &normalizer)?;
    let metrics = Analyzer::new(config.metrics.clone()).analyze(&outcome.entries);

    Ok(Summary {
        metrics,
        skipped: outcome.skipped,
    })
}
