//! logtally-core: core library for logtally.
//!
//! This crate holds the pure, I/O-free layers of the pipeline plus the shared
//! types they exchange.
//!
//! # Architecture
//!
//! ```text
//! ndjson line ──► RawRecord ──► Normalizer ──► LogEntry ──► Analyzer ──► Metrics
//!                                   │
//!                                 coerce
//! ```
//!
//! Reading lines lives in `logtally-feeds`; rendering [`Metrics`] lives in
//! `logtally-report`.

pub mod coerce;
pub mod config;
pub mod metrics;
pub mod normalizer;
pub mod types;

pub use config::Config;
pub use metrics::{Analyzer, Metrics};
pub use normalizer::Normalizer;
pub use types::{LogEntry, RawRecord};
