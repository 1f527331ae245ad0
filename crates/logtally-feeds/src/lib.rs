//! logtally-feeds: log readers for logtally.
//!
//! Each reader consumes newline-delimited JSON, hands every record to a
//! [`Normalizer`](logtally_core::Normalizer), and returns the entries in
//! stream order together with a diagnostic for each line it had to skip.

pub mod error;
pub mod file;
pub mod ndjson;

pub use error::IngestError;
pub use file::read_file;
pub use ndjson::{read_entries, ReadOutcome, SkippedLine};
