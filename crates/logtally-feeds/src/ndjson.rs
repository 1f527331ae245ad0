//! Newline-delimited JSON reader.
//!
//! Lines are split on `\n` with one trailing `\r` dropped. A zero-length line
//! is skipped silently; whitespace is not trimmed, so a line of spaces is
//! malformed like any other non-object line. Malformed lines never stop the
//! read. Only an error from the underlying reader does.

use std::fmt;
use std::io::BufRead;

use logtally_core::{LogEntry, Normalizer, RawRecord};

use crate::IngestError;

/// Everything recovered from one stream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadOutcome {
    /// Normalised entries, in stream order.
    pub entries: Vec<LogEntry>,
    /// One diagnostic per line that was not a JSON object.
    pub skipped: Vec<SkippedLine>,
}

/// A line that could not be deserialised as a JSON object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based physical line number, blank lines included.
    pub line_number: usize,
    /// The line as read (lossily decoded if it was not UTF-8).
    pub raw: String,
    /// Parser error message.
    pub reason: String,
}

impl fmt::Display for SkippedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {}", self.line_number, self.reason, self.raw)
    }
}

/// Read `reader` to the end, normalising each JSON-object line.
///
/// Returns [`IngestError::Read`] if the reader itself fails; entries read up
/// to that point are discarded.
pub fn read_entries<R: BufRead>(
    mut reader: R,
    normalizer: &Normalizer,
) -> Result<ReadOutcome, IngestError> {
    let mut outcome = ReadOutcome::default();
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).map_err(IngestError::Read)? == 0 {
            break;
        }
        line_number += 1;

        let line = strip_line_ending(&buf);
        if line.is_empty() {
            continue;
        }

        match serde_json::from_slice::<RawRecord>(line) {
            Ok(record) => outcome.entries.push(normalizer.normalize(record)),
            Err(err) => {
                let skipped = SkippedLine {
                    line_number,
                    raw: String::from_utf8_lossy(line).into_owned(),
                    reason: err.to_string(),
                };
                tracing::debug!(line = line_number, error = %err, "skipping malformed line");
                outcome.skipped.push(skipped);
            }
        }
    }

    tracing::debug!(
        lines = line_number,
        entries = outcome.entries.len(),
        skipped = outcome.skipped.len(),
        "finished reading stream"
    );
    Ok(outcome)
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
