//! File feed: open a path and stream it through the ndjson reader.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use logtally_core::Normalizer;

use crate::ndjson::{read_entries, ReadOutcome};
use crate::IngestError;

/// Read every entry from the ndjson file at `path`.
///
/// The file handle is owned by the reader and closed when this returns,
/// whichever way it returns.
pub fn read_file(path: impl AsRef<Path>, normalizer: &Normalizer) -> Result<ReadOutcome, IngestError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "reading log file");

    read_entries(BufReader::new(file), normalizer)
}
