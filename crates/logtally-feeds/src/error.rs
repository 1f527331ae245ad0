use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a whole read. Malformed lines are not errors; they
/// are reported through [`SkippedLine`](crate::SkippedLine).
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read log stream")]
    Read(#[source] io::Error),
}
