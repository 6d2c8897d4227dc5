//! Failures while localizing a README pair.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Both variants carry the full pair so the operator can tell which copy failed.
#[derive(Debug, Error)]
pub enum LocalizeError {
    /// The source README is missing or unreadable.
    #[error("failed to read {} (destination {})", .source_path.display(), .dest_path.display())]
    ReadFailure {
        source_path: PathBuf,
        dest_path: PathBuf,
        #[source]
        cause: io::Error,
    },

    /// The destination directory is missing or the file cannot be written.
    #[error("failed to write {} (source {})", .dest_path.display(), .source_path.display())]
    WriteFailure {
        source_path: PathBuf,
        dest_path: PathBuf,
        #[source]
        cause: io::Error,
    },
}
