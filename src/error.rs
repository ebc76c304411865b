//! Error types for the comparison engine

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a comparison run.
///
/// There is no continue-on-error mode: a tree that cannot be fully read
/// is not a tree worth diffing, so the first failure propagates out of
/// the walk untouched.
#[derive(Debug, Error)]
pub enum Error {
    /// An entry could not be listed, resolved or read. Carries the real
    /// filesystem path, not the display path.
    #[error("cannot access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The reporter's output stream failed (e.g. a closed pipe).
    #[error("failed to write report: {0}")]
    Report(io::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
