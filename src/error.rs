//! Error types for toggle runs.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures. Too-short and undetermined files are not errors; they
/// are reported through [`crate::Outcome`].
#[derive(Debug, Error)]
pub enum ToggleError {
    /// Opening, reading or writing the file failed.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The temporary file could not be renamed over the original.
    #[error("{}: could not replace file: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ToggleError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ToggleError::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this error.
    ///
    /// Uses the OS error number when there is one (e.g. 2 for a missing
    /// file), falling back to 1.
    pub fn exit_code(&self) -> i32 {
        let source = match self {
            ToggleError::Io { source, .. } | ToggleError::Persist { source, .. } => source,
        };
        source
            .raw_os_error()
            .filter(|code| *code != 0)
            .unwrap_or(1)
    }
}
