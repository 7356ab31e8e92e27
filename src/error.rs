//! Error types shared by aggregation and rendering

use std::io;
use std::path::PathBuf;

/// Everything that can abort a run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("path '{}' does not exist", .0.display())]
    PathNotFound(PathBuf),

    #[error("path '{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// A listing or stat failed while walking the tree.
    #[error("cannot access '{}': {source}", .path.display())]
    FilesystemAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write '{}': {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unsupported image format '{extension}' for '{}' (supported: svg)", .path.display())]
    UnsupportedImageFormat { path: PathBuf, extension: String },

    #[error("failed to serialize diagram: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::FilesystemAccess {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::OutputWrite {
            path: path.into(),
            source,
        }
    }
}
