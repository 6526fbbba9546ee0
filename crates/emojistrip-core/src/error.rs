/// Error types for the walker.
///
/// [`WalkError`] is fatal and stops a run before any file is touched.
/// [`FileError`] is scoped to one file; the walker reports it and moves on.
use std::io;
use std::path::{Path, PathBuf};
use std::str::Utf8Error;
use thiserror::Error;

/// Failures that abort the whole run.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("root path {} does not exist", .0.display())]
    RootNotFound(PathBuf),

    #[error("root path {} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot access root path {}: {source}", .path.display())]
    RootInaccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to compile emoji pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Failures confined to a single candidate file.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: Utf8Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileError {
    /// Path of the file that failed.
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Decode { path, .. } | Self::Write { path, .. } => path,
        }
    }
}
