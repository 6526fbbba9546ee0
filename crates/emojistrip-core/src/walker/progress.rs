/// Walk events — one message per notable step, handed to the caller's
/// callback as the walk proceeds.
///
/// `Display` renders the exact transcript line for each event.
use std::fmt;
use std::path::PathBuf;

/// Progress notices emitted by [`super::strip_directory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkEvent {
    /// A candidate file is about to be read.
    Processing { path: PathBuf },
    /// The file's content changed and was written back.
    Modified { path: PathBuf, bytes_removed: u64 },
    /// A non-fatal error (unreadable file, bad UTF-8, failed write,
    /// unreadable subdirectory).
    Error { path: PathBuf, message: String },
}

impl WalkEvent {
    /// `true` for [`WalkEvent::Error`].
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

impl fmt::Display for WalkEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Processing { path } => write!(f, "Processing {}", path.display()),
            Self::Modified { path, .. } => {
                // File name only, not the full path.
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy())
                    .unwrap_or_else(|| path.to_string_lossy());
                write!(f, "Removed emojis from {name}")
            }
            Self::Error { path, message } => {
                write!(f, "Error processing {}: {message}", path.display())
            }
        }
    }
}
