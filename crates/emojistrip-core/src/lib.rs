/// emojistrip core — emoji filtering and the in-place directory walker.
///
/// This crate holds all of the logic; the `emojistrip` binary only parses
/// arguments and prints the transcript.
///
/// # Modules
///
/// - [`filter`] — The emoji range table and the compiled matcher.
/// - [`walker`] — Sequential directory traversal with read/strip/write per file.
/// - [`summary`] — Run totals and count/size formatting.
/// - [`error`] — Fatal and per-file error types.
pub mod error;
pub mod filter;
pub mod summary;
pub mod walker;

pub use error::{FileError, WalkError};
pub use filter::{strip_emoji, EmojiFilter};
pub use summary::{FileFailure, WalkSummary};
pub use walker::progress::WalkEvent;
pub use walker::{process_file, strip_directory, FileOutcome};
