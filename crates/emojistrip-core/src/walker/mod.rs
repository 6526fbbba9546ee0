/// Directory walker — visits every file under a root whose name ends with a
/// suffix, strips emoji from its text, and writes it back only when the
/// content changed.
///
/// Traversal uses `jwalk` in serial mode with sorted entries, so files are
/// handled strictly one at a time in a stable order. Each file is read,
/// filtered, and conditionally written before the next entry is pulled from
/// the walker.
///
/// Only root validation can fail the run. Everything after that (unreadable
/// subdirectories, bad UTF-8, failed writes) becomes a [`WalkEvent::Error`]
/// and a [`FileFailure`] in the summary.
pub mod progress;

use crate::error::{FileError, WalkError};
use crate::filter::EmojiFilter;
use crate::summary::{FileFailure, WalkSummary};
use progress::WalkEvent;

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// What happened to a single candidate file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// No emoji found; the file was not written.
    Unchanged,
    /// Emoji removed and the file rewritten.
    Modified { bytes_removed: u64 },
}

/// Walk `root` and strip emoji from every file whose name ends with `suffix`.
///
/// `on_event` receives a [`WalkEvent`] for each file visited, each file
/// modified, and each non-fatal error, in that order per file.
pub fn strip_directory<F>(root: &Path, suffix: &str, on_event: F) -> Result<WalkSummary, WalkError>
where
    F: FnMut(&WalkEvent),
{
    let filter = EmojiFilter::new()?;
    strip_directory_with(&filter, root, suffix, on_event)
}

/// Same as [`strip_directory`] with a caller-supplied filter.
pub fn strip_directory_with<F>(
    filter: &EmojiFilter,
    root: &Path,
    suffix: &str,
    mut on_event: F,
) -> Result<WalkSummary, WalkError>
where
    F: FnMut(&WalkEvent),
{
    validate_root(root)?;

    let start = Instant::now();
    let mut summary = WalkSummary::default();
    info!("Stripping emoji from *{suffix} files under {}", root.display());

    let walker = jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .sort(true)
        .parallelism(jwalk::Parallelism::Serial);

    for entry_result in walker {
        let mut entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                record_failure(&mut summary, &mut on_event, path, err.to_string());
                continue;
            }
        };

        // jwalk attaches a failed `read_dir` to the directory's own entry
        // instead of yielding it as an `Err`.
        if let Some(err) = entry.read_children_error.take() {
            let path = err.path().map(Path::to_path_buf).unwrap_or_else(|| entry.path());
            record_failure(&mut summary, &mut on_event, path, err.to_string());
        }

        if !matches_suffix(entry.file_name(), suffix) {
            continue;
        }

        let path = entry.path();
        if !is_candidate_file(entry.file_type(), &path) {
            continue;
        }

        summary.files_visited += 1;
        on_event(&WalkEvent::Processing { path: path.clone() });

        match process_file(filter, &path) {
            Ok(FileOutcome::Unchanged) => {
                debug!("No emoji in {}", path.display());
            }
            Ok(FileOutcome::Modified { bytes_removed }) => {
                summary.files_modified += 1;
                summary.bytes_removed += bytes_removed;
                on_event(&WalkEvent::Modified {
                    path,
                    bytes_removed,
                });
            }
            Err(err) => {
                let message = file_error_message(&err);
                record_failure(&mut summary, &mut on_event, err.path().to_path_buf(), message);
            }
        }
    }

    summary.duration = start.elapsed();
    info!(
        "Walk complete: {} files, {} modified, {} errors in {:?}",
        summary.files_visited,
        summary.files_modified,
        summary.error_count(),
        summary.duration
    );
    Ok(summary)
}

/// Read, filter, and conditionally rewrite one file.
///
/// The file is written only if the filtered text differs from the original;
/// an unchanged file keeps its modification time.
pub fn process_file(filter: &EmojiFilter, path: &Path) -> Result<FileOutcome, FileError> {
    let bytes = fs::read(path).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let original = std::str::from_utf8(&bytes).map_err(|source| FileError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let stripped = filter.strip(original);
    if stripped.as_bytes() == original.as_bytes() {
        return Ok(FileOutcome::Unchanged);
    }

    fs::write(path, stripped.as_bytes()).map_err(|source| FileError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(FileOutcome::Modified {
        bytes_removed: (original.len() - stripped.len()) as u64,
    })
}

/// Check the root up front: it must exist and be a directory.
pub fn validate_root(root: &Path) -> Result<(), WalkError> {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(WalkError::NotADirectory(root.to_path_buf())),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Err(WalkError::RootNotFound(root.to_path_buf()))
        }
        Err(source) => Err(WalkError::RootInaccessible {
            path: root.to_path_buf(),
            source,
        }),
    }
}

/// Exact, case-sensitive suffix match on the raw file name.
pub fn matches_suffix(file_name: &OsStr, suffix: &str) -> bool {
    file_name.as_encoded_bytes().ends_with(suffix.as_bytes())
}

/// Directories are never candidates. A symlink counts only if its target is
/// not a directory.
fn is_candidate_file(file_type: fs::FileType, path: &Path) -> bool {
    if file_type.is_dir() {
        return false;
    }
    if file_type.is_symlink() {
        return fs::metadata(path).map(|m| !m.is_dir()).unwrap_or(true);
    }
    true
}

/// Message for a [`FileError`] without the path, which the event line
/// already carries.
fn file_error_message(err: &FileError) -> String {
    match err {
        FileError::Read { source, .. } => format!("read failed: {source}"),
        FileError::Decode { source, .. } => format!("invalid UTF-8: {source}"),
        FileError::Write { source, .. } => format!("write failed: {source}"),
    }
}

fn record_failure<F>(
    summary: &mut WalkSummary,
    on_event: &mut F,
    path: PathBuf,
    message: String,
) where
    F: FnMut(&WalkEvent),
{
    warn!("Error processing {}: {message}", path.display());
    on_event(&WalkEvent::Error {
        path: path.clone(),
        message: message.clone(),
    });
    summary.failures.push(FileFailure { path, message });
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn suffix_match_is_exact() {
        assert!(matches_suffix(OsStr::new("Main.kt"), ".kt"));
        assert!(matches_suffix(OsStr::new("build.gradle.kts"), ".kts"));
        assert!(!matches_suffix(OsStr::new("build.gradle.kts"), ".kt"));
        assert!(!matches_suffix(OsStr::new("Main.KT"), ".kt"));
        assert!(!matches_suffix(OsStr::new("notes.txt"), ".kt"));
    }

    #[test]
    fn suffix_without_dot_matches_name_tail() {
        assert!(matches_suffix(OsStr::new("Main.kt"), "kt"));
        assert!(matches_suffix(OsStr::new("kt"), "kt"));
    }

    #[test]
    fn empty_suffix_matches_everything() {
        assert!(matches_suffix(OsStr::new("anything"), ""));
    }

    #[test]
    fn validate_root_rejects_missing_path() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        assert!(matches!(
            validate_root(&missing),
            Err(WalkError::RootNotFound(p)) if p == missing
        ));
    }

    #[test]
    fn validate_root_rejects_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("file.kt");
        fs::write(&file, "x").unwrap();
        assert!(matches!(
            validate_root(&file),
            Err(WalkError::NotADirectory(_))
        ));
    }

    #[test]
    fn validate_root_accepts_directory() {
        let tmp = TempDir::new().unwrap();
        assert!(validate_root(tmp.path()).is_ok());
    }

    #[test]
    fn process_file_reports_modification() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("a.kt");
        fs::write(&path, "hi 😀").unwrap();

        let filter = EmojiFilter::new().unwrap();
        let outcome = process_file(&filter, &path).unwrap();
        assert_eq!(outcome, FileOutcome::Modified { bytes_removed: 4 });
        assert_eq!(fs::read_to_string(&path).unwrap(), "hi ");
    }

    #[test]
    fn process_file_leaves_clean_file_alone() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("b.kt");
        fs::write(&path, "clean\n").unwrap();

        let filter = EmojiFilter::new().unwrap();
        assert_eq!(process_file(&filter, &path).unwrap(), FileOutcome::Unchanged);
    }

    #[test]
    fn process_file_rejects_invalid_utf8() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.kt");
        fs::write(&path, [0x66, 0xFF, 0xFE, 0x6F]).unwrap();

        let filter = EmojiFilter::new().unwrap();
        let err = process_file(&filter, &path).unwrap_err();
        assert!(matches!(err, FileError::Decode { .. }));
        assert_eq!(err.path(), &path);
        // Untouched on disk.
        assert_eq!(fs::read(&path).unwrap(), vec![0x66, 0xFF, 0xFE, 0x6F]);
    }

    #[test]
    fn process_file_reports_missing_file_as_read_error() {
        let filter = EmojiFilter::new().unwrap();
        let err = process_file(&filter, &PathBuf::from("/definitely/not/here.kt")).unwrap_err();
        assert!(matches!(err, FileError::Read { .. }));
        assert!(file_error_message(&err).starts_with("read failed:"));
    }

    #[test]
    fn directories_named_like_the_suffix_are_skipped() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("weird.kt")).unwrap();
        fs::write(tmp.path().join("weird.kt").join("inner.kt"), "☀").unwrap();

        let summary = strip_directory(tmp.path(), ".kt", |_| {}).unwrap();
        assert_eq!(summary.files_visited, 1);
        assert_eq!(summary.files_modified, 1);
        assert!(!summary.has_errors());
    }
}
