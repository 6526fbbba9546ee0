/// Run summary — totals accumulated over one walk.
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// One recorded per-file (or per-subdirectory) failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Totals for a completed walk.
#[derive(Debug, Clone, Default)]
pub struct WalkSummary {
    /// Candidate files visited (suffix matched).
    pub files_visited: u64,
    /// Files whose content changed and was written back.
    pub files_modified: u64,
    /// Sum of UTF-8 bytes removed across all modified files.
    pub bytes_removed: u64,
    pub failures: Vec<FileFailure>,
    pub duration: Duration,
}

impl WalkSummary {
    pub fn error_count(&self) -> usize {
        self.failures.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.failures.is_empty()
    }
}

impl fmt::Display for WalkSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Done: {} files processed, {} modified ({} bytes removed), {} errors in {:.2}s",
            format_count(self.files_visited),
            format_count(self.files_modified),
            format_count(self.bytes_removed),
            format_count(self.failures.len() as u64),
            self.duration.as_secs_f64()
        )
    }
}

/// Format a count with thousand separators.
pub fn format_count(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    let s = count.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn summary_line() {
        let summary = WalkSummary {
            files_visited: 1_200,
            files_modified: 3,
            bytes_removed: 12,
            failures: vec![FileFailure {
                path: PathBuf::from("x.kt"),
                message: "boom".into(),
            }],
            duration: Duration::from_millis(1_500),
        };
        assert_eq!(
            summary.to_string(),
            "Done: 1,200 files processed, 3 modified (12 bytes removed), 1 errors in 1.50s"
        );
        assert!(summary.has_errors());
        assert_eq!(summary.error_count(), 1);
    }

    #[test]
    fn default_summary_has_no_errors() {
        assert!(!WalkSummary::default().has_errors());
    }
}
