//! Batch Processing Module
//!
//! Candidate discovery and per-run tallies for sequential batch conversion.

use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::common_utils::has_extension_suffix;

/// Collects the regular files directly inside `dir` whose name ends with
/// `.{extension}` (case-sensitive), ordered by file name.
///
/// Subdirectories are never descended. Symlinks are followed so a linked
/// source file is still a candidate; an entry that cannot be stat'ed is
/// skipped.
///
/// # Errors
/// `dir` itself is missing, unreadable or not a directory.
pub fn collect_files(dir: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 || e.path() == Some(dir) => return Err(e.into()),
            Err(_) => continue,
        };

        if entry.depth() == 0 {
            if !entry.file_type().is_dir() {
                return Err(io::Error::other(format!(
                    "not a directory: {}",
                    dir.display()
                )));
            }
            continue;
        }

        if entry.file_type().is_file() && has_extension_suffix(entry.path(), extension) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

#[derive(Debug, Clone)]
pub struct BatchResult {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchResult {
    pub fn new() -> Self {
        Self {
            total: 0,
            succeeded: 0,
            failed: 0,
        }
    }

    pub fn success(&mut self) {
        self.total += 1;
        self.succeeded += 1;
    }

    pub fn fail(&mut self) {
        self.total += 1;
        self.failed += 1;
    }

    /// One-line tally, e.g. `Converted 2 of 3 files (1 failed)`.
    pub fn summary_line(&self) -> String {
        format!(
            "Converted {} of {} files ({} failed)",
            self.succeeded, self.total, self.failed
        )
    }
}

impl Default for BatchResult {
    fn default() -> Self {
        Self::new()
    }
}
