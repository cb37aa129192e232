//! Directory scan summary.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ScanWarning;

/// Counts and sizes gathered while scanning a path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Root path that was scanned.
    pub root_path: PathBuf,
    /// Number of regular files, the root included when it is a file.
    pub num_files: u64,
    /// Number of directories, the root included when it is a directory.
    pub num_directories: u64,
    /// Entries that are neither files nor directories. Not counted above.
    pub num_other: u64,
    /// Sum of the byte lengths of all counted files.
    pub total_bytes: u64,
    /// Duration of the scan.
    pub scan_duration: Duration,
    /// Warnings encountered during scan.
    pub warnings: Vec<ScanWarning>,
}

impl ScanSummary {
    /// Create an empty summary for a root path.
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
            ..Self::default()
        }
    }

    /// Record a regular file.
    pub fn record_file(&mut self, size: u64) {
        self.num_files += 1;
        self.total_bytes += size;
    }

    /// Record a directory.
    pub fn record_dir(&mut self) {
        self.num_directories += 1;
    }

    /// Record an entry that is neither a file nor a directory.
    pub fn record_other(&mut self, warning: ScanWarning) {
        self.num_other += 1;
        self.warnings.push(warning);
    }

    /// Average file size in bytes, rounded down. `None` when no files were seen.
    pub fn average_bytes(&self) -> Option<u64> {
        (self.num_files > 0).then(|| self.total_bytes / self.num_files)
    }

    /// Average file size in bytes, rounded down, or `-1` when no files were seen.
    pub fn avg_bytes(&self) -> i64 {
        self.average_bytes()
            .map_or(-1, |avg| i64::try_from(avg).unwrap_or(i64::MAX))
    }

    /// Get total entries counted (files + dirs).
    pub fn total_items(&self) -> u64 {
        self.num_files + self.num_directories
    }

    /// Check if there were any warnings during scanning.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
