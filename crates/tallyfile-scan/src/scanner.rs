//! JWalk-based directory scanner.

use std::fs::Metadata;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use jwalk::{Parallelism, WalkDir};
use tracing::{debug, warn};

use tallyfile_core::{ScanConfig, ScanError, ScanSummary, ScanWarning, WarningKind};

/// Counts files, directories and bytes below a root path.
#[derive(Debug, Clone, Default)]
pub struct DirectoryScanner;

impl DirectoryScanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        Self
    }

    /// Perform a scan of the given path.
    ///
    /// The root itself is counted: scanning a single file yields one file
    /// and no directories, scanning an empty directory yields one directory.
    pub fn scan(&self, config: &ScanConfig) -> Result<ScanSummary, ScanError> {
        let start = Instant::now();
        let root = &config.root;
        if root.as_os_str().is_empty() {
            return Err(ScanError::InvalidConfig {
                message: "Root path cannot be empty".to_string(),
            });
        }

        // Inspect the root without following a symlink.
        let root_metadata = std::fs::symlink_metadata(root).map_err(|e| ScanError::io(root, e))?;
        let mut summary = ScanSummary::new(root);

        if root_metadata.is_dir() {
            self.walk(config, &mut summary);
        } else {
            record_entry(&mut summary, root, &root_metadata);
        }

        summary.scan_duration = start.elapsed();

        debug!(
            root = %root.display(),
            files = summary.num_files,
            dirs = summary.num_directories,
            bytes = summary.total_bytes,
            warnings = summary.warnings.len(),
            "scan complete"
        );

        Ok(summary)
    }

    /// Walk a directory root and record every entry, the root included.
    fn walk(&self, config: &ScanConfig, summary: &mut ScanSummary) {
        let parallelism = match config.threads {
            0 => Parallelism::RayonDefaultPool {
                busy_timeout: Duration::from_millis(100),
            },
            n => Parallelism::RayonNewPool(n),
        };

        let walker = WalkDir::new(&config.root)
            .parallelism(parallelism)
            .skip_hidden(!config.include_hidden)
            .follow_links(false)
            .min_depth(0)
            .max_depth(config.max_depth.map(|d| d as usize).unwrap_or(usize::MAX));

        for entry_result in walker {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
                    warn!(path = %path.display(), error = %err, "skipping unreadable entry");
                    summary.warnings.push(ScanWarning::new(
                        path,
                        err.to_string(),
                        WarningKind::ReadError,
                    ));
                    continue;
                }
            };

            let path = entry.path();
            let file_type = entry.file_type();

            if file_type.is_dir() {
                summary.record_dir();
            } else if file_type.is_file() {
                match entry.metadata() {
                    Ok(metadata) => summary.record_file(metadata.len()),
                    Err(err) => {
                        warn!(path = %path.display(), error = %err, "skipping file without metadata");
                        summary.warnings.push(ScanWarning::new(
                            &path,
                            err.to_string(),
                            WarningKind::MetadataError,
                        ));
                    }
                }
            } else {
                record_unsupported(summary, path);
            }
        }
    }
}

/// Record a single entry whose metadata is already known.
fn record_entry(summary: &mut ScanSummary, path: &Path, metadata: &Metadata) {
    if metadata.is_dir() {
        summary.record_dir();
    } else if metadata.is_file() {
        summary.record_file(metadata.len());
    } else {
        record_unsupported(summary, path.to_path_buf());
    }
}

fn record_unsupported(summary: &mut ScanSummary, path: PathBuf) {
    debug!(path = %path.display(), "not counting entry that is neither file nor directory");
    summary.record_other(ScanWarning::unsupported_entry(path));
}

/// Scan a path with the default configuration.
pub fn scan(path: impl Into<PathBuf>) -> Result<ScanSummary, ScanError> {
    DirectoryScanner::new().scan(&ScanConfig::new(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_tree() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::create_dir(root.join("dir1")).unwrap();
        fs::create_dir(root.join("dir2")).unwrap();
        fs::create_dir(root.join("dir1/subdir")).unwrap();

        fs::write(root.join("file1.txt"), "hello").unwrap();
        fs::write(root.join("dir1/file2.txt"), "world world world").unwrap();
        fs::write(root.join("dir1/subdir/file3.txt"), "test").unwrap();

        temp
    }

    #[test]
    fn test_basic_scan() {
        let temp = create_test_tree();
        let summary = scan(temp.path()).unwrap();

        assert_eq!(summary.num_files, 3);
        // root, dir1, dir2, subdir
        assert_eq!(summary.num_directories, 4);
        assert_eq!(summary.total_bytes, 5 + 17 + 4);
        assert_eq!(summary.average_bytes(), Some(26 / 3));
    }

    #[test]
    fn test_max_depth_limits_traversal() {
        let temp = create_test_tree();
        let config = ScanConfig::builder()
            .root(temp.path())
            .max_depth(Some(1))
            .build()
            .unwrap();

        let summary = DirectoryScanner::new().scan(&config).unwrap();

        // root, dir1, dir2 and file1.txt only
        assert_eq!(summary.num_files, 1);
        assert_eq!(summary.num_directories, 3);
        assert_eq!(summary.total_bytes, 5);
    }

    #[test]
    fn test_empty_root_is_invalid() {
        let config = ScanConfig::new("");
        let err = DirectoryScanner::new().scan(&config).unwrap_err();
        assert!(matches!(err, ScanError::InvalidConfig { .. }));
    }
}
