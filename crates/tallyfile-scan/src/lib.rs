//! Directory scanning engine for tallyfile.
//!
//! Walks every entry below a path without following symbolic links and
//! totals the number of files, the number of directories and the bytes held
//! by the files. Traversal runs in parallel via jwalk; counting happens on
//! the calling thread.
//!
//! # Example
//!
//! ```rust,no_run
//! use tallyfile_scan::{DirectoryScanner, ScanConfig};
//!
//! let config = ScanConfig::new("/path/to/scan");
//! let summary = DirectoryScanner::new().scan(&config).unwrap();
//!
//! println!("Files: {}", summary.num_files);
//! println!("Directories: {}", summary.num_directories);
//! match summary.average_bytes() {
//!     Some(avg) => println!("Average size: {avg} bytes"),
//!     None => println!("Average size: undefined"),
//! }
//! ```

mod scanner;

pub use scanner::{DirectoryScanner, scan};

// Re-export core types for convenience
pub use tallyfile_core::{ScanConfig, ScanError, ScanSummary, ScanWarning, WarningKind};
