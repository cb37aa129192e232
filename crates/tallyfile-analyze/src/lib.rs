//! Line classification and numeric statistics for tallyfile.
//!
//! Every line of the input is classified as either an exact decimal number
//! or opaque text:
//!
//! - **Numbers** are summed exactly and kept sorted for the median.
//! - **Text** lines are counted in a frequency table.
//!
//! Once the pass completes the [`AnalysisResult`] is frozen; all statistics
//! are rounded half-up to two places when queried.
//!
//! ```rust
//! use tallyfile_analyze::{AnalysisResult, render};
//!
//! let result = AnalysisResult::from_lines("sample.txt", ["3.5", "foo", "-1.1"]);
//!
//! assert_eq!(result.count_of_numbers(), 2);
//! assert!(result.contains("foo"));
//! assert!(!result.contains("3.5"));
//! print!("{}", render(&result));
//! ```
//!
//! # Files
//!
//! ```rust,no_run
//! use tallyfile_analyze::{ContentAnalyzer, AnalyzeConfig};
//!
//! let config = AnalyzeConfig::builder()
//!     .path("/path/to/input.txt")
//!     .build()
//!     .unwrap();
//! let result = ContentAnalyzer::new().analyze(&config).unwrap();
//!
//! println!("Total: {}", result.total());
//! ```

mod analyzer;
mod classify;
mod lines;
mod report;
mod result;

pub use analyzer::{ContentAnalyzer, analyze_path};
pub use classify::{LineKind, classify, is_decimal_literal, parse_decimal};
pub use lines::LineReader;
pub use report::{AnalysisReport, StringCount, render};
pub use result::{AnalysisResult, compare_case_insensitive};

// Re-export core types for convenience
pub use tallyfile_core::{AnalyzeConfig, AnalyzeError};
