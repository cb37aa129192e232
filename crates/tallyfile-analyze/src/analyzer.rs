//! File-backed content analysis.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::{debug, info};

use tallyfile_core::{AnalyzeConfig, AnalyzeError};

use crate::lines::LineReader;
use crate::result::AnalysisResult;

/// Reads a file and builds its [`AnalysisResult`].
#[derive(Debug, Clone, Default)]
pub struct ContentAnalyzer;

impl ContentAnalyzer {
    /// Create a new analyzer.
    pub fn new() -> Self {
        Self
    }

    /// Analyze the file named by `config`.
    ///
    /// Fails before any result exists when the path is empty, missing or
    /// unreadable, or when the content cannot be decoded.
    pub fn analyze(&self, config: &AnalyzeConfig) -> Result<AnalysisResult, AnalyzeError> {
        let path = &config.path;
        if path.as_os_str().is_empty() {
            return Err(AnalyzeError::invalid_argument("The file name cannot be empty"));
        }

        debug!(path = %path.display(), lossy = config.lossy_utf8, "opening file");
        let file = File::open(path).map_err(|e| AnalyzeError::io(path, e))?;
        let reader = BufReader::new(file);

        let lines = if config.lossy_utf8 {
            LineReader::lossy(reader)
        } else {
            LineReader::new(reader)
        };

        let result = AnalysisResult::try_from_lines(config.display_name(), lines)
            .map_err(|e| AnalyzeError::io(path, e))?;

        info!(
            path = %path.display(),
            lines = result.line_count(),
            numbers = result.count_of_numbers(),
            "analyzed file"
        );
        Ok(result)
    }
}

/// Analyze a file with the default configuration.
pub fn analyze_path(path: impl AsRef<Path>) -> Result<AnalysisResult, AnalyzeError> {
    ContentAnalyzer::new().analyze(&AnalyzeConfig::new(path.as_ref()))
}
