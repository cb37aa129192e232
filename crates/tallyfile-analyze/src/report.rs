//! Rendering analysis results as text and as serializable summaries.

use std::fmt;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use tallyfile_core::decimal::{DISPLAY_SCALE, to_fixed_string};

use crate::result::AnalysisResult;

/// Render the statistics report for a result.
///
/// ```text
///   Sum of Numbers: 16.20
///   Average of Numbers: 5.40
///   Median of Numbers: 5.00
///   Percent of lines that are numbers: 42.86
///   Non-numeric strings in file (with count):
///     The quick brown fox:1
///     foo:2
/// ```
pub fn render(result: &AnalysisResult) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, result);
    out
}

fn write_report(out: &mut impl fmt::Write, result: &AnalysisResult) -> fmt::Result {
    writeln!(out, "  Sum of Numbers: {}", fixed(&result.total()))?;

    match (result.arithmetic_mean(), result.median()) {
        (Some(mean), Some(median)) => {
            writeln!(out, "  Average of Numbers: {}", fixed(&mean))?;
            writeln!(out, "  Median of Numbers: {}", fixed(&median))?;
        }
        _ => {
            writeln!(out, "  Average of Numbers: UNDEFINED")?;
            writeln!(out, "  Median of Numbers: NONE")?;
        }
    }

    match result.percent_numeric_rounded() {
        Some(percent) => writeln!(
            out,
            "  Percent of lines that are numbers: {}",
            fixed(&percent)
        )?,
        None => writeln!(
            out,
            "  Percent of lines that are numbers: UNDEFINED (no lines parsed)"
        )?,
    }

    write!(out, "  Non-numeric strings in file (with count):")?;
    let strings = result.non_numeric_sorted();
    if strings.is_empty() {
        writeln!(out, " NONE")?;
    } else {
        writeln!(out)?;
        for (line, count) in strings {
            writeln!(out, "    {line}:{count}")?;
        }
    }

    Ok(())
}

fn fixed(value: &BigDecimal) -> String {
    to_fixed_string(value, DISPLAY_SCALE)
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(f, self)
    }
}

/// One row of the non-numeric string table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringCount {
    /// The line text.
    pub value: String,
    /// How many times it occurred.
    pub count: u64,
}

/// Serializable view of an analysis, with every decimal already rounded.
///
/// Undefined statistics serialize as `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Display name of the analyzed file.
    pub file_name: String,
    /// Number of logical lines read.
    pub line_count: u64,
    /// Number of numeric lines.
    pub count_of_numbers: usize,
    /// Rounded sum.
    pub sum: String,
    /// Rounded mean, if any numbers were read.
    pub average: Option<String>,
    /// Rounded median, if any numbers were read.
    pub median: Option<String>,
    /// Rounded percentage of numeric lines, if any lines were read.
    pub percent_numeric: Option<String>,
    /// Non-numeric lines in reverse case-insensitive order.
    pub non_numeric: Vec<StringCount>,
}

impl AnalysisReport {
    /// Build the report for a result.
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            file_name: result.file_name().to_string(),
            line_count: result.line_count(),
            count_of_numbers: result.count_of_numbers(),
            sum: fixed(&result.total()),
            average: result.arithmetic_mean().as_ref().map(fixed),
            median: result.median().as_ref().map(fixed),
            percent_numeric: result.percent_numeric_rounded().as_ref().map(fixed),
            non_numeric: result
                .non_numeric_sorted()
                .into_iter()
                .map(|(value, count)| StringCount {
                    value: value.to_string(),
                    count,
                })
                .collect(),
        }
    }
}

impl From<&AnalysisResult> for AnalysisReport {
    fn from(result: &AnalysisResult) -> Self {
        Self::from_result(result)
    }
}
