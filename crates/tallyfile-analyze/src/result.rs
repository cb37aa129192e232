//! The frozen result of analyzing a sequence of lines.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::num::NonZeroU64;

use bigdecimal::BigDecimal;
use tracing::debug;

use tallyfile_core::decimal::{self, DISPLAY_SCALE};

use crate::classify::{LineKind, classify};

const PAIR: NonZeroU64 = match NonZeroU64::new(2) {
    Some(n) => n,
    None => unreachable!(),
};

/// Statistics gathered from a single pass over a file's lines.
///
/// Built once by [`AnalysisResult::from_lines`] or
/// [`AnalysisResult::try_from_lines`]; every query afterwards is a pure
/// function of the stored fields. Values are kept unrounded and rounded
/// half-up to two places only when a query returns them.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    file_name: String,
    line_count: u64,
    /// Sorted ascending once ingestion completes.
    numbers: Vec<BigDecimal>,
    sum: BigDecimal,
    non_numeric: HashMap<String, u64>,
}

impl AnalysisResult {
    /// Classify and aggregate every line of an infallible source.
    pub fn from_lines<I, S>(file_name: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = Accumulator::new(file_name.into());
        for line in lines {
            builder.push(line.as_ref());
        }
        builder.finish()
    }

    /// Classify and aggregate every line of a fallible source.
    ///
    /// The first error aborts ingestion; nothing accumulated so far is
    /// returned.
    pub fn try_from_lines<I, S, E>(file_name: impl Into<String>, lines: I) -> Result<Self, E>
    where
        I: IntoIterator<Item = Result<S, E>>,
        S: AsRef<str>,
    {
        let mut builder = Accumulator::new(file_name.into());
        for line in lines {
            builder.push(line?.as_ref());
        }
        Ok(builder.finish())
    }

    /// Display name of the analyzed input.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Number of logical lines read.
    pub fn line_count(&self) -> u64 {
        self.line_count
    }

    /// Parsed numbers, sorted ascending.
    pub fn numbers(&self) -> &[BigDecimal] {
        &self.numbers
    }

    /// Exact, unrounded sum of all numbers.
    pub fn sum(&self) -> &BigDecimal {
        &self.sum
    }

    /// Sum of all numbers rounded half-up to two places.
    pub fn total(&self) -> BigDecimal {
        decimal::round_half_up(&self.sum, DISPLAY_SCALE)
    }

    /// Number of lines that parsed as numbers.
    pub fn count_of_numbers(&self) -> usize {
        self.numbers.len()
    }

    /// Arithmetic mean rounded half-up to two places, or `None` without numbers.
    pub fn arithmetic_mean(&self) -> Option<BigDecimal> {
        let count = NonZeroU64::new(self.numbers.len() as u64)?;
        Some(decimal::div_round_half_up(&self.sum, count, DISPLAY_SCALE))
    }

    /// Median rounded half-up to two places, or `None` without numbers.
    ///
    /// For an even count the two central values are averaged.
    pub fn median(&self) -> Option<BigDecimal> {
        let n = self.numbers.len();
        if n == 0 {
            return None;
        }

        let mid = n / 2;
        if n % 2 == 1 {
            Some(decimal::round_half_up(&self.numbers[mid], DISPLAY_SCALE))
        } else {
            let pair = &self.numbers[mid] + &self.numbers[mid - 1];
            Some(decimal::div_round_half_up(&pair, PAIR, DISPLAY_SCALE))
        }
    }

    /// Share of lines that are numbers, in percent, or `None` for no lines.
    pub fn percent_numeric(&self) -> Option<f64> {
        if self.line_count == 0 {
            return None;
        }
        Some(100.0 * self.numbers.len() as f64 / self.line_count as f64)
    }

    /// Percentage of numeric lines computed exactly and rounded half-up to
    /// two places, or `None` for no lines.
    pub fn percent_numeric_rounded(&self) -> Option<BigDecimal> {
        let lines = NonZeroU64::new(self.line_count)?;
        Some(decimal::percentage(self.numbers.len() as u64, lines, DISPLAY_SCALE))
    }

    /// Check whether `candidate` occurred as a non-numeric line.
    ///
    /// Numeric lines are never stored as strings, so a value such as `"5"`
    /// is reported absent even when it appears in the input. `None` is
    /// always absent.
    pub fn contains<'a>(&self, candidate: impl Into<Option<&'a str>>) -> bool {
        candidate
            .into()
            .is_some_and(|s| self.non_numeric.contains_key(s))
    }

    /// Number of times `line` occurred as a non-numeric line.
    pub fn occurrences(&self, line: &str) -> u64 {
        self.non_numeric.get(line).copied().unwrap_or(0)
    }

    /// Distinct non-numeric lines with their counts.
    pub fn non_numeric_counts(&self) -> &HashMap<String, u64> {
        &self.non_numeric
    }

    /// Total occurrences across all non-numeric lines.
    pub fn non_numeric_total(&self) -> u64 {
        self.non_numeric.values().sum()
    }

    /// Non-numeric lines in reverse case-insensitive order.
    pub fn non_numeric_sorted(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .non_numeric
            .iter()
            .map(|(line, count)| (line.as_str(), *count))
            .collect();
        entries.sort_by(|a, b| compare_case_insensitive(b.0, a.0));
        entries
    }
}

/// Case-insensitive ordering, falling back to the raw strings so that
/// distinct keys never compare equal.
pub fn compare_case_insensitive(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

/// Mutable state for the single ingestion pass.
struct Accumulator {
    file_name: String,
    line_count: u64,
    numbers: Vec<BigDecimal>,
    sum: BigDecimal,
    non_numeric: HashMap<String, u64>,
}

impl Accumulator {
    fn new(file_name: String) -> Self {
        Self {
            file_name,
            line_count: 0,
            numbers: Vec::new(),
            sum: BigDecimal::from(0u8),
            non_numeric: HashMap::new(),
        }
    }

    fn push(&mut self, line: &str) {
        self.line_count += 1;
        match classify(line) {
            LineKind::Number(value) => {
                self.sum += &value;
                self.numbers.push(value);
            }
            LineKind::Text => {
                *self.non_numeric.entry(line.to_owned()).or_insert(0) += 1;
            }
        }
    }

    fn finish(mut self) -> AnalysisResult {
        self.numbers.sort();

        debug!(
            file = %self.file_name,
            lines = self.line_count,
            numbers = self.numbers.len(),
            distinct_strings = self.non_numeric.len(),
            "analysis complete"
        );

        AnalysisResult {
            file_name: self.file_name,
            line_count: self.line_count,
            numbers: self.numbers,
            sum: self.sum,
            non_numeric: self.non_numeric,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let result = AnalysisResult::from_lines("empty.txt", Vec::<&str>::new());

        assert_eq!(result.line_count(), 0);
        assert_eq!(result.count_of_numbers(), 0);
        assert_eq!(decimal::to_fixed_string(&result.total(), 2), "0.00");
        assert!(result.arithmetic_mean().is_none());
        assert!(result.median().is_none());
        assert!(result.percent_numeric().is_none());
        assert!(result.percent_numeric_rounded().is_none());
        assert!(result.non_numeric_sorted().is_empty());
    }

    #[test]
    fn test_numbers_sorted_numerically() {
        let result = AnalysisResult::from_lines("n.txt", ["10", "9", "-2", "1e1", "0.5"]);
        let rendered: Vec<String> = result
            .numbers()
            .iter()
            .map(|n| decimal::to_fixed_string(n, 1))
            .collect();
        assert_eq!(rendered, vec!["-2.0", "0.5", "9.0", "10.0", "10.0"]);
    }

    #[test]
    fn test_median_odd_and_even() {
        let odd = AnalysisResult::from_lines("odd.txt", ["3", "1", "2"]);
        assert_eq!(decimal::to_fixed_string(&odd.median().unwrap(), 2), "2.00");

        let even = AnalysisResult::from_lines("even.txt", ["1", "2", "3", "4"]);
        assert_eq!(decimal::to_fixed_string(&even.median().unwrap(), 2), "2.50");

        let single = AnalysisResult::from_lines("one.txt", ["-0.125"]);
        assert_eq!(decimal::to_fixed_string(&single.median().unwrap(), 2), "-0.13");
    }

    #[test]
    fn test_mean_rounds_half_up() {
        // 0.01 / 2 = 0.005 -> 0.01
        let result = AnalysisResult::from_lines("m.txt", ["0.01", "0"]);
        assert_eq!(decimal::to_fixed_string(&result.arithmetic_mean().unwrap(), 2), "0.01");
    }

    #[test]
    fn test_contains() {
        let result = AnalysisResult::from_lines("c.txt", ["5", "foo", ""]);

        assert!(result.contains("foo"));
        assert!(result.contains(""));
        assert!(!result.contains("5"));
        assert!(!result.contains("bar"));
        assert!(!result.contains(None::<&str>));
        assert_eq!(result.occurrences("foo"), 1);
        assert_eq!(result.occurrences("5"), 0);
    }

    #[test]
    fn test_case_insensitive_ordering_is_total() {
        assert_eq!(compare_case_insensitive("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_case_insensitive("Foo", "foo"), Ordering::Less);
        assert_eq!(compare_case_insensitive("foo", "foo"), Ordering::Equal);
    }

    #[test]
    fn test_try_from_lines_discards_partial_state() {
        let lines: Vec<Result<&str, &str>> = vec![Ok("1"), Ok("foo"), Err("read failed")];
        let result = AnalysisResult::try_from_lines("broken.txt", lines);
        assert_eq!(result.unwrap_err(), "read failed");
    }
}
