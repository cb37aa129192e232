//! Line classification.
//!
//! A line is a number when the whole line is a base-10 decimal literal:
//!
//! ```text
//! [+|-] ( digits [ . [digits] ] | . digits ) [ (e|E) [+|-] digits ]
//! ```
//!
//! Digits are ASCII only. Surrounding whitespace, digit separators and
//! special values such as `NaN` make the line text.

use std::str::FromStr;

use bigdecimal::BigDecimal;

/// Result of classifying one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// The line is an exact decimal number.
    Number(BigDecimal),
    /// The line is opaque text.
    Text,
}

impl LineKind {
    /// Check if this is a number.
    pub fn is_number(&self) -> bool {
        matches!(self, LineKind::Number(_))
    }
}

/// Classify a single line (without its terminator).
pub fn classify(line: &str) -> LineKind {
    match parse_decimal(line) {
        Some(value) => LineKind::Number(value),
        None => LineKind::Text,
    }
}

/// Parse a line as an exact decimal, or `None` if it is not a number.
pub fn parse_decimal(line: &str) -> Option<BigDecimal> {
    if !is_decimal_literal(line) {
        return None;
    }
    // The grammar check already passed; this only fails on exponents that
    // do not fit the decimal type.
    BigDecimal::from_str(line).ok()
}

/// Check whether `s` matches the decimal literal grammar.
pub fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        frac_digits = count_digits(&bytes[pos..]);
        pos += frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exp_digits = count_digits(&bytes[pos..]);
        if exp_digits == 0 {
            return false;
        }
        pos += exp_digits;
    }

    pos == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_decimal_literals() {
        for literal in [
            "0", "5", "-1.1", "+3.5", "14.8", ".5", "-.5", "5.", "1e3", "1E+3", "2.5e-4",
            "007", "-0",
        ] {
            assert!(is_decimal_literal(literal), "{literal} should be a number");
            assert!(classify(literal).is_number(), "{literal} should parse");
        }
    }

    #[test]
    fn test_rejects_non_numbers() {
        for text in [
            "", " ", "foo", "+", "-", ".", "e5", "1e", "1e+", " 5", "5 ", "1,000", "1_000",
            "NaN", "Infinity", "0x1F", "1.2.3", "--1", "1e3.5", "١٢",
        ] {
            assert!(!is_decimal_literal(text), "{text:?} should be text");
            assert_eq!(classify(text), LineKind::Text);
        }
    }

    #[test]
    fn test_parse_keeps_exact_value() {
        let value = parse_decimal("0.1").unwrap();
        let tenth = BigDecimal::from_str("0.10").unwrap();
        assert_eq!(value, tenth);

        let big = parse_decimal("123456789012345678901234567890.000000001").unwrap();
        let (mantissa, scale) = big.as_bigint_and_exponent();
        assert_eq!(scale, 9);
        assert_eq!(mantissa.to_string(), "123456789012345678901234567890000000001");
    }
}
