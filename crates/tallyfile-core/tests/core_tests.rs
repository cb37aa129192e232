use std::num::NonZeroU64;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use tallyfile_core::decimal::{self, DISPLAY_SCALE};
use tallyfile_core::{AnalyzeConfig, AnalyzeError, ScanConfig, ScanError, ScanSummary};

fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).unwrap()
}

#[test]
fn test_round_half_up_against_manual_table() {
    let cases = [
        ("1.005", "1.01"),
        ("1.004999", "1.00"),
        ("-1.005", "-1.01"),
        ("999.995", "1000.00"),
        ("0.1", "0.10"),
        ("-0", "0.00"),
        ("12345678901234567890.125", "12345678901234567890.13"),
    ];

    for (input, expected) in cases {
        assert_eq!(
            decimal::to_fixed_string(&dec(input), DISPLAY_SCALE),
            expected,
            "rounding {input}"
        );
    }
}

#[test]
fn test_rounded_value_compares_numerically() {
    let rounded = decimal::round_half_up(&dec("17.2"), DISPLAY_SCALE);
    assert_eq!(rounded, dec("17.20"));
    assert_eq!(rounded, dec("17.2"));
}

#[test]
fn test_div_round_half_up_is_exact_for_long_fractions() {
    // 1 / 3 = 0.333..., never a tie.
    let third = decimal::div_round_half_up(&dec("1"), NonZeroU64::new(3).unwrap(), 2);
    assert_eq!(decimal::to_fixed_string(&third, 2), "0.33");

    // 0.125 / 1 is an exact tie at two places.
    let eighth = decimal::div_round_half_up(&dec("0.125"), NonZeroU64::MIN, 2);
    assert_eq!(decimal::to_fixed_string(&eighth, 2), "0.13");
}

#[test]
fn test_analyze_config_display_name() {
    let config = AnalyzeConfig::new("/data/inputs/givenSampleInput.txt");
    assert_eq!(config.display_name(), "givenSampleInput.txt");
    assert!(!config.lossy_utf8);

    let bare = AnalyzeConfig::new("/");
    assert_eq!(bare.display_name(), "/");
}

#[test]
fn test_builder_errors_convert() {
    let err: AnalyzeError = AnalyzeConfig::builder().path("").build().unwrap_err().into();
    assert!(matches!(err, AnalyzeError::InvalidArgument { .. }));

    let err: ScanError = ScanConfig::builder().root("").build().unwrap_err().into();
    assert!(matches!(err, ScanError::InvalidConfig { .. }));
}

#[test]
fn test_scan_summary_sentinel_and_option_agree() {
    let mut summary = ScanSummary::new("/data");
    assert_eq!(summary.avg_bytes(), -1);
    assert_eq!(summary.average_bytes(), None);

    summary.record_file(10);
    summary.record_file(11);
    assert_eq!(summary.avg_bytes(), 10);
    assert_eq!(summary.average_bytes(), Some(10));
}
