//! Exact decimal rounding and formatting.
//!
//! All rounding in tallyfile is half-up (ties move away from zero) and is
//! computed on exact integers, so `0.005` always becomes `0.01` and a
//! quotient is never rounded twice.

use std::num::NonZeroU64;

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint, Sign};

/// Number of fractional digits used for every reported value.
pub const DISPLAY_SCALE: u32 = 2;

/// Round `value` half-up to `places` fractional digits.
pub fn round_half_up(value: &BigDecimal, places: u32) -> BigDecimal {
    div_round_half_up(value, NonZeroU64::MIN, places)
}

/// Compute `value / divisor` exactly and round half-up to `places`
/// fractional digits.
pub fn div_round_half_up(value: &BigDecimal, divisor: NonZeroU64, places: u32) -> BigDecimal {
    let (mantissa, scale) = value.as_bigint_and_exponent();

    // value = mantissa * 10^-scale, so the scaled quotient is
    // mantissa * 10^(places - scale) / divisor.
    let shift = i64::from(places) - scale;

    // |mantissa| < 2^bits <= 10^(bits / 3 + 1), so when that bound sits at
    // least one digit below the shift the scaled value is under 0.1 and
    // rounds to zero without materializing 10^|shift|.
    if shift < 0 && mantissa.magnitude().bits() / 3 + 2 <= shift.unsigned_abs() {
        return BigDecimal::new(BigInt::default(), i64::from(places));
    }

    let mut numerator = mantissa.magnitude().clone();
    let mut denominator = BigUint::from(divisor.get());
    if shift >= 0 {
        numerator *= pow10(shift.unsigned_abs());
    } else {
        denominator *= pow10(shift.unsigned_abs());
    }

    let quotient = (numerator * 2u8 + &denominator) / (denominator * 2u8);
    BigDecimal::new(
        BigInt::from_biguint(mantissa.sign(), quotient),
        i64::from(places),
    )
}

/// Percentage `100 * part / whole`, rounded half-up to `places` digits.
pub fn percentage(part: u64, whole: NonZeroU64, places: u32) -> BigDecimal {
    let scaled = BigDecimal::new(BigInt::from(part) * 100u8, 0);
    div_round_half_up(&scaled, whole, places)
}

/// Render `value` in plain notation with exactly `places` fractional digits,
/// rounding half-up first.
pub fn to_fixed_string(value: &BigDecimal, places: u32) -> String {
    let (mantissa, _) = round_half_up(value, places).as_bigint_and_exponent();
    let places = places as usize;

    let mut digits = mantissa.magnitude().to_string();
    if digits.len() <= places {
        digits.insert_str(0, &"0".repeat(places + 1 - digits.len()));
    }

    let mut out = String::with_capacity(digits.len() + 2);
    if mantissa.sign() == Sign::Minus {
        out.push('-');
    }
    let (int_part, frac_part) = digits.split_at(digits.len() - places);
    out.push_str(int_part);
    if places > 0 {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn pow10(exponent: u64) -> BigUint {
    num_traits::pow(BigUint::from(10u8), exponent as usize)
}
