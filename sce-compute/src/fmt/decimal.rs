//! Decimal rendering of rational constants.

use rug::{ops::Pow, Float, Integer};

/// Extra bits of precision used beyond what the operands and requested digits need.
const GUARD_BITS: u32 = 64;

/// The most bits of precision a rendering may use.
pub const MAX_PRECISION: u32 = 1 << 20;

/// Renders `numerator / denominator` in decimal notation with exactly `digits` fractional
/// digits, rounding the last digit half away from zero.
///
/// Returns [`None`] if the denominator is zero, or if the value and digits need more precision
/// than [`MAX_PRECISION`] bits.
pub fn decimal(numerator: &Integer, denominator: &Integer, digits: u32) -> Option<String> {
    if denominator.is_zero() {
        return None;
    }

    // log2(10) < 3.33, so 4 bits per decimal digit is always enough
    let precision = numerator.significant_bits()
        .checked_add(denominator.significant_bits())?
        .checked_add(digits.checked_mul(4)?)?
        .checked_add(GUARD_BITS)?;
    if precision > MAX_PRECISION {
        return None;
    }
    let scale = Integer::from(10).pow(digits);
    let value = Float::with_val(precision, numerator) * &scale / denominator;
    let scaled = value.round().to_integer()?;

    let negative = scaled < 0;
    let mut s = scaled.abs().to_string();
    let digits = digits as usize;
    if s.len() <= digits {
        s.insert_str(0, &"0".repeat(digits + 1 - s.len()));
    }
    if digits > 0 {
        s.insert(s.len() - digits, '.');
    }

    Some(format!("{}{}", if negative { "-" } else { "" }, s))
}
