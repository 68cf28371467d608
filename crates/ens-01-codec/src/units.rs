//! # Amount Parsing
//!
//! Converts human amount strings ("4 GWei", "0.01 Ether", "1000") into
//! integer base units and back.

use shared_types::U256;

use crate::errors::CodecError;

/// Unit names and their power-of-ten multiplier of the base unit.
const UNITS: &[(&str, u32)] = &[
    ("wei", 0),
    ("kwei", 3),
    ("babbage", 3),
    ("mwei", 6),
    ("lovelace", 6),
    ("gwei", 9),
    ("shannon", 9),
    ("szabo", 12),
    ("microether", 12),
    ("finney", 15),
    ("milliether", 15),
    ("ether", 18),
    ("kether", 21),
    ("grand", 21),
    ("mether", 24),
    ("gether", 27),
    ("tether", 30),
];

/// Parse a decimal quantity with an optional unit suffix into base units.
///
/// Unit names are case-insensitive and may be separated from the number by
/// whitespace. A missing suffix means base units, in which case the number
/// must be integral.
///
/// # Errors
///
/// Returns `CodecError::InvalidAmount` for empty input, a sign, a malformed
/// decimal, an unknown suffix, precision finer than one base unit, or a value
/// that does not fit in 256 bits.
pub fn parse_amount(text: &str) -> Result<U256, CodecError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CodecError::amount(text, "empty"));
    }
    if trimmed.starts_with('-') {
        return Err(CodecError::amount(text, "negative amounts are not allowed"));
    }

    let split = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(trimmed.len());
    let (number, unit) = trimmed.split_at(split);
    let exponent = unit_exponent(unit.trim()).ok_or_else(|| {
        CodecError::amount(text, format!("unknown unit {:?}", unit.trim()))
    })?;

    let (whole, fraction) = match number.split_once('.') {
        Some((w, f)) => (w, f),
        None => (number, ""),
    };
    if whole.is_empty() && fraction.is_empty() {
        return Err(CodecError::amount(text, "no digits"));
    }
    if fraction.contains('.') {
        return Err(CodecError::amount(text, "more than one decimal point"));
    }

    let fraction = fraction.trim_end_matches('0');
    if fraction.len() > exponent as usize {
        return Err(CodecError::amount(text, "precision finer than one wei"));
    }

    let mut digits = String::with_capacity(whole.len() + exponent as usize);
    digits.push_str(whole);
    digits.push_str(fraction);
    digits.extend(std::iter::repeat('0').take(exponent as usize - fraction.len()));
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(U256::zero());
    }

    U256::from_dec_str(digits).map_err(|_| CodecError::amount(text, "value out of range"))
}

/// Render base units with the unit that reads best: Ether for anything from
/// a thousandth of an Ether upwards, GWei from a thousandth of a GWei, Wei
/// otherwise.
#[must_use]
pub fn format_amount(value: U256) -> String {
    let (name, exponent) = if value >= pow10(15) {
        ("Ether", 18)
    } else if value >= pow10(6) {
        ("GWei", 9)
    } else {
        ("Wei", 0)
    };

    let scale = pow10(exponent);
    let whole = value / scale;
    let rem = value % scale;
    if rem.is_zero() {
        return format!("{whole} {name}");
    }
    let frac = format!("{:0>width$}", rem.to_string(), width = exponent as usize);
    format!("{whole}.{} {name}", frac.trim_end_matches('0'))
}

fn unit_exponent(unit: &str) -> Option<u32> {
    if unit.is_empty() {
        return Some(0);
    }
    let unit = unit.to_ascii_lowercase();
    UNITS
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, exp)| *exp)
}

fn pow10(exp: u32) -> U256 {
    U256::from(10u64).pow(U256::from(exp))
}

// =============================================================================
// TESTS
// =============================================================================
