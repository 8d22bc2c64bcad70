//! Numeric literal compilation.

use crate::property::Value;
use crate::selector::{Result, SelectorError};

/// Parse the text of an exact-numeric token into an integer value.
///
/// The text may carry a `0x`/`0X`, `0b`/`0B` or leading-`0` octal radix
/// prefix, `_` separators, and an `l`/`L` suffix. Decimal literals must fit
/// in `i64`; radix-prefixed literals accept the full unsigned 64-bit range
/// and wrap into the signed representation. `negated` is set only when the
/// parser fused a directly adjacent unary minus, which additionally admits
/// the one value with no positive counterpart, `i64::MIN`.
pub fn parse_exact_numeric(text: &str, negated: bool) -> Result<Value> {
    let digits: String = text
        .chars()
        .filter(|c| *c != '_' && *c != 'l' && *c != 'L')
        .collect();

    let (radix, digits) = if let Some(rest) = digits.strip_prefix("0x").or(digits.strip_prefix("0X")) {
        (16, rest)
    } else if let Some(rest) = digits.strip_prefix("0b").or(digits.strip_prefix("0B")) {
        (2, rest)
    } else if digits.starts_with('0') {
        (8, digits.as_str())
    } else {
        (10, digits.as_str())
    };

    let value = u64::from_str_radix(digits, radix)
        .map_err(|_| SelectorError::parse(text, "integer literal too big"))?;

    if radix != 10 || value <= i64::MAX as u64 {
        let v = value as i64;
        return Ok(Value::Int(if negated { v.wrapping_neg() } else { v }));
    }
    // -9223372036854775808 is representable even though its magnitude is
    // one past i64::MAX.
    if negated && value == i64::MAX as u64 + 1 {
        return Ok(Value::Int(i64::MIN));
    }
    Err(SelectorError::parse(text, "integer literal too big"))
}

/// Parse the text of an approx-numeric token into a float value, after
/// stripping `_` separators and any `f`/`F`/`d`/`D` suffix. An infinite
/// result means the literal overflowed the double range; a zero or
/// subnormal result from a nonzero significand means it underflowed.
pub fn parse_approx_numeric(text: &str) -> Result<Value> {
    let digits: String = text
        .chars()
        .filter(|c| !matches!(c, '_' | 'f' | 'F' | 'd' | 'D'))
        .collect();
    let value: f64 = digits
        .parse()
        .map_err(|_| SelectorError::parse(text, "floating literal overflow/underflow"))?;
    let significand_is_nonzero = digits
        .split(['e', 'E'])
        .next()
        .is_some_and(|m| m.chars().any(|c| c.is_ascii_digit() && c != '0'));
    let underflowed = (value == 0.0 || value.is_subnormal()) && significand_is_nonzero;
    if value.is_infinite() || underflowed {
        return Err(SelectorError::parse(text, "floating literal overflow/underflow"));
    }
    Ok(Value::Float(value))
}
