//! String parsing.
//!
//! Both types accept two input families through [`FromStr`]:
//!
//! * hexadecimal with an `0x`, `0X`, `x` or `X` prefix: at most 32 digits
//!   giving the raw bit pattern, so no sign is accepted and for
//!   [`Int128`] a high bit 127 comes out negative;
//! * decimal, optionally grouped with `,` separators, where [`Int128`]
//!   additionally takes a leading `-`. Decimal accumulation wraps modulo
//!   2^128, so over-long inputs fold silently instead of erroring.
//!
//! The prefix is checked before the sign, so `-0x1` is rejected as a
//! decimal string with an invalid digit.
//!
//! `from_str_radix` covers the other radices (2 to 36) without grouping.

use core::str::FromStr;

use crate::error::{IntErrorKind, ParseInt128Error};
use crate::{Int128, UInt128};

const TEN: UInt128 = UInt128::from_words(0, 10);

#[inline]
fn err(kind: IntErrorKind) -> ParseInt128Error {
    ParseInt128Error { kind }
}

fn strip_hex_prefix(s: &str) -> Option<&str> {
    for prefix in ["0x", "0X", "x", "X"] {
        if let Some(rest) = s.strip_prefix(prefix) {
            return Some(rest);
        }
    }
    None
}

/// Packs up to 32 hex digits into a bit pattern, least significant digit
/// last in the string.
fn parse_hex(digits: &str) -> Result<UInt128, ParseInt128Error> {
    if digits.is_empty() {
        return Err(err(IntErrorKind::Empty));
    }
    if digits.chars().count() > 32 {
        return Err(err(IntErrorKind::Overflow));
    }
    let mut hi = 0u64;
    let mut lo = 0u64;
    for (i, c) in digits.chars().rev().enumerate() {
        let nibble = c.to_digit(16).ok_or_else(|| err(IntErrorKind::InvalidDigit))? as u64;
        if i < 16 {
            lo |= nibble << (4 * i);
        } else {
            hi |= nibble << (4 * (i - 16));
        }
    }
    Ok(UInt128::from_words(hi, lo))
}

/// Wrapping radix accumulation over plain digits (no sign, no grouping).
fn parse_digits(digits: &str, radix: u32) -> Result<UInt128, ParseInt128Error> {
    if digits.is_empty() {
        return Err(err(IntErrorKind::Empty));
    }
    let step = UInt128::from_words(0, radix as u64);
    let mut value = UInt128::ZERO;
    for c in digits.chars() {
        let digit = c.to_digit(radix).ok_or_else(|| err(IntErrorKind::InvalidDigit))?;
        value = value.wrapping_mul(step).wrapping_add(UInt128::from_words(0, digit as u64));
    }
    Ok(value)
}

/// Wrapping decimal accumulation; `,` separators are skipped wherever they
/// appear, but at least one digit is required.
fn parse_decimal(digits: &str) -> Result<UInt128, ParseInt128Error> {
    if digits.is_empty() {
        return Err(err(IntErrorKind::Empty));
    }
    let mut value = UInt128::ZERO;
    let mut seen_digit = false;
    for c in digits.chars() {
        if c == ',' {
            continue;
        }
        let digit = c.to_digit(10).ok_or_else(|| err(IntErrorKind::InvalidDigit))?;
        value = value.wrapping_mul(TEN).wrapping_add(UInt128::from_words(0, digit as u64));
        seen_digit = true;
    }
    if !seen_digit {
        return Err(err(IntErrorKind::InvalidDigit));
    }
    Ok(value)
}

impl FromStr for UInt128 {
    type Err = ParseInt128Error;

    fn from_str(s: &str) -> Result<Self, ParseInt128Error> {
        match strip_hex_prefix(s) {
            Some(digits) => parse_hex(digits),
            None => parse_decimal(s),
        }
    }
}

impl FromStr for Int128 {
    type Err = ParseInt128Error;

    fn from_str(s: &str) -> Result<Self, ParseInt128Error> {
        if let Some(digits) = strip_hex_prefix(s) {
            return parse_hex(digits).map(Self::from_bits);
        }
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let magnitude = Self::from_bits(parse_decimal(digits)?);
        Ok(if negative { magnitude.wrapping_neg() } else { magnitude })
    }
}

impl UInt128 {
    /// Parses digits of the given radix (2 to 36), wrapping on overflow
    /// like decimal [`FromStr`] parsing. No sign, prefix or grouping.
    ///
    /// # Panics
    ///
    /// Panics if `radix` is outside `2..=36`.
    pub fn from_str_radix(src: &str, radix: u32) -> Result<Self, ParseInt128Error> {
        assert!((2..=36).contains(&radix), "from_str_radix: radix must lie in the range `[2, 36]`");
        parse_digits(src, radix)
    }
}

impl Int128 {
    /// Parses digits of the given radix (2 to 36) with an optional leading
    /// `-`, wrapping on overflow like decimal [`FromStr`] parsing.
    ///
    /// # Panics
    ///
    /// Panics if `radix` is outside `2..=36`.
    pub fn from_str_radix(src: &str, radix: u32) -> Result<Self, ParseInt128Error> {
        assert!((2..=36).contains(&radix), "from_str_radix: radix must lie in the range `[2, 36]`");
        let (negative, digits) = match src.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, src),
        };
        let magnitude = Self::from_bits(parse_digits(digits, radix)?);
        Ok(if negative { magnitude.wrapping_neg() } else { magnitude })
    }
}
