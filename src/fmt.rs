//! Decimal and hexadecimal rendering.
//!
//! `Display` produces plain decimal by repeated divmod-by-10 of the
//! unsigned magnitude into a stack buffer; `LowerHex`/`UpperHex` render
//! the raw bit pattern with minimal digits. `format_spec` covers the
//! specifier grammar: `x`/`X` with an optional minimum-width suffix
//! (byte-granular, leading zero bytes trimmed), `d`/`D`/`g`/`G` for plain
//! decimal, `n`/`N` for decimal with `,` grouping.

use core::fmt;
use core::str;

use crate::error::{FormatError, FormatErrorKind};
use crate::{Int128, UInt128};

const TEN: UInt128 = UInt128::from_words(0, 10);

/// Writes the decimal digits of `value` into the tail of `buf` and
/// returns the index of the first digit. 39 bytes cover 2^128 - 1.
fn decimal_digits(mut value: UInt128, buf: &mut [u8; 39]) -> usize {
    let mut start = buf.len();
    loop {
        let (quotient, remainder) = value.div_rem(TEN);
        start -= 1;
        buf[start] = b'0' + remainder.low() as u8;
        value = quotient;
        if value == UInt128::ZERO {
            return start;
        }
    }
}

impl fmt::Display for UInt128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; 39];
        let start = decimal_digits(*self, &mut buf);
        let digits = str::from_utf8(&buf[start..]).expect("decimal digits are ASCII");
        f.pad_integral(true, "", digits)
    }
}

impl fmt::Display for Int128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Formatting the unsigned magnitude keeps MIN out of signed
        // negation entirely.
        let mut buf = [0u8; 39];
        let start = decimal_digits(self.unsigned_abs(), &mut buf);
        let digits = str::from_utf8(&buf[start..]).expect("decimal digits are ASCII");
        f.pad_integral(!self.is_negative(), "", digits)
    }
}

impl fmt::Debug for UInt128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Debug for Int128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::LowerHex for UInt128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.high() == 0 {
            fmt::LowerHex::fmt(&self.low(), f)
        } else {
            let digits = format!("{:x}{:016x}", self.high(), self.low());
            f.pad_integral(true, "0x", &digits)
        }
    }
}

impl fmt::UpperHex for UInt128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.high() == 0 {
            fmt::UpperHex::fmt(&self.low(), f)
        } else {
            let digits = format!("{:X}{:016X}", self.high(), self.low());
            f.pad_integral(true, "0x", &digits)
        }
    }
}

impl fmt::LowerHex for Int128 {
    /// Renders the raw two's-complement bit pattern, like the primitive
    /// signed integers do.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.to_bits(), f)
    }
}

impl fmt::UpperHex for Int128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.to_bits(), f)
    }
}

enum SpecKind {
    Decimal,
    Grouped,
    Hex { upper: bool, min: usize },
}

fn parse_spec(spec: &str) -> Result<SpecKind, FormatError> {
    let mut chars = spec.chars();
    let letter = match chars.next() {
        Some(letter) => letter,
        None => return Ok(SpecKind::Decimal),
    };
    let rest = chars.as_str();
    match letter {
        'x' | 'X' => {
            let rest = rest.trim();
            let min = if rest.is_empty() {
                0
            } else {
                rest.parse().map_err(|_| FormatError { kind: FormatErrorKind::InvalidWidth })?
            };
            Ok(SpecKind::Hex { upper: letter == 'X', min })
        }
        'd' | 'D' | 'g' | 'G' if rest.is_empty() => Ok(SpecKind::Decimal),
        'n' | 'N' if rest.is_empty() => Ok(SpecKind::Grouped),
        _ => Err(FormatError { kind: FormatErrorKind::UnsupportedSpecifier }),
    }
}

/// Big-endian bytes to hex digits: leading zero bytes are trimmed (one
/// byte always survives, so zero renders as `00`), then the result is
/// left-padded with zeros up to `min` digits.
fn hex_from_bytes(bytes: [u8; 16], upper: bool, min: usize) -> String {
    let table: &[u8; 16] = if upper { b"0123456789ABCDEF" } else { b"0123456789abcdef" };
    let mut first = 0;
    while first < bytes.len() - 1 && bytes[first] == 0 {
        first += 1;
    }
    let mut digits = String::with_capacity(32.max(min));
    for &byte in &bytes[first..] {
        digits.push(table[(byte >> 4) as usize] as char);
        digits.push(table[(byte & 0xf) as usize] as char);
    }
    if digits.len() < min {
        let mut padded = "0".repeat(min - digits.len());
        padded.push_str(&digits);
        return padded;
    }
    digits
}

/// Inserts a `,` before every group of three digits counted from the
/// right.
fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

impl UInt128 {
    /// Renders with one of the supported format specifiers: `x`/`X` plus
    /// an optional minimum digit width, `d`/`D`/`g`/`G`, `n`/`N`, or the
    /// empty string for plain decimal.
    pub fn format_spec(&self, spec: &str) -> Result<String, FormatError> {
        match parse_spec(spec)? {
            SpecKind::Decimal => Ok(self.to_string()),
            SpecKind::Grouped => Ok(group_digits(&self.to_string())),
            SpecKind::Hex { upper, min } => Ok(hex_from_bytes(self.to_be_bytes(), upper, min)),
        }
    }
}

impl Int128 {
    /// Renders with one of the supported format specifiers: `x`/`X` plus
    /// an optional minimum digit width, `d`/`D`/`g`/`G`, `n`/`N`, or the
    /// empty string for plain decimal.
    ///
    /// Hex renders the raw two's-complement bytes, so negative values use
    /// all 32 digits rather than a sign.
    pub fn format_spec(&self, spec: &str) -> Result<String, FormatError> {
        match parse_spec(spec)? {
            SpecKind::Decimal => Ok(self.to_string()),
            SpecKind::Grouped => {
                let grouped = group_digits(&self.unsigned_abs().to_string());
                if self.is_negative() {
                    Ok(format!("-{grouped}"))
                } else {
                    Ok(grouped)
                }
            }
            SpecKind::Hex { upper, min } => Ok(hex_from_bytes(self.to_be_bytes(), upper, min)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_decimal() {
        assert_eq!(UInt128::ZERO.to_string(), "0");
        assert_eq!(UInt128::from(12345u32).to_string(), "12345");
        assert_eq!(UInt128::MAX.to_string(), "340282366920938463463374607431768211455");
        assert_eq!(Int128::NEG_ONE.to_string(), "-1");
        assert_eq!(Int128::MIN.to_string(), "-170141183460469231731687303715884105728");
        assert_eq!(Int128::MAX.to_string(), "170141183460469231731687303715884105727");
    }

    #[test]
    fn display_honors_padding() {
        assert_eq!(format!("{:>6}", UInt128::from(42u8)), "    42");
        assert_eq!(format!("{:06}", Int128::from(-42i8)), "-00042");
        assert_eq!(format!("{:+}", Int128::from(42i8)), "+42");
    }

    #[test]
    fn hex_traits() {
        assert_eq!(format!("{:x}", UInt128::from(255u32)), "ff");
        assert_eq!(format!("{:#X}", UInt128::from(255u32)), "0xFF");
        assert_eq!(format!("{:x}", UInt128::from_words(1, 2)), "10000000000000002");
        assert_eq!(format!("{:X}", UInt128::MAX), "F".repeat(32));
        // Raw bit pattern for signed values.
        assert_eq!(format!("{:x}", Int128::NEG_ONE), "f".repeat(32));
        assert_eq!(format!("{:x}", Int128::from(255u8)), "ff");
    }

    #[test]
    fn spec_decimal_family() {
        let v = Int128::from(-1_234_567i32);
        for spec in ["", "d", "D", "g", "G"] {
            assert_eq!(v.format_spec(spec).unwrap(), "-1234567", "{spec:?}");
        }
        assert_eq!(UInt128::from(7u8).format_spec("G").unwrap(), "7");
    }

    #[test]
    fn spec_grouped() {
        assert_eq!(UInt128::from(1_234_567u32).format_spec("n").unwrap(), "1,234,567");
        assert_eq!(UInt128::from(123u8).format_spec("N").unwrap(), "123");
        assert_eq!(Int128::from(-1000i16).format_spec("N").unwrap(), "-1,000");
        assert_eq!(
            UInt128::MAX.format_spec("n").unwrap(),
            "340,282,366,920,938,463,463,374,607,431,768,211,455"
        );
        assert_eq!(UInt128::ZERO.format_spec("n").unwrap(), "0");
    }

    #[test]
    fn spec_hex_trims_whole_bytes() {
        assert_eq!(Int128::from(1u8).format_spec("X").unwrap(), "01");
        assert_eq!(Int128::ZERO.format_spec("X").unwrap(), "00");
        assert_eq!(Int128::from(0x123u16).format_spec("X").unwrap(), "0123");
        assert_eq!(Int128::MAX.format_spec("X").unwrap(), format!("7{}", "F".repeat(31)));
        assert_eq!(Int128::NEG_ONE.format_spec("x").unwrap(), "f".repeat(32));
        assert_eq!(UInt128::from(0xABu8).format_spec("x").unwrap(), "ab");
    }

    #[test]
    fn spec_hex_width() {
        assert_eq!(UInt128::ONE.format_spec("x6").unwrap(), "000001");
        // Width below the natural length has no effect.
        assert_eq!(UInt128::from(0x1234u16).format_spec("X2").unwrap(), "1234");
        assert_eq!(UInt128::ONE.format_spec("X1").unwrap(), "01");
    }

    #[test]
    fn spec_rejects_unknown() {
        use crate::error::FormatErrorKind;
        assert_eq!(
            UInt128::ONE.format_spec("q").map_err(|e| *e.kind()),
            Err(FormatErrorKind::UnsupportedSpecifier)
        );
        assert_eq!(
            UInt128::ONE.format_spec("d5").map_err(|e| *e.kind()),
            Err(FormatErrorKind::UnsupportedSpecifier)
        );
        assert_eq!(
            UInt128::ONE.format_spec("xzz").map_err(|e| *e.kind()),
            Err(FormatErrorKind::InvalidWidth)
        );
    }

    #[test]
    fn parse_to_string_round_trip() {
        let values = ["0", "1", "-1", "170141183460469231731687303715884105727",
            "-170141183460469231731687303715884105728", "-42", "999999999999999999999"];
        for s in values {
            let v: Int128 = s.parse().unwrap();
            assert_eq!(v.to_string(), s);
            let hex: Int128 = format!("0x{}", v.format_spec("x").unwrap()).parse().unwrap();
            assert_eq!(hex, v);
        }
    }
}
