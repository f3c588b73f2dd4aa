//! Error types for parsing, conversion and formatting.

use core::fmt;

/// The reason a string failed to parse as a 128-bit integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum IntErrorKind {
    /// The input was empty, or empty after the sign and prefix.
    Empty,
    /// A character was not a digit of the expected radix.
    InvalidDigit,
    /// The input encodes more magnitude bits than the type holds. Only
    /// hexadecimal inputs report this; decimal parsing wraps instead.
    Overflow,
}

/// Error returned when parsing a [`UInt128`](crate::UInt128) or
/// [`Int128`](crate::Int128) from a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseInt128Error {
    pub(crate) kind: IntErrorKind,
}

impl ParseInt128Error {
    /// The detailed cause of the failure.
    pub fn kind(&self) -> &IntErrorKind {
        &self.kind
    }

    pub(crate) fn description(&self) -> &str {
        match self.kind {
            IntErrorKind::Empty => "cannot parse integer from empty string",
            IntErrorKind::InvalidDigit => "invalid digit found in string",
            IntErrorKind::Overflow => "number too large to fit in target type",
        }
    }
}

impl fmt::Display for ParseInt128Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl std::error::Error for ParseInt128Error {}

/// Error returned when a checked integer conversion loses the value, e.g.
/// a negative [`Int128`](crate::Int128) into a `u64` or a value above
/// `i32::MAX` into an `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryFromIntError(pub(crate) ());

impl fmt::Display for TryFromIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("out of range integral type conversion attempted")
    }
}

impl std::error::Error for TryFromIntError {}

/// Error returned when a float cannot be converted to a 128-bit integer:
/// NaN, an infinity, or a finite magnitude outside the target range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryFromFloatError(pub(crate) ());

impl fmt::Display for TryFromFloatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("out of range float to integer conversion attempted")
    }
}

impl std::error::Error for TryFromFloatError {}

/// The reason a format specifier was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormatErrorKind {
    /// The leading specifier letter is not one of `x X d D g G n N`.
    UnsupportedSpecifier,
    /// The characters after the specifier letter are not a decimal width.
    InvalidWidth,
}

/// Error returned by [`format_spec`](crate::Int128::format_spec) for a
/// malformed or unsupported specifier string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatError {
    pub(crate) kind: FormatErrorKind,
}

impl FormatError {
    /// The detailed cause of the failure.
    pub fn kind(&self) -> &FormatErrorKind {
        &self.kind
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FormatErrorKind::UnsupportedSpecifier => f.write_str("unsupported format specifier"),
            FormatErrorKind::InvalidWidth => f.write_str("invalid width in format specifier"),
        }
    }
}

impl std::error::Error for FormatError {}
