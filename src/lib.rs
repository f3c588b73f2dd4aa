//! Software-emulated 128-bit integers built from pairs of 64-bit words.
//!
//! [`UInt128`] is an unsigned magnitude over `(hi, lo)` words and owns
//! the word-level algorithms: carrying addition, two's-complement
//! negation, cross-word shifts, a 32-bit-half decomposition multiply and
//! shift-subtract long division. [`Int128`] reinterprets the same layout
//! as two's-complement and layers sign handling on top, including the
//! asymmetric `MIN` whose magnitude has no positive counterpart.
//!
//! Nothing here assumes a native 128-bit integer; every operation is
//! expressed over 64-bit words, so the crate doubles as a reference for
//! what the wide arithmetic actually does.
//!
//! Arithmetic follows the primitive types where that makes sense
//! (operator wrapping policy, `wrapping_*`/`overflowing_*`/`checked_*`
//! families, panic messages) and keeps deliberate policy choices of the
//! emulated design elsewhere: truncating division with dividend-sign
//! remainder, silently truncating multiply, wrapping decimal parse, and
//! byte-trimmed hex formatting through [`format_spec`].
//!
//! ```
//! use emu128::{Int128, UInt128};
//!
//! let (sum, carry) = UInt128::MAX.overflowing_add(UInt128::ONE);
//! assert_eq!(sum, UInt128::ZERO);
//! assert!(carry);
//!
//! let n: Int128 = "-170,141,183,460,469,231,731,687,303,715,884,105,728".parse().unwrap();
//! assert_eq!(n, Int128::MIN);
//! assert_eq!(Int128::MAX.format_spec("X").unwrap(), format!("7{}", "F".repeat(31)));
//! ```
//!
//! With the `serde` feature the types serialize as decimal strings in
//! human-readable formats and as their 16 little-endian bytes in binary
//! ones.
//!
//! [`format_spec`]: Int128::format_spec

mod bits;
mod convert;
mod error;
mod fmt;
mod int128;
mod parse;
#[cfg(feature = "serde")]
mod serde_impl;
mod traits;
mod uint128;

pub use crate::error::{
    FormatError, FormatErrorKind, IntErrorKind, ParseInt128Error, TryFromFloatError,
    TryFromIntError,
};
pub use crate::int128::Int128;
pub use crate::uint128::UInt128;
