//! Conversions between the 128-bit types, the primitive scalars and the
//! binary floats.
//!
//! Widening conversions that can never lose a value are `From`; everything
//! that can fall out of range is `TryFrom` with
//! [`TryFromIntError`]/[`TryFromFloatError`]. Float-to-integer conversion
//! truncates toward zero; integer-to-float goes through the decimal
//! rendering so the result is correctly rounded in one step.

use crate::error::{TryFromFloatError, TryFromIntError};
use crate::{Int128, UInt128};

const TWO_POW_64: f64 = 18446744073709551616.0;
const TWO_POW_128: f64 = 340282366920938463463374607431768211456.0;

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for UInt128 {
            #[inline]
            fn from(value: $t) -> Self {
                Self::from_words(0, value as u64)
            }
        }

        impl From<$t> for Int128 {
            #[inline]
            fn from(value: $t) -> Self {
                Self::from_words(0, value as u64)
            }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for Int128 {
            /// Sign-extends into the high word.
            #[inline]
            fn from(value: $t) -> Self {
                let value = value as i64;
                Self::from_words((value >> 63) as u64, value as u64)
            }
        }

        impl TryFrom<$t> for UInt128 {
            type Error = TryFromIntError;

            #[inline]
            fn try_from(value: $t) -> Result<Self, TryFromIntError> {
                if value < 0 {
                    Err(TryFromIntError(()))
                } else {
                    Ok(Self::from_words(0, value as u64))
                }
            }
        }
    )*};
}

macro_rules! impl_try_into_unsigned {
    ($($t:ty),*) => {$(
        impl TryFrom<UInt128> for $t {
            type Error = TryFromIntError;

            #[inline]
            fn try_from(value: UInt128) -> Result<Self, TryFromIntError> {
                if value.high() != 0 {
                    return Err(TryFromIntError(()));
                }
                <$t>::try_from(value.low()).map_err(|_| TryFromIntError(()))
            }
        }

        impl TryFrom<Int128> for $t {
            type Error = TryFromIntError;

            #[inline]
            fn try_from(value: Int128) -> Result<Self, TryFromIntError> {
                if value.high() != 0 {
                    return Err(TryFromIntError(()));
                }
                <$t>::try_from(value.low()).map_err(|_| TryFromIntError(()))
            }
        }
    )*};
}

macro_rules! impl_try_into_signed {
    ($($t:ty),*) => {$(
        impl TryFrom<UInt128> for $t {
            type Error = TryFromIntError;

            #[inline]
            fn try_from(value: UInt128) -> Result<Self, TryFromIntError> {
                if value.high() != 0 {
                    return Err(TryFromIntError(()));
                }
                <$t>::try_from(value.low()).map_err(|_| TryFromIntError(()))
            }
        }

        impl TryFrom<Int128> for $t {
            type Error = TryFromIntError;

            #[inline]
            fn try_from(value: Int128) -> Result<Self, TryFromIntError> {
                // In range for i64 exactly when the high word is sign fill
                // for the low word.
                if value.high() != (((value.low() as i64) >> 63) as u64) {
                    return Err(TryFromIntError(()));
                }
                <$t>::try_from(value.low() as i64).map_err(|_| TryFromIntError(()))
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64, usize);
impl_from_signed!(i8, i16, i32, i64, isize);
impl_try_into_unsigned!(u8, u16, u32, u64, usize);
impl_try_into_signed!(i8, i16, i32, i64, isize);

impl From<bool> for UInt128 {
    #[inline]
    fn from(value: bool) -> Self {
        Self::from_words(0, value as u64)
    }
}

impl From<bool> for Int128 {
    #[inline]
    fn from(value: bool) -> Self {
        Self::from_words(0, value as u64)
    }
}

impl From<char> for UInt128 {
    #[inline]
    fn from(value: char) -> Self {
        Self::from_words(0, value as u64)
    }
}

impl From<char> for Int128 {
    #[inline]
    fn from(value: char) -> Self {
        Self::from_words(0, value as u64)
    }
}

impl TryFrom<UInt128> for Int128 {
    type Error = TryFromIntError;

    /// Fails for magnitudes at or above 2^127.
    #[inline]
    fn try_from(value: UInt128) -> Result<Self, TryFromIntError> {
        if value.high() >> 63 != 0 {
            Err(TryFromIntError(()))
        } else {
            Ok(Self::from_bits(value))
        }
    }
}

impl TryFrom<Int128> for UInt128 {
    type Error = TryFromIntError;

    /// Fails for negative values.
    #[inline]
    fn try_from(value: Int128) -> Result<Self, TryFromIntError> {
        if value.is_negative() {
            Err(TryFromIntError(()))
        } else {
            Ok(value.to_bits())
        }
    }
}

/// Truncates a non-negative finite `f64` known to be below 2^128 into its
/// two words. Scaling by 2^-64 is exact, so `hi` is the true upper word
/// and the remainder is a non-negative value below 2^64.
fn truncate_f64(value: f64) -> UInt128 {
    let value = value.trunc();
    let hi = (value / TWO_POW_64).trunc();
    let lo = value - hi * TWO_POW_64;
    UInt128::from_words(hi as u64, lo as u64)
}

impl TryFrom<f64> for UInt128 {
    type Error = TryFromFloatError;

    /// Truncates toward zero. Fails for NaN, infinities, negative values
    /// at or below -1, and magnitudes at or above 2^128.
    fn try_from(value: f64) -> Result<Self, TryFromFloatError> {
        if !value.is_finite() || value <= -1.0 || value >= TWO_POW_128 {
            return Err(TryFromFloatError(()));
        }
        if value < 0.0 {
            // (-1, 0) truncates to zero.
            return Ok(Self::ZERO);
        }
        Ok(truncate_f64(value))
    }
}

impl TryFrom<f64> for Int128 {
    type Error = TryFromFloatError;

    /// Truncates toward zero. Fails for NaN, infinities and magnitudes
    /// outside [-2^127, 2^127).
    fn try_from(value: f64) -> Result<Self, TryFromFloatError> {
        if !value.is_finite() || value >= TWO_POW_128 / 2.0 || value < -TWO_POW_128 / 2.0 {
            return Err(TryFromFloatError(()));
        }
        let magnitude = truncate_f64(value.abs());
        if value < 0.0 {
            Ok(Self::from_bits(magnitude.wrapping_neg()))
        } else {
            Ok(Self::from_bits(magnitude))
        }
    }
}

impl TryFrom<f32> for UInt128 {
    type Error = TryFromFloatError;

    #[inline]
    fn try_from(value: f32) -> Result<Self, TryFromFloatError> {
        Self::try_from(value as f64)
    }
}

impl TryFrom<f32> for Int128 {
    type Error = TryFromFloatError;

    #[inline]
    fn try_from(value: f32) -> Result<Self, TryFromFloatError> {
        Self::try_from(value as f64)
    }
}

impl From<UInt128> for f64 {
    fn from(value: UInt128) -> f64 {
        value.to_string().parse().expect("decimal rendering of an integer parses as a float")
    }
}

impl From<Int128> for f64 {
    fn from(value: Int128) -> f64 {
        value.to_string().parse().expect("decimal rendering of an integer parses as a float")
    }
}

impl From<UInt128> for f32 {
    fn from(value: UInt128) -> f32 {
        value.to_string().parse().expect("decimal rendering of an integer parses as a float")
    }
}

impl From<Int128> for f32 {
    fn from(value: Int128) -> f32 {
        value.to_string().parse().expect("decimal rendering of an integer parses as a float")
    }
}
