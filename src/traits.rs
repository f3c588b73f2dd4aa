//! `num-traits` implementations, so the types slot into generic numeric
//! code the way the primitives do.

use num_traits::{
    Bounded, CheckedAdd, CheckedDiv, CheckedMul, CheckedNeg, CheckedRem, CheckedSub, Num, One,
    Signed, Unsigned, WrappingAdd, WrappingMul, WrappingNeg, WrappingShl, WrappingShr, WrappingSub,
    Zero,
};

use crate::error::ParseInt128Error;
use crate::{Int128, UInt128};

macro_rules! impl_shared_traits {
    ($t:ty) => {
        impl Zero for $t {
            #[inline]
            fn zero() -> Self {
                Self::ZERO
            }

            #[inline]
            fn is_zero(&self) -> bool {
                *self == Self::ZERO
            }
        }

        impl One for $t {
            #[inline]
            fn one() -> Self {
                Self::ONE
            }
        }

        impl Num for $t {
            type FromStrRadixErr = ParseInt128Error;

            #[inline]
            fn from_str_radix(src: &str, radix: u32) -> Result<Self, ParseInt128Error> {
                <$t>::from_str_radix(src, radix)
            }
        }

        impl CheckedAdd for $t {
            #[inline]
            fn checked_add(&self, v: &Self) -> Option<Self> {
                <$t>::checked_add(*self, *v)
            }
        }

        impl CheckedSub for $t {
            #[inline]
            fn checked_sub(&self, v: &Self) -> Option<Self> {
                <$t>::checked_sub(*self, *v)
            }
        }

        impl CheckedDiv for $t {
            #[inline]
            fn checked_div(&self, v: &Self) -> Option<Self> {
                <$t>::checked_div(*self, *v)
            }
        }

        impl CheckedRem for $t {
            #[inline]
            fn checked_rem(&self, v: &Self) -> Option<Self> {
                <$t>::checked_rem(*self, *v)
            }
        }

        impl WrappingAdd for $t {
            #[inline]
            fn wrapping_add(&self, v: &Self) -> Self {
                <$t>::wrapping_add(*self, *v)
            }
        }

        impl WrappingSub for $t {
            #[inline]
            fn wrapping_sub(&self, v: &Self) -> Self {
                <$t>::wrapping_sub(*self, *v)
            }
        }

        impl WrappingMul for $t {
            #[inline]
            fn wrapping_mul(&self, v: &Self) -> Self {
                <$t>::wrapping_mul(*self, *v)
            }
        }

        impl WrappingNeg for $t {
            #[inline]
            fn wrapping_neg(&self) -> Self {
                <$t>::wrapping_neg(*self)
            }
        }

        impl WrappingShl for $t {
            #[inline]
            fn wrapping_shl(&self, rhs: u32) -> Self {
                <$t>::wrapping_shl(*self, rhs)
            }
        }

        impl WrappingShr for $t {
            #[inline]
            fn wrapping_shr(&self, rhs: u32) -> Self {
                <$t>::wrapping_shr(*self, rhs)
            }
        }
    };
}

impl_shared_traits!(UInt128);
impl_shared_traits!(Int128);

impl Bounded for UInt128 {
    #[inline]
    fn min_value() -> Self {
        Self::ZERO
    }

    #[inline]
    fn max_value() -> Self {
        Self::MAX
    }
}

impl Bounded for Int128 {
    #[inline]
    fn min_value() -> Self {
        Self::MIN
    }

    #[inline]
    fn max_value() -> Self {
        Self::MAX
    }
}

impl Unsigned for UInt128 {}

impl CheckedMul for UInt128 {
    /// The multiply path has no overflow signal; truncation wraps, so
    /// this never returns `None`.
    #[inline]
    fn checked_mul(&self, v: &Self) -> Option<Self> {
        Some(UInt128::wrapping_mul(*self, *v))
    }
}

impl CheckedMul for Int128 {
    #[inline]
    fn checked_mul(&self, v: &Self) -> Option<Self> {
        Int128::checked_mul(*self, *v)
    }
}

impl CheckedNeg for Int128 {
    #[inline]
    fn checked_neg(&self) -> Option<Self> {
        Int128::checked_neg(*self)
    }
}

impl Signed for Int128 {
    /// # Panics
    ///
    /// Panics for `MIN`.
    #[inline]
    fn abs(&self) -> Self {
        Int128::abs(*self)
    }

    #[inline]
    fn abs_sub(&self, other: &Self) -> Self {
        if *self <= *other {
            Self::ZERO
        } else {
            *self - *other
        }
    }

    #[inline]
    fn signum(&self) -> Self {
        Int128::signum(*self)
    }

    #[inline]
    fn is_positive(&self) -> bool {
        Int128::is_positive(*self)
    }

    #[inline]
    fn is_negative(&self) -> bool {
        Int128::is_negative(*self)
    }
}
