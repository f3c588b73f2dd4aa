//! The unsigned 128-bit magnitude type and its arithmetic engine.
//!
//! `UInt128` owns every algorithm that works on raw magnitudes: carrying
//! addition, two's-complement negation, cross-word shifts, the 64x64
//! decomposition multiply, and shift-subtract long division. The signed
//! [`Int128`](crate::Int128) type reinterprets the same two words and
//! delegates its magnitude work here.

use core::cmp::Ordering;
use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign,
    Mul, MulAssign, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

use crate::bits::{fls128, leading_zeros_u64};

/// An unsigned 128-bit integer emulated as a pair of 64-bit words.
///
/// The represented value is `hi * 2^64 + lo`; every bit pattern is a valid
/// magnitude. Values are immutable sixteen-byte `Copy` data — all
/// operations return new values and none allocates.
///
/// Arithmetic policy: `+`, `-`, `*` and the `wrapping_*` methods wrap
/// modulo 2^128 (`overflowing_add` additionally reports the carry-out);
/// `/` and `%` panic on a zero divisor, with `checked_*` variants that
/// return `None` instead. Shift amounts are masked to `0..=127`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UInt128 {
    pub(crate) hi: u64,
    pub(crate) lo: u64,
}

impl UInt128 {
    /// The value 0.
    pub const ZERO: Self = Self::from_words(0, 0);
    /// The value 1.
    pub const ONE: Self = Self::from_words(0, 1);
    /// The largest representable value, 2^128 - 1 (all bits set).
    pub const MAX: Self = Self::from_words(u64::MAX, u64::MAX);
    /// The width of the type in bits.
    pub const BITS: u32 = 128;

    /// Builds a value from its most- and least-significant 64-bit words.
    #[inline]
    pub const fn from_words(hi: u64, lo: u64) -> Self {
        Self { hi, lo }
    }

    /// The most significant 64 bits.
    #[inline]
    pub const fn high(self) -> u64 {
        self.hi
    }

    /// The least significant 64 bits.
    #[inline]
    pub const fn low(self) -> u64 {
        self.lo
    }

    /// Number of leading zero bits (128 for zero).
    #[inline]
    pub const fn leading_zeros(self) -> u32 {
        if self.hi != 0 {
            leading_zeros_u64(self.hi)
        } else {
            64 + leading_zeros_u64(self.lo)
        }
    }

    /// Base-2 logarithm, i.e. the bit index of the most significant set
    /// bit.
    ///
    /// # Panics
    ///
    /// Panics if `self` is zero.
    #[inline]
    pub const fn ilog2(self) -> u32 {
        match self.checked_ilog2() {
            Some(log) => log,
            None => panic!("argument of integer logarithm must be positive"),
        }
    }

    /// Base-2 logarithm, or `None` if `self` is zero.
    #[inline]
    pub const fn checked_ilog2(self) -> Option<u32> {
        if self.hi == 0 && self.lo == 0 {
            None
        } else {
            Some(fls128(self.hi, self.lo))
        }
    }

    /// Wrapping (modular) addition.
    #[inline]
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        let (sum, _) = self.overflowing_add(rhs);
        sum
    }

    /// Addition with an explicit carry-out: the wrapped sum together with
    /// a flag that is `true` when the mathematical sum does not fit in
    /// 128 bits.
    #[inline]
    pub const fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let lo = self.lo.wrapping_add(rhs.lo);
        // Unsigned overflow signature: a wrapped sum is smaller than
        // either operand.
        let carry = lo < self.lo;
        let (hi, c1) = self.hi.overflowing_add(rhs.hi);
        let (hi, c2) = hi.overflowing_add(carry as u64);
        (Self { hi, lo }, c1 | c2)
    }

    /// Checked addition: `None` on carry-out.
    #[inline]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        let (sum, carry) = self.overflowing_add(rhs);
        if carry {
            None
        } else {
            Some(sum)
        }
    }

    /// Wrapping (modular) subtraction, implemented as addition of the
    /// two's-complement negation.
    #[inline]
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        self.wrapping_add(rhs.wrapping_neg())
    }

    /// Subtraction with a borrow flag: `true` when `rhs > self` and the
    /// result wrapped.
    #[inline]
    pub const fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        let borrow = self.hi < rhs.hi || (self.hi == rhs.hi && self.lo < rhs.lo);
        (self.wrapping_sub(rhs), borrow)
    }

    /// Checked subtraction: `None` on borrow.
    #[inline]
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        let (diff, borrow) = self.overflowing_sub(rhs);
        if borrow {
            None
        } else {
            Some(diff)
        }
    }

    /// Two's-complement negation: bitwise NOT plus one.
    #[inline]
    pub const fn wrapping_neg(self) -> Self {
        Self { hi: !self.hi, lo: !self.lo }.wrapping_add(Self::ONE)
    }

    /// Left shift. The amount is masked to `0..=127`; 64-bit word shifts
    /// never see an amount of 64 or more.
    #[inline]
    pub const fn wrapping_shl(self, amount: u32) -> Self {
        let amount = amount & 127;
        if amount == 0 {
            self
        } else if amount < 64 {
            Self {
                hi: (self.hi << amount) | (self.lo >> (64 - amount)),
                lo: self.lo << amount,
            }
        } else {
            Self { hi: self.lo << (amount - 64), lo: 0 }
        }
    }

    /// Logical (zero-filling) right shift, amount masked to `0..=127`.
    #[inline]
    pub const fn wrapping_shr(self, amount: u32) -> Self {
        let amount = amount & 127;
        if amount == 0 {
            self
        } else if amount < 64 {
            Self {
                hi: self.hi >> amount,
                lo: (self.lo >> amount) | (self.hi << (64 - amount)),
            }
        } else {
            Self { hi: 0, lo: self.hi >> (amount - 64) }
        }
    }

    /// Truncating multiplication: the low 128 bits of the full product.
    ///
    /// No 128x128 -> 256 hardware multiply is assumed. The low words are
    /// split into 32-bit halves and the product is assembled from their
    /// cross products plus the two opposite-word-times-low-word terms;
    /// bits above 2^128 are silently discarded. Unlike addition there is
    /// no overflow signal — truncation is the documented policy.
    #[inline]
    pub const fn wrapping_mul(self, rhs: Self) -> Self {
        let a32 = self.lo >> 32;
        let a00 = self.lo & 0xffff_ffff;
        let b32 = rhs.lo >> 32;
        let b00 = rhs.lo & 0xffff_ffff;

        let hi = self
            .hi
            .wrapping_mul(rhs.lo)
            .wrapping_add(self.lo.wrapping_mul(rhs.hi))
            .wrapping_add(a32.wrapping_mul(b32));
        let result = Self { hi, lo: a00.wrapping_mul(b00) };

        // The two 32x32 cross terms are at most 64 bits wide; shifted left
        // 32 they straddle the word boundary and are folded in with
        // carrying adds.
        let result = result.wrapping_add(Self::from_words(0, a32 * b00).wrapping_shl(32));
        result.wrapping_add(Self::from_words(0, a00 * b32).wrapping_shl(32))
    }

    /// Simultaneous truncating division and remainder.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[inline]
    pub fn div_rem(self, divisor: Self) -> (Self, Self) {
        match self.checked_div_rem(divisor) {
            Some(qr) => qr,
            None => panic!("attempt to divide by zero"),
        }
    }

    /// Division and remainder, or `None` if `divisor` is zero.
    pub fn checked_div_rem(self, divisor: Self) -> Option<(Self, Self)> {
        if divisor == Self::ZERO {
            return None;
        }
        // Fast paths: a strictly larger divisor (which also covers a zero
        // dividend) and an equal divisor need no loop at all.
        if divisor > self {
            return Some((Self::ZERO, self));
        }
        if divisor == self {
            return Some((Self::ONE, Self::ZERO));
        }

        // Shift-subtract long division: left-align the divisor with the
        // dividend, then walk it back down one bit per iteration. The loop
        // runs `shift + 1` times, so cost is proportional to the
        // bit-length difference of the operands (worst case 128).
        let shift = fls128(self.hi, self.lo) - fls128(divisor.hi, divisor.lo);
        let mut denom = divisor.wrapping_shl(shift);
        let mut quotient = Self::ZERO;
        let mut remainder = self;
        for _ in 0..=shift {
            quotient = quotient.wrapping_shl(1);
            if remainder >= denom {
                remainder = remainder.wrapping_sub(denom);
                quotient.lo |= 1;
            }
            denom = denom.wrapping_shr(1);
        }
        Some((quotient, remainder))
    }

    /// Checked division: `None` if `divisor` is zero.
    #[inline]
    pub fn checked_div(self, divisor: Self) -> Option<Self> {
        self.checked_div_rem(divisor).map(|(q, _)| q)
    }

    /// Checked remainder: `None` if `divisor` is zero.
    #[inline]
    pub fn checked_rem(self, divisor: Self) -> Option<Self> {
        self.checked_div_rem(divisor).map(|(_, r)| r)
    }

    /// The 16-byte little-endian representation: byte 0 is the least
    /// significant byte of the low word.
    pub const fn to_le_bytes(self) -> [u8; 16] {
        let lo = self.lo.to_le_bytes();
        let hi = self.hi.to_le_bytes();
        [
            lo[0], lo[1], lo[2], lo[3], lo[4], lo[5], lo[6], lo[7], //
            hi[0], hi[1], hi[2], hi[3], hi[4], hi[5], hi[6], hi[7],
        ]
    }

    /// The 16-byte big-endian representation.
    pub const fn to_be_bytes(self) -> [u8; 16] {
        let hi = self.hi.to_be_bytes();
        let lo = self.lo.to_be_bytes();
        [
            hi[0], hi[1], hi[2], hi[3], hi[4], hi[5], hi[6], hi[7], //
            lo[0], lo[1], lo[2], lo[3], lo[4], lo[5], lo[6], lo[7],
        ]
    }

    /// Rebuilds a value from its little-endian representation.
    pub const fn from_le_bytes(bytes: [u8; 16]) -> Self {
        let lo = u64::from_le_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ]);
        let hi = u64::from_le_bytes([
            bytes[8], bytes[9], bytes[10], bytes[11], bytes[12], bytes[13], bytes[14], bytes[15],
        ]);
        Self { hi, lo }
    }

    /// Rebuilds a value from its big-endian representation.
    pub const fn from_be_bytes(bytes: [u8; 16]) -> Self {
        let hi = u64::from_be_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
        ]);
        let lo = u64::from_be_bytes([
            bytes[8], bytes[9], bytes[10], bytes[11], bytes[12], bytes[13], bytes[14], bytes[15],
        ]);
        Self { hi, lo }
    }
}

impl Ord for UInt128 {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // Lexicographic on (hi, lo) is numeric order for unsigned words.
        (self.hi, self.lo).cmp(&(other.hi, other.lo))
    }
}

impl PartialOrd for UInt128 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for UInt128 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
}

impl Sub for UInt128 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }
}

impl Mul for UInt128 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.wrapping_mul(rhs)
    }
}

impl Div for UInt128 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.div_rem(rhs).0
    }
}

impl Rem for UInt128 {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: Self) -> Self {
        self.div_rem(rhs).1
    }
}

impl Not for UInt128 {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self { hi: !self.hi, lo: !self.lo }
    }
}

impl BitAnd for UInt128 {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self { hi: self.hi & rhs.hi, lo: self.lo & rhs.lo }
    }
}

impl BitOr for UInt128 {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self { hi: self.hi | rhs.hi, lo: self.lo | rhs.lo }
    }
}

impl BitXor for UInt128 {
    type Output = Self;
    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self { hi: self.hi ^ rhs.hi, lo: self.lo ^ rhs.lo }
    }
}

impl Shl<u32> for UInt128 {
    type Output = Self;
    #[inline]
    fn shl(self, amount: u32) -> Self {
        self.wrapping_shl(amount)
    }
}

impl Shr<u32> for UInt128 {
    type Output = Self;
    #[inline]
    fn shr(self, amount: u32) -> Self {
        self.wrapping_shr(amount)
    }
}

impl Shl<usize> for UInt128 {
    type Output = Self;
    #[inline]
    fn shl(self, amount: usize) -> Self {
        self.wrapping_shl(amount as u32)
    }
}

impl Shr<usize> for UInt128 {
    type Output = Self;
    #[inline]
    fn shr(self, amount: usize) -> Self {
        self.wrapping_shr(amount as u32)
    }
}

impl Shl<i32> for UInt128 {
    type Output = Self;
    #[inline]
    fn shl(self, amount: i32) -> Self {
        self.wrapping_shl(amount as u32)
    }
}

impl Shr<i32> for UInt128 {
    type Output = Self;
    #[inline]
    fn shr(self, amount: i32) -> Self {
        self.wrapping_shr(amount as u32)
    }
}

macro_rules! forward_op_assign {
    ($t:ty, $($assign:ident :: $assign_fn:ident => $op:ident :: $op_fn:ident),* $(,)?) => {$(
        impl $assign for $t {
            #[inline]
            fn $assign_fn(&mut self, rhs: Self) {
                *self = $op::$op_fn(*self, rhs);
            }
        }
    )*};
}

macro_rules! forward_shift_assign {
    ($t:ty) => {
        impl ShlAssign<u32> for $t {
            #[inline]
            fn shl_assign(&mut self, amount: u32) {
                *self = *self << amount;
            }
        }
        impl ShrAssign<u32> for $t {
            #[inline]
            fn shr_assign(&mut self, amount: u32) {
                *self = *self >> amount;
            }
        }
    };
}

forward_op_assign!(
    UInt128,
    AddAssign::add_assign => Add::add,
    SubAssign::sub_assign => Sub::sub,
    MulAssign::mul_assign => Mul::mul,
    DivAssign::div_assign => Div::div,
    RemAssign::rem_assign => Rem::rem,
    BitAndAssign::bitand_assign => BitAnd::bitand,
    BitOrAssign::bitor_assign => BitOr::bitor,
    BitXorAssign::bitxor_assign => BitXor::bitxor,
);
forward_shift_assign!(UInt128);

pub(crate) use {forward_op_assign, forward_shift_assign};
