//! The signed 128-bit type.
//!
//! `Int128` is a two's-complement view over the same two 64-bit words as
//! [`UInt128`]. Sign lives in bit 63 of the high word; negation is bitwise
//! NOT plus one. All magnitude arithmetic is delegated to `UInt128` and
//! only the sign bookkeeping lives here.

use core::cmp::Ordering;
use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign,
    Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

use crate::uint128::{forward_op_assign, forward_shift_assign, UInt128};

/// The sign bit within the high word.
const SIGN_MASK: u64 = 1 << 63;

/// A signed 128-bit integer emulated as a pair of 64-bit words in
/// two's-complement form.
///
/// The range is asymmetric: [`MIN`](Self::MIN) is `-2^127` and has no
/// representable positive counterpart, so [`Neg`], [`abs`](Self::abs) and
/// `-1 * MIN` raise while `MIN / -1` wraps back to `MIN`. `+`, `-` and the
/// `wrapping_*` methods wrap modulo 2^128; `/` and `%` panic on a zero
/// divisor. The remainder truncates toward zero and carries the sign of
/// the dividend.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Int128 {
    pub(crate) repr: UInt128,
}

impl Int128 {
    /// The value 0.
    pub const ZERO: Self = Self::from_words(0, 0);
    /// The value 1.
    pub const ONE: Self = Self::from_words(0, 1);
    /// The value -1 (all bits set).
    pub const NEG_ONE: Self = Self::from_words(u64::MAX, u64::MAX);
    /// The smallest value, -2^127. Only the sign bit is set.
    pub const MIN: Self = Self::from_words(SIGN_MASK, 0);
    /// The largest value, 2^127 - 1.
    pub const MAX: Self = Self::from_words(SIGN_MASK - 1, u64::MAX);
    /// The width of the type in bits.
    pub const BITS: u32 = 128;

    /// Builds a value from its raw most- and least-significant words.
    #[inline]
    pub const fn from_words(hi: u64, lo: u64) -> Self {
        Self { repr: UInt128::from_words(hi, lo) }
    }

    /// The most significant 64 bits, sign bit included.
    #[inline]
    pub const fn high(self) -> u64 {
        self.repr.hi
    }

    /// The least significant 64 bits.
    #[inline]
    pub const fn low(self) -> u64 {
        self.repr.lo
    }

    /// Reinterprets an unsigned bit pattern as signed. Lossless; values at
    /// or above 2^127 come out negative.
    #[inline]
    pub const fn from_bits(bits: UInt128) -> Self {
        Self { repr: bits }
    }

    /// The raw bit pattern as an unsigned value.
    #[inline]
    pub const fn to_bits(self) -> UInt128 {
        self.repr
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.repr.hi & SIGN_MASK != 0
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        !self.is_negative() && !self.is_zero()
    }

    #[inline]
    pub(crate) const fn is_zero(self) -> bool {
        self.repr.hi == 0 && self.repr.lo == 0
    }

    /// -1, 0 or 1 according to sign.
    #[inline]
    pub const fn signum(self) -> Self {
        if self.is_negative() {
            Self::NEG_ONE
        } else if self.is_zero() {
            Self::ZERO
        } else {
            Self::ONE
        }
    }

    /// Wrapping (modular) addition. Signed and unsigned addition are the
    /// same word operation; only overflow detection differs.
    #[inline]
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        Self { repr: self.repr.wrapping_add(rhs.repr) }
    }

    /// Addition with signed overflow detection: operands of the same sign
    /// whose sum has the opposite sign overflowed.
    #[inline]
    pub const fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let sum = self.wrapping_add(rhs);
        let overflow = (self.repr.hi ^ rhs.repr.hi) & SIGN_MASK == 0
            && (self.repr.hi ^ sum.repr.hi) & SIGN_MASK != 0;
        (sum, overflow)
    }

    /// Checked addition: `None` on signed overflow.
    #[inline]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        let (sum, overflow) = self.overflowing_add(rhs);
        if overflow {
            None
        } else {
            Some(sum)
        }
    }

    /// Wrapping (modular) subtraction via the two's-complement negation of
    /// `rhs`.
    #[inline]
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        Self { repr: self.repr.wrapping_sub(rhs.repr) }
    }

    /// Subtraction with signed overflow detection.
    #[inline]
    pub fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        let result = self.wrapping_sub(rhs);
        let overflow = if rhs >= Self::ZERO { result > self } else { result <= self };
        (result, overflow)
    }

    /// Checked subtraction: `None` on signed overflow.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        let (diff, overflow) = self.overflowing_sub(rhs);
        if overflow {
            None
        } else {
            Some(diff)
        }
    }

    /// Two's-complement negation. `MIN` maps back to `MIN`.
    #[inline]
    pub const fn wrapping_neg(self) -> Self {
        Self { repr: self.repr.wrapping_neg() }
    }

    /// Negation, or `None` for `MIN`, whose magnitude exceeds `MAX`.
    #[inline]
    pub const fn checked_neg(self) -> Option<Self> {
        if self.repr.hi == SIGN_MASK && self.repr.lo == 0 {
            None
        } else {
            Some(self.wrapping_neg())
        }
    }

    /// Absolute value.
    ///
    /// # Panics
    ///
    /// Panics for `MIN`.
    #[inline]
    pub const fn abs(self) -> Self {
        match self.checked_abs() {
            Some(abs) => abs,
            None => panic!("attempt to negate with overflow"),
        }
    }

    /// Absolute value, or `None` for `MIN`.
    #[inline]
    pub const fn checked_abs(self) -> Option<Self> {
        if self.is_negative() {
            self.checked_neg()
        } else {
            Some(self)
        }
    }

    /// The magnitude as an unsigned value. Total: `MIN` yields 2^127.
    #[inline]
    pub const fn unsigned_abs(self) -> UInt128 {
        if self.is_negative() {
            self.repr.wrapping_neg()
        } else {
            self.repr
        }
    }

    /// Wrapping multiplication with best-effort sign correction.
    ///
    /// Zero and +/-1 operands take fast paths (`-1 * MIN` wraps here; the
    /// `*` operator and [`checked_mul`](Self::checked_mul) reject it).
    /// Otherwise the raw truncating word product is computed and its sign
    /// bit is forced to the sign the operands call for. When the true
    /// product needed more than 127 magnitude bits that forced sign can
    /// differ from plain mod-2^128 wrapping; the corrected value is kept.
    pub fn wrapping_mul(self, rhs: Self) -> Self {
        if self.is_zero() || rhs.is_zero() {
            return Self::ZERO;
        }
        if self == Self::ONE {
            return rhs;
        }
        if rhs == Self::ONE {
            return self;
        }
        if self == Self::NEG_ONE {
            return rhs.wrapping_neg();
        }
        if rhs == Self::NEG_ONE {
            return self.wrapping_neg();
        }

        let should_be_negative = self.is_negative() != rhs.is_negative();
        let mut product = Self::from_bits(self.repr.wrapping_mul(rhs.repr));
        if product.is_negative() != should_be_negative {
            product = product.wrapping_neg();
        }
        product
    }

    /// Multiplication, or `None` for `-1 * MIN` (in either order), whose
    /// result would be 2^127.
    ///
    /// Truncation of large products is not detected; those wrap exactly as
    /// [`wrapping_mul`](Self::wrapping_mul) does.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        if (self == Self::NEG_ONE && rhs == Self::MIN)
            || (rhs == Self::NEG_ONE && self == Self::MIN)
        {
            None
        } else {
            Some(self.wrapping_mul(rhs))
        }
    }

    /// Simultaneous truncating division and remainder.
    ///
    /// The quotient is negative exactly when the operand signs differ; the
    /// remainder carries the sign of the dividend. `MIN / -1` wraps to
    /// `MIN`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    pub fn div_rem(self, rhs: Self) -> (Self, Self) {
        match self.checked_div_rem(rhs) {
            Some(qr) => qr,
            None => panic!("attempt to divide by zero"),
        }
    }

    /// Division and remainder, or `None` if `rhs` is zero.
    pub fn checked_div_rem(self, rhs: Self) -> Option<(Self, Self)> {
        let (q, r) = self.unsigned_abs().checked_div_rem(rhs.unsigned_abs())?;
        let quotient = if self.is_negative() != rhs.is_negative() {
            Self::from_bits(q.wrapping_neg())
        } else {
            Self::from_bits(q)
        };
        let remainder = if self.is_negative() {
            Self::from_bits(r.wrapping_neg())
        } else {
            Self::from_bits(r)
        };
        Some((quotient, remainder))
    }

    /// Checked division: `None` if `rhs` is zero.
    #[inline]
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        self.checked_div_rem(rhs).map(|(q, _)| q)
    }

    /// Checked remainder: `None` if `rhs` is zero.
    #[inline]
    pub fn checked_rem(self, rhs: Self) -> Option<Self> {
        self.checked_div_rem(rhs).map(|(_, r)| r)
    }

    /// Left shift, identical to the unsigned shift. Amount masked to
    /// `0..=127`.
    #[inline]
    pub const fn wrapping_shl(self, amount: u32) -> Self {
        Self { repr: self.repr.wrapping_shl(amount) }
    }

    /// Arithmetic right shift: vacated high bits are filled with copies of
    /// the sign bit, so `-1 >> n` stays `-1`. Amount masked to `0..=127`.
    #[inline]
    pub const fn wrapping_shr(self, amount: u32) -> Self {
        let amount = amount & 127;
        let hi = self.repr.hi;
        let lo = self.repr.lo;
        if amount == 0 {
            self
        } else if amount < 64 {
            Self::from_words(((hi as i64) >> amount) as u64, (lo >> amount) | (hi << (64 - amount)))
        } else {
            // The low word receives sign-extended high bits; the high word
            // is pure sign fill.
            Self::from_words(((hi as i64) >> 63) as u64, ((hi as i64) >> (amount - 64)) as u64)
        }
    }

    /// The 16-byte little-endian two's-complement representation.
    #[inline]
    pub const fn to_le_bytes(self) -> [u8; 16] {
        self.repr.to_le_bytes()
    }

    /// The 16-byte big-endian two's-complement representation.
    #[inline]
    pub const fn to_be_bytes(self) -> [u8; 16] {
        self.repr.to_be_bytes()
    }

    /// Rebuilds a value from its little-endian two's-complement bytes.
    #[inline]
    pub const fn from_le_bytes(bytes: [u8; 16]) -> Self {
        Self { repr: UInt128::from_le_bytes(bytes) }
    }

    /// Rebuilds a value from its big-endian two's-complement bytes.
    #[inline]
    pub const fn from_be_bytes(bytes: [u8; 16]) -> Self {
        Self { repr: UInt128::from_be_bytes(bytes) }
    }
}

impl Ord for Int128 {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // Differing signs decide immediately; within one sign the raw
        // two's-complement words are already in numeric order.
        match (self.is_negative(), other.is_negative()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => self.repr.cmp(&other.repr),
        }
    }
}

impl PartialOrd for Int128 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Int128 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
}

impl Sub for Int128 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }
}

impl Mul for Int128 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        match self.checked_mul(rhs) {
            Some(product) => product,
            None => panic!("attempt to multiply with overflow"),
        }
    }
}

impl Div for Int128 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.div_rem(rhs).0
    }
}

impl Rem for Int128 {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: Self) -> Self {
        self.div_rem(rhs).1
    }
}

impl Neg for Int128 {
    type Output = Self;
    /// # Panics
    ///
    /// Panics for `MIN`.
    #[inline]
    fn neg(self) -> Self {
        match self.checked_neg() {
            Some(neg) => neg,
            None => panic!("attempt to negate with overflow"),
        }
    }
}

impl Not for Int128 {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self { repr: !self.repr }
    }
}

impl BitAnd for Int128 {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self { repr: self.repr & rhs.repr }
    }
}

impl BitOr for Int128 {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self { repr: self.repr | rhs.repr }
    }
}

impl BitXor for Int128 {
    type Output = Self;
    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self { repr: self.repr ^ rhs.repr }
    }
}

impl Shl<u32> for Int128 {
    type Output = Self;
    #[inline]
    fn shl(self, amount: u32) -> Self {
        self.wrapping_shl(amount)
    }
}

impl Shr<u32> for Int128 {
    type Output = Self;
    #[inline]
    fn shr(self, amount: u32) -> Self {
        self.wrapping_shr(amount)
    }
}

impl Shl<usize> for Int128 {
    type Output = Self;
    #[inline]
    fn shl(self, amount: usize) -> Self {
        self.wrapping_shl(amount as u32)
    }
}

impl Shr<usize> for Int128 {
    type Output = Self;
    #[inline]
    fn shr(self, amount: usize) -> Self {
        self.wrapping_shr(amount as u32)
    }
}

impl Shl<i32> for Int128 {
    type Output = Self;
    #[inline]
    fn shl(self, amount: i32) -> Self {
        self.wrapping_shl(amount as u32)
    }
}

impl Shr<i32> for Int128 {
    type Output = Self;
    #[inline]
    fn shr(self, amount: i32) -> Self {
        self.wrapping_shr(amount as u32)
    }
}

forward_op_assign!(
    Int128,
    AddAssign::add_assign => Add::add,
    SubAssign::sub_assign => Sub::sub,
    MulAssign::mul_assign => Mul::mul,
    DivAssign::div_assign => Div::div,
    RemAssign::rem_assign => Rem::rem,
    BitAndAssign::bitand_assign => BitAnd::bitand,
    BitOrAssign::bitor_assign => BitOr::bitor,
    BitXorAssign::bitxor_assign => BitXor::bitxor,
);
forward_shift_assign!(Int128);
