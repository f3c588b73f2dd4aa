//! Word-level bit primitives shared by the unsigned and signed types.
//!
//! Everything here is constant-time and allocation-free. The 128-bit
//! find-last-set is assembled from two 64-bit leading-zero counts rather
//! than a bit-by-bit scan, so division cost tracks the bit-length
//! difference of its operands instead of their magnitude.

/// Leading-zero counts for the final nibble of the narrowing search:
/// entry `i` is the number of leading zeros in the low 4 bits of `i`.
const NIBBLE_LZ: [u8; 16] = [
    4, 3, 2, 2, //
    1, 1, 1, 1, //
    0, 0, 0, 0, //
    0, 0, 0, 0,
];

/// Counts leading zero bits of `n`. Total: returns 64 for an input of 0.
///
/// Successive `>> 32/16/8/4` probes narrow the window holding the highest
/// set bit, and the 16-entry table finishes the remaining nibble, so the
/// cost is a fixed handful of branches rather than a loop over the word.
pub(crate) const fn leading_zeros_u64(mut n: u64) -> u32 {
    if n == 0 {
        return 64;
    }
    let mut zeros = 60u32;
    if (n >> 32) != 0 {
        zeros -= 32;
        n >>= 32;
    }
    if (n >> 16) != 0 {
        zeros -= 16;
        n >>= 16;
    }
    if (n >> 8) != 0 {
        zeros -= 8;
        n >>= 8;
    }
    if (n >> 4) != 0 {
        zeros -= 4;
        n >>= 4;
    }
    NIBBLE_LZ[n as usize] as u32 + zeros
}

/// Bit index (0..=127) of the most significant set bit of the 128-bit
/// magnitude `hi:lo`.
///
/// Precondition: `(hi, lo) != (0, 0)`. This sits on the division hot path,
/// so the precondition is enforced with a debug assertion only; callers
/// that cannot guarantee a nonzero value go through
/// [`UInt128::checked_ilog2`](crate::UInt128::checked_ilog2).
pub(crate) const fn fls128(hi: u64, lo: u64) -> u32 {
    debug_assert!(hi != 0 || lo != 0, "fls128 is undefined for zero");
    if hi != 0 {
        127 - leading_zeros_u64(hi)
    } else {
        63 - leading_zeros_u64(lo)
    }
}
