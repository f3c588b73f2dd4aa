//! Shared helpers: a fixed-seed RNG and bridges between the emulated
//! types and the native 128-bit primitives used as oracles.
#![allow(dead_code)]

use emu128::{Int128, UInt128};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Fixed seed so failures reproduce.
pub fn rng() -> Xoshiro256StarStar {
    Xoshiro256StarStar::seed_from_u64(0x9E37_79B9_7F4A_7C15)
}

pub fn from_u128(v: u128) -> UInt128 {
    UInt128::from_words((v >> 64) as u64, v as u64)
}

pub fn to_u128(v: UInt128) -> u128 {
    ((v.high() as u128) << 64) | v.low() as u128
}

pub fn from_i128(v: i128) -> Int128 {
    Int128::from_words((v >> 64) as u64, v as u64)
}

pub fn to_i128(v: Int128) -> i128 {
    (((v.high() as u128) << 64) | v.low() as u128) as i128
}

const U_EDGES: &[u128] = &[
    0,
    1,
    2,
    u64::MAX as u128,
    (u64::MAX as u128) + 1,
    1 << 127,
    (1 << 127) - 1,
    u128::MAX - 1,
    u128::MAX,
];

const I_EDGES: &[i128] = &[0, 1, -1, 2, -2, i64::MAX as i128, i64::MIN as i128, i128::MAX, i128::MIN, i128::MIN + 1];

/// Uniform over the full width, with edge values mixed in.
pub fn random_u128<R: Rng>(rng: &mut R) -> u128 {
    if rng.random_ratio(1, 8) {
        U_EDGES[rng.random_range(0..U_EDGES.len())]
    } else {
        ((rng.random::<u64>() as u128) << 64) | rng.random::<u64>() as u128
    }
}

pub fn random_i128<R: Rng>(rng: &mut R) -> i128 {
    if rng.random_ratio(1, 8) {
        I_EDGES[rng.random_range(0..I_EDGES.len())]
    } else {
        random_u128(rng) as i128
    }
}
