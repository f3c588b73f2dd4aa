//! Randomized checks of the signed type against the native `i128`
//! oracle, and the deliberate departures from it around `MIN` and the
//! sign-corrected multiply.

mod common;

use common::{from_i128, random_i128, rng, to_i128};
use emu128::{Int128, UInt128};
use rand::Rng;

const ROUNDS: usize = 2000;

#[test]
fn add_sub_match_oracle() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let (a, b) = (random_i128(&mut rng), random_i128(&mut rng));
        let (x, y) = (from_i128(a), from_i128(b));

        let (sum, overflow) = x.overflowing_add(y);
        let (oracle_sum, oracle_overflow) = a.overflowing_add(b);
        assert_eq!(to_i128(sum), oracle_sum, "{a} + {b}");
        assert_eq!(overflow, oracle_overflow, "{a} + {b} overflow");

        let (diff, overflow) = x.overflowing_sub(y);
        let (oracle_diff, oracle_overflow) = a.overflowing_sub(b);
        assert_eq!(to_i128(diff), oracle_diff, "{a} - {b}");
        assert_eq!(overflow, oracle_overflow, "{a} - {b} overflow");
    }
}

#[test]
fn mul_matches_oracle_when_in_range() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        // Operands drawn from the 64-bit range: the true product always
        // fits, so the sign correction never deviates from wrapping.
        let a = rng.random::<i64>() as i128;
        let b = rng.random::<i64>() as i128;
        assert_eq!(to_i128(from_i128(a).wrapping_mul(from_i128(b))), a * b, "{a} * {b}");
    }
}

#[test]
fn mul_sign_always_matches_operands() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let (a, b) = (random_i128(&mut rng), random_i128(&mut rng));
        let product = from_i128(a).wrapping_mul(from_i128(b));
        if a == 0 || b == 0 {
            assert_eq!(product, Int128::ZERO);
        } else if product != Int128::ZERO && product != Int128::MIN {
            // This is the contract the sign correction buys, even where
            // the product truncated.
            assert_eq!(product.is_negative(), (a < 0) != (b < 0), "{a} * {b}");
        }
    }
}

#[test]
fn div_rem_match_oracle() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let a = random_i128(&mut rng);
        let mut b = random_i128(&mut rng);
        if b == 0 {
            b = 1;
        }
        if a % 5 == 0 {
            b = (b % 1000).max(1);
        }
        let (q, r) = from_i128(a).div_rem(from_i128(b));
        // wrapping_div so the oracle survives MIN / -1 too.
        assert_eq!(to_i128(q), a.wrapping_div(b), "{a} / {b}");
        assert_eq!(to_i128(r), a.wrapping_rem(b), "{a} % {b}");
        // Truncating policy: remainder is zero or carries the dividend
        // sign, with magnitude below the divisor's.
        if to_i128(r) != 0 {
            assert_eq!(to_i128(r) < 0, a < 0, "{a} % {b} sign");
        }
        assert!(to_i128(r).unsigned_abs() < b.unsigned_abs());
    }
}

#[test]
fn truncating_division_scenarios() {
    let five = from_i128(5);
    let two = from_i128(2);
    assert_eq!(five.div_rem(two), (from_i128(2), from_i128(1)));
    let minus_seven = from_i128(-7);
    assert_eq!(minus_seven.div_rem(two), (from_i128(-3), from_i128(-1)));
    assert_eq!(Int128::MIN.div_rem(Int128::NEG_ONE), (Int128::MIN, Int128::ZERO));
}

#[test]
fn shifts_match_oracle() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let a = random_i128(&mut rng);
        let x = from_i128(a);
        for amount in [0u32, 1, 31, 63, 64, 65, 100, 127] {
            assert_eq!(to_i128(x >> amount), a >> amount, "{a} >> {amount}");
            assert_eq!(to_i128(x << amount), a.wrapping_shl(amount), "{a} << {amount}");
        }
    }
}

#[test]
fn ordering_matches_oracle() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let (a, b) = (random_i128(&mut rng), random_i128(&mut rng));
        assert_eq!(from_i128(a).cmp(&from_i128(b)), a.cmp(&b), "{a} cmp {b}");
    }
}

#[test]
fn abs_and_signum_match_oracle() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let a = random_i128(&mut rng);
        let x = from_i128(a);
        assert_eq!(to_i128(x.signum()), a.signum(), "{a}");
        assert_eq!(x.unsigned_abs(), UInt128::from_words((a.unsigned_abs() >> 64) as u64, a.unsigned_abs() as u64));
        if a != i128::MIN {
            assert_eq!(to_i128(x.abs()), a.abs());
        } else {
            assert_eq!(x.checked_abs(), None);
        }
    }
}

#[test]
fn scalar_round_trips() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let v = rng.random::<i64>();
        assert_eq!(i64::try_from(Int128::from(v)), Ok(v));
        let v = rng.random::<u64>();
        assert_eq!(u64::try_from(Int128::from(v)), Ok(v));
        assert_eq!(u64::try_from(UInt128::from(v)), Ok(v));
    }
}

#[test]
fn bit_reinterpretation_round_trips() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let a = random_i128(&mut rng);
        let x = from_i128(a);
        assert_eq!(Int128::from_bits(x.to_bits()), x);
        assert_eq!(to_i128(Int128::from_le_bytes(a.to_le_bytes())), a);
        assert_eq!(to_i128(Int128::from_be_bytes(a.to_be_bytes())), a);
    }
}
