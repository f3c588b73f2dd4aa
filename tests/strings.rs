//! Parse/format round trips and the string grammar's corners.

mod common;

use common::{from_i128, from_u128, random_i128, random_u128, rng, to_i128, to_u128};
use emu128::{Int128, IntErrorKind, UInt128};

#[test]
fn display_matches_oracle() {
    let mut rng = rng();
    for _ in 0..2000 {
        let a = random_u128(&mut rng);
        assert_eq!(from_u128(a).to_string(), a.to_string());
        let b = random_i128(&mut rng);
        assert_eq!(from_i128(b).to_string(), b.to_string());
    }
}

#[test]
fn decimal_round_trip() {
    let mut rng = rng();
    let fixed = [0, 1, -1, i128::MIN, i128::MAX, -42];
    for v in fixed {
        let x = from_i128(v);
        assert_eq!(x.to_string().parse::<Int128>().unwrap(), x, "{v}");
    }
    for _ in 0..500 {
        let v = random_i128(&mut rng);
        let x = from_i128(v);
        assert_eq!(x.to_string().parse::<Int128>().unwrap(), x, "{v}");
        let u = from_u128(random_u128(&mut rng));
        assert_eq!(u.to_string().parse::<UInt128>().unwrap(), u);
    }
}

#[test]
fn hex_round_trip() {
    let mut rng = rng();
    let fixed = [UInt128::ZERO, UInt128::ONE, UInt128::MAX];
    for x in fixed {
        let rendered = format!("0x{}", x.format_spec("x").unwrap());
        assert_eq!(rendered.parse::<UInt128>().unwrap(), x, "{rendered}");
    }
    for _ in 0..500 {
        let x = from_u128(random_u128(&mut rng));
        let rendered = format!("0x{}", x.format_spec("X").unwrap());
        assert_eq!(rendered.parse::<UInt128>().unwrap(), x, "{rendered}");
        // Signed hex is a bit-pattern round trip, sign included.
        let s = from_i128(random_i128(&mut rng));
        let rendered = format!("x{}", s.format_spec("x").unwrap());
        assert_eq!(rendered.parse::<Int128>().unwrap(), s, "{rendered}");
    }
}

#[test]
fn grouped_output_parses_back() {
    let mut rng = rng();
    for _ in 0..500 {
        let v = random_i128(&mut rng);
        let x = from_i128(v);
        let grouped = x.format_spec("N").unwrap();
        assert_eq!(grouped.parse::<Int128>().unwrap(), x, "{grouped}");
        // Groups are exactly three digits wide.
        for chunk in grouped.trim_start_matches('-').split(',').skip(1) {
            assert_eq!(chunk.len(), 3, "{grouped}");
        }
    }
}

#[test]
fn hex_trait_output_parses_back() {
    let mut rng = rng();
    for _ in 0..500 {
        let a = random_u128(&mut rng);
        let x = from_u128(a);
        assert_eq!(format!("{x:x}"), format!("{a:x}"));
        assert_eq!(format!("{x:X}"), format!("{a:X}"));
        assert_eq!(format!("x{x:x}").parse::<UInt128>().unwrap(), x);
    }
}

#[test]
fn min_value_decimal_literal() {
    let min: Int128 = "-170141183460469231731687303715884105728".parse().unwrap();
    assert_eq!(min, Int128::MIN);
    assert_eq!(to_i128(min), i128::MIN);
    assert_eq!(min.to_string(), "-170141183460469231731687303715884105728");
}

#[test]
fn max_hex_is_byte_trimmed() {
    assert_eq!(
        Int128::MAX.format_spec("X").unwrap(),
        "7FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"
    );
    assert_eq!(Int128::from(1u8).format_spec("X").unwrap(), "01");
}

#[test]
fn parse_error_kinds() {
    assert_eq!(*"".parse::<UInt128>().unwrap_err().kind(), IntErrorKind::Empty);
    assert_eq!(*"0x".parse::<UInt128>().unwrap_err().kind(), IntErrorKind::Empty);
    assert_eq!(*"12q".parse::<Int128>().unwrap_err().kind(), IntErrorKind::InvalidDigit);
    assert_eq!(
        *format!("0x{}", "f".repeat(33)).parse::<UInt128>().unwrap_err().kind(),
        IntErrorKind::Overflow
    );
}

#[test]
fn wrapping_decimal_parse() {
    // One above unsigned MAX folds to zero; 2^127 folds negative.
    assert_eq!(
        "340282366920938463463374607431768211456".parse::<UInt128>().unwrap(),
        UInt128::ZERO
    );
    assert_eq!(
        "170141183460469231731687303715884105728".parse::<Int128>().unwrap(),
        Int128::MIN
    );
    assert_eq!(to_u128("1,000,000".parse::<UInt128>().unwrap()), 1_000_000);
}
