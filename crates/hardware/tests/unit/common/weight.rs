//! # Precision and Weight Tests
//!
//! Precision bounds, representable weight ranges, and the LSB-first serial
//! bit order with the sign bit last.

use fp8mac_core::common::{MacError, Precision, SignedWeight};
use rstest::rstest;

use crate::common::harness::{precision, weight};

#[test]
fn precision_zero_is_rejected() {
    assert_eq!(Precision::new(0), Err(MacError::InvalidPrecision(0)));
}

#[test]
fn precision_above_fifteen_is_rejected() {
    assert_eq!(Precision::new(16), Err(MacError::InvalidPrecision(16)));
    assert_eq!(Precision::try_from(255), Err(MacError::InvalidPrecision(255)));
}

#[rstest]
#[case(1, -1, 0)]
#[case(2, -2, 1)]
#[case(4, -8, 7)]
#[case(8, -128, 127)]
#[case(15, -16384, 16383)]
fn precision_range(#[case] bits: u8, #[case] min: i32, #[case] max: i32) {
    let p = precision(bits);
    assert_eq!(p.bits(), bits);
    assert_eq!(p.sign_index(), bits - 1);
    assert_eq!(p.min_value(), min);
    assert_eq!(p.max_value(), max);
}

#[test]
fn weight_out_of_range_is_rejected() {
    let p = precision(4);
    assert_eq!(
        SignedWeight::new(8, p),
        Err(MacError::WeightOutOfRange {
            value: 8,
            precision: 4
        })
    );
    assert!(SignedWeight::new(-9, p).is_err());
    assert!(SignedWeight::new(-8, p).is_ok());
    assert!(SignedWeight::new(7, p).is_ok());
}

#[test]
fn bits_are_lsb_first_with_sign_last() {
    let bits: Vec<bool> = weight(5, 4).bits().collect();
    assert_eq!(bits, [true, false, true, false]);

    let bits: Vec<bool> = weight(-3, 4).bits().collect();
    assert_eq!(bits, [true, false, true, true]);

    let bits: Vec<bool> = weight(-8, 4).bits().collect();
    assert_eq!(bits, [false, false, false, true]);
}

#[test]
fn precision_one_is_a_lone_sign_bit() {
    let bits: Vec<bool> = weight(-1, 1).bits().collect();
    assert_eq!(bits, [true]);
    let bits: Vec<bool> = weight(0, 1).bits().collect();
    assert_eq!(bits, [false]);
}

#[test]
fn from_bits_gives_sign_bit_negative_weight() {
    let w = SignedWeight::from_bits(&[false, false, false, true]).unwrap();
    assert_eq!(w.value(), -8);
    assert_eq!(w.precision().bits(), 4);
    assert!(w.is_negative());

    let w = SignedWeight::from_bits(&[true, true, false]).unwrap();
    assert_eq!(w.value(), 3);
    assert!(!w.is_negative());
}

#[test]
fn from_bits_rejects_bad_lengths() {
    assert_eq!(
        SignedWeight::from_bits(&[]),
        Err(MacError::InvalidPrecision(0))
    );
    assert_eq!(
        SignedWeight::from_bits(&[false; 16]),
        Err(MacError::InvalidPrecision(16))
    );
    assert_eq!(
        SignedWeight::from_bits(&[true; 300]),
        Err(MacError::InvalidPrecision(255))
    );
}

#[test]
fn from_bits_inverts_bits_at_full_width() {
    let p = precision(15);
    for value in [p.min_value(), -1, 0, 1, p.max_value()] {
        let w = SignedWeight::new(value, p).unwrap();
        let bits: Vec<bool> = w.bits().collect();
        assert_eq!(SignedWeight::from_bits(&bits), Ok(w), "value {value}");
    }
}
