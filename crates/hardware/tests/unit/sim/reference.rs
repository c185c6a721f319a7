//! # Golden Model Tests

use fp8mac_core::common::FloatOperand;
use fp8mac_core::sim::reference::{approx_eq, decode, expected_dot, expected_product, TOLERANCE};

use crate::common::harness::weight;

#[test]
fn decode_matches_operand() {
    assert_eq!(decode(FloatOperand(0xB8)), -1.0);
    assert_eq!(decode(FloatOperand(0x7F)), 480.0);
}

#[test]
fn product_of_single_pair() {
    assert_eq!(expected_product(FloatOperand(0x34), weight(-4, 4)), -3.0);
    assert_eq!(expected_product(FloatOperand(0x38), weight(0, 4)), 0.0);
}

#[test]
fn dot_of_empty_is_zero() {
    assert_eq!(expected_dot(&[]), 0.0);
}

#[test]
fn dot_of_three_pairs() {
    let pairs = [
        (FloatOperand(0xB8), weight(2, 4)),
        (FloatOperand(0x30), weight(-1, 4)),
        (FloatOperand(0xC0), weight(3, 4)),
    ];
    assert_eq!(expected_dot(&pairs), -8.5);
}

#[test]
fn tolerance_is_strict() {
    assert!(approx_eq(1.0, 1.0 + TOLERANCE / 2.0));
    assert!(!approx_eq(1.0, 1.0 + TOLERANCE * 2.0));
}
