//! Floating-point golden model.
//!
//! Computes the value a pipeline run should produce using ordinary `f64`
//! arithmetic, so a driver can check the fixed-point datapath against it.

use crate::common::{FloatOperand, SignedWeight};

/// Absolute tolerance used when comparing a scaled accumulator with the golden value.
pub const TOLERANCE: f64 = 1e-3;

/// Decodes an FP8 operand under the normalized interpretation.
pub fn decode(operand: FloatOperand) -> f64 {
    operand.to_f64()
}

/// Expected value of a single product, `decode(operand) * weight`.
pub fn expected_product(operand: FloatOperand, weight: SignedWeight) -> f64 {
    decode(operand) * f64::from(weight.value())
}

/// Expected value of a dot product over `(operand, weight)` pairs.
///
/// # Examples
///
/// ```
/// use fp8mac_core::common::{FloatOperand, Precision, SignedWeight};
/// use fp8mac_core::sim::reference::expected_dot;
///
/// let p = Precision::new(4).unwrap();
/// let pairs = [
///     (FloatOperand(0b1011_1000), SignedWeight::new(2, p).unwrap()),  // -1.0 * 2
///     (FloatOperand(0b0011_0000), SignedWeight::new(-1, p).unwrap()), //  0.5 * -1
///     (FloatOperand(0b1100_0000), SignedWeight::new(3, p).unwrap()),  // -2.0 * 3
/// ];
/// assert_eq!(expected_dot(&pairs), -8.5);
/// ```
pub fn expected_dot(pairs: &[(FloatOperand, SignedWeight)]) -> f64 {
    pairs
        .iter()
        .map(|&(operand, weight)| expected_product(operand, weight))
        .sum()
}

/// Returns `true` if `actual` is within [`TOLERANCE`] of `expected`.
pub fn approx_eq(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < TOLERANCE
}
