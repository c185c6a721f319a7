//! Pipeline latch structures for inter-stage communication.
//!
//! The multiplier hands exactly one [`IntermediateResult`] to the accumulator per
//! operand pair. The entry carries everything the accumulator needs to turn the
//! unsigned shift-and-add sum into a signed, exponent-aligned contribution.

use crate::common::Precision;

/// Entry in the multiplier → accumulator result queue.
///
/// Produced exactly once per consumed (operand, weight) pair and consumed exactly
/// once by the accumulator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntermediateResult {
    /// Shift-and-add sum of the magnitude bits, fixed-point with 3 fractional bits.
    ///
    /// The sign bit never contributes here; the accumulator applies it.
    pub magnitude: i64,
    /// Biased exponent of the FP8 operand.
    pub exponent: u8,
    /// Sign of the FP8 operand.
    pub fp_sign: bool,
    /// Two's-complement sign bit of the weight (its final serial bit).
    pub weight_sign: bool,
    /// Restored mantissa `8 + mantissa`.
    pub mantissa_unit: u8,
    /// Weight width this product was computed at.
    pub precision: Precision,
}
