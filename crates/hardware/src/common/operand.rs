//! FP8 floating-point operand type and decoder.
//!
//! The activation operand is an 8-bit float with 1 sign bit, a 4-bit exponent
//! biased by 7, and a 3-bit mantissa. This module provides:
//! 1. **Strong Typing:** `FloatOperand` wraps the raw byte so it cannot be confused with a weight.
//! 2. **Field Decoding:** Splitting the byte into sign, exponent, and mantissa.
//! 3. **Mantissa Restoration:** The `1.mmm` fixed-point mantissa unit used by the multiplier.
//! 4. **Real-Value Decoding:** Conversion to `f64` for golden-model comparisons.
//!
//! Decoding always assumes the normalized form
//! `(-1)^sign * (1 + mantissa / 8) * 2^(exponent - 7)`. Exponent fields of zero and
//! fifteen are decoded the same way as every other exponent; there is no subnormal,
//! infinity, or NaN handling.

use std::fmt;

use super::constants::{
    FP8_EXP_BIAS, FP8_EXP_MASK, FP8_EXP_SHIFT, FP8_MANT_MASK, FP8_SIGN_SHIFT, IMPLICIT_ONE,
    MANT_FRAC_BITS,
};

/// A raw FP8 operand as delivered on the activation input channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FloatOperand(pub u8);

/// The three fields of an FP8 operand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodedOperand {
    /// Sign bit (bit 7); `true` means negative.
    pub sign: bool,
    /// Biased 4-bit exponent (bits 6..3).
    pub exponent: u8,
    /// 3-bit mantissa without the implicit leading one (bits 2..0).
    pub mantissa: u8,
}

impl FloatOperand {
    /// Creates an operand from its raw byte.
    #[inline(always)]
    pub const fn new(raw: u8) -> Self {
        Self(raw)
    }

    /// Assembles an operand from separate fields.
    ///
    /// Out-of-range `exponent` and `mantissa` values are truncated to their field widths.
    pub const fn from_fields(sign: bool, exponent: u8, mantissa: u8) -> Self {
        let sign_bit = if sign { 1u8 << FP8_SIGN_SHIFT } else { 0 };
        Self(
            sign_bit
                | ((exponent & FP8_EXP_MASK) << FP8_EXP_SHIFT)
                | (mantissa & FP8_MANT_MASK),
        )
    }

    /// Returns the raw byte.
    #[inline(always)]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Splits the byte into sign, exponent, and mantissa.
    ///
    /// # Examples
    ///
    /// ```
    /// use fp8mac_core::common::FloatOperand;
    ///
    /// let fields = FloatOperand(0b1011_1000).decode();
    /// assert!(fields.sign);
    /// assert_eq!(fields.exponent, 7);
    /// assert_eq!(fields.mantissa, 0);
    /// ```
    pub const fn decode(self) -> DecodedOperand {
        DecodedOperand {
            sign: (self.0 >> FP8_SIGN_SHIFT) & 1 == 1,
            exponent: (self.0 >> FP8_EXP_SHIFT) & FP8_EXP_MASK,
            mantissa: self.0 & FP8_MANT_MASK,
        }
    }

    /// Decodes the operand to its real value under the normalized interpretation.
    pub fn to_f64(self) -> f64 {
        self.decode().to_f64()
    }
}

impl DecodedOperand {
    /// Returns the restored mantissa `1.mmm` as a fixed-point integer (`8 + mantissa`).
    #[inline(always)]
    pub const fn mantissa_unit(self) -> u8 {
        IMPLICIT_ONE | self.mantissa
    }

    /// Returns the exponent with the bias removed.
    #[inline(always)]
    pub const fn unbiased_exponent(self) -> i32 {
        self.exponent as i32 - FP8_EXP_BIAS
    }

    /// Returns the real value `(-1)^sign * (1 + m/8) * 2^(e - 7)`.
    pub fn to_f64(self) -> f64 {
        let magnitude = f64::from(self.mantissa_unit())
            * 2f64.powi(self.unbiased_exponent() - MANT_FRAC_BITS as i32);
        if self.sign { -magnitude } else { magnitude }
    }
}

impl From<u8> for FloatOperand {
    fn from(raw: u8) -> Self {
        Self(raw)
    }
}

impl From<FloatOperand> for u8 {
    fn from(op: FloatOperand) -> Self {
        op.0
    }
}

impl fmt::Display for FloatOperand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}
