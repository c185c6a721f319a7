//! Global datapath constants.
//!
//! This module defines the fixed encodings and limits shared by every stage. It includes:
//! 1. **FP8 Layout:** Bit positions and masks for the sign, exponent, and mantissa fields.
//! 2. **Fixed-Point Format:** Fractional bits of the restored `1.mmm` mantissa.
//! 3. **Weight Limits:** Legal range of the bit-serial integer precision.
//! 4. **Pipeline Defaults:** Reference register width and queue depth.

/// Bit position of the FP8 sign bit.
pub const FP8_SIGN_SHIFT: u32 = 7;

/// Bit position of the least-significant exponent bit.
pub const FP8_EXP_SHIFT: u32 = 3;

/// Mask for the 4-bit exponent field after shifting.
pub const FP8_EXP_MASK: u8 = 0x0F;

/// Mask for the 3-bit mantissa field.
pub const FP8_MANT_MASK: u8 = 0x07;

/// Exponent bias of the FP8 encoding.
pub const FP8_EXP_BIAS: i32 = 7;

/// Largest encodable exponent field value.
pub const FP8_MAX_EXPONENT: u8 = 15;

/// Number of fractional bits carried by the restored mantissa (`1.mmm`).
pub const MANT_FRAC_BITS: u32 = 3;

/// Implicit leading one of a normalized mantissa, in fixed-point (1.000 = 8).
pub const IMPLICIT_ONE: u8 = 1 << MANT_FRAC_BITS;

/// Smallest supported weight precision (sign bit only).
pub const MIN_PRECISION: u8 = 1;

/// Largest supported weight precision.
pub const MAX_PRECISION: u8 = 15;

/// Width of the reference accumulator register in bits.
pub const REFERENCE_REGISTER_BITS: u32 = 16;

/// Smallest accumulator register width accepted by the configuration.
pub const MIN_REGISTER_BITS: u32 = 2;

/// Largest accumulator register width accepted by the configuration.
pub const MAX_REGISTER_BITS: u32 = 64;

/// Depth of the reference result queue between multiplier and accumulator.
pub const REFERENCE_QUEUE_DEPTH: usize = 4;
