//! Sign-correcting, exponent-aligning accumulator.
//!
//! Each consumed [`IntermediateResult`] goes through, in this order:
//! 1. **Weight-sign correction:** A set weight sign subtracts `mantissa_unit << (p - 1)`,
//!    turning the unsigned shift-and-add sum into a two's-complement product.
//! 2. **FP sign correction:** A negative operand negates the corrected value.
//! 3. **Exponent alignment:** The value is shifted by `exponent - reference_exponent`;
//!    left shifts are exact, right shifts are arithmetic and round toward negative infinity.
//! 4. **Accumulation:** The aligned value is added into the fixed-width register under the
//!    configured [`OverflowPolicy`].
//!
//! Products and alignment are exact in `i64`; only the accumulator register is
//! fixed-width.

use tracing::{debug, warn};

use crate::common::MacError;
use crate::common::constants::{
    FP8_EXP_BIAS, FP8_MAX_EXPONENT, MANT_FRAC_BITS, MAX_REGISTER_BITS, MIN_REGISTER_BITS,
};
use crate::config::OverflowPolicy;
use crate::core::pipeline::channel::ResultChannel;
use crate::core::pipeline::latches::IntermediateResult;

/// Applies the weight-sign and FP-sign corrections (steps 1 and 2).
///
/// The result is the exact signed product `±(8 + m) * w` in fixed point with 3
/// fractional bits, before exponent alignment.
///
/// # Examples
///
/// ```
/// use fp8mac_core::common::Precision;
/// use fp8mac_core::core::pipeline::latches::IntermediateResult;
/// use fp8mac_core::core::units::accumulator::signed_product;
///
/// // 1.0 × -1 at INT4: magnitude bits 1,1,1 sum to 8 + 16 + 32 = 56.
/// let result = IntermediateResult {
///     magnitude: 56,
///     exponent: 7,
///     fp_sign: false,
///     weight_sign: true,
///     mantissa_unit: 8,
///     precision: Precision::new(4).unwrap(),
/// };
/// assert_eq!(signed_product(&result), -8);
/// ```
pub const fn signed_product(result: &IntermediateResult) -> i64 {
    let mut value = result.magnitude;
    if result.weight_sign {
        value -= (result.mantissa_unit as i64) << result.precision.sign_index();
    }
    if result.fp_sign {
        value = -value;
    }
    value
}

/// Shifts `value` from `exponent` to `reference_exponent` (step 3).
///
/// Both exponents are 4-bit fields, so the shift stays within `-15..=15`. Right
/// shifts of 63 bits or more saturate to the sign.
pub const fn align(value: i64, exponent: u8, reference_exponent: u8) -> i64 {
    let shift = exponent as i32 - reference_exponent as i32;
    if shift >= 0 {
        value << shift
    } else if shift > -64 {
        value >> -shift
    } else {
        value >> 63
    }
}

/// Factor converting a raw register value into a real number.
///
/// A register value `r` aligned to `reference_exponent` represents
/// `r * 2^(reference_exponent - 7) / 8`.
pub fn scale_factor(reference_exponent: u8) -> f64 {
    2f64.powi(i32::from(reference_exponent) - FP8_EXP_BIAS - MANT_FRAC_BITS as i32)
}

/// Persistent signed register of configurable width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccumulatorRegister {
    value: i64,
    bits: u32,
}

impl AccumulatorRegister {
    /// Creates a zeroed register `bits` wide.
    ///
    /// # Errors
    ///
    /// Returns [`MacError::InvalidRegisterWidth`] unless `bits` is within `2..=64`.
    pub const fn new(bits: u32) -> Result<Self, MacError> {
        if bits < MIN_REGISTER_BITS || bits > MAX_REGISTER_BITS {
            return Err(MacError::InvalidRegisterWidth(bits));
        }
        Ok(Self { value: 0, bits })
    }

    /// Returns the signed register contents.
    #[inline]
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Returns the register width.
    #[inline]
    pub const fn bits(&self) -> u32 {
        self.bits
    }

    /// Clears the register.
    pub fn reset(&mut self) {
        self.value = 0;
    }

    /// Returns `true` if `value` is representable at this width.
    pub fn fits(&self, value: i128) -> bool {
        let half = 1i128 << (self.bits - 1);
        (-half..half).contains(&value)
    }

    /// Truncates `value` to the register width and sign-extends it back.
    pub const fn wrap(&self, value: i128) -> i64 {
        let unused = 128 - self.bits;
        ((value << unused) >> unused) as i64
    }

    /// Adds with two's-complement wrap at the register width.
    pub fn wrapping_add(&mut self, addend: i64) {
        self.value = self.wrap(i128::from(self.value) + i128::from(addend));
    }

    /// Adds only if both the addend and the sum fit; otherwise leaves the register unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`MacError::AccumulatorOverflow`] with the value that did not fit.
    pub fn checked_add(&mut self, addend: i64) -> Result<(), MacError> {
        let addend = i128::from(addend);
        if !self.fits(addend) {
            return Err(MacError::AccumulatorOverflow {
                value: addend,
                bits: self.bits,
            });
        }
        let sum = i128::from(self.value) + addend;
        if !self.fits(sum) {
            return Err(MacError::AccumulatorOverflow {
                value: sum,
                bits: self.bits,
            });
        }
        self.value = sum as i64;
        Ok(())
    }
}

/// Accumulator stage.
#[derive(Debug)]
pub struct Accumulator {
    register: AccumulatorRegister,
    reference_exponent: u8,
    overflow: OverflowPolicy,
}

impl Accumulator {
    /// Creates an accumulator with a zeroed register.
    ///
    /// # Errors
    ///
    /// Returns [`MacError::InvalidReferenceExponent`] for a reference exponent above 15,
    /// or [`MacError::InvalidRegisterWidth`] for a width outside `2..=64`.
    pub fn new(
        reference_exponent: u8,
        register_bits: u32,
        overflow: OverflowPolicy,
    ) -> Result<Self, MacError> {
        if reference_exponent > FP8_MAX_EXPONENT {
            return Err(MacError::InvalidReferenceExponent(reference_exponent));
        }
        Ok(Self {
            register: AccumulatorRegister::new(register_bits)?,
            reference_exponent,
            overflow,
        })
    }

    /// Returns the persistent register.
    pub const fn register(&self) -> &AccumulatorRegister {
        &self.register
    }

    /// Clears the persistent register.
    pub fn reset(&mut self) {
        self.register.reset();
    }

    /// Returns the exponent all contributions are aligned to.
    pub const fn reference_exponent(&self) -> u8 {
        self.reference_exponent
    }

    /// Returns the register contents converted to a real number.
    pub fn scaled_value(&self) -> f64 {
        self.register.value() as f64 * scale_factor(self.reference_exponent)
    }

    /// Corrects and aligns one result without touching the register.
    pub const fn contribution(&self, result: &IntermediateResult) -> i64 {
        align(
            signed_product(result),
            result.exponent,
            self.reference_exponent,
        )
    }

    /// Drains at most one result from `input` and adds it into the register.
    ///
    /// # Returns
    ///
    /// `Ok(true)` when a result was consumed (the step's `out_valid`), `Ok(false)`
    /// when the queue was empty.
    ///
    /// # Errors
    ///
    /// Under [`OverflowPolicy::Trap`], returns [`MacError::AccumulatorOverflow`]; the
    /// result is consumed and the register keeps its previous value.
    pub fn step(&mut self, input: &mut ResultChannel) -> Result<bool, MacError> {
        let Some(result) = input.pop() else {
            return Ok(false);
        };
        let aligned = self.contribution(&result);
        match self.overflow {
            OverflowPolicy::Wrap => self.register.wrapping_add(aligned),
            OverflowPolicy::Trap => {
                if let Err(err) = self.register.checked_add(aligned) {
                    warn!(aligned, register = self.register.value(), %err, "accumulator overflow");
                    return Err(err);
                }
            }
        }
        debug!(
            aligned,
            exponent = result.exponent,
            reference = self.reference_exponent,
            register = self.register.value(),
            "accumulated product"
        );
        Ok(true)
    }
}
