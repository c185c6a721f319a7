//! Bit-serial signed weight types.
//!
//! Weights are two's-complement integers of a configurable width, transmitted
//! least-significant bit first. The final bit is the sign bit and carries a
//! weight of `-2^(precision - 1)`.

use super::constants::{MAX_PRECISION, MIN_PRECISION};
use super::error::MacError;

/// Validated weight width in bits, always within `1..=15`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precision(u8);

impl Precision {
    /// Validates and wraps a precision.
    ///
    /// # Errors
    ///
    /// Returns [`MacError::InvalidPrecision`] for zero or anything above 15.
    pub const fn new(bits: u8) -> Result<Self, MacError> {
        if bits < MIN_PRECISION || bits > MAX_PRECISION {
            return Err(MacError::InvalidPrecision(bits));
        }
        Ok(Self(bits))
    }

    /// Returns the width in bits.
    #[inline(always)]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Index of the sign bit in the serial stream.
    #[inline(always)]
    pub const fn sign_index(self) -> u8 {
        self.0 - 1
    }

    /// Smallest representable weight, `-2^(p-1)`.
    pub const fn min_value(self) -> i32 {
        -(1i32 << self.sign_index())
    }

    /// Largest representable weight, `2^(p-1) - 1`.
    pub const fn max_value(self) -> i32 {
        (1i32 << self.sign_index()) - 1
    }
}

impl TryFrom<u8> for Precision {
    type Error = MacError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Self::new(bits)
    }
}

impl From<Precision> for u8 {
    fn from(p: Precision) -> Self {
        p.0
    }
}

/// A two's-complement weight together with its serial width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SignedWeight {
    value: i32,
    precision: Precision,
}

impl SignedWeight {
    /// Creates a weight, checking that `value` fits in `precision` bits.
    ///
    /// # Errors
    ///
    /// Returns [`MacError::WeightOutOfRange`] when `value` is outside
    /// `-2^(p-1) ..= 2^(p-1) - 1`.
    pub const fn new(value: i32, precision: Precision) -> Result<Self, MacError> {
        if value < precision.min_value() || value > precision.max_value() {
            return Err(MacError::WeightOutOfRange {
                value: value as i64,
                precision: precision.bits(),
            });
        }
        Ok(Self { value, precision })
    }

    /// Reassembles a weight from its serial bits, LSB first.
    ///
    /// The precision is the length of `bits`; the last bit is the sign.
    ///
    /// # Errors
    ///
    /// Returns [`MacError::InvalidPrecision`] when `bits` is empty or longer than 15.
    /// Lengths above 255 are reported as 255.
    pub fn from_bits(bits: &[bool]) -> Result<Self, MacError> {
        let len = u8::try_from(bits.len()).unwrap_or(u8::MAX);
        let precision = Precision::new(len)?;
        let sign_index = usize::from(precision.sign_index());
        let value = bits
            .iter()
            .enumerate()
            .filter(|&(_, &bit)| bit)
            .fold(0i32, |acc, (i, _)| {
                if i == sign_index {
                    acc - (1 << i)
                } else {
                    acc + (1 << i)
                }
            });
        Ok(Self { value, precision })
    }

    /// Returns the integer value.
    #[inline(always)]
    pub const fn value(self) -> i32 {
        self.value
    }

    /// Returns the serial width.
    #[inline(always)]
    pub const fn precision(self) -> Precision {
        self.precision
    }

    /// Returns `true` when the sign bit is set.
    pub const fn is_negative(self) -> bool {
        self.value < 0
    }

    /// Iterates the serial bits, LSB first, ending with the sign bit.
    ///
    /// # Examples
    ///
    /// ```
    /// use fp8mac_core::common::{Precision, SignedWeight};
    ///
    /// let w = SignedWeight::new(-2, Precision::new(4).unwrap()).unwrap();
    /// let bits: Vec<bool> = w.bits().collect();
    /// assert_eq!(bits, [false, true, true, true]);
    /// ```
    pub fn bits(self) -> impl Iterator<Item = bool> {
        let value = self.value;
        (0..self.precision.bits()).map(move |i| (value >> i) & 1 == 1)
    }
}
