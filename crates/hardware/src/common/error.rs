//! MAC pipeline error definitions.
//!
//! This module defines the single error type used across the simulator. It covers:
//! 1. **Configuration Errors:** Out-of-range precision, exponent, queue depth, or register width.
//! 2. **Protocol Errors:** Weights that do not match the pipeline, or reconfiguration mid-operation.
//! 3. **Datapath Errors:** Accumulator overflow when the trapping policy is selected.
//! 4. **Driver Errors:** Exhausted cycle budgets while waiting for `out_valid`.
//!
//! An empty input channel is never an error; it shows up as a step without progress.

use thiserror::Error;

/// Errors reported by the MAC pipeline and its driver.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MacError {
    /// Weight precision outside `1..=15`.
    ///
    /// A precision of zero would leave the multiplier without a sign bit, so it is
    /// rejected before any operand can enter `COMPUTE`.
    #[error("invalid precision {0}: must be within 1..=15")]
    InvalidPrecision(u8),

    /// Reference exponent that does not fit the 4-bit exponent field.
    #[error("invalid reference exponent {0}: must be within 0..=15")]
    InvalidReferenceExponent(u8),

    /// Result queue configured with no slots.
    #[error("result queue depth must be at least 1")]
    InvalidQueueDepth,

    /// Accumulator register width outside `2..=64`.
    #[error("invalid accumulator width {0}: must be within 2..=64 bits")]
    InvalidRegisterWidth(u32),

    /// Integer weight not representable in two's complement at the given precision.
    #[error("weight {value} is not representable in {precision} bits")]
    WeightOutOfRange {
        /// The offending weight.
        value: i64,
        /// The requested precision.
        precision: u8,
    },

    /// A whole weight was pushed whose precision differs from the pipeline's.
    #[error("weight precision {found} does not match pipeline precision {expected}")]
    PrecisionMismatch {
        /// Precision the pipeline is configured for.
        expected: u8,
        /// Precision carried by the weight.
        found: u8,
    },

    /// Reconfiguration attempted while the multiplier holds an operand.
    #[error("pipeline is busy: the multiplier is not idle")]
    PipelineBusy,

    /// Aligned contribution or running sum does not fit the accumulator register.
    ///
    /// Only raised under [`OverflowPolicy::Trap`](crate::config::OverflowPolicy::Trap).
    #[error("accumulator overflow: {value} does not fit in {bits} bits")]
    AccumulatorOverflow {
        /// The exact value that failed to fit.
        value: i128,
        /// Width of the accumulator register.
        bits: u32,
    },

    /// No `out_valid` was observed within the driver's cycle budget.
    #[error("no output after {budget} cycles")]
    CycleBudgetExhausted {
        /// Number of cycles the driver was willing to spend.
        budget: u64,
    },

    /// Configuration text could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for MacError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
