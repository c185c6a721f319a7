//! Configuration system for the MAC pipeline simulator.
//!
//! This module defines all configuration structures and enums used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Reference datapath values (INT4 weights, exponent 7, 16-bit register, depth 4).
//! 2. **Structures:** Hierarchical config for general, multiplier, accumulator, and pipeline settings.
//! 3. **Enums:** Accumulator overflow policy.
//! 4. **Validation:** Range checks run before a pipeline is built.
//!
//! Configuration is supplied as JSON or built from `Config::default()`.

use serde::Deserialize;

use crate::common::{MacError, Precision};
use crate::core::units::accumulator::Accumulator;

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::constants::{REFERENCE_QUEUE_DEPTH, REFERENCE_REGISTER_BITS};

    /// Weight precision in bits (INT4).
    pub const PRECISION: u8 = 4;

    /// Reference exponent that all products are aligned to (unbiased exponent 0).
    pub const REFERENCE_EXPONENT: u8 = 7;

    /// Accumulator register width in bits.
    pub const REGISTER_BITS: u32 = REFERENCE_REGISTER_BITS;

    /// Result queue depth between multiplier and accumulator.
    pub const QUEUE_DEPTH: usize = REFERENCE_QUEUE_DEPTH;

    /// Cycles a driver waits for `out_valid` after issuing one operand pair.
    pub const CYCLE_BUDGET: u64 = 20;
}

/// What the accumulator does when a contribution does not fit its register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum OverflowPolicy {
    /// Two's-complement wrap at the register width, as fixed-width hardware does.
    #[default]
    Wrap,
    /// Fail the step with [`MacError::AccumulatorOverflow`] and leave the register unchanged.
    Trap,
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use fp8mac_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.multiplier.precision, 4);
/// assert_eq!(config.accumulator.reference_exponent, 7);
/// assert_eq!(config.pipeline.queue_depth, 4);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use fp8mac_core::config::{Config, OverflowPolicy};
///
/// let json = r#"{
///     "general": { "trace_cycles": true, "cycle_budget": 32 },
///     "multiplier": { "precision": 8 },
///     "accumulator": {
///         "reference_exponent": 5,
///         "register_bits": 24,
///         "overflow": "Trap"
///     },
///     "pipeline": { "queue_depth": 2 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_cycles);
/// assert_eq!(config.multiplier.precision, 8);
/// assert_eq!(config.accumulator.overflow, OverflowPolicy::Trap);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Bit-serial multiplier settings
    #[serde(default)]
    pub multiplier: MultiplierConfig,
    /// Accumulator settings
    #[serde(default)]
    pub accumulator: AccumulatorConfig,
    /// Inter-stage queue settings
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MacError::Config`] for malformed JSON, or the first range error
    /// reported by [`Config::validate`].
    pub fn from_json(json: &str) -> Result<Self, MacError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every field against the datapath limits.
    ///
    /// # Errors
    ///
    /// Returns the error for the first out-of-range field.
    pub fn validate(&self) -> Result<(), MacError> {
        let _ = self.multiplier.precision()?;
        self.accumulator.validate()?;
        self.pipeline.validate()
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Emit a per-cycle `info` event with the handshake and accumulator state
    #[serde(default)]
    pub trace_cycles: bool,

    /// Cycles the driver waits for `out_valid` after issuing one pair
    #[serde(default = "GeneralConfig::default_cycle_budget")]
    pub cycle_budget: u64,
}

impl GeneralConfig {
    /// Returns the default driver cycle budget.
    fn default_cycle_budget() -> u64 {
        defaults::CYCLE_BUDGET
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_cycles: false,
            cycle_budget: defaults::CYCLE_BUDGET,
        }
    }
}

/// Bit-serial multiplier configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MultiplierConfig {
    /// Weight width in bits, including the sign bit
    #[serde(default = "MultiplierConfig::default_precision")]
    pub precision: u8,
}

impl MultiplierConfig {
    /// Returns the default weight precision.
    fn default_precision() -> u8 {
        defaults::PRECISION
    }

    /// Returns the validated precision.
    ///
    /// # Errors
    ///
    /// Returns [`MacError::InvalidPrecision`] outside `1..=15`.
    pub fn precision(&self) -> Result<Precision, MacError> {
        Precision::new(self.precision)
    }
}

impl Default for MultiplierConfig {
    fn default() -> Self {
        Self {
            precision: defaults::PRECISION,
        }
    }
}

/// Accumulator configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AccumulatorConfig {
    /// Biased exponent every product is aligned to before summation
    #[serde(default = "AccumulatorConfig::default_reference_exponent")]
    pub reference_exponent: u8,

    /// Width of the persistent accumulator register in bits
    #[serde(default = "AccumulatorConfig::default_register_bits")]
    pub register_bits: u32,

    /// Behaviour when a contribution does not fit the register
    #[serde(default)]
    pub overflow: OverflowPolicy,
}

impl AccumulatorConfig {
    /// Returns the default reference exponent.
    fn default_reference_exponent() -> u8 {
        defaults::REFERENCE_EXPONENT
    }

    /// Returns the default register width.
    fn default_register_bits() -> u32 {
        defaults::REGISTER_BITS
    }

    fn validate(&self) -> Result<(), MacError> {
        Accumulator::new(self.reference_exponent, self.register_bits, self.overflow).map(|_| ())
    }
}

impl Default for AccumulatorConfig {
    /// Reference exponent 7, 16-bit wrapping register.
    fn default() -> Self {
        Self {
            reference_exponent: defaults::REFERENCE_EXPONENT,
            register_bits: defaults::REGISTER_BITS,
            overflow: OverflowPolicy::default(),
        }
    }
}

/// Inter-stage queue configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// Slots in the multiplier → accumulator result queue
    #[serde(default = "PipelineConfig::default_queue_depth")]
    pub queue_depth: usize,
}

impl PipelineConfig {
    /// Returns the default result queue depth.
    fn default_queue_depth() -> usize {
        defaults::QUEUE_DEPTH
    }

    fn validate(&self) -> Result<(), MacError> {
        if self.queue_depth == 0 {
            return Err(MacError::InvalidQueueDepth);
        }
        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            queue_depth: defaults::QUEUE_DEPTH,
        }
    }
}
