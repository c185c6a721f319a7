//! Simulator: drives a pipeline one operand pair at a time.
//!
//! The simulator is the caller side of the handshake. It queues an operand and its
//! weight bits, holds `valid` high, and steps the pipeline until `out_valid` is seen
//! or the configured cycle budget runs out.

use tracing::debug;

use crate::common::{FloatOperand, MacError, SignedWeight};
use crate::config::Config;
use crate::core::pipeline::engine::MacPipeline;

/// Outcome of one driven multiply-accumulate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MacOutcome {
    /// Cycles stepped until `out_valid`.
    pub cycles: u64,
    /// Raw accumulator register after the product was added.
    pub accumulator: i64,
    /// Accumulator converted to a real number.
    pub scaled: f64,
}

/// Top-level simulator: a pipeline plus the driver's cycle budget.
#[derive(Debug)]
pub struct Simulator {
    /// The pipeline under test.
    pub pipeline: MacPipeline,
    cycle_budget: u64,
}

impl Simulator {
    /// Creates a simulator with a fresh pipeline.
    ///
    /// # Errors
    ///
    /// Returns the first configuration range error.
    pub fn new(config: &Config) -> Result<Self, MacError> {
        Ok(Self {
            pipeline: MacPipeline::new(config)?,
            cycle_budget: config.general.cycle_budget,
        })
    }

    /// Returns the number of cycles the driver waits for each output.
    pub const fn cycle_budget(&self) -> u64 {
        self.cycle_budget
    }

    /// Queues one operand and all bits of its weight.
    ///
    /// # Errors
    ///
    /// Returns [`MacError::PrecisionMismatch`] if the weight precision differs from
    /// the pipeline's; the operand is not queued in that case.
    pub fn issue(&mut self, operand: FloatOperand, weight: SignedWeight) -> Result<(), MacError> {
        self.pipeline.push_weight(weight)?;
        self.pipeline.push_operand(operand);
        Ok(())
    }

    /// Steps with `valid` high until `out_valid`.
    ///
    /// # Returns
    ///
    /// The number of cycles stepped, including the one that raised `out_valid`.
    ///
    /// # Errors
    ///
    /// Returns [`MacError::CycleBudgetExhausted`] if no output appears within the
    /// budget, or any error raised by a pipeline step.
    pub fn run_until_output(&mut self) -> Result<u64, MacError> {
        for cycle in 1..=self.cycle_budget {
            if self.pipeline.step(true)?.out_valid {
                return Ok(cycle);
            }
        }
        Err(MacError::CycleBudgetExhausted {
            budget: self.cycle_budget,
        })
    }

    /// Issues one pair and runs until its product has been accumulated.
    ///
    /// # Errors
    ///
    /// See [`Simulator::issue`] and [`Simulator::run_until_output`].
    pub fn mac(&mut self, operand: FloatOperand, weight: SignedWeight) -> Result<MacOutcome, MacError> {
        self.issue(operand, weight)?;
        let cycles = self.run_until_output()?;
        let outcome = MacOutcome {
            cycles,
            accumulator: self.pipeline.accumulator(),
            scaled: self.pipeline.scaled_accumulator(),
        };
        debug!(
            operand = %operand,
            weight = weight.value(),
            cycles,
            accumulator = outcome.accumulator,
            "pair accumulated"
        );
        Ok(outcome)
    }

    /// Feeds `pairs` one at a time, waiting for each output before the next.
    ///
    /// The register is not reset first, so successive calls keep accumulating.
    ///
    /// # Returns
    ///
    /// The scaled accumulator after the last pair.
    ///
    /// # Errors
    ///
    /// Stops at the first pair that fails; earlier products stay accumulated.
    pub fn dot_product(&mut self, pairs: &[(FloatOperand, SignedWeight)]) -> Result<f64, MacError> {
        for &(operand, weight) in pairs {
            let _ = self.mac(operand, weight)?;
        }
        Ok(self.pipeline.scaled_accumulator())
    }
}
