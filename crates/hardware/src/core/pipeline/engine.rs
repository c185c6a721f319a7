//! Pipeline controller.
//!
//! `MacPipeline` composes the input ports, the bit-serial multiplier, the bounded
//! result queue, and the accumulator behind a single per-cycle [`MacPipeline::step`].
//!
//! Within one step the multiplier runs first and the accumulator second. A result
//! pushed by the multiplier's `DONE` state is therefore visible to the accumulator
//! in the same step, giving one cycle of latency through the queue. With precision
//! `p`, a pair issued to an idle pipeline raises `out_valid` on step `p + 2`.

use tracing::info;

use super::channel::ResultChannel;
use super::ports::InputPorts;
use super::signals::Handshake;
use super::traits::PipelineLatch;
use crate::common::{FloatOperand, MacError, Precision, SignedWeight};
use crate::config::Config;
use crate::core::units::accumulator::Accumulator;
use crate::core::units::multiplier::BitSerialMultiplier;
use crate::stats::MacStats;

/// Two-stage FP8 × INT multiply-accumulate pipeline.
#[derive(Debug)]
pub struct MacPipeline {
    ports: InputPorts,
    multiplier: BitSerialMultiplier,
    channel: ResultChannel,
    accumulator: Accumulator,
    precision: Precision,
    out_valid: bool,
    trace_cycles: bool,
    stats: MacStats,
}

impl MacPipeline {
    /// Builds a pipeline from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns the first range error found by [`Config::validate`].
    pub fn new(config: &Config) -> Result<Self, MacError> {
        config.validate()?;
        Ok(Self {
            ports: InputPorts::new(),
            multiplier: BitSerialMultiplier::new(),
            channel: ResultChannel::new(config.pipeline.queue_depth),
            accumulator: Accumulator::new(
                config.accumulator.reference_exponent,
                config.accumulator.register_bits,
                config.accumulator.overflow,
            )?,
            precision: config.multiplier.precision()?,
            out_valid: false,
            trace_cycles: config.general.trace_cycles,
            stats: MacStats::default(),
        })
    }

    /// Queues an FP8 operand on the activation stream.
    pub fn push_operand(&mut self, operand: impl Into<FloatOperand>) {
        self.ports.push_operand(operand.into());
    }

    /// Queues a single bit on the weight stream.
    pub fn push_weight_bit(&mut self, bit: bool) {
        self.ports.push_weight_bit(bit);
    }

    /// Queues every bit of `weight`, LSB first.
    ///
    /// # Errors
    ///
    /// Returns [`MacError::PrecisionMismatch`] if the weight is not at the pipeline's
    /// precision; nothing is queued in that case.
    pub fn push_weight(&mut self, weight: SignedWeight) -> Result<(), MacError> {
        if weight.precision() != self.precision {
            return Err(MacError::PrecisionMismatch {
                expected: self.precision.bits(),
                found: weight.precision().bits(),
            });
        }
        self.ports.push_weight(weight);
        Ok(())
    }

    /// Advances the pipeline by one cycle: multiplier, then accumulator.
    ///
    /// # Arguments
    ///
    /// * `valid` - Start signal gating operand acceptance.
    ///
    /// # Returns
    ///
    /// The handshake for this cycle. `ready` reflects the multiplier state at the
    /// start of the cycle.
    ///
    /// # Errors
    ///
    /// Returns [`MacError::AccumulatorOverflow`] under the trapping overflow policy.
    /// The cycle still counts and the multiplier's progress is kept.
    pub fn step(&mut self, valid: bool) -> Result<Handshake, MacError> {
        let ready = self.multiplier.is_ready();
        let activity =
            self.multiplier
                .step(valid, self.precision, &mut self.ports, &mut self.channel);
        self.stats.record_multiplier(activity);
        self.stats.cycles += 1;

        let consumed = self.accumulator.step(&mut self.channel);
        self.out_valid = matches!(consumed, Ok(true));
        match consumed {
            Ok(true) => self.stats.products_accumulated += 1,
            Ok(false) => {}
            Err(_) => self.stats.overflow_traps += 1,
        }

        if self.trace_cycles {
            info!(
                cycle = self.stats.cycles,
                ready,
                out_valid = self.out_valid,
                ?activity,
                accumulator = self.accumulator.register().value(),
                "cycle"
            );
        }

        consumed.map(|_| Handshake {
            ready,
            out_valid: self.out_valid,
        })
    }

    /// Returns `true` while the multiplier is in `IDLE`.
    pub const fn ready(&self) -> bool {
        self.multiplier.is_ready()
    }

    /// Returns the `out_valid` of the most recent step.
    pub const fn out_valid(&self) -> bool {
        self.out_valid
    }

    /// Returns the raw accumulator register value.
    pub const fn accumulator(&self) -> i64 {
        self.accumulator.register().value()
    }

    /// Returns the accumulator as a real number, `raw * 2^(ref - 7) / 8`.
    pub fn scaled_accumulator(&self) -> f64 {
        self.accumulator.scaled_value()
    }

    /// Clears the accumulator register. In-flight work is untouched.
    pub fn reset_accumulator(&mut self) {
        self.accumulator.reset();
    }

    /// Returns the weight precision new operands are computed at.
    pub const fn precision(&self) -> Precision {
        self.precision
    }

    /// Changes the weight precision for subsequent operands.
    ///
    /// # Errors
    ///
    /// Returns [`MacError::PipelineBusy`] unless the multiplier is in `IDLE`.
    pub fn set_precision(&mut self, precision: Precision) -> Result<(), MacError> {
        if !self.multiplier.is_ready() {
            return Err(MacError::PipelineBusy);
        }
        self.precision = precision;
        Ok(())
    }

    /// Returns the exponent every product is aligned to.
    pub const fn reference_exponent(&self) -> u8 {
        self.accumulator.reference_exponent()
    }

    /// Drops queued inputs, in-flight work, and queued results. The register is kept.
    pub fn flush(&mut self) {
        self.ports.flush();
        self.multiplier.reset();
        self.channel.flush();
        self.out_valid = false;
    }

    /// Returns `true` when no input, in-flight product, or queued result remains.
    pub fn is_drained(&self) -> bool {
        self.ports.is_empty() && self.multiplier.is_ready() && self.channel.is_empty()
    }

    /// Returns the multiplier stage.
    pub const fn multiplier(&self) -> &BitSerialMultiplier {
        &self.multiplier
    }

    /// Returns the input streams.
    pub const fn ports(&self) -> &InputPorts {
        &self.ports
    }

    /// Returns the result queue.
    pub const fn channel(&self) -> &ResultChannel {
        &self.channel
    }

    /// Returns the collected statistics.
    pub const fn stats(&self) -> &MacStats {
        &self.stats
    }
}

