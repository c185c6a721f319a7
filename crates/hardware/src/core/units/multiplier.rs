//! Bit-serial FP8 × INT multiplier.
//!
//! The multiplier is a three-state machine that multiplies one FP8 operand by a
//! weight delivered one bit per cycle, LSB first:
//! 1. **IDLE:** Waits for `valid` and an operand, decodes it, and restores the mantissa `1.mmm`.
//! 2. **COMPUTE:** Consumes one weight bit per step. Magnitude bits add the working mantissa
//!    register into a local sum, and the register doubles after every magnitude bit. The final
//!    bit is stored as the weight sign and never added.
//! 3. **DONE:** Pushes one [`IntermediateResult`] into the result queue and returns to `IDLE`.
//!    A full queue keeps the machine in `DONE` until the push succeeds.
//!
//! The sign correction is left to the accumulator, so the sum produced here is the
//! unsigned shift-and-add of the magnitude bits only.

use tracing::{debug, trace};

use crate::common::{DecodedOperand, Precision};
use crate::core::pipeline::channel::ResultChannel;
use crate::core::pipeline::latches::IntermediateResult;
use crate::core::pipeline::ports::InputPorts;
use crate::core::pipeline::signals::MultiplierActivity;

/// Working registers held while a weight is being shifted in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComputeRegs {
    /// Decoded fields of the accepted operand.
    pub operand: DecodedOperand,
    /// Working mantissa register, doubled after every magnitude bit.
    pub fixed_mant: i64,
    /// Shift-and-add sum of the magnitude bits seen so far.
    pub acc: i64,
    /// Weight bits consumed so far.
    pub count: u8,
    /// Sign bit of the weight, valid once `count == precision`.
    pub weight_sign: bool,
    /// Precision latched when the operand was accepted.
    pub precision: Precision,
}

impl ComputeRegs {
    fn new(operand: DecodedOperand, precision: Precision) -> Self {
        Self {
            operand,
            fixed_mant: i64::from(operand.mantissa_unit()),
            acc: 0,
            count: 0,
            weight_sign: false,
            precision,
        }
    }

    /// Shifts one weight bit in.
    fn consume(&mut self, bit: bool) {
        if self.count == self.precision.sign_index() {
            self.weight_sign = bit;
        } else {
            if bit {
                self.acc += self.fixed_mant;
            }
            self.fixed_mant <<= 1;
        }
        self.count += 1;
    }

    const fn is_complete(&self) -> bool {
        self.count == self.precision.bits()
    }

    const fn finish(&self) -> IntermediateResult {
        IntermediateResult {
            magnitude: self.acc,
            exponent: self.operand.exponent,
            fp_sign: self.operand.sign,
            weight_sign: self.weight_sign,
            mantissa_unit: self.operand.mantissa_unit(),
            precision: self.precision,
        }
    }
}

/// Multiplier state with per-state working data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MultiplierState {
    /// Waiting for an operand.
    #[default]
    Idle,
    /// Shifting in weight bits.
    Compute(ComputeRegs),
    /// Holding a finished result until the queue accepts it.
    Done(IntermediateResult),
}

/// Bit-serial multiplier stage.
#[derive(Debug, Default)]
pub struct BitSerialMultiplier {
    state: MultiplierState,
}

impl BitSerialMultiplier {
    /// Creates a multiplier in `IDLE`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    pub const fn state(&self) -> &MultiplierState {
        &self.state
    }

    /// Returns `true` while the multiplier can accept a new operand.
    #[inline]
    pub const fn is_ready(&self) -> bool {
        matches!(self.state, MultiplierState::Idle)
    }

    /// Drops any in-flight work and returns to `IDLE`.
    pub fn reset(&mut self) {
        self.state = MultiplierState::Idle;
    }

    /// Advances the state machine by one cycle.
    ///
    /// # Arguments
    ///
    /// * `valid` - Start signal; an operand is only accepted while it is high.
    /// * `precision` - Weight width latched when an operand is accepted.
    /// * `ports` - Operand and weight-bit input streams.
    /// * `out` - Result queue towards the accumulator.
    ///
    /// # Returns
    ///
    /// What the multiplier did during this cycle.
    pub fn step(
        &mut self,
        valid: bool,
        precision: Precision,
        ports: &mut InputPorts,
        out: &mut ResultChannel,
    ) -> MultiplierActivity {
        match &mut self.state {
            MultiplierState::Idle => {
                if !valid {
                    return MultiplierActivity::Idle;
                }
                let Some(operand) = ports.pop_operand() else {
                    return MultiplierActivity::Idle;
                };
                let fields = operand.decode();
                trace!(
                    operand = %operand,
                    sign = fields.sign,
                    exponent = fields.exponent,
                    mantissa = fields.mantissa,
                    precision = precision.bits(),
                    "multiplier IDLE -> COMPUTE"
                );
                self.state = MultiplierState::Compute(ComputeRegs::new(fields, precision));
                MultiplierActivity::Accepted
            }
            MultiplierState::Compute(regs) => {
                if regs.count < regs.precision.bits() {
                    let Some(bit) = ports.pop_weight_bit() else {
                        trace!(count = regs.count, "multiplier starved for weight bit");
                        return MultiplierActivity::Starved;
                    };
                    regs.consume(bit);
                }
                if regs.is_complete() {
                    let result = regs.finish();
                    trace!(
                        magnitude = result.magnitude,
                        weight_sign = result.weight_sign,
                        "multiplier COMPUTE -> DONE"
                    );
                    self.state = MultiplierState::Done(result);
                    MultiplierActivity::ConsumedBit { completed: true }
                } else {
                    MultiplierActivity::ConsumedBit { completed: false }
                }
            }
            MultiplierState::Done(result) => match out.push(*result) {
                Ok(()) => {
                    debug!(
                        magnitude = result.magnitude,
                        exponent = result.exponent,
                        fp_sign = result.fp_sign,
                        weight_sign = result.weight_sign,
                        "multiplier emitted result"
                    );
                    self.state = MultiplierState::Idle;
                    MultiplierActivity::Emitted
                }
                Err(_) => {
                    trace!("result queue full, multiplier holding in DONE");
                    MultiplierActivity::Stalled
                }
            },
        }
    }
}
