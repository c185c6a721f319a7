//! Handshake signals and per-stage activity reports.
//!
//! This module defines what a single pipeline step exposes to the outside and what
//! each stage reports internally. It provides:
//! 1. **Handshake:** The `ready` and `out_valid` outputs of one step.
//! 2. **Multiplier Activity:** What the multiplier did in the step, for statistics and tracing.

/// Handshake outputs of one pipeline step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Handshake {
    /// Multiplier was in `IDLE` when the step began and could accept an operand.
    pub ready: bool,
    /// Accumulator consumed a result during this step.
    pub out_valid: bool,
}

/// What the multiplier did during one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MultiplierActivity {
    /// Stayed in `IDLE`: no operand, or `valid` was low.
    Idle,
    /// Accepted an operand and entered `COMPUTE`.
    Accepted,
    /// Consumed one weight bit.
    ConsumedBit {
        /// Whether the bit completed the weight and moved the machine to `DONE`.
        completed: bool,
    },
    /// In `COMPUTE` with no weight bit available.
    Starved,
    /// Emitted its result and returned to `IDLE`.
    Emitted,
    /// In `DONE` but the result queue was full.
    Stalled,
}
