//! Functional units of the MAC datapath.
//!
//! This module contains the two pipeline stages:
//! - [`multiplier`]: the bit-serial FP8 × INT shift-and-add state machine.
//! - [`accumulator`]: sign correction, exponent alignment, and the persistent register.

/// Sign-correcting, exponent-aligning accumulator.
pub mod accumulator;

/// Bit-serial multiplier state machine.
pub mod multiplier;

pub use accumulator::{Accumulator, AccumulatorRegister};
pub use multiplier::{BitSerialMultiplier, MultiplierState};
