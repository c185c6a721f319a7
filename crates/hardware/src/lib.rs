//! FP8 × bit-serial integer multiply-accumulate simulator.
//!
//! This crate implements a cycle-driven model of a two-stage MAC pipeline:
//! 1. **Multiplier:** An IDLE/COMPUTE/DONE state machine multiplying an FP8 (E4M3, bias 7)
//!    operand by a two's-complement weight shifted in LSB first.
//! 2. **Accumulator:** Weight-sign and FP-sign correction, exponent alignment to a shared
//!    reference exponent, and a fixed-width running sum.
//! 3. **Pipeline:** Input streams, a bounded result queue, and `ready`/`out_valid` handshaking.
//! 4. **Simulation:** A cycle-budgeted driver, a floating-point golden model, and statistics.
//!
//! # Examples
//!
//! ```
//! use fp8mac_core::common::{FloatOperand, Precision, SignedWeight};
//! use fp8mac_core::{Config, Simulator};
//!
//! let mut sim = Simulator::new(&Config::default()).unwrap();
//! let weight = SignedWeight::new(2, Precision::new(4).unwrap()).unwrap();
//! let outcome = sim.mac(FloatOperand(0b1011_1000), weight).unwrap(); // -1.0 * 2
//! assert_eq!(outcome.scaled, -2.0);
//! ```

/// Common types and constants (operands, weights, errors).
pub mod common;
/// Simulator configuration (defaults, overflow policy, validation).
pub mod config;
/// MAC core (multiplier, accumulator, pipeline controller).
pub mod core;
/// Driver and golden model.
pub mod sim;
/// Pipeline activity statistics.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Two-stage MAC pipeline with a per-cycle `step`.
pub use crate::core::MacPipeline;
/// Cycle-budgeted driver around a pipeline.
pub use crate::sim::Simulator;
