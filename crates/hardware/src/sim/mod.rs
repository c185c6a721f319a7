//! Driving the pipeline and checking its results.
//!
//! Provides the caller side of the handshake (issue a pair, step until `out_valid`
//! within a cycle budget) and the floating-point golden model used for comparison.

/// Floating-point golden model and tolerance.
pub mod reference;

/// Cycle-budgeted driver around a `MacPipeline`.
pub mod simulator;

pub use simulator::{MacOutcome, Simulator};
