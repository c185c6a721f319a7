//! MAC pipeline core.
//!
//! This module contains the datapath units and the pipeline that connects them.

/// Pipeline plumbing (channel, latches, ports, signals) and the controller.
pub mod pipeline;

/// Functional units (bit-serial multiplier, accumulator).
pub mod units;

pub use self::pipeline::MacPipeline;
