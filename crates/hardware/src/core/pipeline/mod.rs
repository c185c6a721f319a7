//! Pipeline plumbing and controller.
//!
//! This module wires the functional units into a cycle-driven pipeline.
//! It includes the following components:
//! 1. **Channel:** Bounded block-on-full FIFO between multiplier and accumulator.
//! 2. **Engine:** The `MacPipeline` controller exposing the per-cycle `step`.
//! 3. **Latches:** The intermediate result carried between the stages.
//! 4. **Ports:** The operand and weight-bit input streams.
//! 5. **Signals:** Handshake outputs and per-stage activity reports.
//! 6. **Traits:** Common interface for inter-stage buffers.

/// Bounded FIFO between stages.
pub mod channel;

/// Pipeline controller.
pub mod engine;

/// Multiplier → accumulator latch entry.
pub mod latches;

/// Operand and weight-bit input streams.
pub mod ports;

/// Handshake signals and activity reports.
pub mod signals;

/// Traits for inter-stage buffers.
pub mod traits;

pub use engine::MacPipeline;
pub use signals::Handshake;
