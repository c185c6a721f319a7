//! Common types and constants shared by every pipeline stage.
//!
//! This module provides the fundamental building blocks of the simulator. It includes:
//! 1. **Constants:** FP8 field layout, fixed-point format, and precision limits.
//! 2. **Operands:** Strong types for the FP8 activation and its decoded fields.
//! 3. **Weights:** The validated precision and the bit-serial signed weight.
//! 4. **Error Handling:** The crate-wide `MacError` type.

/// Datapath constants (field layout, limits, reference sizes).
pub mod constants;

/// Error type shared by the pipeline, configuration, and driver.
pub mod error;

/// FP8 operand type and decoder.
pub mod operand;

/// Precision and bit-serial weight types.
pub mod weight;

pub use error::MacError;
pub use operand::{DecodedOperand, FloatOperand};
pub use weight::{Precision, SignedWeight};
