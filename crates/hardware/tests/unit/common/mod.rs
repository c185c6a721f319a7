//! Common type tests.
//!
//! This module contains unit tests for the FP8 operand decoder, the precision and
//! weight types, and the error messages.



/// Precision validation and bit-serial weight tests.
pub mod weight;
