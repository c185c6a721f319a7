//! Driver and golden model tests.

/// Golden model decoding and tolerance tests.
pub mod reference;
