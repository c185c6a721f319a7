//! Pipeline latch interface.
//!
//! Every buffer between stages (input ports and the result queue) can be flushed
//! and queried for emptiness through this trait.

/// Represents a pipeline latch (inter-stage buffer).
pub trait PipelineLatch {
    /// Clears all entries in the latch.
    fn flush(&mut self);

    /// Checks if the latch is empty.
    ///
    /// # Returns
    ///
    /// `true` if the latch holds no entries, `false` otherwise.
    fn is_empty(&self) -> bool;
}
