//! Bounded FIFO channel between pipeline stages.
//!
//! The result queue between the multiplier and the accumulator is a fixed-capacity
//! ring buffer with the following policy:
//! 1. **Block-on-full:** `push` refuses the entry and hands it back; the producer keeps it.
//! 2. **Empty-returns-none:** `pop` on an empty queue yields `None` and is not an error.
//! 3. **FIFO order:** Entries leave in the order they were accepted.

use super::latches::IntermediateResult;
use super::traits::PipelineLatch;

/// Fixed-capacity FIFO ring buffer.
#[derive(Debug)]
pub struct BoundedQueue<T> {
    entries: Vec<Option<T>>,
    /// Index of the oldest entry.
    head: usize,
    /// Index where the next entry will be written.
    tail: usize,
    /// Number of occupied slots.
    count: usize,
}

/// The multiplier → accumulator result queue.
pub type ResultChannel = BoundedQueue<IntermediateResult>;

impl<T> BoundedQueue<T> {
    /// Creates a queue with `capacity` slots.
    ///
    /// A zero capacity yields a queue that refuses every push; configuration
    /// validation rejects that before a pipeline is built.
    pub fn new(capacity: usize) -> Self {
        let mut entries = Vec::with_capacity(capacity);
        entries.resize_with(capacity, || None);
        Self {
            entries,
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    /// Returns the capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Returns the number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if every slot is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.count == self.entries.len()
    }

    /// Returns the number of free slots.
    #[inline]
    pub fn free_slots(&self) -> usize {
        self.entries.len() - self.count
    }

    /// Appends an entry.
    ///
    /// # Errors
    ///
    /// Returns the entry unchanged when the queue is full.
    pub fn push(&mut self, entry: T) -> Result<(), T> {
        if self.is_full() {
            return Err(entry);
        }
        self.entries[self.tail] = Some(entry);
        self.tail = (self.tail + 1) % self.entries.len();
        self.count += 1;
        Ok(())
    }

    /// Removes and returns the oldest entry, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        let entry = self.entries[self.head].take();
        self.head = (self.head + 1) % self.entries.len();
        self.count -= 1;
        entry
    }

    /// Returns the oldest entry without removing it.
    pub fn peek(&self) -> Option<&T> {
        if self.count == 0 {
            return None;
        }
        self.entries[self.head].as_ref()
    }
}

impl<T> PipelineLatch for BoundedQueue<T> {
    fn flush(&mut self) {
        self.entries.iter_mut().for_each(|slot| *slot = None);
        self.head = 0;
        self.tail = 0;
        self.count = 0;
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.count == 0
    }
}
