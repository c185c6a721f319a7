//! Input ports of the pipeline.
//!
//! The activation operands and the weight bits arrive on two independent streams.
//! Either stream may run ahead of the other: weight bits pushed before their
//! operand is accepted stay queued until `COMPUTE` reads them.

use std::collections::VecDeque;

use super::traits::PipelineLatch;
use crate::common::{FloatOperand, SignedWeight};

/// The operand stream and the weight-bit stream feeding the multiplier.
#[derive(Debug, Default)]
pub struct InputPorts {
    operands: VecDeque<FloatOperand>,
    weight_bits: VecDeque<bool>,
}

impl InputPorts {
    /// Creates empty input streams.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues one FP8 operand.
    pub fn push_operand(&mut self, operand: FloatOperand) {
        self.operands.push_back(operand);
    }

    /// Queues one weight bit.
    pub fn push_weight_bit(&mut self, bit: bool) {
        self.weight_bits.push_back(bit);
    }

    /// Queues every bit of `weight`, LSB first.
    pub fn push_weight(&mut self, weight: SignedWeight) {
        self.weight_bits.extend(weight.bits());
    }

    /// Takes the next operand, if any.
    pub fn pop_operand(&mut self) -> Option<FloatOperand> {
        self.operands.pop_front()
    }

    /// Takes the next weight bit, if any.
    pub fn pop_weight_bit(&mut self) -> Option<bool> {
        self.weight_bits.pop_front()
    }

    /// Number of operands waiting.
    pub fn pending_operands(&self) -> usize {
        self.operands.len()
    }

    /// Number of weight bits waiting.
    pub fn pending_weight_bits(&self) -> usize {
        self.weight_bits.len()
    }
}

impl PipelineLatch for InputPorts {
    fn flush(&mut self) {
        self.operands.clear();
        self.weight_bits.clear();
    }

    fn is_empty(&self) -> bool {
        self.operands.is_empty() && self.weight_bits.is_empty()
    }
}
