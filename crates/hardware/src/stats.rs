//! Simulation statistics collection and reporting.
//!
//! This module tracks activity counters for the MAC pipeline. It provides:
//! 1. **Cycles and Throughput:** Total cycles and products accumulated per cycle.
//! 2. **Multiplier Activity:** Operands accepted, weight bits consumed, products emitted.
//! 3. **Stalls:** Idle cycles, cycles starved for weight bits, and cycles blocked on a full queue.
//! 4. **Accumulator:** Products accumulated and overflow traps raised.

use std::fmt;

use crate::core::pipeline::signals::MultiplierActivity;

/// Activity counters for one pipeline instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MacStats {
    /// Total pipeline steps taken.
    pub cycles: u64,
    /// Operands accepted by the multiplier (IDLE → COMPUTE transitions).
    pub operands_accepted: u64,
    /// Weight bits shifted into the multiplier.
    pub weight_bits_consumed: u64,
    /// Intermediate results pushed into the result queue.
    pub products_emitted: u64,
    /// Intermediate results added into the accumulator register.
    pub products_accumulated: u64,
    /// Cycles the multiplier spent in IDLE without accepting an operand.
    pub idle_cycles: u64,
    /// Cycles the multiplier spent in COMPUTE with no weight bit available.
    pub input_stall_cycles: u64,
    /// Cycles the multiplier spent in DONE because the result queue was full.
    pub output_stall_cycles: u64,
    /// Results dropped by the trapping overflow policy.
    pub overflow_traps: u64,
}

impl MacStats {
    /// Accumulated products per cycle, or `0.0` before the first cycle.
    pub fn products_per_cycle(&self) -> f64 {
        if self.cycles == 0 {
            return 0.0;
        }
        self.products_accumulated as f64 / self.cycles as f64
    }

    pub(crate) fn record_multiplier(&mut self, activity: MultiplierActivity) {
        match activity {
            MultiplierActivity::Idle => self.idle_cycles += 1,
            MultiplierActivity::Accepted => self.operands_accepted += 1,
            MultiplierActivity::ConsumedBit { .. } => self.weight_bits_consumed += 1,
            MultiplierActivity::Starved => self.input_stall_cycles += 1,
            MultiplierActivity::Emitted => self.products_emitted += 1,
            MultiplierActivity::Stalled => self.output_stall_cycles += 1,
        }
    }
}

impl fmt::Display for MacStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cyc = self.cycles.max(1) as f64;
        let pct = |n: u64| (n as f64 / cyc) * 100.0;

        writeln!(f, "==========================================================")?;
        writeln!(f, "FP8 MAC PIPELINE STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "sim_cycles               {}", self.cycles)?;
        writeln!(f, "sim_products             {}", self.products_accumulated)?;
        writeln!(f, "sim_products_per_cycle   {:.4}", self.products_per_cycle())?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "MULTIPLIER")?;
        writeln!(f, "  mul.accepted           {}", self.operands_accepted)?;
        writeln!(f, "  mul.weight_bits        {}", self.weight_bits_consumed)?;
        writeln!(f, "  mul.emitted            {}", self.products_emitted)?;
        writeln!(
            f,
            "  stalls.idle            {} ({:.2}%)",
            self.idle_cycles,
            pct(self.idle_cycles)
        )?;
        writeln!(
            f,
            "  stalls.input           {} ({:.2}%)",
            self.input_stall_cycles,
            pct(self.input_stall_cycles)
        )?;
        writeln!(
            f,
            "  stalls.output          {} ({:.2}%)",
            self.output_stall_cycles,
            pct(self.output_stall_cycles)
        )?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "ACCUMULATOR")?;
        writeln!(f, "  acc.products           {}", self.products_accumulated)?;
        writeln!(f, "  acc.overflow_traps     {}", self.overflow_traps)?;
        write!(f, "==========================================================")
    }
}
