//! Processor and policy settings for a run.

use crate::{core::SwitchCost, error::SimError, scheduler::PolicyId};

/// Settings for one simulation.
///
/// Numeric fields are signed so that out-of-range input coming from a caller
/// or the command line is representable and rejected by [`SimConfig::validate`]
/// rather than wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    pub quantum: i64,
    pub switch_overhead: i64,
    pub switch_cost: SwitchCost,
    pub policy: PolicyId,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            quantum: 6,
            switch_overhead: 1,
            switch_cost: SwitchCost::Fixed,
            policy: PolicyId::Fcfs,
        }
    }
}

impl SimConfig {
    pub fn new(quantum: i64, switch_overhead: i64, policy: PolicyId) -> Self {
        Self {
            quantum,
            switch_overhead,
            policy,
            ..Self::default()
        }
    }

    pub fn with_switch_cost(mut self, switch_cost: SwitchCost) -> Self {
        self.switch_cost = switch_cost;
        self
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if self.quantum <= 0 {
            return Err(SimError::InvalidQuantum(self.quantum));
        }
        // Fixed-cost switches never read the overhead
        if self.switch_cost == SwitchCost::Overhead && self.switch_overhead < 0 {
            return Err(SimError::InvalidSwitchOverhead(self.switch_overhead));
        }
        Ok(())
    }
}
