pub mod fcfs;
pub mod round_robin;
pub mod shortest;

use std::{fmt, str::FromStr};

use crate::{
    core::{ProcessId, ProcessTable, Ticks},
    error::SimError,
};
pub use fcfs::Fcfs;
pub use round_robin::RoundRobin;
pub use shortest::ShortestRemaining;

pub trait Policy {
    /// Chooses the process to run for the next quantum.
    ///
    /// `queue` holds the unfinished processes in workload order. Returning
    /// `None` idles the processor for one tick.
    fn pick(
        &mut self,
        queue: &[ProcessId],
        table: &ProcessTable,
        now: Ticks,
    ) -> Option<ProcessId>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PolicyId {
    #[default]
    Fcfs,
    RoundRobin,
    ShortestRemaining,
}

impl PolicyId {
    pub const ALL: [PolicyId; 3] = [Self::Fcfs, Self::RoundRobin, Self::ShortestRemaining];

    pub fn build(self) -> PolicyImpl {
        match self {
            Self::Fcfs => PolicyImpl::Fcfs(Fcfs),
            Self::RoundRobin => PolicyImpl::RoundRobin(RoundRobin::default()),
            Self::ShortestRemaining => PolicyImpl::ShortestRemaining(ShortestRemaining),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::RoundRobin => "rr",
            Self::ShortestRemaining => "srb",
        }
    }
}

impl fmt::Display for PolicyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyId {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Self::Fcfs),
            "rr" | "round-robin" | "round_robin" => Ok(Self::RoundRobin),
            "srb" | "srtf" | "sjf" | "shortest-remaining" | "shortest_remaining" => {
                Ok(Self::ShortestRemaining)
            }
            _ => Err(SimError::UnknownPolicy(s.to_string())),
        }
    }
}

/// The closed set of policies, dispatched without trait objects.
#[derive(Debug, Clone)]
pub enum PolicyImpl {
    Fcfs(Fcfs),
    RoundRobin(RoundRobin),
    ShortestRemaining(ShortestRemaining),
}

impl Policy for PolicyImpl {
    fn pick(
        &mut self,
        queue: &[ProcessId],
        table: &ProcessTable,
        now: Ticks,
    ) -> Option<ProcessId> {
        match self {
            Self::Fcfs(p) => p.pick(queue, table, now),
            Self::RoundRobin(p) => p.pick(queue, table, now),
            Self::ShortestRemaining(p) => p.pick(queue, table, now),
        }
    }
}
