use crate::core::{ProcessId, Ticks};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimEvent {
    // First quantum for this process; `at` includes the switch charged before it
    Started {
        process: ProcessId,
        at: Ticks,
    },
    Dispatched {
        process: ProcessId,
        granted: Ticks,
        switched: bool,
        remaining: Ticks,
    },
    // No eligible process; the processor idled one tick
    Idle,
    Completed {
        process: ProcessId,
        at: Ticks,
        turnaround: Ticks,
    },
}
