pub mod event;
pub mod observer;
pub mod processor;
pub mod state;

pub use event::SimEvent;
pub use observer::Observer;
pub use processor::{
    IDLE_LABEL, Processor, SWITCH_LABEL, Segment, SegmentKind, Slice, SwitchCost,
};
pub use state::{ExecStats, Process, ProcessId, ProcessTable, StatsBook, Ticks};
