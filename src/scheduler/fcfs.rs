use super::{Policy, ProcessId, ProcessTable, Ticks};

/// Strict queue order: only the head may run.
///
/// A head that has not arrived yet blocks the queue even when a later
/// process is already eligible.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Policy for Fcfs {
    fn pick(
        &mut self,
        queue: &[ProcessId],
        table: &ProcessTable,
        now: Ticks,
    ) -> Option<ProcessId> {
        let &head = queue.first()?;
        table.process(head).is_eligible(now).then_some(head)
    }
}
