use super::{Policy, ProcessId, ProcessTable, Ticks};

/// Preemptive shortest-remaining-burst, re-evaluated after every quantum.
///
/// Ties go to whichever eligible process comes first in queue order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestRemaining;

impl Policy for ShortestRemaining {
    fn pick(
        &mut self,
        queue: &[ProcessId],
        table: &ProcessTable,
        now: Ticks,
    ) -> Option<ProcessId> {
        let mut best: Option<(ProcessId, Ticks)> = None;
        for &id in queue {
            let process = table.process(id);
            if !process.is_eligible(now) {
                continue;
            }
            match best {
                Some((_, remaining)) if remaining <= process.remaining => {}
                _ => best = Some((id, process.remaining)),
            }
        }
        best.map(|(id, _)| id)
    }
}
