use super::{
    processor::Processor,
    state::{ProcessId, ProcessTable, StatsBook, Ticks},
};

/// Checks engine invariants after each simulation step.
#[derive(Debug, Default)]
pub struct Observer {
    step: u64,
    last_now: Ticks,
}

impl Observer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> u64 {
        self.step
    }

    pub fn observe(
        &mut self,
        now: Ticks,
        cpu: &Processor,
        table: &ProcessTable,
        queue: &[ProcessId],
        stats: &StatsBook,
    ) {
        self.step += 1;

        debug_assert!(
            now > self.last_now,
            "Clock must advance every step (was {}, now {now})",
            self.last_now
        );
        self.last_now = now;

        debug_assert_eq!(
            cpu.elapsed(),
            now,
            "Timeline duration must equal the virtual clock"
        );

        for process in table.iter() {
            debug_assert!(
                process.remaining <= process.burst,
                "Process {} remaining exceeds its burst",
                process.id
            );

            let entry = stats.get(process.id);
            let queued = queue.contains(&process.id);
            if process.is_complete() {
                debug_assert!(!queued, "Completed process {} still queued", process.id);
                debug_assert!(
                    entry.turnaround_time.is_some(),
                    "Completed process {} has no turnaround",
                    process.id
                );
            } else {
                debug_assert!(queued, "Unfinished process {} left the queue", process.id);
                debug_assert!(
                    entry.turnaround_time.is_none(),
                    "Unfinished process {} has a turnaround",
                    process.id
                );
            }

            if process.remaining < process.burst {
                debug_assert!(
                    entry.start_time.is_some(),
                    "Process {} ran without a start time",
                    process.id
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_steps() {
        let mut table = ProcessTable::new();
        let a = table.create_process("A", 2, 0);
        let stats = StatsBook::for_table(&table);
        let mut cpu = Processor::new(1, 1);
        let mut observer = Observer::new();

        cpu.dispatch(&mut table, None);
        observer.observe(1, &cpu, &table, &[a], &stats);
        cpu.dispatch(&mut table, None);
        observer.observe(2, &cpu, &table, &[a], &stats);
        assert_eq!(observer.steps(), 2);
    }
}
