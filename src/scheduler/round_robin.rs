use super::{Policy, ProcessId, ProcessTable, Ticks};

/// Passes over the queue in order, one quantum per eligible process.
///
/// The cursor is an index into the live queue. When the process just run
/// completes and is removed, its successor slides under the cursor and waits
/// for the next pass. A pass that finds nothing eligible idles one tick.
#[derive(Debug, Clone, Default)]
pub struct RoundRobin {
    cursor: usize,
    // Something ran during the current pass
    progressed: bool,
}

impl Policy for RoundRobin {
    fn pick(
        &mut self,
        queue: &[ProcessId],
        table: &ProcessTable,
        now: Ticks,
    ) -> Option<ProcessId> {
        loop {
            if self.cursor >= queue.len() {
                self.cursor = 0;
                if !std::mem::take(&mut self.progressed) {
                    return None;
                }
                continue;
            }

            let id = queue[self.cursor];
            self.cursor += 1;
            if table.process(id).is_eligible(now) {
                self.progressed = true;
                return Some(id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_the_queue_then_wraps() {
        let mut table = ProcessTable::new();
        let a = table.create_process("A", 5, 0);
        let b = table.create_process("B", 5, 0);
        let queue = [a, b];

        let mut policy = RoundRobin::default();
        let picks: Vec<_> = (0..4).map(|_| policy.pick(&queue, &table, 0)).collect();
        assert_eq!(picks, vec![Some(a), Some(b), Some(a), Some(b)]);
    }

    #[test]
    fn skips_processes_that_have_not_arrived() {
        let mut table = ProcessTable::new();
        let a = table.create_process("A", 5, 0);
        let b = table.create_process("B", 5, 10);
        let queue = [a, b];

        let mut policy = RoundRobin::default();
        assert_eq!(policy.pick(&queue, &table, 0), Some(a));
        assert_eq!(policy.pick(&queue, &table, 3), Some(a));
        assert_eq!(policy.pick(&queue, &table, 10), Some(b));
    }

    #[test]
    fn empty_pass_idles_once() {
        let mut table = ProcessTable::new();
        let a = table.create_process("A", 5, 4);

        let mut policy = RoundRobin::default();
        assert_eq!(policy.pick(&[a], &table, 0), None);
        assert_eq!(policy.pick(&[a], &table, 1), None);
        assert_eq!(policy.pick(&[a], &table, 4), Some(a));
    }

    #[test]
    fn successor_of_a_removed_process_waits_a_pass() {
        let mut table = ProcessTable::new();
        let a = table.create_process("A", 1, 0);
        let b = table.create_process("B", 1, 0);
        let c = table.create_process("C", 1, 0);

        let mut policy = RoundRobin::default();
        assert_eq!(policy.pick(&[a, b, c], &table, 0), Some(a));
        // A finished and left the queue; B now sits where A was
        assert_eq!(policy.pick(&[b, c], &table, 2), Some(c));
        assert_eq!(policy.pick(&[b], &table, 4), Some(b));
    }
}
