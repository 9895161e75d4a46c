// Index into the process arena
pub type ProcessId = usize;
pub type Ticks = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub id: ProcessId,
    pub name: String,
    pub burst: Ticks,
    pub remaining: Ticks,
    pub arrival: Ticks,
}

impl Process {
    pub fn is_eligible(&self, now: Ticks) -> bool {
        self.arrival <= now
    }

    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }
}

/// Arena of process descriptors. Both the run queue and the statistics book
/// refer to processes by `ProcessId`, so a decrement of `remaining` made by the
/// processor is visible to every view.
#[derive(Debug, Default, Clone)]
pub struct ProcessTable {
    processes: Vec<Process>,

    // Increment upon process creation
    next_id: ProcessId,
}

impl ProcessTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_process(
        &mut self,
        name: impl Into<String>,
        burst: Ticks,
        arrival: Ticks,
    ) -> ProcessId {
        let id = self.next_id;
        self.next_id += 1;

        let process = Process {
            id,
            name: name.into(),
            burst,
            remaining: burst,
            arrival,
        };

        debug_assert_eq!(self.processes.len(), id, "ProcessId must match Vec index");
        self.processes.push(process);

        id
    }

    pub fn process(&self, id: ProcessId) -> &Process {
        &self.processes[id]
    }

    pub fn process_mut(&mut self, id: ProcessId) -> &mut Process {
        &mut self.processes[id]
    }

    pub fn ids(&self) -> impl Iterator<Item = ProcessId> + '_ {
        self.processes.iter().map(|p| p.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Process> {
        self.processes.iter()
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}

/// Per-process start and turnaround bookkeeping. Each field is stamped once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecStats {
    pub process: ProcessId,
    pub start_time: Option<Ticks>,
    pub turnaround_time: Option<Ticks>,
}

impl ExecStats {
    pub fn new(process: ProcessId) -> Self {
        Self {
            process,
            start_time: None,
            turnaround_time: None,
        }
    }

    /// Returns true if this call set the start time.
    pub fn stamp_start(&mut self, at: Ticks) -> bool {
        if self.start_time.is_some() {
            return false;
        }
        self.start_time = Some(at);
        true
    }

    pub fn stamp_turnaround(&mut self, turnaround: Ticks) {
        debug_assert!(
            self.turnaround_time.is_none(),
            "Process {} turnaround stamped twice",
            self.process
        );
        if self.turnaround_time.is_none() {
            self.turnaround_time = Some(turnaround);
        }
    }
}

/// One `ExecStats` per process, in ingestion order.
#[derive(Debug, Clone)]
pub struct StatsBook {
    entries: Vec<ExecStats>,
}

impl StatsBook {
    pub fn for_table(table: &ProcessTable) -> Self {
        Self {
            entries: table.ids().map(ExecStats::new).collect(),
        }
    }

    // Arena ids are dense, so the id doubles as the entry index
    pub fn get(&self, id: ProcessId) -> &ExecStats {
        &self.entries[id]
    }

    pub fn get_mut(&mut self, id: ProcessId) -> &mut ExecStats {
        &mut self.entries[id]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExecStats> {
        self.entries.iter()
    }

    pub fn all_stamped(&self) -> bool {
        self.entries
            .iter()
            .all(|s| s.start_time.is_some() && s.turnaround_time.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_dense_and_monotonic() {
        let mut table = ProcessTable::new();
        let a = table.create_process("A", 4, 0);
        let b = table.create_process("B", 2, 1);
        assert_eq!((a, b), (0, 1));
        assert_eq!(table.process(b).remaining, 2);
        assert_eq!(table.ids().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn eligibility_tracks_arrival() {
        let mut table = ProcessTable::new();
        let id = table.create_process("A", 1, 3);
        assert!(!table.process(id).is_eligible(2));
        assert!(table.process(id).is_eligible(3));
    }

    #[test]
    fn start_is_stamped_once() {
        let mut stats = ExecStats::new(0);
        assert!(stats.stamp_start(1));
        assert!(!stats.stamp_start(7));
        assert_eq!(stats.start_time, Some(1));
    }

    #[test]
    fn book_follows_table_order() {
        let mut table = ProcessTable::new();
        table.create_process("A", 1, 0);
        table.create_process("B", 1, 0);
        let book = StatsBook::for_table(&table);
        let order: Vec<_> = book.iter().map(|s| s.process).collect();
        assert_eq!(order, vec![0, 1]);
        assert!(!book.all_stamped());
    }
}
