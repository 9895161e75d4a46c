use tracing::{debug, info, trace};

use super::workload::{ProcessSpec, ingest};
use crate::{
    config::SimConfig,
    core::{
        Observer, ProcessId, ProcessTable, Processor, Segment, SimEvent, StatsBook, Ticks,
    },
    error::SimError,
    scheduler::{Policy, PolicyId, PolicyImpl},
};

/// Final per-process statistics; every field is set once a run completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessStats {
    pub id: ProcessId,
    pub name: String,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub start_time: Ticks,
    pub turnaround_time: Ticks,
}

impl ProcessStats {
    // Time from arrival to first dispatch
    pub fn response_time(&self) -> Ticks {
        self.start_time.saturating_sub(self.arrival)
    }

    pub fn completion_time(&self) -> Ticks {
        self.arrival + self.turnaround_time
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimOutput {
    pub timeline: Vec<Segment>,
    pub stats: Vec<ProcessStats>,
}

/// Drives a policy against a processor until every process completes.
pub struct Sim<P: Policy = PolicyImpl> {
    cpu: Processor,
    table: ProcessTable,
    // Unfinished processes in workload order
    queue: Vec<ProcessId>,
    stats: StatsBook,
    policy: P,
    now: Ticks,
    observer: Observer,
}

impl<P: Policy> Sim<P> {
    pub fn new(table: ProcessTable, cpu: Processor, policy: P) -> Self {
        let queue = table.ids().collect();
        let stats = StatsBook::for_table(&table);
        Self {
            cpu,
            table,
            queue,
            stats,
            policy,
            now: 0,
            observer: Observer::new(),
        }
    }

    /// Runs one policy decision: a quantum for the chosen process or a
    /// single idle tick.
    pub fn step(&mut self) -> Vec<SimEvent> {
        let mut events = Vec::new();
        if self.is_done() {
            return events;
        }

        let Some(id) = self.policy.pick(&self.queue, &self.table, self.now) else {
            let slice = self.cpu.dispatch(&mut self.table, None);
            self.now += slice.elapsed;
            trace!(now = self.now, "idle tick");
            events.push(SimEvent::Idle);
            self.observe();
            return events;
        };

        debug_assert!(self.queue.contains(&id), "Policy picked finished process {id}");
        debug_assert!(
            self.table.process(id).is_eligible(self.now),
            "Policy picked process {id} before its arrival"
        );

        // The first quantum starts after the switch into it
        let start = self.now + self.cpu.switch_ticks();
        if self.stats.get_mut(id).stamp_start(start) {
            events.push(SimEvent::Started { process: id, at: start });
        }

        let slice = self.cpu.dispatch(&mut self.table, Some(id));
        self.now += slice.elapsed;

        let process = self.table.process(id);
        debug!(
            process = %process.name,
            granted = slice.granted,
            switched = slice.switched,
            remaining = process.remaining,
            now = self.now,
            "dispatch"
        );
        events.push(SimEvent::Dispatched {
            process: id,
            granted: slice.granted,
            switched: slice.switched,
            remaining: process.remaining,
        });

        if process.is_complete() {
            let turnaround = self.now.saturating_sub(process.arrival);
            debug!(process = %process.name, turnaround, now = self.now, "completed");
            if let Some(pos) = self.queue.iter().position(|&q| q == id) {
                self.queue.remove(pos);
            }
            self.stats.get_mut(id).stamp_turnaround(turnaround);
            events.push(SimEvent::Completed {
                process: id,
                at: self.now,
                turnaround,
            });
        }

        self.observe();
        events
    }

    fn observe(&mut self) {
        self.observer
            .observe(self.now, &self.cpu, &self.table, &self.queue, &self.stats);
    }

    pub fn run(&mut self) {
        while !self.is_done() {
            self.step();
        }
    }

    /// Finishes the run, coalesces the timeline and collects statistics.
    pub fn finish(mut self) -> SimOutput {
        self.run();
        debug_assert!(self.stats.all_stamped(), "Run ended with unstamped statistics");

        self.cpu.coalesce();
        let stats = self
            .stats
            .iter()
            .map(|entry| {
                let process = self.table.process(entry.process);
                ProcessStats {
                    id: process.id,
                    name: process.name.clone(),
                    arrival: process.arrival,
                    burst: process.burst,
                    start_time: entry.start_time.unwrap_or_default(),
                    turnaround_time: entry.turnaround_time.unwrap_or_default(),
                }
            })
            .collect();

        info!(
            steps = self.observer.steps(),
            makespan = self.now,
            segments = self.cpu.timeline().len(),
            "simulation finished"
        );

        SimOutput {
            timeline: self.cpu.into_timeline(),
            stats,
        }
    }

    pub fn is_done(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn now(&self) -> Ticks {
        self.now
    }

    pub fn queue(&self) -> &[ProcessId] {
        &self.queue
    }

    pub fn table(&self) -> &ProcessTable {
        &self.table
    }

    pub fn stats(&self) -> &StatsBook {
        &self.stats
    }

    pub fn processor(&self) -> &Processor {
        &self.cpu
    }
}

impl Sim<PolicyImpl> {
    /// Validates `specs` and `config` and builds a ready-to-step simulation.
    pub fn from_config(specs: &[ProcessSpec], config: &SimConfig) -> Result<Self, SimError> {
        let table = ingest(specs)?;
        config.validate()?;

        let cpu = Processor::with_switch_cost(
            config.quantum as Ticks,
            config.switch_overhead.max(0) as Ticks,
            config.switch_cost,
        );
        Ok(Self::new(table, cpu, config.policy.build()))
    }
}

/// Runs `processes` to completion under `policy` with the fixed one-tick
/// switch cost, returning the coalesced timeline and per-process statistics.
pub fn simulate(
    processes: &[ProcessSpec],
    quantum: i64,
    switch_overhead: i64,
    policy: PolicyId,
) -> Result<SimOutput, SimError> {
    simulate_with(processes, &SimConfig::new(quantum, switch_overhead, policy))
}

pub fn simulate_with(processes: &[ProcessSpec], config: &SimConfig) -> Result<SimOutput, SimError> {
    let sim = Sim::from_config(processes, config)?;
    info!(
        policy = %config.policy,
        quantum = config.quantum,
        processes = processes.len(),
        "starting simulation"
    );
    Ok(sim.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SwitchCost;

    fn spec(name: &str, burst: i64, arrival: i64) -> ProcessSpec {
        ProcessSpec::new(name, burst, arrival)
    }

    fn segments(output: &SimOutput) -> Vec<(&str, Ticks)> {
        output
            .timeline
            .iter()
            .map(|s| (s.label.as_str(), s.duration))
            .collect()
    }

    #[test]
    fn fcfs_two_processes() {
        let output = simulate(&[spec("A", 4, 0), spec("B", 2, 1)], 3, 1, PolicyId::Fcfs).unwrap();

        assert_eq!(segments(&output), vec![("CS", 1), ("A", 4), ("CS", 1), ("B", 2)]);
        let a = &output.stats[0];
        let b = &output.stats[1];
        assert_eq!((a.start_time, a.turnaround_time), (1, 5));
        assert_eq!((b.start_time, b.turnaround_time), (6, 7));
    }

    #[test]
    fn idle_ticks_until_first_arrival() {
        let output = simulate(&[spec("A", 2, 3)], 5, 1, PolicyId::RoundRobin).unwrap();
        assert_eq!(segments(&output), vec![("idle", 3), ("CS", 1), ("A", 2)]);
        assert_eq!(output.stats[0].start_time, 4);
        assert_eq!(output.stats[0].turnaround_time, 3);
    }

    #[test]
    fn step_reports_single_stamps() {
        let specs = [spec("A", 4, 0), spec("B", 2, 1)];
        let mut sim = Sim::from_config(&specs, &SimConfig::new(3, 1, PolicyId::Fcfs)).unwrap();

        let mut started = Vec::new();
        let mut completed = Vec::new();
        while !sim.is_done() {
            for event in sim.step() {
                match event {
                    SimEvent::Started { process, at } => started.push((process, at)),
                    SimEvent::Completed {
                        process,
                        turnaround,
                        ..
                    } => completed.push((process, turnaround)),
                    _ => {}
                }
            }
        }

        assert_eq!(started, vec![(0, 1), (1, 6)]);
        assert_eq!(completed, vec![(0, 5), (1, 7)]);
        assert_eq!(sim.now(), 8);
        assert!(sim.step().is_empty());
    }

    #[test]
    fn overhead_cost_shifts_start_times() {
        let config = SimConfig::new(3, 2, PolicyId::Fcfs).with_switch_cost(SwitchCost::Overhead);
        let output = simulate_with(&[spec("A", 4, 0), spec("B", 2, 1)], &config).unwrap();

        assert_eq!(segments(&output), vec![("CS", 2), ("A", 4), ("CS", 2), ("B", 2)]);
        assert_eq!(output.stats[0].start_time, 2);
        assert_eq!(output.stats[1].start_time, 8);
        assert_eq!(output.stats[1].turnaround_time, 9);
    }

    #[test]
    fn validation_happens_up_front() {
        assert_eq!(
            simulate(&[], 3, 1, PolicyId::Fcfs).unwrap_err(),
            SimError::EmptyWorkload
        );
        assert_eq!(
            simulate(&[spec("A", 1, 0)], 0, 1, PolicyId::Fcfs).unwrap_err(),
            SimError::InvalidQuantum(0)
        );
    }
}
