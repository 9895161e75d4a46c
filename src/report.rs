//! Aggregate figures and plain-text rendering of a finished run.

use std::fmt::Write;

use average::{Estimate, Mean};
use rustc_hash::FxHashMap;

use crate::{
    core::{ProcessId, Segment, SegmentKind, Ticks},
    sim::SimOutput,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub mean_turnaround: f64,
    // Mean time from arrival to first dispatch
    pub mean_response: f64,
    pub makespan: Ticks,
    pub busy_ticks: Ticks,
    pub idle_ticks: Ticks,
    pub switch_ticks: Ticks,
    pub switches: usize,
}

impl Summary {
    pub fn from_output(output: &SimOutput) -> Self {
        let mut busy_ticks = 0;
        let mut idle_ticks = 0;
        let mut switch_ticks = 0;
        let mut switches = 0;
        for segment in &output.timeline {
            match segment.kind() {
                SegmentKind::Run(_) => busy_ticks += segment.duration,
                SegmentKind::Idle => idle_ticks += segment.duration,
                SegmentKind::Switch => {
                    switch_ticks += segment.duration;
                    switches += 1;
                }
            }
        }

        Self {
            mean_turnaround: avg(output.stats.iter().map(|s| s.turnaround_time as f64)),
            mean_response: avg(output.stats.iter().map(|s| s.response_time() as f64)),
            makespan: busy_ticks + idle_ticks + switch_ticks,
            busy_ticks,
            idle_ticks,
            switch_ticks,
            switches,
        }
    }

    /// Fraction of the makespan spent running processes.
    pub fn utilisation(&self) -> f64 {
        if self.makespan == 0 {
            return 0.0;
        }
        self.busy_ticks as f64 / self.makespan as f64
    }
}

fn avg(iter: impl Iterator<Item = f64>) -> f64 {
    iter.collect::<Mean>().estimate()
}

/// Total ticks each process spent on the processor.
pub fn busy_time_by_process(timeline: &[Segment]) -> FxHashMap<ProcessId, Ticks> {
    let mut busy = FxHashMap::default();
    for segment in timeline {
        if let SegmentKind::Run(id) = segment.kind() {
            *busy.entry(id).or_insert(0) += segment.duration;
        }
    }
    busy
}

pub fn render_timeline(timeline: &[Segment]) -> String {
    let mut out = String::new();
    let mut at = 0;
    for segment in timeline {
        let _ = writeln!(
            out,
            "{:>5}..{:<5} {:<8} {}",
            at,
            at + segment.duration,
            segment.label,
            segment.duration
        );
        at += segment.duration;
    }
    out
}

pub fn render_stats(output: &SimOutput) -> String {
    let mut out = String::new();
    for stats in &output.stats {
        let _ = writeln!(
            out,
            "{}: arrived at {}ms, started at {}ms, and had a turnaround time of {}ms",
            stats.name, stats.arrival, stats.start_time, stats.turnaround_time
        );
    }
    out
}

pub fn render_summary(summary: &Summary) -> String {
    format!(
        "mean turnaround {:.2}, mean response {:.2}, makespan {}, \
         busy {} / idle {} / switch {} ticks ({} switches), utilisation {:.1}%",
        summary.mean_turnaround,
        summary.mean_response,
        summary.makespan,
        summary.busy_ticks,
        summary.idle_ticks,
        summary.switch_ticks,
        summary.switches,
        summary.utilisation() * 100.0
    )
}
