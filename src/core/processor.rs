use super::state::{ProcessId, ProcessTable, Ticks};

pub const IDLE_LABEL: &str = "idle";
pub const SWITCH_LABEL: &str = "CS";

/// How a context switch is charged.
///
/// `Fixed` always costs one tick no matter what `switch_overhead` says. That
/// is the long-standing observed behavior and stays the default. `Overhead`
/// charges the configured value instead and must be opted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwitchCost {
    #[default]
    Fixed,
    Overhead,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Run(ProcessId),
    Idle,
    Switch,
}

/// One contiguous span of processor activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub label: String,
    pub duration: Ticks,
    pub process: Option<ProcessId>,
}

impl Segment {
    fn idle(duration: Ticks) -> Self {
        Self {
            label: IDLE_LABEL.to_string(),
            duration,
            process: None,
        }
    }

    fn switch(duration: Ticks) -> Self {
        Self {
            label: SWITCH_LABEL.to_string(),
            duration,
            process: None,
        }
    }

    pub fn kind(&self) -> SegmentKind {
        match self.process {
            Some(id) => SegmentKind::Run(id),
            None if self.label == SWITCH_LABEL => SegmentKind::Switch,
            None => SegmentKind::Idle,
        }
    }
}

/// Result of handing one quantum to the processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    pub process: Option<ProcessId>,
    pub granted: Ticks,
    pub switched: bool,
    // granted plus any switch ticks; what the caller's clock must advance by
    pub elapsed: Ticks,
}

#[derive(Debug, Clone)]
pub struct Processor {
    quantum: Ticks,
    switch_overhead: Ticks,
    switch_cost: SwitchCost,
    loaded: Option<ProcessId>,
    timeline: Vec<Segment>,
}

impl Processor {
    pub fn new(quantum: Ticks, switch_overhead: Ticks) -> Self {
        Self::with_switch_cost(quantum, switch_overhead, SwitchCost::Fixed)
    }

    pub fn with_switch_cost(
        quantum: Ticks,
        switch_overhead: Ticks,
        switch_cost: SwitchCost,
    ) -> Self {
        assert!(quantum > 0, "Processor requires a positive quantum");
        Self {
            quantum,
            switch_overhead,
            switch_cost,
            loaded: None,
            timeline: Vec::new(),
        }
    }

    /// Ticks charged when the loaded process changes.
    pub fn switch_ticks(&self) -> Ticks {
        match self.switch_cost {
            SwitchCost::Fixed => 1,
            SwitchCost::Overhead => self.switch_overhead,
        }
    }

    /// Runs one quantum of `candidate`, or one idle tick when there is none.
    ///
    /// Idling is done a single tick at a time so a process arriving while the
    /// processor is idle is picked up at most one tick late. Idling also
    /// unloads the current process, so resuming it later costs a switch.
    pub fn dispatch(
        &mut self,
        table: &mut ProcessTable,
        candidate: Option<ProcessId>,
    ) -> Slice {
        let Some(id) = candidate else {
            self.timeline.push(Segment::idle(1));
            self.loaded = None;
            return Slice {
                process: None,
                granted: 0,
                switched: false,
                elapsed: 1,
            };
        };

        let mut switch_ticks = 0;
        if self.loaded != Some(id) {
            switch_ticks = self.switch_ticks();
            if switch_ticks > 0 {
                self.timeline.push(Segment::switch(switch_ticks));
            }
        }

        let process = table.process_mut(id);
        debug_assert!(
            !process.is_complete(),
            "Process {id} dispatched after completion"
        );
        let granted = process.remaining.min(self.quantum);
        process.remaining -= granted;

        self.timeline.push(Segment {
            label: process.name.clone(),
            duration: granted,
            process: Some(id),
        });
        self.loaded = Some(id);

        Slice {
            process: Some(id),
            granted,
            switched: switch_ticks > 0,
            elapsed: granted + switch_ticks,
        }
    }

    /// Merges adjacent segments that share a label.
    pub fn coalesce(&mut self) {
        let mut merged: Vec<Segment> = Vec::with_capacity(self.timeline.len());
        for segment in self.timeline.drain(..) {
            match merged.last_mut() {
                Some(last) if last.label == segment.label => last.duration += segment.duration,
                _ => merged.push(segment),
            }
        }
        self.timeline = merged;
    }

    pub fn quantum(&self) -> Ticks {
        self.quantum
    }

    pub fn switch_overhead(&self) -> Ticks {
        self.switch_overhead
    }

    pub fn switch_cost(&self) -> SwitchCost {
        self.switch_cost
    }

    pub fn loaded(&self) -> Option<ProcessId> {
        self.loaded
    }

    pub fn timeline(&self) -> &[Segment] {
        &self.timeline
    }

    pub fn into_timeline(self) -> Vec<Segment> {
        self.timeline
    }

    // Sum of all segment durations; equals the driver's clock at every step
    pub fn elapsed(&self) -> Ticks {
        self.timeline.iter().map(|s| s.duration).sum()
    }
}
