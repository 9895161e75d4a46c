use rand::prelude::*;

use crate::{core::ProcessTable, error::SimError};

/// Caller-side description of one process, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSpec {
    pub name: String,
    pub burst: i64,
    pub arrival: i64,
}

impl ProcessSpec {
    pub fn new(name: impl Into<String>, burst: i64, arrival: i64) -> Self {
        Self {
            name: name.into(),
            burst,
            arrival,
        }
    }
}

/// Validates `specs` and builds the process arena, in input order.
///
/// Ids are handed out by the table's own counter, so every call starts a
/// fresh id space.
pub fn ingest(specs: &[ProcessSpec]) -> Result<ProcessTable, SimError> {
    if specs.is_empty() {
        return Err(SimError::EmptyWorkload);
    }

    let mut table = ProcessTable::new();
    for spec in specs {
        if spec.burst <= 0 {
            return Err(SimError::InvalidBurst {
                name: spec.name.clone(),
                burst: spec.burst,
            });
        }
        if spec.arrival < 0 {
            return Err(SimError::InvalidArrival {
                name: spec.name.clone(),
                arrival: spec.arrival,
            });
        }
        table.create_process(spec.name.clone(), spec.burst as u64, spec.arrival as u64);
    }

    Ok(table)
}

/// The five-job workload the simulator has always shipped as its demo.
pub fn demo_workload() -> Vec<ProcessSpec> {
    vec![
        ProcessSpec::new("J0", 11, 0),
        ProcessSpec::new("J1", 7, 3),
        ProcessSpec::new("J2", 21, 14),
        ProcessSpec::new("J3", 5, 19),
        ProcessSpec::new("J4", 11, 23),
    ]
}

/// Seeded random workload: at each tick a job arrives with probability
/// `p_arrival`, and is short with probability `p_short`.
pub fn bernoulli_workload(
    ticks: u64,
    p_arrival: f64,
    p_short: f64,
    short_burst: i64,
    long_burst: i64,
    seed: u64,
) -> Vec<ProcessSpec> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut specs = Vec::new();

    for t in 0..ticks {
        if rng.random::<f64>() < p_arrival {
            let burst = if rng.random::<f64>() < p_short {
                short_burst
            } else {
                long_burst
            };

            specs.push(ProcessSpec::new(format!("P{}", specs.len()), burst, t as i64));
        }
    }

    specs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ingest_keeps_input_order() {
        let table = ingest(&demo_workload()).unwrap();
        assert_eq!(table.len(), 5);
        let names: Vec<_> = table.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["J0", "J1", "J2", "J3", "J4"]);
        assert_eq!(table.process(2).remaining, 21);
        assert_eq!(table.process(2).arrival, 14);
    }

    #[test]
    fn ingest_rejects_bad_input() {
        assert_eq!(ingest(&[]).unwrap_err(), SimError::EmptyWorkload);
        assert_eq!(
            ingest(&[ProcessSpec::new("A", 0, 0)]).unwrap_err(),
            SimError::InvalidBurst {
                name: "A".into(),
                burst: 0
            }
        );
        assert_eq!(
            ingest(&[ProcessSpec::new("A", 1, 0), ProcessSpec::new("B", 2, -1)]).unwrap_err(),
            SimError::InvalidArrival {
                name: "B".into(),
                arrival: -1
            }
        );
    }

    #[test]
    fn bernoulli_is_seeded() {
        let a = bernoulli_workload(200, 0.3, 0.3, 2, 6, 7);
        let b = bernoulli_workload(200, 0.3, 0.3, 2, 6, 7);
        assert_eq!(a, b);
        assert!(!a.is_empty());
        assert!(a.iter().all(|p| p.burst == 2 || p.burst == 6));
        assert!(a.windows(2).all(|w| w[0].arrival < w[1].arrival));
    }
}
