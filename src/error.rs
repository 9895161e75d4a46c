//! Errors surfaced before a simulation starts.
//!
//! Every variant is produced by input validation. Once a workload and config
//! validate, a run always completes, so there is no mid-run error type.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SimError {
    /// No processes supplied.
    EmptyWorkload,
    /// A process asked for a burst of zero or less.
    InvalidBurst { name: String, burst: i64 },
    /// A process arrives before time zero.
    InvalidArrival { name: String, arrival: i64 },
    /// Quantum must be positive.
    InvalidQuantum(i64),
    /// Policy name is not one of the supported policies.
    UnknownPolicy(String),
    /// Negative switch overhead while the processor charges it.
    InvalidSwitchOverhead(i64),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWorkload => write!(f, "workload is empty"),
            Self::InvalidBurst { name, burst } => {
                write!(f, "process {name}: burst must be positive, got {burst}")
            }
            Self::InvalidArrival { name, arrival } => {
                write!(f, "process {name}: arrival must be non-negative, got {arrival}")
            }
            Self::InvalidQuantum(quantum) => {
                write!(f, "quantum must be positive, got {quantum}")
            }
            Self::UnknownPolicy(name) => {
                write!(
                    f,
                    "unknown policy '{name}' (expected fcfs, rr or srb)"
                )
            }
            Self::InvalidSwitchOverhead(overhead) => {
                write!(f, "switch overhead must be non-negative, got {overhead}")
            }
        }
    }
}

impl std::error::Error for SimError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = SimError::InvalidBurst {
            name: "J1".into(),
            burst: 0,
        };
        assert_eq!(err.to_string(), "process J1: burst must be positive, got 0");
        assert!(SimError::UnknownPolicy("lottery".into())
            .to_string()
            .contains("lottery"));
    }
}
