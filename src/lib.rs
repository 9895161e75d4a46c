pub mod config;
pub mod core;
pub mod error;
pub mod report;
pub mod scheduler;
pub mod sim;

pub use config::SimConfig;
pub use crate::core::{Segment, SimEvent, SwitchCost};
pub use error::SimError;
pub use scheduler::{Policy, PolicyId};
pub use sim::{ProcessSpec, ProcessStats, Sim, SimOutput, simulate, simulate_with};
