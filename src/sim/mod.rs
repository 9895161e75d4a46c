pub mod driver;
pub mod workload;

pub use driver::{ProcessStats, Sim, SimOutput, simulate, simulate_with};
pub use workload::{ProcessSpec, bernoulli_workload, demo_workload, ingest};
