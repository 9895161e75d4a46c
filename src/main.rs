mod cli;

use std::process::ExitCode;

use slice_sim::{
    PolicyId, ProcessSpec, Sim, SimConfig, SimError,
    report::{Summary, render_stats, render_summary, render_timeline},
    sim::{bernoulli_workload, demo_workload},
};
use tracing_subscriber::EnvFilter;

use cli::{Cli, CliError};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match cli::parse_args() {
        Ok(cli) => cli,
        Err(CliError::Help) => {
            cli::print_usage();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            cli::print_usage();
            return ExitCode::from(2);
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), SimError> {
    let specs = match cli.random_seed {
        Some(seed) => bernoulli_workload(cli.ticks, 0.3, 0.3, 2, 6, seed),
        None => demo_workload(),
    };

    if cli.compare {
        for policy in PolicyId::ALL {
            let config = SimConfig {
                policy,
                ..cli.config
            };
            run_one(&specs, &config, cli.print_events)?;
        }
        return Ok(());
    }

    run_one(&specs, &cli.config, cli.print_events)
}

fn run_one(specs: &[ProcessSpec], config: &SimConfig, print_events: bool) -> Result<(), SimError> {
    let mut sim = Sim::from_config(specs, config)?;

    while !sim.is_done() {
        let now = sim.now();
        let events = sim.step();
        if print_events {
            for event in events {
                println!("t={now} {event:?}");
            }
        }
    }

    let output = sim.finish();
    println!(
        "== {} (quantum {}, switch overhead {})",
        config.policy, config.quantum, config.switch_overhead
    );
    print!("{}", render_timeline(&output.timeline));
    print!("{}", render_stats(&output));
    println!("{}", render_summary(&Summary::from_output(&output)));
    println!();
    Ok(())
}
