//! Command-line flags for the demo binary.
//!
//! Hand-rolled; the flag set is small and fixed.
//!
//! ```text
//! slice_sim [--policy fcfs|rr|srb|all] [--quantum N] [--switch-overhead N]
//!           [--switch-cost fixed|overhead] [--random SEED [--ticks N]] [--events]
//! ```

use std::{env, ffi::OsString, fmt};

use slice_sim::{SimConfig, SimError, SwitchCost};

#[derive(Debug)]
pub struct Cli {
    pub config: SimConfig,
    // `--policy all` runs every policy on the same workload
    pub compare: bool,
    pub random_seed: Option<u64>,
    pub ticks: u64,
    pub print_events: bool,
}

#[derive(Debug)]
pub enum CliError {
    Help,
    MissingValue(&'static str),
    BadNumber { flag: &'static str, value: String },
    UnknownFlag(String),
    Sim(SimError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Help => write!(f, "help requested"),
            Self::MissingValue(flag) => write!(f, "{flag} expects a value"),
            Self::BadNumber { flag, value } => write!(f, "{flag}: '{value}' is not a number"),
            Self::UnknownFlag(flag) => write!(f, "unknown flag '{flag}'"),
            Self::Sim(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<SimError> for CliError {
    fn from(err: SimError) -> Self {
        Self::Sim(err)
    }
}

pub fn parse_args() -> Result<Cli, CliError> {
    parse_from(env::args_os().skip(1))
}

pub fn parse_from(args: impl IntoIterator<Item = OsString>) -> Result<Cli, CliError> {
    let mut cli = Cli {
        config: SimConfig::default(),
        compare: false,
        random_seed: None,
        ticks: 100,
        print_events: false,
    };

    let mut args = args.into_iter().map(|a| a.to_string_lossy().into_owned());
    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--help" | "-h" => return Err(CliError::Help),
            "--policy" => {
                let value = args.next().ok_or(CliError::MissingValue("--policy"))?;
                if value.eq_ignore_ascii_case("all") {
                    cli.compare = true;
                } else {
                    cli.config.policy = value.parse()?;
                }
            }
            "--quantum" => cli.config.quantum = number(&mut args, "--quantum")?,
            "--switch-overhead" => {
                cli.config.switch_overhead = number(&mut args, "--switch-overhead")?
            }
            "--switch-cost" => {
                let value = args.next().ok_or(CliError::MissingValue("--switch-cost"))?;
                cli.config.switch_cost = match value.as_str() {
                    "fixed" => SwitchCost::Fixed,
                    "overhead" => SwitchCost::Overhead,
                    _ => return Err(CliError::UnknownFlag(format!("--switch-cost {value}"))),
                };
            }
            "--random" => cli.random_seed = Some(number(&mut args, "--random")?),
            "--ticks" => cli.ticks = number(&mut args, "--ticks")?,
            "--events" => cli.print_events = true,
            _ => return Err(CliError::UnknownFlag(flag)),
        }
    }

    cli.config.validate()?;
    Ok(cli)
}

fn number<T: std::str::FromStr>(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<T, CliError> {
    let value = args.next().ok_or(CliError::MissingValue(flag))?;
    value
        .parse()
        .map_err(|_| CliError::BadNumber { flag, value })
}

pub fn print_usage() {
    eprintln!("usage: slice_sim [OPTIONS]");
    eprintln!();
    eprintln!("  --policy <fcfs|rr|srb|all>      scheduling policy (default fcfs)");
    eprintln!("  --quantum <N>                   ticks per dispatch (default 6)");
    eprintln!("  --switch-overhead <N>           configured switch cost (default 1)");
    eprintln!("  --switch-cost <fixed|overhead>  charge 1 tick, or the configured overhead");
    eprintln!("  --random <SEED>                 random workload instead of the demo jobs");
    eprintln!("  --ticks <N>                     arrival window for --random (default 100)");
    eprintln!("  --events                        print every simulation event");
    eprintln!();
    eprintln!("Log level comes from RUST_LOG (default info).");
}

#[cfg(test)]
mod tests {
    use slice_sim::PolicyId;

    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, CliError> {
        parse_from(args.iter().map(OsString::from))
    }

    #[test]
    fn defaults_match_the_demo_processor() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.config, SimConfig::default());
        assert!(!cli.compare);
        assert_eq!(cli.random_seed, None);
    }

    #[test]
    fn reads_every_flag() {
        let cli = parse(&[
            "--policy", "rr", "--quantum", "2", "--switch-overhead", "3", "--switch-cost",
            "overhead", "--random", "9", "--ticks", "40", "--events",
        ])
        .unwrap();
        assert_eq!(cli.config.policy, PolicyId::RoundRobin);
        assert_eq!(cli.config.quantum, 2);
        assert_eq!(cli.config.switch_overhead, 3);
        assert_eq!(cli.config.switch_cost, SwitchCost::Overhead);
        assert_eq!(cli.random_seed, Some(9));
        assert_eq!(cli.ticks, 40);
        assert!(cli.print_events);
    }

    #[test]
    fn surfaces_validation_errors() {
        assert!(matches!(
            parse(&["--policy", "lottery"]),
            Err(CliError::Sim(SimError::UnknownPolicy(_)))
        ));
        assert!(matches!(
            parse(&["--quantum", "0"]),
            Err(CliError::Sim(SimError::InvalidQuantum(0)))
        ));
        assert!(matches!(parse(&["--quantum"]), Err(CliError::MissingValue(_))));
        assert!(matches!(parse(&["--bogus"]), Err(CliError::UnknownFlag(_))));
    }
}
