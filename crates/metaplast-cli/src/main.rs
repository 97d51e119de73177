//! Metaplast CLI - Command-line interface for metaplasticity simulations.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use metaplast::prelude::{Side, TrialPattern};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "metaplast")]
#[command(
    author,
    version,
    about = "Metaplast - Competing metaplastic synapse populations",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Overrides for values otherwise read from metaplast.toml.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct RunOverrides {
    /// Number of trials
    #[arg(short = 'n', long)]
    pub trials: Option<usize>,

    /// Trial pattern: uniform, blocked, left or right
    #[arg(short, long)]
    pub pattern: Option<TrialPattern>,

    /// Block length for the blocked pattern
    #[arg(long)]
    pub block_length: Option<usize>,

    /// Decision temperature
    #[arg(short, long)]
    pub sigma: Option<f64>,

    /// Model seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Trial generation seed
    #[arg(long)]
    pub trial_seed: Option<u64>,

    /// Starting units per state
    #[arg(long)]
    pub population: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default metaplast.toml
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Run a trial sequence and report accuracy
    Run {
        #[command(flatten)]
        overrides: RunOverrides,

        /// Write a JSON run report to this path
        #[arg(long)]
        json: Option<String>,

        /// Include per-trial strong fractions in the JSON report
        #[arg(long)]
        trace: bool,
    },

    /// Show a lattice's state counts and transition weights
    Lattice {
        #[command(flatten)]
        overrides: RunOverrides,

        /// Which side's lattice to show after training
        #[arg(long, default_value = "left", value_parser = parse_side)]
        side: Side,

        /// Show the fresh lattice without running any trials
        #[arg(long)]
        fresh: bool,
    },

    /// Compare accuracy across decision temperatures
    Sweep {
        /// Comma-separated sigma values
        #[arg(long, value_delimiter = ',', default_value = "0.01,0.05,0.1,0.5,1.0")]
        sigmas: Vec<f64>,

        /// Independent runs per sigma
        #[arg(short, long, default_value = "5")]
        repeats: u64,

        #[command(flatten)]
        overrides: RunOverrides,
    },
}

fn parse_side(s: &str) -> std::result::Result<Side, String> {
    match s.to_ascii_lowercase().as_str() {
        "left" | "0" => Ok(Side::Left),
        "right" | "1" => Ok(Side::Right),
        other => Err(format!("unknown side '{}' (expected left or right)", other)),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Run { overrides, json, trace } => {
            commands::run::run(&overrides, json.as_deref(), trace, cli.verbose)
        }
        Commands::Lattice { overrides, side, fresh } => {
            commands::lattice::run(&overrides, side, fresh)
        }
        Commands::Sweep { sigmas, repeats, overrides } => {
            commands::sweep::run(&sigmas, repeats, &overrides)
        }
    }
}
