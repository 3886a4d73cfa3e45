//! Prints both Monkey in the Middle answers for one input file

mod cli;
mod config;
mod error;
mod input;
mod runner;

// Linking aoc-solutions submits its solver plugins
use aoc_solutions as _;

use aoc_solver::SolverRegistry;
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use runner::Runner;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so stdout carries answers only
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args);
    let registry = SolverRegistry::with_plugins()?;

    let report = Runner::new(registry, config)
        .run(&mut std::io::stdout().lock(), &mut std::io::stderr())?;
    if report.failed > 0 {
        return Err(CliError::Failed(report.failed));
    }
    Ok(())
}
