//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Unknown puzzle, or input the solver could not parse
    #[error("Solver error: {0}")]
    Solver(#[from] aoc_solver::SolverError),

    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Some parts produced an error instead of an answer
    #[error("{0} part(s) failed")]
    Failed(usize),
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
