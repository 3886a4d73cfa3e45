//! Error types for the solver library

use thiserror::Error;

use crate::registry::PuzzleId;

/// Input that a solver could not make sense of
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Failure to answer one part
#[derive(Debug, Error)]
pub enum SolveError {
    /// No `PartSolver` impl answers this part
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// Part 0, or a part above `Solver::PARTS`
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Wraps an error raised while solving a part.
    pub fn failed<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        SolveError::SolveFailed(error.into())
    }
}

/// Failure to look up a puzzle or parse its input
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("No Advent of Code puzzle for year {year} day {day}")]
    InvalidPuzzle { year: u16, day: u8 },
    #[error("No solver registered for {0}")]
    NotFound(PuzzleId),
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("Cannot register year {year} day {day}: no such puzzle")]
    InvalidPuzzle { year: u16, day: u8 },
    #[error("A solver for {0} is already registered")]
    Duplicate(PuzzleId),
}
