//! Parsed puzzles behind a type-erased interface

use chrono::{TimeDelta, Utc};

use crate::error::{ParseError, SolveError};
use crate::registry::PuzzleId;
use crate::solver::Solver;

/// One answered part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub part: u8,
    pub value: String,
    pub elapsed: TimeDelta,
}

/// A puzzle whose input has been parsed, ready to answer parts.
///
/// Parts share the parsed data in the order they are asked for.
pub trait DynSolver {
    fn id(&self) -> PuzzleId;

    fn parts(&self) -> u8;

    /// Time spent in `AocParser::parse`
    fn parse_time(&self) -> TimeDelta;

    fn solve(&mut self, part: u8) -> Result<Answer, SolveError>;
}

/// Runs `f` and measures it with the wall clock.
fn timed<T>(f: impl FnOnce() -> T) -> (T, TimeDelta) {
    let start = Utc::now();
    let value = f();
    (value, Utc::now() - start)
}

/// The parsed data of solver `S` for one puzzle
pub struct ParsedPuzzle<'a, S: Solver> {
    id: PuzzleId,
    shared: S::SharedData<'a>,
    parse_time: TimeDelta,
}

impl<'a, S: Solver> ParsedPuzzle<'a, S> {
    pub fn parse(id: PuzzleId, input: &'a str) -> Result<Self, ParseError> {
        let (shared, parse_time) = timed(|| S::parse(input));
        Ok(Self {
            id,
            shared: shared?,
            parse_time,
        })
    }
}

impl<S: Solver> DynSolver for ParsedPuzzle<'_, S> {
    fn id(&self) -> PuzzleId {
        self.id
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }

    fn parse_time(&self) -> TimeDelta {
        self.parse_time
    }

    fn solve(&mut self, part: u8) -> Result<Answer, SolveError> {
        let (value, elapsed) = timed(|| S::solve_checked(&mut self.shared, part));
        Ok(Answer {
            part,
            value: value?,
            elapsed,
        })
    }
}
