//! Puzzle traits

use crate::error::{ParseError, SolveError};

/// Turns raw puzzle input into the data every part works on.
///
/// `SharedData` is generic over the input lifetime so a solver may keep
/// slices of the input instead of copying it.
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Words;
///
/// impl AocParser for Words {
///     type SharedData<'a> = Vec<&'a str>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.split_whitespace().collect())
///     }
/// }
///
/// assert_eq!(Words::parse("jungle  banana").unwrap(), ["jungle", "banana"]);
/// ```
pub trait AocParser {
    type SharedData<'a>: 'a;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Answers part `N` from the parsed data.
///
/// The data is borrowed mutably, so a part may leave results behind for a
/// later part to reuse.
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A puzzle with `PARTS` parts, selected by number at runtime.
///
/// `#[derive(AocSolver)]` writes this impl from the [`PartSolver`] impls.
pub trait Solver: AocParser {
    const PARTS: u8;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;

    /// Like [`Solver::solve_part`], but a part outside `1..=PARTS` is
    /// refused with [`SolveError::PartOutOfRange`] without dispatching.
    fn solve_checked(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        if part == 0 || part > Self::PARTS {
            return Err(SolveError::PartOutOfRange(part));
        }
        Self::solve_part(shared, part)
    }
}
