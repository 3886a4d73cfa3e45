//! Lookup from puzzle to solver

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, ParsedPuzzle};
use crate::solver::Solver;

/// A puzzle date: Advent of Code started in 2015 and runs days 1 to 25.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PuzzleId {
    pub year: u16,
    pub day: u8,
}

impl PuzzleId {
    pub const FIRST_YEAR: u16 = 2015;
    pub const LAST_DAY: u8 = 25;

    pub fn new(year: u16, day: u8) -> Option<Self> {
        (year >= Self::FIRST_YEAR && (1..=Self::LAST_DAY).contains(&day))
            .then_some(Self { year, day })
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:02}", self.year, self.day)
    }
}

type Factory = for<'a> fn(PuzzleId, &'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>;

fn open<S: Solver + 'static>(
    id: PuzzleId,
    input: &str,
) -> Result<Box<dyn DynSolver + '_>, ParseError> {
    Ok(Box::new(ParsedPuzzle::<S>::parse(id, input)?))
}

/// Solver factories by puzzle
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverRegistry};
///
/// struct Shout;
///
/// impl AocParser for Shout {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.trim())
///     }
/// }
///
/// impl Solver for Shout {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.to_uppercase()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut registry = SolverRegistry::new();
/// registry.register::<Shout>(2022, 1).unwrap();
///
/// let mut solver = registry.create(2022, 1, " monkey ").unwrap();
/// assert_eq!(solver.solve(1).unwrap().value, "MONKEY");
/// ```
#[derive(Default)]
pub struct SolverRegistry {
    factories: BTreeMap<PuzzleId, Factory>,
}

impl SolverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every solver that submitted a [`SolverPlugin`].
    pub fn with_plugins() -> Result<Self, RegistrationError> {
        let mut registry = Self::new();
        for plugin in inventory::iter::<SolverPlugin> {
            (plugin.register)(&mut registry, plugin.year, plugin.day)?;
        }
        Ok(registry)
    }

    pub fn register<S: Solver + 'static>(
        &mut self,
        year: u16,
        day: u8,
    ) -> Result<(), RegistrationError> {
        let id = PuzzleId::new(year, day).ok_or(RegistrationError::InvalidPuzzle { year, day })?;
        match self.factories.entry(id) {
            Entry::Occupied(_) => Err(RegistrationError::Duplicate(id)),
            Entry::Vacant(slot) => {
                slot.insert(open::<S>);
                Ok(())
            }
        }
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        PuzzleId::new(year, day).is_some_and(|id| self.factories.contains_key(&id))
    }

    /// Registered puzzles in date order
    pub fn puzzles(&self) -> impl Iterator<Item = PuzzleId> + '_ {
        self.factories.keys().copied()
    }

    /// Parses `input` with the solver registered for the puzzle.
    pub fn create<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let id = PuzzleId::new(year, day).ok_or(SolverError::InvalidPuzzle { year, day })?;
        let factory = self.factories.get(&id).ok_or(SolverError::NotFound(id))?;
        Ok(factory(id, input)?)
    }
}

/// A solver announcing itself through `inventory`.
///
/// `#[derive(AutoRegisterSolver)]` submits one of these; `register` is
/// `SolverRegistry::register` for the deriving type.
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    pub register: fn(&mut SolverRegistry, u16, u8) -> Result<(), RegistrationError>,
}

inventory::collect!(SolverPlugin);
