//! Advent of Code Solver Library
//!
//! A puzzle is a type that parses its input once and then answers its parts
//! against the parsed data:
//!
//! - [`AocParser`] turns raw input into `SharedData`
//! - [`PartSolver<N>`] answers part `N`
//! - [`Solver`] picks a part by number, usually through `#[derive(AocSolver)]`
//! - [`DynSolver`] hides the concrete type and times parsing and solving
//! - [`SolverRegistry`] finds the solver for a [`PuzzleId`]
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistry};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! pub struct Depths;
//!
//! impl AocParser for Depths {
//!     type SharedData<'a> = Vec<u32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|line| line.parse().map_err(|_|
//!                 ParseError::InvalidFormat(format!("expected integer, got {line:?}"))))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Depths {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.windows(2).filter(|w| w[1] > w[0]).count().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Depths {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<u32>().to_string())
//!     }
//! }
//!
//! let mut registry = SolverRegistry::new();
//! registry.register::<Depths>(2021, 1).unwrap();
//!
//! let mut solver = registry.create(2021, 1, "1\n3\n2\n4").unwrap();
//! assert_eq!(solver.solve(1).unwrap().value, "2");
//! assert_eq!(solver.solve(2).unwrap().value, "10");
//! ```
//!
//! Adding `#[derive(AutoRegisterSolver)]` with `#[aoc(year = .., day = ..)]`
//! submits a [`SolverPlugin`], and [`SolverRegistry::with_plugins`] picks up
//! every plugin linked into the binary.

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{Answer, DynSolver, ParsedPuzzle};
pub use registry::{PuzzleId, SolverPlugin, SolverRegistry};
pub use solver::{AocParser, PartSolver, Solver};

// The derive macros submit plugins through this path
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
