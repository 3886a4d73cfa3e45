//! Monkey in the Middle
//!
//! Monkeys pass items around, each applying its own worry operation and
//! divisibility test. Part 1 plays 20 rounds with worry divided by 3 after
//! every inspection; part 2 plays 10 000 rounds with worry kept bounded by
//! the least common multiple of all divisors. Both answer the product of
//! the two highest inspection counts.

mod monkey;
mod parse;
mod simulation;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::info;

pub use monkey::{Monkey, Operand, Operation, Operator, Toss};
pub use parse::parse_troop;
pub use simulation::{
    DECAY_DIVISOR, DECAY_ROUNDS, MODULAR_ROUNDS, SimulationConfig, SimulationError, Troop,
    TroopError, WorryPolicy,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 11)]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Troop;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let troop = parse_troop(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;
        info!(
            monkeys = troop.monkeys().len(),
            items = troop.item_count(),
            "parsed troop"
        );
        Ok(troop)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        simulate(shared, SimulationConfig::bounded_decay())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let config = SimulationConfig::modular(shared).map_err(SolveError::failed)?;
        simulate(shared, config)
    }
}

/// Runs a fresh copy of the parsed troop so parts never see each other's state.
fn simulate(parsed: &Troop, config: SimulationConfig) -> Result<String, SolveError> {
    let mut troop = parsed.clone();
    troop
        .run(&config)
        .map(|business| business.to_string())
        .map_err(SolveError::failed)
}

#[cfg(test)]
const SAMPLE: &str = "\
Monkey 0:
  Starting items: 79, 98
  Operation: new = old * 19
  Test: divisible by 23
    If true: throw to monkey 2
    If false: throw to monkey 3

Monkey 1:
  Starting items: 54, 65, 75, 74
  Operation: new = old + 6
  Test: divisible by 19
    If true: throw to monkey 2
    If false: throw to monkey 0

Monkey 2:
  Starting items: 79, 60, 97
  Operation: new = old * old
  Test: divisible by 13
    If true: throw to monkey 1
    If false: throw to monkey 3

Monkey 3:
  Starting items: 74
  Operation: new = old + 3
  Test: divisible by 17
    If true: throw to monkey 0
    If false: throw to monkey 1
";
