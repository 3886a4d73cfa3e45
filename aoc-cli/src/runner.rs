//! Runs every part of the configured puzzle, one after another

use crate::config::Config;
use crate::error::CliError;
use crate::input::read_input;
use aoc_solver::SolverRegistry;
use chrono::TimeDelta;
use std::io::Write;
use tracing::info;

/// How many parts answered and how many failed
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub answered: usize,
    pub failed: usize,
}

pub struct Runner {
    registry: SolverRegistry,
    config: Config,
}

impl Runner {
    pub fn new(registry: SolverRegistry, config: Config) -> Self {
        Self { registry, config }
    }

    /// Writes `Part <n>: <answer>` to `out` for each part in order.
    ///
    /// A part that fails gets a `Part <n>: Error - <reason>` line on `err` and
    /// the remaining parts still run. A missing input or one that does not
    /// parse stops the run before any part is attempted.
    pub fn run(&self, out: &mut impl Write, err: &mut impl Write) -> Result<Report, CliError> {
        let input = read_input(&self.config.input)?;
        let puzzle = self.config.puzzle;
        let mut solver = self.registry.create(puzzle.year, puzzle.day, &input)?;
        info!(
            %puzzle,
            path = %self.config.input.display(),
            parse = %format_duration(solver.parse_time()),
            "input parsed"
        );

        let mut report = Report::default();
        for part in 1..=solver.parts() {
            match solver.solve(part) {
                Ok(answer) => {
                    info!(part, solve = %format_duration(answer.elapsed), "part solved");
                    writeln!(out, "Part {}: {}", answer.part, answer.value)?;
                    report.answered += 1;
                }
                Err(e) => {
                    writeln!(err, "Part {part}: Error - {e}")?;
                    report.failed += 1;
                }
            }
        }
        out.flush()?;
        Ok(report)
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}
