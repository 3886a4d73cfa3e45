//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Where the puzzle input is read from when no path is given
pub const DEFAULT_INPUT: &str = "inputs/2022_day11.txt";

/// Monkey in the Middle: prints both answers for one input file
#[derive(Parser, Debug)]
#[command(name = "aoc", version)]
pub struct Args {
    /// Puzzle input file
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,
}
