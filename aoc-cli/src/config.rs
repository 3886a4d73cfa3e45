//! Configuration resolution from CLI args

use crate::cli::Args;
use aoc_solver::PuzzleId;
use std::path::{Path, PathBuf};

/// The puzzle this binary answers
pub const PUZZLE: PuzzleId = PuzzleId {
    year: 2022,
    day: 11,
};

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub puzzle: PuzzleId,
    pub input: PathBuf,
}

impl Config {
    pub fn from_args(args: Args) -> Self {
        Config {
            puzzle: PUZZLE,
            input: expand_tilde(&args.input),
        }
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}
