//! A later part reusing what an earlier part left in the shared data

use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};

#[derive(Debug, Default)]
struct Throws {
    targets: Vec<usize>,
    /// Throws received per monkey, filled by part 1
    tally: Option<Vec<u32>>,
}

impl Throws {
    fn tally(&self) -> Vec<u32> {
        let size = self.targets.iter().max().map_or(0, |&m| m + 1);
        let mut tally = vec![0; size];
        for &target in &self.targets {
            tally[target] += 1;
        }
        tally
    }
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct BusiestCatcher;

impl AocParser for BusiestCatcher {
    type SharedData<'a> = Throws;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let targets = input
            .split_whitespace()
            .map(|t| {
                t.parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("not a monkey: {t}")))
            })
            .collect::<Result<_, _>>()?;
        Ok(Throws {
            targets,
            tally: None,
        })
    }
}

impl PartSolver<1> for BusiestCatcher {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let tally = shared.tally();
        let busiest = tally
            .iter()
            .enumerate()
            .max_by_key(|&(monkey, &count)| (count, std::cmp::Reverse(monkey)))
            .map(|(monkey, _)| monkey)
            .ok_or_else(|| SolveError::failed("no throws"))?;
        shared.tally = Some(tally);
        Ok(busiest.to_string())
    }
}

impl PartSolver<2> for BusiestCatcher {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let tally = shared.tally.take().unwrap_or_else(|| shared.tally());
        Ok(tally.iter().filter(|&&count| count == 0).count().to_string())
    }
}

#[test]
fn test_part1_leaves_tally_behind() {
    let mut throws = BusiestCatcher::parse("2 0 2 3").unwrap();

    assert_eq!(BusiestCatcher::solve_part(&mut throws, 1).unwrap(), "2");
    assert_eq!(throws.tally, Some(vec![1, 0, 2, 1]));
}

#[test]
fn test_part2_uses_cached_tally() {
    let mut throws = BusiestCatcher::parse("2 0 2 3").unwrap();
    BusiestCatcher::solve_part(&mut throws, 1).unwrap();

    // Only the cached tally knows about the throws now
    throws.targets.clear();
    assert_eq!(BusiestCatcher::solve_part(&mut throws, 2).unwrap(), "1");
}

#[test]
fn test_part2_alone_computes_its_own_tally() {
    let mut throws = BusiestCatcher::parse("4 4 0").unwrap();
    assert_eq!(BusiestCatcher::solve_part(&mut throws, 2).unwrap(), "3");
}

#[test]
fn test_part_error_propagates() {
    let mut throws = Throws::default();
    assert!(matches!(
        BusiestCatcher::solve_part(&mut throws, 1),
        Err(SolveError::SolveFailed(_))
    ));
}
