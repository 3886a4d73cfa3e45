use std::num::NonZeroU64;

use thiserror::Error;
use tracing::debug;

use super::monkey::{Monkey, Operation, Toss};

/// Rounds played when worry decays after every inspection
pub const DECAY_ROUNDS: usize = 20;
/// Rounds played when worry is kept bounded by the common modulus
pub const MODULAR_ROUNDS: usize = 10_000;
/// Relief divisor applied after each inspection in decay mode
pub const DECAY_DIVISOR: NonZeroU64 = match NonZeroU64::new(3) {
    Some(divisor) => divisor,
    None => panic!("decay divisor must be non-zero"),
};

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("monkey {monkey} was asked to inspect its items twice in round {round}")]
    AlreadyInspected { monkey: usize, round: usize },
    #[error("monkey {monkey}: worry level overflowed applying `{operation}` to {worry}")]
    Overflow {
        monkey: usize,
        worry: u64,
        operation: Operation,
    },
    #[error("the common multiple of all divisors does not fit in 64 bits")]
    ModulusOverflow,
}

/// Reasons a list of monkeys cannot form a troop
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TroopError {
    #[error("at least two monkeys are needed, found {0}")]
    TooFewMonkeys(usize),
    #[error("monkey at position {position} is numbered {id}")]
    Misnumbered { position: usize, id: usize },
    #[error("monkey {monkey} throws to itself")]
    SelfTarget { monkey: usize },
    #[error("monkey {monkey} throws to monkey {target}, which does not exist")]
    UnknownTarget { monkey: usize, target: usize },
}

/// How worry levels are kept in check after every inspection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorryPolicy {
    /// Floor-divide by `divisor`
    Decay { divisor: NonZeroU64 },
    /// Reduce modulo `modulus`, a common multiple of every monkey's divisor
    Modular { modulus: NonZeroU64 },
}

impl WorryPolicy {
    pub fn relieve(self, worry: u64) -> u64 {
        match self {
            WorryPolicy::Decay { divisor } => worry / divisor,
            WorryPolicy::Modular { modulus } => worry % modulus,
        }
    }
}

/// Parameters of a single simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    pub rounds: usize,
    pub policy: WorryPolicy,
}

impl SimulationConfig {
    /// 20 rounds, dividing worry by 3 after every inspection.
    pub fn bounded_decay() -> Self {
        Self {
            rounds: DECAY_ROUNDS,
            policy: WorryPolicy::Decay {
                divisor: DECAY_DIVISOR,
            },
        }
    }

    /// 10 000 rounds, reducing worry modulo the troop's common modulus.
    pub fn modular(troop: &Troop) -> Result<Self, SimulationError> {
        Ok(Self {
            rounds: MODULAR_ROUNDS,
            policy: WorryPolicy::Modular {
                modulus: troop.common_modulus()?,
            },
        })
    }
}

/// The monkeys of one simulation run, in id order
///
/// Every monkey's id equals its position and both of its targets name
/// another monkey of the troop; [`Troop::new`] refuses anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Troop {
    monkeys: Vec<Monkey>,
    rounds_played: usize,
}

impl Troop {
    pub fn new(monkeys: Vec<Monkey>) -> Result<Self, TroopError> {
        if monkeys.len() < 2 {
            return Err(TroopError::TooFewMonkeys(monkeys.len()));
        }
        for (position, monkey) in monkeys.iter().enumerate() {
            if monkey.id() != position {
                return Err(TroopError::Misnumbered {
                    position,
                    id: monkey.id(),
                });
            }
            let (if_true, if_false) = monkey.targets();
            for target in [if_true, if_false] {
                if target == position {
                    return Err(TroopError::SelfTarget { monkey: position });
                }
                if target >= monkeys.len() {
                    return Err(TroopError::UnknownTarget {
                        monkey: position,
                        target,
                    });
                }
            }
        }
        Ok(Self {
            monkeys,
            rounds_played: 0,
        })
    }

    pub fn monkeys(&self) -> &[Monkey] {
        &self.monkeys
    }

    /// Rounds completed so far, across every call to [`Troop::run`]
    pub fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// Number of items held across all monkeys
    pub fn item_count(&self) -> usize {
        self.monkeys.iter().map(|m| m.items().len()).sum()
    }

    pub fn inspection_counts(&self) -> Vec<u64> {
        self.monkeys.iter().map(Monkey::inspections).collect()
    }

    /// Least common multiple of every monkey's divisor.
    ///
    /// Reducing a worry value modulo this number keeps its remainder for
    /// every divisor, so routing decisions are unchanged.
    pub fn common_modulus(&self) -> Result<NonZeroU64, SimulationError> {
        self.monkeys
            .iter()
            .map(Monkey::divisor)
            .try_fold(NonZeroU64::MIN, |acc, divisor| {
                lcm(acc, divisor).ok_or(SimulationError::ModulusOverflow)
            })
    }

    /// Plays the next round: every monkey in id order inspects what it holds
    /// and its tosses land on their targets before the next monkey starts.
    pub fn play_round(&mut self, policy: WorryPolicy) -> Result<(), SimulationError> {
        let round = self.rounds_played + 1;
        for index in 0..self.monkeys.len() {
            let tosses = self.monkeys[index].inspect_all(round, policy)?;
            for Toss { worry, target } in tosses {
                self.monkeys[target].catch(worry);
            }
        }
        self.rounds_played = round;
        Ok(())
    }

    /// Plays `config.rounds` more rounds and returns the monkey business.
    pub fn run(&mut self, config: &SimulationConfig) -> Result<u128, SimulationError> {
        for _ in 0..config.rounds {
            self.play_round(config.policy)?;
        }
        debug!(
            rounds = config.rounds,
            total_rounds = self.rounds_played,
            policy = ?config.policy,
            inspections = ?self.inspection_counts(),
            "simulation finished"
        );
        Ok(self.monkey_business())
    }

    /// Product of the two highest inspection counts.
    pub fn monkey_business(&self) -> u128 {
        let (first, second) = self
            .monkeys
            .iter()
            .map(Monkey::inspections)
            .fold((0, 0), |(first, second), count| {
                if count > first {
                    (count, first)
                } else if count > second {
                    (first, count)
                } else {
                    (first, second)
                }
            });
        u128::from(first) * u128::from(second)
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn lcm(a: NonZeroU64, b: NonZeroU64) -> Option<NonZeroU64> {
    let (a, b) = (a.get(), b.get());
    let product = (a / gcd(a, b)).checked_mul(b)?;
    NonZeroU64::new(product)
}
