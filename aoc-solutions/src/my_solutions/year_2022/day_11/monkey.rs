use std::collections::VecDeque;
use std::fmt;
use std::num::NonZeroU64;

use super::simulation::{SimulationError, WorryPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Multiply,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// The item's own current worry value
    Old,
    Literal(u64),
}

/// The `new = old <op> <operand>` rule a monkey applies on inspection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub operator: Operator,
    pub operand: Operand,
}

impl Operation {
    /// Returns `None` when the result does not fit in a `u64`.
    pub fn apply(self, old: u64) -> Option<u64> {
        let rhs = match self.operand {
            Operand::Old => old,
            Operand::Literal(n) => n,
        };
        match self.operator {
            Operator::Add => old.checked_add(rhs),
            Operator::Multiply => old.checked_mul(rhs),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self.operator {
            Operator::Add => '+',
            Operator::Multiply => '*',
        };
        match self.operand {
            Operand::Old => write!(f, "new = old {op} old"),
            Operand::Literal(n) => write!(f, "new = old {op} {n}"),
        }
    }
}

/// An item leaving a monkey: its new worry value and who catches it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toss {
    pub worry: u64,
    pub target: usize,
}

/// One monkey of the troop
///
/// Target ids are only checked when the monkey joins a
/// [`Troop`](super::simulation::Troop).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monkey {
    id: usize,
    items: VecDeque<u64>,
    operation: Operation,
    divisor: NonZeroU64,
    if_true: usize,
    if_false: usize,
    inspections: u64,
    last_round: Option<usize>,
}

impl Monkey {
    pub fn new(
        id: usize,
        items: impl IntoIterator<Item = u64>,
        operation: Operation,
        divisor: NonZeroU64,
        if_true: usize,
        if_false: usize,
    ) -> Self {
        Self {
            id,
            items: items.into_iter().collect(),
            operation,
            divisor,
            if_true,
            if_false,
            inspections: 0,
            last_round: None,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Worry values currently held, front of the queue first
    pub fn items(&self) -> impl ExactSizeIterator<Item = u64> + '_ {
        self.items.iter().copied()
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn divisor(&self) -> NonZeroU64 {
        self.divisor
    }

    /// `(if_true, if_false)` target ids
    pub fn targets(&self) -> (usize, usize) {
        (self.if_true, self.if_false)
    }

    /// Total number of items this monkey has inspected so far
    pub fn inspections(&self) -> u64 {
        self.inspections
    }

    /// Appends an item thrown by another monkey to the back of the queue.
    pub fn catch(&mut self, worry: u64) {
        self.items.push_back(worry);
    }

    /// Inspects every item held at the start of the call, in queue order.
    ///
    /// The queue is taken as a whole before any item is processed, so the
    /// returned tosses cover exactly the items present on entry and the
    /// queue is empty afterwards. Calling this twice for the same `round`
    /// fails with [`SimulationError::AlreadyInspected`].
    pub fn inspect_all(
        &mut self,
        round: usize,
        policy: WorryPolicy,
    ) -> Result<Vec<Toss>, SimulationError> {
        if self.last_round == Some(round) {
            return Err(SimulationError::AlreadyInspected {
                monkey: self.id,
                round,
            });
        }
        self.last_round = Some(round);

        let held = std::mem::take(&mut self.items);
        let tosses = held
            .into_iter()
            .map(|worry| self.inspect(worry, policy))
            .collect::<Result<Vec<_>, _>>()?;

        self.inspections += tosses.len() as u64;
        Ok(tosses)
    }

    fn inspect(&self, worry: u64, policy: WorryPolicy) -> Result<Toss, SimulationError> {
        let worry = self
            .operation
            .apply(worry)
            .ok_or(SimulationError::Overflow {
                monkey: self.id,
                worry,
                operation: self.operation,
            })?;
        let worry = policy.relieve(worry);

        let target = if worry % self.divisor == 0 {
            self.if_true
        } else {
            self.if_false
        };
        Ok(Toss { worry, target })
    }
}
