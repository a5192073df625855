use crate::common::Int;
use std::fmt;

/// The outcome of one evaluation.
///
/// `rolls` holds one signed face per die, in the order the dice were written
/// and drawn. A die from a subtracted group is stored negated, so `total` is a
/// plain sum of `rolls` plus `modifier`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RollResult {
    rolls: Vec<Int>,
    modifier: Int,
    total: Int,
}

impl RollResult {
    pub(crate) fn new(rolls: Vec<Int>, modifier: Int) -> Self {
        let total = rolls.iter().sum::<Int>() + modifier;
        Self {
            rolls,
            modifier,
            total,
        }
    }

    pub fn rolls(&self) -> &[Int] {
        &self.rolls
    }

    pub fn modifier(&self) -> Int {
        self.modifier
    }

    pub fn total(&self) -> Int {
        self.total
    }

    pub fn into_rolls(self) -> Vec<Int> {
        self.rolls
    }
}

impl fmt::Display for RollResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.rolls)?;
        match self.modifier {
            0 => {}
            m if m < 0 => write!(f, " - {}", m.unsigned_abs())?,
            m => write!(f, " + {}", m)?,
        }
        write!(f, " = {}", self.total)
    }
}
