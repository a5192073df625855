use crate::common::*;
use std::fmt;

/// A dice literal as written, e.g. `3d8` or `d20`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Dice {
    pub count: NonZeroUInt,
    pub sides: NonZeroUInt,
}

impl Dice {
    pub const fn new(count: NonZeroUInt, sides: NonZeroUInt) -> Self {
        Self { count, sides }
    }

    pub const fn with_sign(self, sign: Sign) -> DiceGroup {
        DiceGroup::new(self.count, self.sides, sign)
    }
}

/// `sign × count` dice with `sides` faces each.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct DiceGroup {
    pub count: NonZeroUInt,
    pub sides: NonZeroUInt,
    pub sign: Sign,
}

impl DiceGroup {
    pub const fn new(count: NonZeroUInt, sides: NonZeroUInt, sign: Sign) -> Self {
        Self { count, sides, sign }
    }

    /// Smallest signed sum this group can contribute.
    pub fn min(&self) -> Int {
        let count = Int::from(self.count.get());
        match self.sign {
            Sign::Pos => count,
            Sign::Neg => -count.saturating_mul(Int::from(self.sides.get())),
        }
    }

    /// Largest signed sum this group can contribute.
    pub fn max(&self) -> Int {
        let count = Int::from(self.count.get());
        match self.sign {
            Sign::Pos => count.saturating_mul(Int::from(self.sides.get())),
            Sign::Neg => -count,
        }
    }
}

impl fmt::Display for DiceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}d{}", self.sign, self.count, self.sides)
    }
}

/// The result of parsing a dice notation string.
///
/// Groups keep the order in which they were written; every flat term has been
/// folded into `modifier`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ParsedExpression {
    pub groups: NonEmpty<DiceGroup>,
    pub modifier: Int,
}

impl ParsedExpression {
    pub fn new(groups: NonEmpty<DiceGroup>, modifier: Int) -> Self {
        Self { groups, modifier }
    }

    /// Total number of dice rolled when this expression is evaluated.
    pub fn dice_count(&self) -> usize {
        self.groups.iter().map(|g| g.count.get() as usize).sum()
    }

    pub fn min(&self) -> Int {
        self.groups
            .iter()
            .fold(self.modifier, |acc, g| acc.saturating_add(g.min()))
    }

    pub fn max(&self) -> Int {
        self.groups
            .iter()
            .fold(self.modifier, |acc, g| acc.saturating_add(g.max()))
    }

    /// Rolls this expression against `source`.
    pub fn evaluate<S: crate::RandomSource + ?Sized>(&self, source: &mut S) -> crate::RollResult {
        crate::roll::eval(source, self)
    }
}

impl std::str::FromStr for ParsedExpression {
    type Err = crate::RollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}

impl fmt::Display for ParsedExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.groups.iter().enumerate() {
            if i == 0 && group.sign == Sign::Pos {
                write!(f, "{}d{}", group.count, group.sides)?;
            } else {
                write!(f, "{}", group)?;
            }
        }
        if self.modifier != 0 {
            write!(f, "{:+}", self.modifier)?;
        }
        Ok(())
    }
}
