use super::{result::RollResult, source::RandomSource};
use crate::common::*;
use crate::parse::ast::{DiceGroup, ParsedExpression};
use crate::RollError;
use rand::{rngs::StdRng, SeedableRng};

pub type DefaultSource = rand::prelude::ThreadRng;

/// Upper bound on the rolls buffer reserved before drawing; larger
/// expressions grow it as they go.
const MAX_RESERVED_ROLLS: usize = 4096;

/// Owns a random source and evaluates expressions against it.
pub struct RollContext<S = DefaultSource> {
    source: S,
    draws: usize,
}

impl<S: RandomSource> RollContext<S> {
    pub fn new(source: S) -> Self {
        Self { source, draws: 0 }
    }

    /// Number of samples drawn from the source so far.
    pub fn draws(&self) -> usize {
        self.draws
    }

    pub fn into_source(self) -> S {
        self.source
    }

    pub fn eval(&mut self, expr: &ParsedExpression) -> RollResult {
        let result = eval(&mut self.source, expr);
        self.draws += result.rolls().len();
        result
    }

    pub fn roll(&mut self, notation: &str) -> Result<RollResult, RollError> {
        let expr = crate::parse(notation)?;
        Ok(self.eval(&expr))
    }
}

impl RollContext<StdRng> {
    /// A context whose rolls are reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for RollContext {
    fn default() -> Self {
        Self::new(rand::thread_rng())
    }
}

/// Draws one sample per die, so time and memory grow with the total dice count.
pub(crate) fn eval<S: RandomSource + ?Sized>(source: &mut S, expr: &ParsedExpression) -> RollResult {
    let mut rolls = Vec::with_capacity(reserved_rolls(expr));
    for group in expr.groups.iter() {
        rolls.extend(roll_group(source, *group));
    }
    let result = RollResult::new(rolls, expr.modifier);
    tracing::debug!(%expr, total = result.total(), "evaluated dice expression");
    result
}

fn reserved_rolls(expr: &ParsedExpression) -> usize {
    expr.dice_count().min(MAX_RESERVED_ROLLS)
}

fn roll_group<S: RandomSource + ?Sized>(
    source: &mut S,
    group: DiceGroup,
) -> impl Iterator<Item = Int> + '_ {
    (0..group.count.get()).map(move |_| group.sign.apply(roll_face(source, group.sides)))
}

// Float rounding at very large side counts can push the product up to `sides`,
// hence the clamp.
fn roll_face<S: RandomSource + ?Sized>(source: &mut S, sides: NonZeroUInt) -> Int {
    let sides = Int::from(sides.get());
    let r = source.next_unit();
    let face = ((r * sides as f64).floor() as Int + 1).clamp(1, sides);
    tracing::trace!(r, sides, face, "rolled die");
    face
}
