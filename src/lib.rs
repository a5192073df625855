//! Parsing and rolling of tabletop dice notation such as `2d6+3-1d4-1`.
//!
//! ```
//! use dice_notation::{evaluate, from_fn, parse};
//!
//! let expr = parse("2d6 + 1d8 - d4").unwrap();
//! assert_eq!(expr.groups.len(), 3);
//!
//! let result = evaluate("-d4+2", &mut from_fn(|| 0.99)).unwrap();
//! assert_eq!(result.rolls(), &[-4]);
//! assert_eq!(result.total(), -2);
//! ```

mod common;
mod error;
mod parse;
mod roll;

#[cfg(test)]
mod notation_test_strategies;

pub use common::{Int, NonZeroUInt, Sign, UInt};
pub use error::RollError;
pub use parse::ast::{DiceGroup, ParsedExpression};
pub use roll::{from_fn, DefaultSource, FromFn, RandomSource, RollContext, RollResult};

/// Parses `notation` into its dice groups and flat modifier.
///
/// Whitespace is ignored everywhere. At least one dice term is required.
///
/// # Errors
/// Returns [RollError::InvalidNotation] for any malformed input.
pub fn parse(notation: &str) -> Result<ParsedExpression, RollError> {
    Ok(parse::parse(notation)?)
}

/// Parses `notation` and rolls it, drawing one sample from `source` per die.
///
/// Time and memory grow with the total dice count: `4294967295d6` is valid
/// notation and keeps one `i64` per die.
///
/// # Errors
/// Returns [RollError::InvalidNotation] for any malformed input, before any
/// sample is drawn.
pub fn evaluate<S: RandomSource + ?Sized>(
    notation: &str,
    source: &mut S,
) -> Result<RollResult, RollError> {
    let expr = parse(notation)?;
    Ok(roll::eval(source, &expr))
}

/// Parses and rolls `notation` with the thread-local generator.
///
/// Costs the same as [evaluate]: one draw and one stored roll per die.
///
/// # Errors
/// Returns [RollError::InvalidNotation] for any malformed input.
pub fn roll(notation: &str) -> Result<RollResult, RollError> {
    RollContext::default().roll(notation)
}
