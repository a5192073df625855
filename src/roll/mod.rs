mod ctx;
mod result;
mod source;

pub(crate) use ctx::eval;
pub use ctx::{DefaultSource, RollContext};
pub use result::RollResult;
pub use source::{from_fn, FromFn, RandomSource};

#[cfg(test)]
pub(crate) use source::FixedSource;
