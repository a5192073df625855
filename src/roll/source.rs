/// A uniform sampler over `[0, 1)`.
///
/// Every [rand::Rng] is a source; plain closures can be adapted with [from_fn].
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: rand::Rng> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Adapts a closure returning values in `[0, 1)` into a [RandomSource].
///
/// ```
/// let mut source = dice_notation::from_fn(|| 0.5);
/// let result = dice_notation::evaluate("2d10", &mut source).unwrap();
/// assert_eq!(result.rolls(), &[6, 6]);
/// ```
pub fn from_fn<F: FnMut() -> f64>(f: F) -> FromFn<F> {
    FromFn(f)
}

#[derive(Debug, Copy, Clone)]
pub struct FromFn<F>(F);

impl<F: FnMut() -> f64> RandomSource for FromFn<F> {
    fn next_unit(&mut self) -> f64 {
        (self.0)()
    }
}

#[cfg(test)]
pub(crate) use mock::{FixedSource, SequenceSource};
