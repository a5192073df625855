/// The only error surfaced by [parse](crate::parse) and [evaluate](crate::evaluate).
///
/// Every grammar violation collapses into [RollError::InvalidNotation]; the
/// detailed cause is reported through `tracing` at the debug level.
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum RollError {
    #[error("invalid dice notation")]
    InvalidNotation,
}

impl From<crate::parse::ParseError> for RollError {
    fn from(err: crate::parse::ParseError) -> Self {
        tracing::debug!(error = %err, "rejected dice notation");
        Self::InvalidNotation
    }
}
