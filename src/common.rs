use std::fmt::{self, Write};
use std::num::NonZeroU32;

pub type Int = i64;
pub type UInt = u32;
pub type NonZeroUInt = NonZeroU32;

pub type NonEmpty<T> = vec1::Vec1<T>;

/// The sign prefixed to a term. Terms without an explicit sign are positive.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Sign {
    #[default]
    Pos,
    Neg,
}

impl Sign {
    pub const fn as_int(self) -> Int {
        match self {
            Self::Pos => 1,
            Self::Neg => -1,
        }
    }

    pub const fn apply(self, x: Int) -> Int {
        x * self.as_int()
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::Pos => '+',
            Self::Neg => '-',
        };
        f.write_char(c)
    }
}
