use super::ast::Dice;
use crate::common::*;
use logos::{Lexer as LogosLexer, Logos};
use logos_iter::{LogosIter, PeekableLexer};
use std::fmt;

pub type Lexer<'a> = PeekableLexer<'a, LogosLexer<'a, TokenKind>, TokenKind>;

/// Lexes `s` as-is. Whitespace is not a token, so callers strip it first.
pub fn lexer(s: &str) -> Lexer {
    TokenKind::lexer(s).peekable_lexer()
}

#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
pub enum TokenKind {
    #[regex(r"[0-9]+", |lex| lex.slice().parse())]
    Integer(Int),

    #[regex(r"[0-9]*d[0-9]+", |lex| parse_dice(lex.slice()))]
    Dice(Dice),

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,

    #[error]
    Error,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer(_) => "<integer>",
            Self::Dice(_) => "<dice>",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Error => "<error>",
        }
    }

    pub fn as_sign(&self) -> Option<Sign> {
        Some(match self {
            Self::Plus => Sign::Pos,
            Self::Minus => Sign::Neg,
            _ => return None,
        })
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// `None` turns the token into `TokenKind::Error`: the literal overflowed or is zero
fn parse_dice(s: &str) -> Option<Dice> {
    let (count, sides) = s.split_once('d')?;
    let count = if count.is_empty() {
        NonZeroUInt::new(1)?
    } else {
        count.parse().ok()?
    };
    let sides = sides.parse().ok()?;
    Some(Dice::new(count, sides))
}
