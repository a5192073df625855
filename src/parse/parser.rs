use super::{ast::*, lexer::*};
use crate::common::*;
use logos_iter::LogosIter;
use std::fmt;
use std::ops::Range;

type PResult<T> = Result<T, ParseError>;

/// Why a notation string was rejected. `span` indexes the whitespace-free input.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("error at position {} ({slice:?}): {kind}", .span.start)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Range<usize>,
    pub slice: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    UnexpectedToken { found: TokenKind },
    UnexpectedEnd,
    NoDice,
    ModifierOverflow,
    TotalOutOfRange,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken { found: TokenKind::Error } => {
                f.write_str("not a dice term, integer or sign")
            }
            Self::UnexpectedToken { found } => {
                write!(f, "unexpected token: found {}, expected <dice> or <integer>", found)
            }
            Self::UnexpectedEnd => f.write_str("expected <dice> or <integer> after sign"),
            Self::NoDice => f.write_str("at least one dice term is required"),
            Self::ModifierOverflow => f.write_str("modifier out of range"),
            Self::TotalOutOfRange => f.write_str("possible totals do not fit in a 64-bit integer"),
        }
    }
}

/// Parses a sequence of optionally signed terms.
///
/// The lexer covers the input contiguously: anything it cannot match becomes
/// [TokenKind::Error], so no stray character can sit between two terms.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    len: usize,
}

impl<'a> Parser<'a> {
    pub fn new(s: &'a str) -> Self {
        Self {
            lexer: lexer(s),
            len: s.len(),
        }
    }

    pub fn parse(mut self) -> PResult<ParsedExpression> {
        let mut groups = Vec::new();
        let mut modifier: Int = 0;

        while self.lexer.peek().is_some() {
            let sign = self.parse_sign();
            match self.advance() {
                Some(TokenKind::Dice(dice)) => groups.push(dice.with_sign(sign)),
                Some(TokenKind::Integer(x)) => {
                    modifier = match modifier.checked_add(sign.apply(x)) {
                        Some(m) => m,
                        None => return self.error(ParseErrorKind::ModifierOverflow),
                    };
                }
                Some(found) => return self.error(ParseErrorKind::UnexpectedToken { found }),
                None => return self.error_at_end(ParseErrorKind::UnexpectedEnd),
            }
        }

        let groups = match NonEmpty::try_from_vec(groups) {
            Ok(groups) => groups,
            Err(_) => return self.error_at_end(ParseErrorKind::NoDice),
        };
        if total_bounds(&groups, modifier).is_none() {
            return self.error_at_end(ParseErrorKind::TotalOutOfRange);
        }
        Ok(ParsedExpression::new(groups, modifier))
    }

    fn advance(&mut self) -> Option<TokenKind> {
        self.lexer.next()
    }

    fn parse_sign(&mut self) -> Sign {
        let sign = self.lexer.peek().and_then(TokenKind::as_sign);
        match sign {
            Some(sign) => {
                self.advance();
                sign
            }
            None => Sign::Pos,
        }
    }

    fn error<T>(&mut self, kind: ParseErrorKind) -> PResult<T> {
        Err(ParseError {
            kind,
            span: self.lexer.span(),
            slice: self.lexer.slice().to_string(),
        })
    }

    fn error_at_end<T>(&mut self, kind: ParseErrorKind) -> PResult<T> {
        Err(ParseError {
            kind,
            span: self.len..self.len,
            slice: String::new(),
        })
    }
}

/// Lowest and highest reachable total, or `None` if any running sum of the
/// rolls, or the final total, could leave the `Int` range.
fn total_bounds(groups: &[DiceGroup], modifier: Int) -> Option<(Int, Int)> {
    let (lo, hi) = groups.iter().try_fold((0 as Int, 0 as Int), |(lo, hi), g| {
        let count = Int::from(g.count.get());
        let span = count.checked_mul(Int::from(g.sides.get()))?;
        match g.sign {
            Sign::Pos => Some((lo.checked_add(count)?, hi.checked_add(span)?)),
            Sign::Neg => Some((lo.checked_sub(span)?, hi.checked_sub(count)?)),
        }
    })?;
    Some((lo.checked_add(modifier)?, hi.checked_add(modifier)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> PResult<ParsedExpression> {
        Parser::new(s).parse()
    }

    fn group(count: UInt, sides: UInt, sign: Sign) -> DiceGroup {
        DiceGroup::new(
            NonZeroUInt::new(count).unwrap(),
            NonZeroUInt::new(sides).unwrap(),
            sign,
        )
    }

    fn check(s: &str, groups: &[DiceGroup], modifier: Int) {
        let parsed = parse(s).unwrap();
        assert_eq!(parsed.groups.as_slice(), groups);
        assert_eq!(parsed.modifier, modifier);
    }

    fn check_err(s: &str, kind: ParseErrorKind) {
        assert_eq!(parse(s).unwrap_err().kind, kind);
    }

    #[test]
    fn test_parse_dice() {
        check("d6", &[group(1, 6, Sign::Pos)], 0);
        check("1d20", &[group(1, 20, Sign::Pos)], 0);
        check("6d12", &[group(6, 12, Sign::Pos)], 0);
        check("+d8", &[group(1, 8, Sign::Pos)], 0);
    }

    #[test]
    fn test_parse_modifiers() {
        check("d6+1", &[group(1, 6, Sign::Pos)], 1);
        check("d6-1", &[group(1, 6, Sign::Pos)], -1);
        check("2d6+3-10+1d4", &[group(2, 6, Sign::Pos), group(1, 4, Sign::Pos)], -7);
        check("7+d6", &[group(1, 6, Sign::Pos)], 7);
    }

    #[test]
    fn test_parse_signed_groups() {
        check(
            "2d6+1d8-d4",
            &[
                group(2, 6, Sign::Pos),
                group(1, 8, Sign::Pos),
                group(1, 4, Sign::Neg),
            ],
            0,
        );
        check("-d6+2", &[group(1, 6, Sign::Neg)], 2);
    }

    #[test]
    fn test_adjacent_dice_terms() {
        check("d6d8", &[group(1, 6, Sign::Pos), group(1, 8, Sign::Pos)], 0);
    }

    #[test]
    fn test_parse_errors() {
        use ParseErrorKind::*;

        check_err("", NoDice);
        check_err("+2", NoDice);
        check_err("3-4", NoDice);
        check_err("d6+", UnexpectedEnd);
        check_err("-", UnexpectedEnd);
        check_err("d6--1", UnexpectedToken { found: TokenKind::Minus });
        check_err("d6+-1", UnexpectedToken { found: TokenKind::Minus });
        check_err("6d", UnexpectedToken { found: TokenKind::Error });
        check_err("d6*6", UnexpectedToken { found: TokenKind::Error });
        check_err("ad6", UnexpectedToken { found: TokenKind::Error });
        check_err("d6+abc", UnexpectedToken { found: TokenKind::Error });
        check_err("0d6", UnexpectedToken { found: TokenKind::Error });
        check_err("d0", UnexpectedToken { found: TokenKind::Error });
    }

    #[test]
    fn test_parse_large_modifiers() {
        check("d6+5000000000", &[group(1, 6, Sign::Pos)], 5_000_000_000);
        check("d6-5000000000", &[group(1, 6, Sign::Pos)], -5_000_000_000);
        check("d6+9223372036854775801", &[group(1, 6, Sign::Pos)], Int::MAX - 6);
    }

    #[test]
    fn test_parse_out_of_range() {
        use ParseErrorKind::*;

        check_err(
            "d6+9223372036854775807+9223372036854775807",
            ModifierOverflow,
        );
        check_err("d6+9223372036854775802", TotalOutOfRange);
        check_err("d6-9223372036854775807-9223372036854775807", ModifierOverflow);
        check_err("9223372036854775808+d6", UnexpectedToken { found: TokenKind::Error });
    }

    #[test]
    fn test_total_bounds() {
        let groups = [group(2, 6, Sign::Pos), group(1, 4, Sign::Neg)];
        assert_eq!(total_bounds(&groups, 3), Some((2 - 4 + 3, 12 - 1 + 3)));

        let many = [group(UInt::MAX, 6, Sign::Pos)];
        let count = Int::from(UInt::MAX);
        assert_eq!(total_bounds(&many, 0), Some((count, count * 6)));
        assert_eq!(total_bounds(&many, Int::MAX), None);

        let huge = [group(UInt::MAX, UInt::MAX, Sign::Pos)];
        assert_eq!(total_bounds(&huge, 0), None);
        check_err("4294967295d4294967295", ParseErrorKind::TotalOutOfRange);
    }

    #[test]
    fn test_error_span() {
        let err = parse("d6*6").unwrap_err();
        assert_eq!(err.span, 2..3);
        assert_eq!(err.slice, "*");

        let err = parse("d6+").unwrap_err();
        assert_eq!(err.span, 3..3);
    }
}
