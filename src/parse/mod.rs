pub mod ast;
mod lexer;
mod parser;

pub(crate) use parser::ParseError;

/// Strips every whitespace character, then parses what is left.
pub(crate) fn parse(s: &str) -> Result<ast::ParsedExpression, ParseError> {
    let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    parser::Parser::new(&cleaned).parse()
}
