//! Parser for Fysh.
//!
//! Recursive descent for statements, one routine per binding tier for
//! expressions. Juxtaposition (`A B` meaning `A + B`) is the loosest tier and
//! groups to the right; every other binary tier groups to the left.
//!
//! ```text
//! sum         := bit_or ((bubble | <juxtaposition>) sum)?
//! bit_or      := bit_xor ('|' bit_xor)*
//! bit_xor     := bit_and ('^' bit_and)*
//! bit_and     := product ('&' product)*
//! product     := comparison (('<3' | '</3') comparison)*
//! comparison  := unary (cmp unary)*
//! unary       := ('!!' | '!' | bubble) unary | primary
//! ```

mod cursor;
mod error;
mod grammar;
mod stack;

use fysh_ir::{Program, TokenList};
use fysh_lexer::LexError;
use thiserror::Error;

use cursor::Cursor;

pub use error::{ParseError, ParseErrorKind};

/// Error from scanning or parsing a source text.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum FrontEndError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl FrontEndError {
    pub fn span(&self) -> fysh_ir::Span {
        match self {
            FrontEndError::Lex(err) => err.span,
            FrontEndError::Parse(err) => err.span,
        }
    }

    pub fn to_diagnostic(&self) -> fysh_diagnostic::Diagnostic {
        match self {
            FrontEndError::Lex(err) => err.to_diagnostic(),
            FrontEndError::Parse(err) => err.to_diagnostic(),
        }
    }
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }
}

/// Parse a token list into a program.
pub fn parse(tokens: &TokenList) -> Result<Program, ParseError> {
    Parser::new(tokens).parse_program()
}

/// Scan and parse a source text.
pub fn parse_source(source: &str) -> Result<Program, FrontEndError> {
    let tokens = fysh_lexer::lex(source)?;
    Ok(parse(&tokens)?)
}

#[cfg(test)]
mod tests;
