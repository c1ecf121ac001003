//! Scanner for Fysh.
//!
//! Turns glyph text into a [`TokenList`] terminated by `Eof`. Whitespace and
//! comments (`><//>` to end of line, `></*> … <*/><`) never reach the parser.
//!
//! [`Lexer`] is the lazy form: an iterator that yields one token at a time,
//! ends after `Eof` or the first error, and can be cloned to replay from the
//! current position.

mod cursor;
mod lex_error;
mod scanner;

use fysh_ir::{Token, TokenKind, TokenList};

pub use lex_error::{LexError, LexErrorKind};

/// Lazy token iterator over one source text.
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    scanner: scanner::Scanner<'a>,
    done: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            scanner: scanner::Scanner::new(source),
            done: false,
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let next = self.scanner.next_token();
        self.done = match &next {
            Ok(token) => token.kind == TokenKind::Eof,
            Err(_) => true,
        };
        Some(next)
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Scan a whole source text.
pub fn lex(source: &str) -> Result<TokenList, LexError> {
    match Lexer::new(source).collect::<Result<TokenList, _>>() {
        Ok(tokens) => {
            tracing::debug!(tokens = tokens.len(), bytes = source.len(), "lexed source");
            Ok(tokens)
        }
        Err(err) => {
            tracing::debug!(error = %err, span = %err.span, "lexing failed");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests;
