//! Scanner errors.
//!
//! Scanning stops at the first byte sequence no rule accepts, so a
//! [`LexError`] is always terminal: one kind, one span.

use fysh_diagnostic::{Diagnostic, ErrorCode};
use fysh_ir::Span;
use thiserror::Error;

/// A scanner error with the span of the offending glyphs.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

/// What the scanner could not make sense of.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    /// No token rule starts with this glyph.
    #[error("unrecognized glyph `{found}`")]
    InvalidGlyph { found: String },
    /// A fysh header with no name where one is required: `>>< >`, `>()`.
    #[error("expected a name after `{after}`")]
    ExpectedName { after: &'static str },
    /// `><#` without a closing `#>`.
    #[error("fysh bowl is never closed with `#>`")]
    UnterminatedBowl,
    /// Something other than scales, an eye or the tail inside a literal.
    #[error("malformed fysh literal: unexpected `{found}` among the scales")]
    MalformedLiteral { found: String },
    /// More than 64 significant binary digits.
    #[error("fysh literal does not fit in 64 bits")]
    LiteralOverflow,
    /// `></*>` without a closing `<*/><`.
    #[error("block comment is never closed with `<*/><`")]
    UnterminatedComment,
}

impl LexErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            LexErrorKind::InvalidGlyph { .. }
            | LexErrorKind::ExpectedName { .. }
            | LexErrorKind::UnterminatedBowl => ErrorCode::E0001,
            LexErrorKind::MalformedLiteral { .. } => ErrorCode::E0002,
            LexErrorKind::LiteralOverflow => ErrorCode::E0003,
            LexErrorKind::UnterminatedComment => ErrorCode::E0004,
        }
    }
}

impl LexError {
    #[cold]
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { kind, span }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Convert into a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_label(self.span, self.label());
        match &self.kind {
            LexErrorKind::MalformedLiteral { .. } => {
                diag.with_note("scales are `(` or `)` for 0 and `{` or `}` for 1")
            }
            LexErrorKind::LiteralOverflow => {
                diag.with_note("drop leading `{` scales or split the value")
            }
            LexErrorKind::InvalidGlyph { found } if found == ";" => {
                diag.with_note("statements end with `~`")
            }
            _ => diag,
        }
    }

    fn label(&self) -> &'static str {
        match self.kind {
            LexErrorKind::InvalidGlyph { .. } => "not a fysh glyph",
            LexErrorKind::ExpectedName { .. } => "name expected here",
            LexErrorKind::UnterminatedBowl => "bowl opened here",
            LexErrorKind::MalformedLiteral { .. } => "in this literal",
            LexErrorKind::LiteralOverflow => "literal too large",
            LexErrorKind::UnterminatedComment => "comment opened here",
        }
    }
}

#[cfg(test)]
mod tests;
