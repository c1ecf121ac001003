//! Parse error types.
//!
//! Parsing stops at the first violation. A [`ParseError`] records what kind
//! of rule was broken, where, what the parser wanted and what it saw.

use fysh_diagnostic::{Diagnostic, ErrorCode};
use fysh_ir::{Span, TokenKind};
use thiserror::Error;

/// A syntax error.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind}: expected {expected}, found {found}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    /// What would have been accepted here, e.g. "`~`".
    pub expected: String,
    /// Description of the token actually found.
    pub found: String,
}

/// Which grammar rule was broken.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum ParseErrorKind {
    #[error("unexpected token")]
    UnexpectedToken,
    #[error("expected expression")]
    ExpectedExpression,
    #[error("missing statement terminator")]
    MissingTerminator,
    /// `[`, `(` or `><>` left open; `open` is where it started.
    #[error("unclosed delimiter")]
    UnclosedDelimiter { open: Span },
    #[error("subroutine declared inside a block")]
    MisplacedSubroutine,
    /// `first` is where the parameter was listed before.
    #[error("duplicate parameter")]
    DuplicateParameter { first: Span },
}

impl ParseErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseErrorKind::UnexpectedToken => ErrorCode::E1001,
            ParseErrorKind::ExpectedExpression => ErrorCode::E1002,
            ParseErrorKind::MissingTerminator => ErrorCode::E1003,
            ParseErrorKind::UnclosedDelimiter { .. } => ErrorCode::E1004,
            ParseErrorKind::MisplacedSubroutine => ErrorCode::E1005,
            ParseErrorKind::DuplicateParameter { .. } => ErrorCode::E1006,
        }
    }
}

/// How a token is named in error messages.
pub(crate) fn describe(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Ident { name, .. } => format!("identifier `{name}`"),
        TokenKind::Sub { name, .. } => format!("subroutine `{name}`"),
        other => other.display_name().to_string(),
    }
}

impl ParseError {
    #[cold]
    pub fn new(
        kind: ParseErrorKind,
        span: Span,
        expected: impl Into<String>,
        found: &TokenKind,
    ) -> Self {
        ParseError {
            kind,
            span,
            expected: expected.into(),
            found: describe(found),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Convert to a full Diagnostic for rich error reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = format!("expected {} here", self.expected);
        let diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_label(self.span, label);
        match &self.kind {
            ParseErrorKind::UnclosedDelimiter { open } => {
                diag.with_secondary_label(*open, "opened here")
            }
            ParseErrorKind::DuplicateParameter { first } => {
                diag.with_secondary_label(*first, "first listed here")
            }
            ParseErrorKind::MissingTerminator => {
                diag.with_note("expression, assignment, return and break statements end with `~`")
            }
            ParseErrorKind::MisplacedSubroutine => {
                diag.with_note("declare subroutines at the top level of the program")
            }
            ParseErrorKind::UnexpectedToken | ParseErrorKind::ExpectedExpression => diag,
        }
    }
}
