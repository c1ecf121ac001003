//! Error codes for front-end diagnostics.
//!
//! The first digit names the phase:
//! - E0xxx: scanner errors
//! - E1xxx: parser errors

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Scanner Errors (E0xxx)
    /// Glyph sequence matching no token rule
    E0001,
    /// Malformed digit run inside a fysh literal
    E0002,
    /// Fysh literal too large for 64 bits
    E0003,
    /// Block comment without `<*/><`
    E0004,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Missing statement terminator `~`
    E1003,
    /// Unclosed delimiter
    E1004,
    /// Subroutine declared outside the top level
    E1005,
    /// Duplicate subroutine parameter
    E1006,
}

impl ErrorCode {
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
        }
    }

    /// Check if this is a scanner error (E0xxx).
    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    /// Check if this is a parser error (E1xxx).
    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// One-line explanation, shown by `fysh explain`.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "no token rule matches this glyph sequence",
            ErrorCode::E0002 => "a fysh literal's scales must be `(`/`)` for 0 and `{`/`}` for 1",
            ErrorCode::E0003 => "a fysh literal holds at most 64 binary digits",
            ErrorCode::E0004 => "a `></*>` comment must be closed with `<*/><`",
            ErrorCode::E1001 => "the parser found a token it did not expect here",
            ErrorCode::E1002 => "an expression was expected",
            ErrorCode::E1003 => "simple statements end with `~`",
            ErrorCode::E1004 => "an opened `[`, `(` or `><>` was never closed",
            ErrorCode::E1005 => "subroutines can only be declared at the top level",
            ErrorCode::E1006 => "a subroutine lists the same parameter twice",
        }
    }

    /// Look up a code from its textual form (`"E1003"`).
    pub fn from_code_str(code: &str) -> Option<ErrorCode> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
