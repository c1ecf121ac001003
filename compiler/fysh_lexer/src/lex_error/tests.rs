use pretty_assertions::assert_eq;

use super::*;

#[test]
fn codes_follow_error_kind() {
    let glyph = LexErrorKind::InvalidGlyph {
        found: "?".to_string(),
    };
    assert_eq!(glyph.code(), ErrorCode::E0001);
    assert_eq!(LexErrorKind::UnterminatedBowl.code(), ErrorCode::E0001);
    assert_eq!(
        LexErrorKind::MalformedLiteral {
            found: "x".to_string()
        }
        .code(),
        ErrorCode::E0002
    );
    assert_eq!(LexErrorKind::LiteralOverflow.code(), ErrorCode::E0003);
    assert_eq!(LexErrorKind::UnterminatedComment.code(), ErrorCode::E0004);
}

#[test]
fn display_uses_kind_message() {
    let err = LexError::new(
        LexErrorKind::InvalidGlyph {
            found: "?".to_string(),
        },
        Span::new(3, 4),
    );
    assert_eq!(err.to_string(), "unrecognized glyph `?`");
}

#[test]
fn diagnostic_carries_code_span_and_note() {
    let err = LexError::new(LexErrorKind::LiteralOverflow, Span::new(0, 70));
    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E0003);
    assert_eq!(diag.message, "fysh literal does not fit in 64 bits");
    assert_eq!(diag.primary_span(), Some(Span::new(0, 70)));
    assert_eq!(diag.notes.len(), 1);
}

#[test]
fn semicolon_gets_terminator_hint() {
    let err = LexError::new(
        LexErrorKind::InvalidGlyph {
            found: ";".to_string(),
        },
        Span::new(5, 6),
    );
    assert_eq!(err.to_diagnostic().notes, vec!["statements end with `~`"]);
}
