use fysh_ir::{Facing, Span, TokenKind};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    match lex(source) {
        Ok(tokens) => tokens.kinds(),
        Err(err) => panic!("lex failed on {source:?}: {err}"),
    }
}

/// Right-facing canonical spelling of `value`.
fn right_glyphs(value: u64) -> String {
    let scales: String = format!("{value:b}")
        .chars()
        .map(|c| if c == '1' { '{' } else { '(' })
        .collect();
    format!("><{scales}>")
}

#[test]
fn lex_ends_with_single_eof() {
    let tokens = kinds("><a> ~");
    assert_eq!(tokens.last(), Some(&TokenKind::Eof));
    assert_eq!(
        tokens.iter().filter(|k| **k == TokenKind::Eof).count(),
        1
    );
}

#[test]
fn empty_and_comment_only_sources_are_just_eof() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
    assert_eq!(kinds("  \n\t\r\n"), vec![TokenKind::Eof]);
    assert_eq!(kinds("><//> only a note"), vec![TokenKind::Eof]);
    assert_eq!(kinds("></*> a\nlonger\nnote <*/><"), vec![TokenKind::Eof]);
}

#[test]
fn lexer_stops_after_eof() {
    let mut lexer = Lexer::new("~");
    assert!(matches!(lexer.next(), Some(Ok(t)) if t.kind == TokenKind::Tilde));
    assert!(matches!(lexer.next(), Some(Ok(t)) if t.kind == TokenKind::Eof));
    assert!(lexer.next().is_none());
    assert!(lexer.next().is_none());
}

#[test]
fn lexer_stops_after_error() {
    let mut lexer = Lexer::new("?? ~");
    assert!(matches!(lexer.next(), Some(Err(_))));
    assert!(lexer.next().is_none());
}

#[test]
fn lexer_is_restartable_from_a_clone() {
    let mut lexer = Lexer::new("><a> <3 ><b> ~");
    lexer.next();
    let replay = lexer.clone();
    let rest: Vec<_> = lexer.map(|t| t.map(|t| t.kind)).collect();
    let again: Vec<_> = replay.map(|t| t.map(|t| t.kind)).collect();
    assert_eq!(rest, again);
    assert_eq!(rest.len(), 4);
}

#[test]
fn lexing_twice_gives_the_same_tokens() {
    let source = "><fysh> = [>(sub) <{{{><] ~";
    let first: Vec<_> = Lexer::new(source).collect();
    let second: Vec<_> = Lexer::new(source).collect();
    assert_eq!(first, second);
}

#[test]
fn spans_cover_glyphs() {
    let tokens = match lex("><a>  <3") {
        Ok(tokens) => tokens,
        Err(err) => panic!("{err}"),
    };
    assert_eq!(tokens[0].span, Span::new(0, 4));
    assert_eq!(tokens[1].span, Span::new(6, 8));
    assert_eq!(tokens[2].span, Span::point(8));
}

#[test]
fn lex_reports_first_error() {
    let err = match lex("><a> ~ ; ><b> ~") {
        Ok(tokens) => panic!("expected error, got {tokens:?}"),
        Err(err) => err,
    };
    assert_eq!(
        err.kind,
        LexErrorKind::InvalidGlyph {
            found: ";".to_string()
        }
    );
    assert_eq!(err.span, Span::new(7, 8));
}

proptest! {
    #[test]
    fn right_facing_literals_decode_to_their_magnitude(value in any::<u64>()) {
        let kinds = kinds(&right_glyphs(value));
        prop_assert_eq!(
            &kinds[0],
            &TokenKind::Int { value, facing: Facing::Right }
        );
    }

    #[test]
    fn left_facing_literals_keep_magnitude_and_face_left(value in any::<u64>()) {
        let scales: String = format!("{value:b}")
            .chars()
            .map(|c| if c == '1' { '}' } else { ')' })
            .collect();
        let kinds = kinds(&format!("<{scales}><"));
        prop_assert_eq!(
            &kinds[0],
            &TokenKind::Int { value, facing: Facing::Left }
        );
    }

    #[test]
    fn bang_runs_pair_up(count in 1usize..40) {
        let source = format!("{}><a>", "!".repeat(count));
        let kinds = kinds(&source);
        let pairs = kinds.iter().filter(|k| **k == TokenKind::LogicalNot).count();
        let singles = kinds.iter().filter(|k| **k == TokenKind::BitNot).count();
        prop_assert_eq!(pairs, count / 2);
        prop_assert_eq!(singles, count % 2);
        if count % 2 == 1 {
            prop_assert_eq!(&kinds[count / 2], &TokenKind::BitNot);
        }
    }
}
