use fysh_diagnostic::ErrorCode;
use fysh_ir::{ExprKind, Span, Spanned, StmtKind, TokenKind, TokenList, TopLevel};
use pretty_assertions::assert_eq;

use super::*;

fn parse_ok(source: &str) -> Program {
    match parse_source(source) {
        Ok(program) => program,
        Err(err) => panic!("parse failed on {source:?}: {err}"),
    }
}

fn parse_err(source: &str) -> ParseError {
    match parse_source(source) {
        Ok(program) => panic!("expected a parse error on {source:?}, got {program:?}"),
        Err(FrontEndError::Lex(err)) => panic!("expected a parse error, got lex error {err}"),
        Err(FrontEndError::Parse(err)) => err,
    }
}

fn first_stmt(program: &Program) -> &StmtKind {
    match program.items.first() {
        Some(TopLevel::Stmt(stmt)) => &stmt.kind,
        other => panic!("expected statement, got {other:?}"),
    }
}

#[test]
fn empty_program() {
    assert!(parse_ok("").is_empty());
    assert!(parse_ok("><//> nothing here\n").is_empty());
    assert!(parse(&TokenList::new()).map(|p| p.is_empty()).unwrap_or(false));
}

#[test]
fn assignment_negates_left_facing_target() {
    let program = parse_ok("<t>< = ><{> ~");
    match first_stmt(&program) {
        StmtKind::Assign {
            target,
            negate,
            value,
        } => {
            assert_eq!(target, "t");
            assert!(*negate);
            assert!(matches!(value.kind, ExprKind::Int { value: 1, negative: false }));
        }
        other => panic!("expected assignment, got {other:?}"),
    }
}

#[test]
fn return_with_and_without_value() {
    assert!(matches!(first_stmt(&parse_ok("<~ ~")), StmtKind::Return(None)));
    assert!(matches!(
        first_stmt(&parse_ok("<~ ><a> ~")),
        StmtKind::Return(Some(_))
    ));
}

#[test]
fn break_in_both_facings() {
    let program = parse_ok("><\\/> ~ <\\/>< ~");
    assert_eq!(program.len(), 2);
    assert!(program
        .items
        .iter()
        .all(|item| matches!(item, TopLevel::Stmt(s) if s.kind == StmtKind::Break)));
}

#[test]
fn if_else_attaches_else_block() {
    let program = parse_ok("><(((^> [><a>] ><> <>< ><(((*> ><> <~ ~ <><");
    match first_stmt(&program) {
        StmtKind::If {
            cond, else_block, ..
        } => {
            assert_eq!(cond.kind, ExprKind::Ident("a".to_string()));
            assert_eq!(else_block.as_ref().map(|b| b.stmts.len()), Some(1));
        }
        other => panic!("expected if, got {other:?}"),
    }
}

#[test]
fn tank_condition_with_call_stays_a_call() {
    let program = parse_ok("><(((@> [>(ready)] ><> <><");
    match first_stmt(&program) {
        StmtKind::While { cond, .. } => {
            assert!(matches!(&cond.kind, ExprKind::Call { callee, .. } if callee == "ready"));
        }
        other => panic!("expected while, got {other:?}"),
    }
}

#[test]
fn bare_block_is_a_statement() {
    let program = parse_ok("><> ><a> ~ <><");
    assert!(matches!(first_stmt(&program), StmtKind::Block(b) if b.stmts.len() == 1));
}

#[test]
fn subroutine_declaration() {
    let program = parse_ok(">(add) ><a> ><b> ><> <~ ><a> ><b> ~ <><");
    let subs: Vec<_> = program.subs().collect();
    assert_eq!(subs.len(), 1);
    assert_eq!(subs[0].name, "add");
    assert_eq!(subs[0].params, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(subs[0].body.stmts.len(), 1);
}

#[test]
fn statement_spans_include_terminator() {
    let program = parse_ok("><a> ~");
    assert_eq!(program.items[0].span(), Span::new(0, 6));
}

// === Errors ===

#[test]
fn missing_terminator_before_end_of_input() {
    let err = parse_err("><fysh> = ><(({o>");
    assert_eq!(err.kind, ParseErrorKind::MissingTerminator);
    assert_eq!(err.code(), ErrorCode::E1003);
    assert_eq!(err.found, "end of input");
    assert_eq!(err.span, Span::point(17));
}

#[test]
fn missing_terminator_between_statements() {
    let err = parse_err("<~ ><a> <~ ~");
    assert_eq!(err.kind, ParseErrorKind::MissingTerminator);
    assert_eq!(err.found, "return");
}

#[test]
fn operator_without_operand() {
    let err = parse_err("><a> <3 ~");
    assert_eq!(err.kind, ParseErrorKind::ExpectedExpression);
    assert_eq!(err.code(), ErrorCode::E1002);
    assert_eq!(err.found, "`~`");
}

#[test]
fn unclosed_tank() {
    let err = parse_err("[><a> - ><b> ~");
    assert_eq!(err.kind, ParseErrorKind::UnclosedDelimiter { open: Span::new(0, 1) });
    assert_eq!(err.expected, "`]`");
}

#[test]
fn unclosed_block() {
    let err = parse_err("><(((@> (><{>) ><> ><\\/> ~");
    assert!(matches!(err.kind, ParseErrorKind::UnclosedDelimiter { .. }));
    assert_eq!(err.found, "end of input");
}

#[test]
fn if_needs_a_block() {
    let err = parse_err("><(((^> [><a>] <~ ~");
    assert_eq!(err.kind, ParseErrorKind::UnexpectedToken);
    assert_eq!(err.expected, "`><>`");
}

#[test]
fn subroutine_inside_block_is_rejected() {
    let err = parse_err("><> >(inner) ><> <>< <><");
    assert_eq!(err.kind, ParseErrorKind::MisplacedSubroutine);
    assert_eq!(err.code(), ErrorCode::E1005);
}

#[test]
fn duplicate_parameter_is_rejected() {
    let err = parse_err(">(f) ><a> ><b> ><a> ><> <><");
    assert_eq!(
        err.kind,
        ParseErrorKind::DuplicateParameter {
            first: Span::new(5, 9)
        }
    );
    assert_eq!(err.span, Span::new(15, 19));
}

#[test]
fn left_facing_parameter_is_rejected() {
    let err = parse_err(">(f) <a>< ><> <><");
    assert_eq!(err.kind, ParseErrorKind::UnexpectedToken);
}

#[test]
fn left_facing_declaration_is_rejected() {
    let err = parse_err("(f)< ><> <><");
    assert_eq!(err.kind, ParseErrorKind::UnexpectedToken);
    assert_eq!(err.found, "subroutine `f`");
}

#[test]
fn lex_errors_pass_through() {
    let err = match parse_source("><a> ; ~") {
        Err(FrontEndError::Lex(err)) => err,
        other => panic!("expected lex error, got {other:?}"),
    };
    assert_eq!(err.code(), ErrorCode::E0001);
    assert_eq!(FrontEndError::Lex(err).span(), Span::new(5, 6));
}

#[test]
fn parse_accepts_hand_built_tokens() {
    let tokens: TokenList = [TokenKind::LogicalNot, TokenKind::BitNot]
        .into_iter()
        .chain(std::iter::once(TokenKind::Int {
            value: 3,
            facing: fysh_ir::Facing::Right,
        }))
        .chain([TokenKind::Tilde, TokenKind::Eof])
        .enumerate()
        .map(|(i, kind)| fysh_ir::Token::new(kind, Span::new(i as u32, i as u32 + 1)))
        .collect();
    let program = match parse(&tokens) {
        Ok(program) => program,
        Err(err) => panic!("{err}"),
    };
    assert_eq!(program.len(), 1);
}
