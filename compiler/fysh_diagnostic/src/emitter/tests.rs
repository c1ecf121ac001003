use pretty_assertions::assert_eq;

use super::*;
use crate::ErrorCode;
use fysh_ir::Span;

fn render(source: &str, diagnostic: &Diagnostic) -> String {
    let mut emitter = TerminalEmitter::new(Vec::new(), ColorMode::Never, false, "t.fysh", source);
    emitter.emit(diagnostic);
    emitter.flush();
    String::from_utf8(emitter.into_inner()).unwrap_or_default()
}

#[test]
fn test_renders_header_snippet_and_caret() {
    let source = "><fysh> = ><(({o>\n";
    let diag = Diagnostic::error(ErrorCode::E1003)
        .with_message("expected `~`, found end of input")
        .with_label(Span::new(10, 17), "statement ends without `~`");

    let expected = "\
error[E1003]: expected `~`, found end of input
  --> t.fysh:1:11
  |
1 | ><fysh> = ><(({o>
  |           ^^^^^^^ statement ends without `~`
";
    assert_eq!(render(source, &diag), expected);
}

#[test]
fn test_renders_notes_and_secondary_labels() {
    let source = "><a>\n  oops ~";
    let diag = Diagnostic::error(ErrorCode::E0001)
        .with_message("unrecognized glyph")
        .with_label(Span::new(7, 8), "")
        .with_secondary_label(Span::new(0, 4), "after this")
        .with_note("glyphs are case sensitive");

    let out = render(source, &diag);
    assert!(out.starts_with("error[E0001]: unrecognized glyph\n"));
    assert!(out.contains("--> t.fysh:2:3"));
    assert!(out.contains("2 |   oops ~"));
    assert!(out.contains("  |   ^\n"));
    assert!(out.contains("::: t.fysh:1:1"));
    assert!(out.contains("---- after this"));
    assert!(out.ends_with("  = note: glyphs are case sensitive\n"));
}

#[test]
fn test_color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!(ColorMode::from_flag("always"), Some(ColorMode::Always));
    assert_eq!(ColorMode::from_flag("sometimes"), None);
}

#[test]
fn test_colored_output_wraps_severity() {
    let source = "~";
    let diag = Diagnostic::error(ErrorCode::E1002)
        .with_message("expected expression")
        .with_label(Span::new(0, 1), "here");
    let mut emitter = TerminalEmitter::new(Vec::new(), ColorMode::Always, false, "t.fysh", source);
    emitter.emit(&diag);
    let out = String::from_utf8(emitter.into_inner()).unwrap_or_default();
    assert!(out.starts_with("\x1b[1;31merror\x1b[0m"));
}
