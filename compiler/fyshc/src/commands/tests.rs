use fysh_diagnostic::emitter::ColorMode;
use pretty_assertions::assert_eq;

use super::*;

type Run = fn(&SourceInput, &mut Vec<u8>, &mut Reporter<Vec<u8>>) -> Result<(), CliError>;

/// Run a file command on in-memory source, returning stdout and stderr.
fn run(command: Run, source: &str) -> (Result<(), CliError>, String, String) {
    let input = SourceInput::new("test.fysh", source);
    let mut out = Vec::new();
    let mut reporter = Reporter::new(Vec::new(), ColorMode::Never, false);
    let result = command(&input, &mut out, &mut reporter);
    let err = reporter.into_inner();
    (
        result,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
fn parse_prints_canonical_items() {
    let (result, out, err) = run(parse_file, "><fysh> ><{({o> <3 ><(({o> ~ >><i> ~");
    assert!(result.is_ok());
    assert_eq!(out, "(fysh + (5 * 1));\ni++;\n");
    assert_eq!(err, "");
}

#[test]
fn parse_of_empty_source_prints_nothing() {
    let (result, out, _) = run(parse_file, "><//> only a comment\n");
    assert!(result.is_ok());
    assert_eq!(out, "");
}

#[test]
fn parse_error_is_reported_with_source_context() {
    let (result, out, err) = run(parse_file, "><fysh> = ><{>");
    assert!(matches!(
        result,
        Err(CliError::Reported { ref path, span: Some(_) }) if path == "test.fysh"
    ));
    assert_eq!(out, "");
    assert!(err.starts_with("error[E1003]: "), "{err}");
    assert!(err.contains(" --> test.fysh:1:"), "{err}");
    assert!(err.contains("1 | ><fysh> = ><{>"), "{err}");
}

#[test]
fn missing_terminator_snippet() {
    let (_, _, err) = run(check_file, "><a> ~\n><fysh> = ><(({o>");
    let expected = "\
error[E1003]: missing statement terminator: expected `~`, found end of input
  --> test.fysh:2:18
  |
2 | ><fysh> = ><(({o>
  |                  ^ expected `~` here
  = note: expression, assignment, return and break statements end with `~`
";
    assert_eq!(err, expected);
}

#[test]
fn lex_dumps_tokens() {
    let (result, out, _) = run(lex_file, "><a> ~");
    assert!(result.is_ok());
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "Tokens for 'test.fysh' (3 tokens):");
    assert!(lines[1].ends_with("@ 0..4"), "{}", lines[1]);
    assert!(lines[3].starts_with("  Eof"), "{}", lines[3]);
}

#[test]
fn lex_error_uses_scanner_code() {
    let (result, _, err) = run(lex_file, "><{( ~");
    assert!(matches!(
        result,
        Err(CliError::Reported { span: Some(span), .. }) if span.start == 0
    ));
    assert!(err.starts_with("error[E0002]"), "{err}");
}

#[test]
fn check_summarizes_program() {
    let source = ">(f) ><a> ><> <~ ><a> ~ <><\n[>(f) ><{>] ~";
    let (result, out, _) = run(check_file, source);
    assert!(result.is_ok());
    assert_eq!(out, "OK: test.fysh (1 subroutines, 1 top-level statements)\n");
}

#[test]
fn glyphs_reprint_in_canonical_form() {
    let (result, out, _) = run(glyphs_file, "><fysh> <3 ><{({o> ~ <x>< = ><)){> ~");
    assert!(result.is_ok());
    assert_eq!(out, "(><fysh> <3 ><{({>) ~\n<x>< = ><{> ~\n");
}

#[test]
fn encode_prints_each_literal() {
    let mut out = Vec::new();
    let values = vec!["5".to_string(), "-1".to_string(), "0".to_string()];
    assert!(encode_integers(&values, &mut out).is_ok());
    assert_eq!(
        String::from_utf8_lossy(&out),
        "5\t><{({>\n-1\t<}><\n0\t><(>\n"
    );
}

#[test]
fn encode_rejects_non_integers_before_printing() {
    let mut out = Vec::new();
    let values = vec!["5".to_string(), "five".to_string()];
    let err = encode_integers(&values, &mut out);
    assert!(matches!(err, Err(CliError::NotAnInteger(ref v)) if v == "five"));
    assert!(out.is_empty());
}

#[test]
fn explain_known_and_unknown_codes() {
    let mut out = Vec::new();
    assert!(explain_error("e1003", &mut out).is_ok());
    assert_eq!(
        String::from_utf8_lossy(&out),
        "E1003 (parser): simple statements end with `~`\n"
    );

    let mut out = Vec::new();
    assert!(explain_error("E0002", &mut out).is_ok());
    assert!(String::from_utf8_lossy(&out).starts_with("E0002 (scanner): "));

    assert!(matches!(
        explain_error("E9999", &mut Vec::new()),
        Err(CliError::UnknownCode(_))
    ));
}

#[test]
fn missing_file_is_a_read_error() {
    let err = SourceInput::read("/nonexistent/dir/prog.fysh");
    assert!(matches!(err, Err(CliError::Read { .. })));
}

/// Accepts writes, fails every flush like a closed pipe.
struct ClosedPipe;

impl std::io::Write for ClosedPipe {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
    }
}

#[test]
fn flush_failure_is_an_error() {
    let result = finish(Ok(()), &mut ClosedPipe);
    assert!(matches!(
        result,
        Err(CliError::Io(ref e)) if e.kind() == std::io::ErrorKind::BrokenPipe
    ));
    assert!(finish(Ok(()), &mut Vec::new()).is_ok());
}

#[test]
fn command_error_wins_over_flush_error() {
    let result = finish(Err(CliError::UnknownCode("E9".to_string())), &mut ClosedPipe);
    assert!(matches!(result, Err(CliError::UnknownCode(_))));
}
