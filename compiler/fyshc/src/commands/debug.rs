//! Debug commands: `parse` and `lex` for inspecting the front end.

use std::io::Write;

use fysh_fmt::render;

use super::{front_end, CliError, Reporter, SourceInput};

/// Print the canonical rendering of every top-level item.
pub fn parse_file<O: Write, E: Write>(
    input: &SourceInput,
    out: &mut O,
    reporter: &mut Reporter<E>,
) -> Result<(), CliError> {
    let program = front_end(input, reporter)?;
    if !program.is_empty() {
        writeln!(out, "{}", render(&program))?;
    }
    Ok(())
}

/// Print the token stream, one `Kind @ start..end` per line.
pub fn lex_file<O: Write, E: Write>(
    input: &SourceInput,
    out: &mut O,
    reporter: &mut Reporter<E>,
) -> Result<(), CliError> {
    let tokens = fysh_lexer::lex(&input.text)
        .map_err(|err| reporter.report(input, &err.to_diagnostic()))?;
    writeln!(out, "Tokens for '{}' ({} tokens):", input.path, tokens.len())?;
    for token in tokens.as_slice() {
        writeln!(out, "  {:?} @ {}", token.kind, token.span)?;
    }
    Ok(())
}
