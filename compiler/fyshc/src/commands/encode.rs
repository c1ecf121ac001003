//! Glyph output: `encode` for literals, `glyphs` for whole programs.

use std::io::Write;

use fysh_fmt::glyph::{suggest_literal, to_glyphs};

use super::{front_end, CliError, Reporter, SourceInput};

/// Print the canonical glyph literal for each decimal integer.
///
/// Every argument is checked before anything is printed.
pub fn encode_integers<O: Write>(values: &[String], out: &mut O) -> Result<(), CliError> {
    let glyphs = values
        .iter()
        .map(|value| suggest_literal(value).ok_or_else(|| CliError::NotAnInteger(value.clone())))
        .collect::<Result<Vec<_>, _>>()?;
    for (value, glyph) in values.iter().zip(&glyphs) {
        writeln!(out, "{}\t{glyph}", value.trim())?;
    }
    Ok(())
}

/// Reprint a program in canonical glyphs.
pub fn glyphs_file<O: Write, E: Write>(
    input: &SourceInput,
    out: &mut O,
    reporter: &mut Reporter<E>,
) -> Result<(), CliError> {
    let program = front_end(input, reporter)?;
    let glyphs = to_glyphs(&program)?;
    if !glyphs.is_empty() {
        writeln!(out, "{glyphs}")?;
    }
    Ok(())
}
