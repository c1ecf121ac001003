//! The `check` command: scan and parse a file, reporting the first error.

use std::io::Write;

use super::{front_end, CliError, Reporter, SourceInput};

/// Parse a file and print a one-line summary.
pub fn check_file<O: Write, E: Write>(
    input: &SourceInput,
    out: &mut O,
    reporter: &mut Reporter<E>,
) -> Result<(), CliError> {
    let program = front_end(input, reporter)?;
    let subs = program.subs().count();
    let statements = program.len() - subs;
    writeln!(
        out,
        "OK: {} ({subs} subroutines, {statements} top-level statements)",
        input.path
    )?;
    Ok(())
}
