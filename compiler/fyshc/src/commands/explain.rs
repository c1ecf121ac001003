//! The `explain` command: describe a front-end error code.

use std::io::Write;

use fysh_diagnostic::ErrorCode;

use super::CliError;

pub fn explain_error<O: Write>(code_str: &str, out: &mut O) -> Result<(), CliError> {
    let Some(code) = ErrorCode::from_code_str(code_str.trim()) else {
        return Err(CliError::UnknownCode(code_str.to_string()));
    };
    let stage = if code.is_lexer_error() {
        "scanner"
    } else {
        "parser"
    };
    writeln!(out, "{code} ({stage}): {}", code.description())?;
    Ok(())
}
