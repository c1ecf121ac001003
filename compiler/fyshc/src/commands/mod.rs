//! Command handlers for the `fysh` CLI.
//!
//! Shared pieces live here: reading a [`SourceInput`], the [`Reporter`]
//! that renders diagnostics, and the [`CliError`] every command returns.

use std::io::{self, Read, Write};

use fysh_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use fysh_diagnostic::Diagnostic;
use fysh_fmt::glyph::GlyphError;
use fysh_ir::{Program, Span};
use thiserror::Error;

mod check;
mod debug;
mod encode;
mod explain;

pub use check::check_file;
pub use debug::{lex_file, parse_file};
pub use encode::{encode_integers, glyphs_file};
pub use explain::explain_error;

/// Name shown for input read from stdin.
pub const STDIN_NAME: &str = "<stdin>";

/// Why a command failed.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read `{path}`: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    /// A diagnostic has already been written through the [`Reporter`];
    /// `span` is where its primary label points.
    #[error("{path}: front end error")]
    Reported { path: String, span: Option<Span> },
    #[error("`{0}` is not a decimal integer")]
    NotAnInteger(String),
    #[error("unknown error code `{0}`")]
    UnknownCode(String),
    #[error(transparent)]
    Glyph(#[from] GlyphError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A source text and the name it is reported under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceInput {
    pub path: String,
    pub text: String,
}

impl SourceInput {
    pub fn new(path: impl Into<String>, text: impl Into<String>) -> Self {
        SourceInput {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Read a file, or stdin when `path` is `-`.
    pub fn read(path: &str) -> Result<Self, CliError> {
        if path == "-" {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| CliError::Read {
                    path: STDIN_NAME.to_string(),
                    source,
                })?;
            return Ok(SourceInput::new(STDIN_NAME, text));
        }
        let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_string(),
            source,
        })?;
        Ok(SourceInput::new(path, text))
    }
}

/// Renders diagnostics for one invocation.
pub struct Reporter<W: Write> {
    writer: W,
    color: ColorMode,
    is_tty: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(writer: W, color: ColorMode, is_tty: bool) -> Self {
        Reporter {
            writer,
            color,
            is_tty,
        }
    }

    /// Emit `diagnostic` against `input` and return the matching error.
    pub fn report(&mut self, input: &SourceInput, diagnostic: &Diagnostic) -> CliError {
        let mut emitter = TerminalEmitter::new(
            &mut self.writer,
            self.color,
            self.is_tty,
            &input.path,
            &input.text,
        );
        emitter.emit(diagnostic);
        emitter.flush();
        let span = diagnostic.primary_span();
        tracing::debug!(path = %input.path, code = %diagnostic.code, ?span, "reported");
        CliError::Reported {
            path: input.path.clone(),
            span,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl Reporter<io::Stderr> {
    /// Reporter on stderr, colored when stderr is a terminal (or as `color` says).
    pub fn stderr(color: ColorMode) -> Self {
        let is_tty = io::IsTerminal::is_terminal(&io::stderr());
        Reporter::new(io::stderr(), color, is_tty)
    }
}

/// Flush command output, folding a flush failure into the command result.
///
/// A command error wins over a later flush error.
pub fn finish<O: Write>(result: Result<(), CliError>, out: &mut O) -> Result<(), CliError> {
    let flushed = out.flush().map_err(CliError::from);
    result.and(flushed)
}

/// Scan and parse `input`, reporting the first error.
pub(crate) fn front_end<W: Write>(
    input: &SourceInput,
    reporter: &mut Reporter<W>,
) -> Result<Program, CliError> {
    fysh_parse::parse_source(&input.text)
        .map_err(|err| reporter.report(input, &err.to_diagnostic()))
}

#[cfg(test)]
mod tests;
