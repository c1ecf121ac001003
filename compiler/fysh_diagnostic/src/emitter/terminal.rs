//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support and a
//! source snippet under each label:
//!
//! ```text
//! error[E1003]: missing statement terminator: expected `~`, found end of input
//!   --> blink.fysh:2:18
//!   |
//! 2 | ><fysh> = ><(({o>
//!   |                  ^ expected `~` here
//!   = note: expression, assignment, return and break statements end with `~`
//! ```

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label, Severity};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colors when the output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse a `--color=` flag value.
    pub fn from_flag(value: &str) -> Option<ColorMode> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Terminal emitter rendering against one source file.
pub struct TerminalEmitter<'s, W: Write> {
    writer: W,
    colors: bool,
    path: &'s str,
    source: &'s str,
    lines: LineOffsetTable,
}

impl<'s, W: Write> TerminalEmitter<'s, W> {
    pub fn new(writer: W, mode: ColorMode, is_tty: bool, path: &'s str, source: &'s str) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            path,
            source,
            lines: LineOffsetTable::build(source),
        }
    }

    /// Consume the emitter and return its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Note => colors::NOTE,
        };
        self.write_colored(&severity.to_string(), color);
    }

    fn write_label(&mut self, label: &Label) {
        let (line, col) = self.lines.offset_to_line_col(self.source, label.span.start);
        let gutter = line.to_string().len();
        let pad = " ".repeat(gutter);

        let marker = if label.is_primary { "-->" } else { ":::" };
        let _ = writeln!(self.writer, "{pad} {marker} {}:{line}:{col}", self.path);
        let _ = writeln!(self.writer, "{pad} |");

        let text = self.lines.line_text(self.source, line).to_string();
        let _ = writeln!(self.writer, "{line} | {text}");

        // Carets span the label on its first line, at least one wide.
        let width = label_width(&text, col, label.span.len());
        let underline = format!(
            "{}{}",
            " ".repeat(col as usize - 1),
            if label.is_primary { "^" } else { "-" }.repeat(width)
        );
        let _ = write!(self.writer, "{pad} | ");
        let color = if label.is_primary {
            colors::ERROR
        } else {
            colors::SECONDARY
        };
        self.write_colored(&underline, color);
        if !label.message.is_empty() {
            let _ = write!(self.writer, " ");
            self.write_colored(&label.message, color);
        }
        let _ = writeln!(self.writer);
    }
}

/// Number of characters to underline for a span starting at `col`.
fn label_width(line_text: &str, col: u32, span_len: u32) -> usize {
    let rest: String = line_text.chars().skip(col as usize - 1).collect();
    let byte_len = span_len as usize;
    let chars = rest
        .char_indices()
        .take_while(|&(i, _)| i < byte_len)
        .count();
    chars.max(1)
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.write_severity(diagnostic.severity);
        if self.colors {
            let _ = write!(
                self.writer,
                "{}[{}]{}",
                colors::BOLD,
                diagnostic.code,
                colors::RESET
            );
        } else {
            let _ = write!(self.writer, "[{}]", diagnostic.code);
        }
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            self.write_label(label);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

impl<'s> TerminalEmitter<'s, io::Stderr> {
    /// Emitter writing to stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool, path: &'s str, source: &'s str) -> Self {
        TerminalEmitter::new(io::stderr(), mode, is_tty, path, source)
    }
}
