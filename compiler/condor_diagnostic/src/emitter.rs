//! Terminal rendering of diagnostics.

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::Diagnostic;

mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// For `Auto`, `is_tty` decides.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    fn flush(&mut self);
}

/// The file a diagnostic's spans point into.
struct SourceFile<'a> {
    path: &'a str,
    text: &'a str,
    lines: LineOffsetTable,
}

/// Human-readable emitter with `path:line:col` locations and a source
/// snippet under each label when the source text is attached.
pub struct TerminalEmitter<'src, W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceFile<'src>>,
}

impl<'src, W: Write> TerminalEmitter<'src, W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach the file the spans refer to.
    #[must_use]
    pub fn with_source(mut self, path: &'src str, text: &'src str) -> Self {
        self.source = Some(SourceFile {
            path,
            text,
            lines: LineOffsetTable::build(text),
        });
        self
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }
}

impl<'src> TerminalEmitter<'src, io::Stderr> {
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        Self::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: error[CODE]: message
        self.write_colored("error", colors::ERROR);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            let Some(source) = &self.source else {
                let _ = write!(self.writer, "  --> {:?}: ", label.span);
                self.write_colored(&label.message, colors::ERROR);
                let _ = writeln!(self.writer);
                continue;
            };

            let (line, col) = source.lines.offset_to_line_col(source.text, label.span.start);
            let snippet = source.lines.line_text(source.text, line).unwrap_or("");
            let gutter = " ".repeat(line.to_string().len());
            let caret_pad = " ".repeat(col.saturating_sub(1) as usize);
            let caret_len = (label.span.len() as usize).max(1);
            let carets = "^".repeat(caret_len);
            let path = source.path;

            let _ = writeln!(self.writer, "{gutter}--> {path}:{line}:{col}");
            let _ = writeln!(self.writer, "{gutter} |");
            let _ = writeln!(self.writer, "{line} | {snippet}");
            let _ = write!(self.writer, "{gutter} | {caret_pad}");
            self.write_colored(&format!("{carets} {}", label.message), colors::ERROR);
            let _ = writeln!(self.writer);
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
