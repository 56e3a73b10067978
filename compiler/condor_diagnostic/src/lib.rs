//! Diagnostic system for Condor errors.
//!
//! Every phase (lexer, parser, runner) converts its error type into a
//! [`Diagnostic`]: an [`ErrorCode`] for searchability, a message, and a
//! primary label at the offending span. All Condor errors are fatal, so the
//! driver renders exactly one diagnostic and exits.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label};
pub use emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
pub use error_code::ErrorCode;

/// Conversion of a phase error into a renderable diagnostic.
pub trait IntoDiagnostic {
    fn to_diagnostic(&self) -> Diagnostic;
}
