//! Lexer errors.

use condor_diagnostic::{Diagnostic, ErrorCode, IntoDiagnostic};
use condor_ir::Span;

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum LexErrorKind {
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated character literal")]
    UnterminatedChar,
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("invalid character `{0}`")]
    InvalidCharacter(char),
    #[error("invalid number literal `{0}`")]
    InvalidNumber(String),
}

impl LexErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::InvalidCharacter(_) | LexErrorKind::UnterminatedComment => {
                ErrorCode::E0002
            }
            LexErrorKind::InvalidNumber(_) => ErrorCode::E0003,
            LexErrorKind::UnterminatedChar => ErrorCode::E0004,
        }
    }
}

/// A lexer error at a source location.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

impl LexError {
    #[cold]
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { kind, span }
    }
}

impl IntoDiagnostic for LexError {
    fn to_diagnostic(&self) -> Diagnostic {
        let label = match self.kind {
            LexErrorKind::UnterminatedString => "missing closing `\"`",
            LexErrorKind::UnterminatedChar => "missing closing `'`",
            LexErrorKind::UnterminatedComment => "missing closing `*/`",
            LexErrorKind::InvalidCharacter(_) => "not valid in Condor source",
            LexErrorKind::InvalidNumber(_) => "malformed number",
        };
        Diagnostic::error(self.kind.code())
            .with_message(self.kind.to_string())
            .with_label(self.span, label)
    }
}
