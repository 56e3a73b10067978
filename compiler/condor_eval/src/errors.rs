//! Runtime errors.
//!
//! Every runtime error is fatal; the runner stops at the first one.

use condor_diagnostic::{Diagnostic, ErrorCode, IntoDiagnostic};
use condor_ir::Span;

use crate::PoolExhausted;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("string concatenation is not implemented")]
    StringConcatenation,
    #[error("character and string comparison is not implemented")]
    CharComparison,
    #[error("context pool exhausted (capacity {capacity})")]
    ContextPoolExhausted { capacity: usize },
    #[error("operand has no value")]
    OperandHasNoValue,
    #[error("internal runner error: {0}")]
    Internal(String),
}

impl EvalErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalErrorKind::StringConcatenation => ErrorCode::E3001,
            EvalErrorKind::CharComparison => ErrorCode::E3002,
            EvalErrorKind::ContextPoolExhausted { .. } => ErrorCode::E4002,
            EvalErrorKind::OperandHasNoValue => ErrorCode::E5001,
            EvalErrorKind::Internal(_) => ErrorCode::E9001,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Node the runner was evaluating, when known.
    pub span: Option<Span>,
}

impl EvalError {
    #[cold]
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError { kind, span: None }
    }

    #[cold]
    pub fn at(kind: EvalErrorKind, span: Span) -> Self {
        EvalError {
            kind,
            span: Some(span),
        }
    }

    #[cold]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(EvalErrorKind::Internal(message.into()))
    }

    /// Attach `span` unless one is already known.
    #[must_use]
    pub fn or_span(mut self, span: Span) -> Self {
        self.span.get_or_insert(span);
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }
}

impl From<PoolExhausted> for EvalError {
    fn from(err: PoolExhausted) -> Self {
        EvalError::new(EvalErrorKind::ContextPoolExhausted {
            capacity: err.capacity,
        })
    }
}

impl IntoDiagnostic for EvalError {
    fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code()).with_message(self.kind.to_string());
        if let Some(span) = self.span {
            let label = match self.kind {
                EvalErrorKind::ContextPoolExhausted { .. } => "while evaluating this",
                EvalErrorKind::OperandHasNoValue => "this operation has an untyped operand",
                _ => "here",
            };
            diag = diag.with_label(span, label);
        }
        if let EvalErrorKind::ContextPoolExhausted { .. } = self.kind {
            diag = diag.with_note("recursion too deep; raise the limit with `--contexts=N`");
        }
        diag
    }
}
