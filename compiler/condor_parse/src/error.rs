//! Parse error types.
//!
//! Every parse error is fatal. An error carries its kind, the span of the
//! offending token and, when known, what was being parsed at the time so the
//! diagnostic can say "while parsing a function declaration".

use condor_diagnostic::{Diagnostic, ErrorCode, IntoDiagnostic};
use condor_ir::{ArenaExhausted, PushbackExhausted, Span, TokenKind};

/// What the parser was working on when an error occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    VarDecl,
    FunctionDecl,
    FunctionParams,
    CallArgs,
    ForLoop,
    IfStatement,
    WhileLoop,
    SwitchStatement,
    CaseClause,
    ReturnStatement,
}

impl ErrorContext {
    /// Phrase suitable for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            Self::VarDecl => "a variable declaration",
            Self::FunctionDecl => "a function declaration",
            Self::FunctionParams => "function parameters",
            Self::CallArgs => "call arguments",
            Self::ForLoop => "a for loop",
            Self::IfStatement => "an if statement",
            Self::WhileLoop => "a while loop",
            Self::SwitchStatement => "a switch statement",
            Self::CaseClause => "a case clause",
            Self::ReturnStatement => "a return statement",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("expected {expected}, found {}", .found.describe())]
    UnexpectedToken {
        expected: &'static str,
        found: TokenKind,
    },
    #[error("expected expression, found {}", .found.describe())]
    ExpectedExpression { found: TokenKind },
    #[error("expected assignment operator, found {}", .found.describe())]
    ExpectedAssignment { found: TokenKind },
    #[error("unknown identifier `{0}`")]
    UnknownIdentifier(String),
    #[error("`{0}` is not a function")]
    NotAFunction(String),
    #[error("compound assignment `{}` is not implemented", .op.describe())]
    CompoundAssignment { op: TokenKind },
    #[error(transparent)]
    ArenaExhausted(#[from] ArenaExhausted),
    #[error("internal parser error: {0}")]
    Internal(String),
}

impl ParseErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::ExpectedExpression { .. } => ErrorCode::E1002,
            ParseErrorKind::ExpectedAssignment { .. } => ErrorCode::E1003,
            ParseErrorKind::UnknownIdentifier(_) => ErrorCode::E2001,
            ParseErrorKind::NotAFunction(_) => ErrorCode::E2002,
            ParseErrorKind::CompoundAssignment { .. } => ErrorCode::E3003,
            ParseErrorKind::ArenaExhausted(_) => ErrorCode::E4001,
            ParseErrorKind::Internal(_) => ErrorCode::E9001,
        }
    }
}

/// A fatal parse error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    pub context: Option<ErrorContext>,
}

impl ParseError {
    #[cold]
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError {
            kind,
            span,
            context: None,
        }
    }

    #[cold]
    pub fn unexpected(expected: &'static str, found: TokenKind, span: Span) -> Self {
        Self::new(ParseErrorKind::UnexpectedToken { expected, found }, span)
    }

    #[cold]
    pub fn arena(err: ArenaExhausted, span: Span) -> Self {
        Self::new(ParseErrorKind::ArenaExhausted(err), span)
    }

    #[cold]
    pub fn pushback(err: PushbackExhausted, span: Span) -> Self {
        Self::new(ParseErrorKind::Internal(err.to_string()), span)
    }

    /// Attach context unless an inner production already did.
    #[must_use]
    pub fn or_context(mut self, context: ErrorContext) -> Self {
        self.context.get_or_insert(context);
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }
}

impl IntoDiagnostic for ParseError {
    fn to_diagnostic(&self) -> Diagnostic {
        let label = match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, .. } => format!("expected {expected}"),
            ParseErrorKind::ExpectedExpression { .. } => "expected expression".to_string(),
            ParseErrorKind::ExpectedAssignment { .. } => "expected `=`".to_string(),
            ParseErrorKind::UnknownIdentifier(_) => "not found in this scope".to_string(),
            ParseErrorKind::NotAFunction(_) => "called here".to_string(),
            ParseErrorKind::CompoundAssignment { .. } => "not implemented".to_string(),
            ParseErrorKind::ArenaExhausted(_) => "allocation failed here".to_string(),
            ParseErrorKind::Internal(_) => "while parsing this token".to_string(),
        };
        let mut diag = Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_label(self.span, label);
        if let Some(context) = self.context {
            diag = diag.with_note(format!("while parsing {}", context.description()));
        }
        if let ParseErrorKind::CompoundAssignment { op } = self.kind {
            diag = diag.with_note(format!(
                "write `x = x {} value` instead",
                op.describe().trim_end_matches('=')
            ));
        }
        diag
    }
}
