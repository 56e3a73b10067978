//! Error codes for every Condor diagnostic.
//!
//! The first digit names the category:
//! - E0xxx: lexical
//! - E1xxx: syntax
//! - E2xxx: unresolved symbols
//! - E3xxx: unimplemented language features
//! - E4xxx: resource exhaustion
//! - E5xxx: runtime
//! - E9xxx: internal

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexical (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Invalid character in source
    E0002,
    /// Invalid number literal
    E0003,
    /// Unterminated character literal
    E0004,

    // Syntax (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Expected assignment operator
    E1003,

    // Unresolved symbols (E2xxx)
    /// Unknown identifier
    E2001,
    /// Called name is not a function
    E2002,

    // Unimplemented features (E3xxx)
    /// String concatenation
    E3001,
    /// Character or string comparison
    E3002,
    /// Compound assignment (`+=` and friends)
    E3003,

    // Resource exhaustion (E4xxx)
    /// AST arena pool exhausted
    E4001,
    /// Context pool exhausted
    E4002,

    // Runtime (E5xxx)
    /// Arithmetic operand has no value
    E5001,

    // Internal (E9xxx)
    /// Internal error
    E9001,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E3001,
        ErrorCode::E3002,
        ErrorCode::E3003,
        ErrorCode::E4001,
        ErrorCode::E4002,
        ErrorCode::E5001,
        ErrorCode::E9001,
    ];

    /// Get the code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
            ErrorCode::E4001 => "E4001",
            ErrorCode::E4002 => "E4002",
            ErrorCode::E5001 => "E5001",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// The code spelled `code` (`E1001`, case-insensitive).
    pub fn from_code(code: &str) -> Option<ErrorCode> {
        Self::ALL
            .iter()
            .copied()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(code))
    }

    /// One-line description of the error class.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "invalid character",
            ErrorCode::E0003 => "invalid number literal",
            ErrorCode::E0004 => "unterminated character literal",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected expression",
            ErrorCode::E1003 => "expected assignment operator",
            ErrorCode::E2001 => "unknown identifier",
            ErrorCode::E2002 => "not a function",
            ErrorCode::E3001 => "string concatenation is not implemented",
            ErrorCode::E3002 => "character and string comparisons are not implemented",
            ErrorCode::E3003 => "compound assignment is not implemented",
            ErrorCode::E4001 => "AST arena exhausted",
            ErrorCode::E4002 => "context pool exhausted",
            ErrorCode::E5001 => "operand has no value",
            ErrorCode::E9001 => "internal error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests;
