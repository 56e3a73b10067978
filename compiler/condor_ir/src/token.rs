//! Tokens and the token-stream contract the parser consumes.
//!
//! The lexer turns source text into a [`TokenList`]; the parser pulls from
//! anything implementing [`TokenStream`] so it never sees the scanner.

use std::fmt;

use crate::ast::{BinaryOp, DataType};
use crate::{Name, Span};

/// How many consumed tokens may be pushed back before the stream refuses.
pub const PUSHBACK_DEPTH: usize = 5;

/// Lexical category of a token, carrying literal payloads.
///
/// Number literals are classified and parsed by the lexer; floating payloads
/// are stored as bit patterns so the kind stays `Eq + Hash`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Literals
    Ident(Name),
    Int(i32),
    Long(i64),
    /// `f32` bits.
    Float(u32),
    /// `f64` bits.
    Double(u64),
    /// String literal text, quotes included.
    Str(Name),
    Char(char),
    True,
    False,

    // Type keywords
    Var,
    Boolean,
    Byte,
    Short,
    IntType,
    FloatType,
    DoubleType,
    LongType,
    CharType,
    StringType,

    // Statement keywords
    For,
    If,
    While,
    Switch,
    Case,
    Return,
    Break,
    Func,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    AndAnd,
    OrOr,
    Bang,
    Assign,
    PlusAssign,
    MinusAssign,
    StarAssign,
    SlashAssign,
    Inc,
    Dec,

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,
    Semicolon,
    Colon,

    Eof,
}

impl TokenKind {
    /// The binary operator this token denotes in expression position.
    ///
    /// `=` counts: assignment chains like any other operator.
    pub fn binary_op(self) -> Option<BinaryOp> {
        let op = match self {
            TokenKind::Plus => BinaryOp::Add,
            TokenKind::Minus => BinaryOp::Sub,
            TokenKind::Star => BinaryOp::Mul,
            TokenKind::Slash => BinaryOp::Div,
            TokenKind::Percent => BinaryOp::Mod,
            TokenKind::EqEq => BinaryOp::Eq,
            TokenKind::NotEq => BinaryOp::NotEq,
            TokenKind::Lt => BinaryOp::Lt,
            TokenKind::LtEq => BinaryOp::LtEq,
            TokenKind::Gt => BinaryOp::Gt,
            TokenKind::GtEq => BinaryOp::GtEq,
            TokenKind::AndAnd => BinaryOp::And,
            TokenKind::OrOr => BinaryOp::Or,
            TokenKind::Assign => BinaryOp::Assign,
            _ => return None,
        };
        Some(op)
    }

    #[inline]
    pub fn is_compound_assignment(self) -> bool {
        matches!(
            self,
            TokenKind::PlusAssign
                | TokenKind::MinusAssign
                | TokenKind::StarAssign
                | TokenKind::SlashAssign
        )
    }

    /// The declared type named by a type keyword (`var`, `int`, ...).
    pub fn declared_type(self) -> Option<DataType> {
        let ty = match self {
            TokenKind::Var => DataType::Var,
            TokenKind::Boolean => DataType::Boolean,
            TokenKind::Byte => DataType::Byte,
            TokenKind::Short => DataType::Short,
            TokenKind::IntType => DataType::Int,
            TokenKind::FloatType => DataType::Float,
            TokenKind::DoubleType => DataType::Double,
            TokenKind::LongType => DataType::Long,
            TokenKind::CharType => DataType::Char,
            TokenKind::StringType => DataType::String,
            _ => return None,
        };
        Some(ty)
    }

    /// Short human-readable description for diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Ident(_) => "identifier",
            TokenKind::Int(_) | TokenKind::Long(_) => "integer literal",
            TokenKind::Float(_) | TokenKind::Double(_) => "float literal",
            TokenKind::Str(_) => "string literal",
            TokenKind::Char(_) => "char literal",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Var => "var",
            TokenKind::Boolean => "boolean",
            TokenKind::Byte => "byte",
            TokenKind::Short => "short",
            TokenKind::IntType => "int",
            TokenKind::FloatType => "float",
            TokenKind::DoubleType => "double",
            TokenKind::LongType => "long",
            TokenKind::CharType => "char",
            TokenKind::StringType => "string",
            TokenKind::For => "for",
            TokenKind::If => "if",
            TokenKind::While => "while",
            TokenKind::Switch => "switch",
            TokenKind::Case => "case",
            TokenKind::Return => "return",
            TokenKind::Break => "break",
            TokenKind::Func => "func",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::AndAnd => "&&",
            TokenKind::OrOr => "||",
            TokenKind::Bang => "!",
            TokenKind::Assign => "=",
            TokenKind::PlusAssign => "+=",
            TokenKind::MinusAssign => "-=",
            TokenKind::StarAssign => "*=",
            TokenKind::SlashAssign => "/=",
            TokenKind::Inc => "++",
            TokenKind::Dec => "--",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Eof => "end of file",
        }
    }
}

/// A token with its span in the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Token, TokenKind};
    crate::static_assert_size!(TokenKind, 16);
    crate::static_assert_size!(Token, 24);
}

/// The scanned tokens of one source file, always terminated by `Eof`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Span of the final token, used for end-of-input diagnostics.
    pub fn end_span(&self) -> Span {
        self.tokens.last().map_or(Span::DUMMY, |t| t.span)
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.tokens).finish()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Pushed back more than [`PUSHBACK_DEPTH`] tokens.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PushbackExhausted;

impl fmt::Display for PushbackExhausted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "token pushback depth of {PUSHBACK_DEPTH} exceeded")
    }
}

impl std::error::Error for PushbackExhausted {}

/// Pull interface over a token sequence.
///
/// End of input is an `Eof` token that repeats on every further call.
pub trait TokenStream {
    /// Fetch and consume the next token.
    fn next_token(&mut self) -> Token;

    /// Look at the next token without consuming it.
    fn peek_token(&mut self) -> Token;

    /// Un-consume the most recently consumed token.
    ///
    /// At most [`PUSHBACK_DEPTH`] tokens can be outstanding.
    fn back(&mut self) -> Result<(), PushbackExhausted>;

    /// The most recently consumed token (`Eof` before the first fetch).
    fn current_token(&self) -> Token;
}
