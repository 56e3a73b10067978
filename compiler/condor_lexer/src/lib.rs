//! Lexer for Condor using logos with string interning.
//!
//! [`lex`] scans a whole file into a [`TokenList`] ending in `Eof`;
//! [`TokenCursor`] walks that list through the `TokenStream` contract the
//! parser consumes. Comments and whitespace never reach the parser.

mod cursor;
mod lex_error;
mod number;

use logos::Logos;
use condor_ir::{Span, StringInterner, Token, TokenKind, TokenList};

pub use cursor::TokenCursor;
pub use lex_error::{LexError, LexErrorKind};

/// Raw token from logos (before interning).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
// Whitespace, line comments and block comments
#[logos(skip r"([ \t\r\n\f]+|//[^\n]*|/\*([^*]|\*+[^*/])*\*+/)")]
enum RawToken {
    #[token("/*")]
    UnterminatedComment,

    #[token("var")]
    Var,
    #[token("bool")]
    #[token("boolean")]
    Boolean,
    #[token("byte")]
    Byte,
    #[token("short")]
    Short,
    #[token("int")]
    Int,
    #[token("float")]
    Float,
    #[token("double")]
    Double,
    #[token("long")]
    Long,
    #[token("char")]
    Char,
    #[token("string")]
    String,

    #[token("for")]
    For,
    #[token("if")]
    If,
    #[token("while")]
    While,
    #[token("switch")]
    Switch,
    #[token("case")]
    Case,
    #[token("return")]
    Return,
    #[token("break")]
    Break,
    #[token("func")]
    Func,
    #[token("true")]
    True,
    #[token("false")]
    False,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,
    #[token("!")]
    Bang,
    #[token("=")]
    Assign,
    #[token("+=")]
    PlusAssign,
    #[token("-=")]
    MinusAssign,
    #[token("*=")]
    StarAssign,
    #[token("/=")]
    SlashAssign,
    #[token("++")]
    Inc,
    #[token("--")]
    Dec,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,

    // Digits with any trailing fraction, exponent or suffix characters;
    // the shape is validated in `number::classify`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?)?[0-9a-zA-Z_]*")]
    Number,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    Str,
    #[regex(r#""([^"\\\n]|\\.)*"#)]
    UnterminatedStr,

    #[regex(r"'([^'\\\n]|\\.)'")]
    CharLit,
    #[regex(r"'([^'\\\n]|\\.)?")]
    UnterminatedChar,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// Lex source code into a `TokenList`.
///
/// The first malformed token aborts lexing.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex(source: &str, interner: &StringInterner) -> Result<TokenList, LexError> {
    let mut result = TokenList::with_capacity(source.len() / 3 + 1);
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();
        let raw = token_result.map_err(|()| {
            let found = slice.chars().next().unwrap_or('\0');
            LexError::new(LexErrorKind::InvalidCharacter(found), span)
        })?;
        let kind = convert_token(raw, slice, interner).map_err(|kind| LexError::new(kind, span))?;
        result.push(Token::new(kind, span));
    }

    let eof = u32::try_from(source.len()).unwrap_or(u32::MAX);
    result.push(Token::new(TokenKind::Eof, Span::new(eof, eof)));

    tracing::debug!(tokens = result.len(), "lexed");
    Ok(result)
}

/// Convert a raw token to a `TokenKind`, interning text.
fn convert_token(
    raw: RawToken,
    slice: &str,
    interner: &StringInterner,
) -> Result<TokenKind, LexErrorKind> {
    let kind = match raw {
        RawToken::Number => number::classify(slice)
            .ok_or_else(|| LexErrorKind::InvalidNumber(slice.to_owned()))?,
        RawToken::Str => TokenKind::Str(interner.intern(&unescape_str(slice))),
        RawToken::CharLit => TokenKind::Char(unescape_char(&slice[1..slice.len() - 1])),
        RawToken::Ident => TokenKind::Ident(interner.intern(slice)),
        RawToken::UnterminatedStr => return Err(LexErrorKind::UnterminatedString),
        RawToken::UnterminatedChar => return Err(LexErrorKind::UnterminatedChar),
        RawToken::UnterminatedComment => return Err(LexErrorKind::UnterminatedComment),

        RawToken::Var => TokenKind::Var,
        RawToken::Boolean => TokenKind::Boolean,
        RawToken::Byte => TokenKind::Byte,
        RawToken::Short => TokenKind::Short,
        RawToken::Int => TokenKind::IntType,
        RawToken::Float => TokenKind::FloatType,
        RawToken::Double => TokenKind::DoubleType,
        RawToken::Long => TokenKind::LongType,
        RawToken::Char => TokenKind::CharType,
        RawToken::String => TokenKind::StringType,

        RawToken::For => TokenKind::For,
        RawToken::If => TokenKind::If,
        RawToken::While => TokenKind::While,
        RawToken::Switch => TokenKind::Switch,
        RawToken::Case => TokenKind::Case,
        RawToken::Return => TokenKind::Return,
        RawToken::Break => TokenKind::Break,
        RawToken::Func => TokenKind::Func,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,

        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::AndAnd => TokenKind::AndAnd,
        RawToken::OrOr => TokenKind::OrOr,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Assign => TokenKind::Assign,
        RawToken::PlusAssign => TokenKind::PlusAssign,
        RawToken::MinusAssign => TokenKind::MinusAssign,
        RawToken::StarAssign => TokenKind::StarAssign,
        RawToken::SlashAssign => TokenKind::SlashAssign,
        RawToken::Inc => TokenKind::Inc,
        RawToken::Dec => TokenKind::Dec,

        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Colon => TokenKind::Colon,
    };
    Ok(kind)
}

/// Character denoted by `\c`. Unknown escapes stand for `c` itself.
fn escaped(c: char) -> char {
    match c {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        '0' => '\0',
        other => other,
    }
}

/// Resolve the body of a char literal (between the quotes).
fn unescape_char(body: &str) -> char {
    let mut chars = body.chars();
    match (chars.next(), chars.next()) {
        (Some('\\'), Some(c)) => escaped(c),
        (Some(c), _) => c,
        (None, _) => '\0',
    }
}

/// Resolve escapes inside a string literal, keeping its outer quotes.
///
/// `"a\"b"` becomes `"a"b"`; the parser strips only the outer pair.
fn unescape_str(slice: &str) -> String {
    let mut out = String::with_capacity(slice.len());
    let mut chars = slice.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.extend(chars.next().map(escaped)),
            c => out.push(c),
        }
    }
    out
}
