use super::parse_err;
use crate::{ErrorContext, ParseErrorKind};
use condor_diagnostic::{ErrorCode, IntoDiagnostic};
use condor_ir::TokenKind;
use pretty_assertions::assert_eq;

#[test]
fn unknown_identifier() {
    let err = parse_err("x = 1;");
    assert_eq!(err.kind, ParseErrorKind::UnknownIdentifier("x".into()));
    assert_eq!(err.code(), ErrorCode::E2001);
    assert_eq!(err.span.to_range(), 0..1);
}

#[test]
fn identifier_out_of_scope() {
    let err = parse_err("if (true) { int a = 1; } a = 2;");
    assert_eq!(err.kind, ParseErrorKind::UnknownIdentifier("a".into()));
}

#[test]
fn calling_a_variable() {
    let err = parse_err("int a = 1; a(2);");
    assert_eq!(err.kind, ParseErrorKind::NotAFunction("a".into()));
    assert_eq!(err.code(), ErrorCode::E2002);
}

#[test]
fn compound_assignment_in_expression() {
    let err = parse_err("int a = 1; a += 2;");
    assert_eq!(
        err.kind,
        ParseErrorKind::CompoundAssignment {
            op: TokenKind::PlusAssign
        }
    );
    assert_eq!(err.code(), ErrorCode::E3003);
    let diag = err.to_diagnostic();
    assert!(diag.notes.iter().any(|n| n == "write `x = x + value` instead"));
}

#[test]
fn compound_assignment_in_declaration() {
    let err = parse_err("int a -= 2;");
    assert_eq!(err.code(), ErrorCode::E3003);
    assert_eq!(err.context, Some(ErrorContext::VarDecl));
}

#[test]
fn missing_assignment() {
    let err = parse_err("int a 5;");
    assert_eq!(err.kind, ParseErrorKind::ExpectedAssignment { found: TokenKind::Int(5) });
    assert_eq!(err.code(), ErrorCode::E1003);
}

#[test]
fn missing_expression() {
    let err = parse_err("int a = ;");
    assert_eq!(
        err.kind,
        ParseErrorKind::ExpectedExpression {
            found: TokenKind::Semicolon
        }
    );
    assert_eq!(err.code(), ErrorCode::E1002);
}

#[test]
fn untyped_parameter_must_name_a_variable() {
    let err = parse_err("func f(x) { }");
    assert_eq!(err.kind, ParseErrorKind::UnknownIdentifier("x".into()));
    assert_eq!(err.code(), ErrorCode::E2001);
    assert_eq!(err.context, Some(ErrorContext::FunctionParams));
    let diag = err.to_diagnostic();
    assert!(diag
        .notes
        .iter()
        .any(|n| n == "while parsing function parameters"));

    let err = parse_err("func g() { } func f(g) { }");
    assert!(matches!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: "variable",
            found: TokenKind::Ident(_),
        }
    ));
}

#[test]
fn literal_parameter() {
    let err = parse_err("func f(1) { }");
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: "identifier",
            found: TokenKind::Int(1),
        }
    );
}

#[test]
fn for_header_lookup_of_unknown_name() {
    let err = parse_err("for (i = 0; i < 3; i++) { }");
    assert_eq!(err.kind, ParseErrorKind::UnknownIdentifier("i".into()));
    assert_eq!(err.context, Some(ErrorContext::ForLoop));
}

#[test]
fn for_header_lookup_of_a_function() {
    let err = parse_err("func g() { } for (g = 0; g < 3; g) { }");
    assert!(matches!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: "variable",
            found: TokenKind::Ident(_),
        }
    ));
    assert_eq!(err.code(), ErrorCode::E1001);
}

#[test]
fn unclosed_block() {
    let err = parse_err("func f() { int a = 1;");
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: "`}`",
            found: TokenKind::Eof,
        }
    );
    assert_eq!(err.code(), ErrorCode::E1001);
}

#[test]
fn stray_closing_brace() {
    let err = parse_err("int a = 1; }");
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: "statement",
            found: TokenKind::RBrace,
        }
    );
}

#[test]
fn missing_condition_paren() {
    let err = parse_err("int a = 1; if a { }");
    assert_eq!(err.context, Some(ErrorContext::IfStatement));
    assert_eq!(err.code(), ErrorCode::E1001);
}

#[test]
fn bad_argument_separator() {
    let err = parse_err("func f(int a, int b) { } f(1 2);");
    assert_eq!(err.context, Some(ErrorContext::CallArgs));
}

#[test]
fn missing_statement_terminator() {
    let err = parse_err("int a = 1; a = 2 )");
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: "`;`",
            found: TokenKind::RParen,
        }
    );
}
