#![allow(clippy::unwrap_used, clippy::expect_used)]

mod errors;
mod grammar;

use crate::{parse, ParseError, ParseOutput};
use condor_ir::{AstArena, NodeId, NodeKind, StringInterner};

fn parse_source(source: &str, interner: &StringInterner) -> Result<ParseOutput, ParseError> {
    let tokens = condor_lexer::lex(source, interner).unwrap();
    parse(&tokens, interner)
}

fn parse_ok(source: &str) -> (AstArena, StringInterner) {
    let interner = StringInterner::new();
    let output = parse_source(source, &interner)
        .unwrap_or_else(|err| panic!("`{source}` failed to parse: {err}"));
    (output.arena, interner)
}

fn parse_err(source: &str) -> ParseError {
    let interner = StringInterner::new();
    match parse_source(source, &interner) {
        Ok(_) => panic!("`{source}` parsed but should not have"),
        Err(err) => err,
    }
}

fn id(raw: u32) -> NodeId {
    NodeId::new(raw)
}

fn kind(arena: &AstArena, raw: u32) -> &NodeKind {
    &arena.node(id(raw)).kind
}
