//! Counting pre-pass.
//!
//! One scan over the token list yields an upper bound on every arena pool
//! the parser will touch. Each token class that can make the parser allocate
//! is counted here; over-counting is harmless, under-counting would turn a
//! valid program into an arena-exhausted error.

use condor_ir::{Capacity, TokenKind, TokenList};

/// Size the AST arena for `tokens`.
#[tracing::instrument(level = "debug", skip_all, ret)]
pub fn count_capacity(tokens: &TokenList) -> Capacity {
    let mut capacity = Capacity::default();
    let slice = tokens.as_slice();
    let mut prev = TokenKind::Eof;

    for (i, token) in slice.iter().enumerate() {
        match token.kind {
            // Literal nodes
            TokenKind::Int(_)
            | TokenKind::Long(_)
            | TokenKind::Float(_)
            | TokenKind::Double(_)
            | TokenKind::Str(_)
            | TokenKind::Char(_)
            | TokenKind::True
            | TokenKind::False => capacity.nodes += 1,

            // A declaration, or a call node when followed by `(`.
            TokenKind::Ident(_) => {
                capacity.nodes += 1;
                let next_is_paren = slice
                    .get(i + 1)
                    .is_some_and(|t| t.kind == TokenKind::LParen);
                if next_is_paren && prev != TokenKind::Func {
                    capacity.calls += 1;
                }
            }

            // Statement nodes that own a body scope
            TokenKind::For
            | TokenKind::If
            | TokenKind::While
            | TokenKind::Switch
            | TokenKind::Case => {
                capacity.nodes += 1;
                capacity.scopes += 1;
            }
            TokenKind::Func => {
                capacity.nodes += 1;
                capacity.scopes += 1;
                capacity.funcs += 1;
            }
            TokenKind::Return | TokenKind::Break => capacity.nodes += 1,

            // One item per parameter or argument: at most one more than the
            // commas inside each parenthesised list.
            TokenKind::LParen | TokenKind::Comma => capacity.list_items += 1,

            kind if kind.binary_op().is_some() => capacity.nodes += 1,
            _ => {}
        }
        prev = token.kind;
    }

    capacity
}
