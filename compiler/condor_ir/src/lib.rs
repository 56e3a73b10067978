//! Condor IR - the data model shared by the lexer, parser and runner.
//!
//! - Spans for source locations
//! - Names for interned identifiers and string literals
//! - Tokens, `TokenList` and the `TokenStream` contract the parser consumes
//! - Fixed-capacity arena pools (`AstArena`) sized by a counting pre-pass
//! - The AST node model (`Node`, `NodeKind`) and intrusive argument lists
//! - Static result-type inference for expressions (`typeck`)
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: strings become `Name(u32)`
//! - **Flatten Everything**: nodes reference each other through `NodeId`
//!   handles into one append-only pool; the arena is the only owner
//! - **Size Up Front**: every pool has a capacity fixed before parsing

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod ids;
mod interner;
mod name;
mod span;
mod token;
pub mod typeck;

pub use arena::{ArenaExhausted, AstArena, Capacity, ListNodes, Pool, PoolKind, ScopeInfo};
pub use ast::{AstList, AstListItem, BinaryOp, DataType, IncDec, Node, NodeKind};
pub use ids::{ListId, ListItemId, NodeId, ScopeId};
pub use interner::StringInterner;
pub use name::Name;
pub use span::Span;
pub use token::{PushbackExhausted, Token, TokenKind, TokenList, TokenStream, PUSHBACK_DEPTH};
