//! Grammar productions.
//!
//! - `stmt.rs`: statement lists, bodies, control flow, `return`/`break`
//! - `item.rs`: function declarations and parameter lists
//! - `var.rs`: variable declarations and assignment to existing variables
//! - `expr.rs`: primary expressions, calls and right-to-left binary chains
//!
//! Token convention: an expression consumes the token that ends it. Callers
//! check that terminator with `current()`.

mod expr;
mod item;
mod stmt;
mod var;
