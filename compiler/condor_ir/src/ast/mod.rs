//! AST node model.
//!
//! Nodes live in the [`AstArena`](crate::AstArena) node pool and refer to
//! each other through [`NodeId`](crate::NodeId) handles. A declaration node
//! (`Var`, `Func`) is shared by every site that references it; the parser
//! never copies a declaration.

mod data_type;
mod list;
mod node;
mod operators;

pub use data_type::DataType;
pub use list::{AstList, AstListItem};
pub use node::{Node, NodeKind};
pub use operators::{BinaryOp, IncDec};

#[cfg(test)]
mod tests;
