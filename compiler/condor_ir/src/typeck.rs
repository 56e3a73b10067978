//! Static result-type inference for expressions.
//!
//! Condor has no type checker; this only answers "what type would this
//! expression produce" for return-type bookkeeping. A binary expression takes
//! the type of its left operand because the runner casts every arithmetic
//! result back to the left operand's type.

use crate::{AstArena, DataType, NodeId, NodeKind};

/// Deepest expression chain followed before giving up with `Undefined`.
const MAX_DEPTH: u32 = 64;

/// Infer the type `node` evaluates to.
pub fn infer_type(arena: &AstArena, node: NodeId) -> DataType {
    infer(arena, node, 0)
}

fn infer(arena: &AstArena, id: NodeId, depth: u32) -> DataType {
    if depth > MAX_DEPTH {
        return DataType::Undefined;
    }
    let Some(node) = arena.get_node(id) else {
        return DataType::Undefined;
    };
    if let Some(ty) = node.kind.literal_type() {
        return ty;
    }
    match node.kind {
        NodeKind::Var {
            data_type, init, ..
        } => match (data_type, init) {
            (DataType::Var, Some(init)) => infer(arena, init, depth + 1),
            (DataType::Var, None) => DataType::Undefined,
            (ty, _) => ty,
        },
        NodeKind::Binary { left, .. } => infer(arena, left, depth + 1),
        NodeKind::FuncCall { func, .. } => return_type_of(arena, func),
        NodeKind::Return { data_type, .. } => data_type,
        _ => DataType::Undefined,
    }
}

/// Declared type of the first `return` directly inside a function's body.
fn return_type_of(arena: &AstArena, func: NodeId) -> DataType {
    let Some(NodeKind::Func { body, .. }) = arena.get_node(func).map(|n| &n.kind) else {
        return DataType::Undefined;
    };
    arena
        .nodes()
        .find_map(|node| match node.kind {
            NodeKind::Return { data_type, .. } if node.scope == *body => Some(data_type),
            _ => None,
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests;
