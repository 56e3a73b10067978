use super::*;
use crate::{ListId, Name, NodeId, ScopeId, Span};

fn var_node() -> Node {
    Node {
        id: NodeId::new(1),
        scope: ScopeId::GLOBAL,
        parent_scope: ScopeId::NONE,
        is_stmt: true,
        span: Span::DUMMY,
        kind: NodeKind::Var {
            name: Name::from_raw(1),
            data_type: DataType::Int,
            init: None,
            inc_dec: IncDec::None,
        },
    }
}

#[test]
fn declarations_are_vars_and_funcs() {
    let node = var_node();
    assert!(node.is_decl());

    let func = Node {
        kind: NodeKind::Func {
            name: Name::from_raw(2),
            params: ListId::new(0),
            body: ScopeId::new(2),
        },
        ..var_node()
    };
    assert!(func.is_decl());

    let lit = Node {
        kind: NodeKind::Int(3),
        ..var_node()
    };
    assert!(!lit.is_decl());
}

#[test]
fn literal_types() {
    assert_eq!(NodeKind::Int(1).literal_type(), Some(DataType::Int));
    assert_eq!(NodeKind::Double(1.5).literal_type(), Some(DataType::Double));
    assert_eq!(NodeKind::Char('a').literal_type(), Some(DataType::Char));
    assert_eq!(NodeKind::Break.literal_type(), None);
}

#[test]
fn primitive_types() {
    assert!(DataType::Int.is_primitive());
    assert!(DataType::String.is_primitive());
    assert!(!DataType::Var.is_primitive());
    assert!(!DataType::Undefined.is_primitive());
    assert_eq!(DataType::Long.to_string(), "long");
}

#[test]
fn operator_symbols() {
    assert_eq!(BinaryOp::Or.symbol(), "||");
    assert_eq!(BinaryOp::GtEq.to_string(), ">=");
}
