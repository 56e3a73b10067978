#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::{BinaryOp, Capacity, IncDec, ListId, Name, ScopeId, Span};

fn arena() -> AstArena {
    AstArena::new(Capacity {
        nodes: 16,
        scopes: 2,
        funcs: 1,
        calls: 1,
        list_items: 2,
    })
}

fn alloc(arena: &mut AstArena, kind: NodeKind) -> NodeId {
    arena
        .alloc_node(kind, ScopeId::GLOBAL, ScopeId::NONE, Span::DUMMY)
        .unwrap()
}

fn var(arena: &mut AstArena, data_type: DataType, init: Option<NodeId>) -> NodeId {
    alloc(
        arena,
        NodeKind::Var {
            name: Name::from_raw(1),
            data_type,
            init,
            inc_dec: IncDec::None,
        },
    )
}

#[test]
fn literals_infer_their_kind() {
    let mut arena = arena();
    let d = alloc(&mut arena, NodeKind::Double(1.5));
    let s = alloc(&mut arena, NodeKind::Str(Name::EMPTY));
    assert_eq!(infer_type(&arena, d), DataType::Double);
    assert_eq!(infer_type(&arena, s), DataType::String);
}

#[test]
fn var_uses_declared_or_initializer_type() {
    let mut arena = arena();
    let lit = alloc(&mut arena, NodeKind::Long(9));
    let typed = var(&mut arena, DataType::Int, Some(lit));
    let inferred = var(&mut arena, DataType::Var, Some(lit));
    let empty = var(&mut arena, DataType::Var, None);
    assert_eq!(infer_type(&arena, typed), DataType::Int);
    assert_eq!(infer_type(&arena, inferred), DataType::Long);
    assert_eq!(infer_type(&arena, empty), DataType::Undefined);
}

#[test]
fn binary_takes_left_operand_type() {
    let mut arena = arena();
    let left = alloc(&mut arena, NodeKind::Int(1));
    let right = alloc(&mut arena, NodeKind::Double(2.0));
    let sum = alloc(
        &mut arena,
        NodeKind::Binary {
            left,
            right,
            op: BinaryOp::Add,
        },
    );
    let cmp = alloc(
        &mut arena,
        NodeKind::Binary {
            left: right,
            right: left,
            op: BinaryOp::Lt,
        },
    );
    assert_eq!(infer_type(&arena, sum), DataType::Int);
    assert_eq!(infer_type(&arena, cmp), DataType::Double);
}

#[test]
fn call_uses_callee_return_type() {
    let mut arena = arena();
    let body = arena.new_scope(ScopeId::GLOBAL).unwrap();
    let params = arena.new_list().unwrap();
    let func = alloc(
        &mut arena,
        NodeKind::Func {
            name: Name::from_raw(2),
            params,
            body,
        },
    );
    let value = alloc(&mut arena, NodeKind::Float(1.0));
    arena
        .alloc_node(
            NodeKind::Return {
                value,
                data_type: DataType::Float,
            },
            body,
            ScopeId::GLOBAL,
            Span::DUMMY,
        )
        .unwrap();
    let call = alloc(
        &mut arena,
        NodeKind::FuncCall {
            func,
            args: ListId::INVALID,
        },
    );
    assert_eq!(infer_type(&arena, call), DataType::Float);
}

#[test]
fn call_without_return_is_undefined() {
    let mut arena = arena();
    let body = arena.new_scope(ScopeId::GLOBAL).unwrap();
    let params = arena.new_list().unwrap();
    let func = alloc(
        &mut arena,
        NodeKind::Func {
            name: Name::from_raw(2),
            params,
            body,
        },
    );
    let call = alloc(
        &mut arena,
        NodeKind::FuncCall {
            func,
            args: ListId::INVALID,
        },
    );
    assert_eq!(infer_type(&arena, call), DataType::Undefined);
    assert_eq!(infer_type(&arena, NodeId::INVALID), DataType::Undefined);
}
