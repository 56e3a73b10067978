use super::{id, kind, parse_ok};
use condor_ir::{BinaryOp, DataType, IncDec, NodeKind, ScopeId};
use pretty_assertions::assert_eq;

#[test]
fn declarations_and_shared_references() {
    let (arena, _) = parse_ok("int a = 7; int b = 2; a / b;");
    assert_eq!(arena.node_count(), 5);
    assert!(matches!(
        kind(&arena, 1),
        NodeKind::Var { data_type: DataType::Int, init: Some(init), .. } if *init == id(2)
    ));
    assert_eq!(kind(&arena, 2), &NodeKind::Int(7));
    assert_eq!(
        kind(&arena, 5),
        &NodeKind::Binary {
            left: id(1),
            right: id(3),
            op: BinaryOp::Div,
        }
    );
    assert_eq!(arena.nodes_in_scope(ScopeId::GLOBAL).len(), 5);
    let stmts: Vec<_> = arena.nodes().filter(|n| n.is_stmt).map(|n| n.id).collect();
    assert_eq!(stmts, vec![id(1), id(3), id(5)]);
}

#[test]
fn node_ids_follow_allocation_order() {
    let (arena, _) = parse_ok("int a = 1; long b = 2; a = b;");
    for (i, node) in arena.nodes().enumerate() {
        assert_eq!(node.id.index(), i);
    }
}

#[test]
fn binary_chains_associate_right() {
    let (arena, _) = parse_ok("int a = 1; int b = 2; int c = 3; a - b - c;");
    assert_eq!(
        kind(&arena, 7),
        &NodeKind::Binary {
            left: id(1),
            right: id(8),
            op: BinaryOp::Sub,
        }
    );
    assert_eq!(
        kind(&arena, 8),
        &NodeKind::Binary {
            left: id(3),
            right: id(5),
            op: BinaryOp::Sub,
        }
    );
    assert!(arena.node(id(7)).is_stmt);
    assert!(!arena.node(id(8)).is_stmt);
}

#[test]
fn function_declaration_and_call() {
    let (arena, interner) = parse_ok("func add(int a, int b){ return a + b; } add(3,4);");
    assert_eq!(arena.node_count(), 8);

    let NodeKind::Func { name, params, body } = *kind(&arena, 1) else {
        panic!("expected func, got {:?}", kind(&arena, 1));
    };
    assert_eq!(interner.lookup(name), "add");
    assert_eq!(body, ScopeId::new(2));
    assert_eq!(arena.list_nodes(params).collect::<Vec<_>>(), vec![id(2), id(3)]);
    assert!(!arena.node(id(1)).is_stmt);
    assert_eq!(arena.node(id(1)).scope, ScopeId::GLOBAL);

    // Parameters and the body live in the body scope.
    for raw in 2..=5 {
        assert_eq!(arena.node(id(raw)).scope, body, "node #{raw}");
        assert_eq!(arena.node(id(raw)).parent_scope, ScopeId::GLOBAL);
    }
    assert!(!arena.node(id(2)).is_stmt);
    assert_eq!(
        kind(&arena, 4),
        &NodeKind::Return {
            value: id(5),
            data_type: DataType::Int,
        }
    );

    let NodeKind::FuncCall { func, args } = *kind(&arena, 6) else {
        panic!("expected call");
    };
    assert_eq!(func, id(1));
    assert_eq!(arena.list_nodes(args).collect::<Vec<_>>(), vec![id(7), id(8)]);
    assert!(arena.node(id(6)).is_stmt);
    assert!(!arena.node(id(7)).is_stmt);
}

#[test]
fn empty_parameter_and_argument_lists() {
    let (arena, _) = parse_ok("func f() { } f();");
    let NodeKind::Func { params, .. } = *kind(&arena, 1) else {
        panic!("expected func");
    };
    assert_eq!(arena.list_len(params), 0);
    let NodeKind::FuncCall { args, .. } = *kind(&arena, 2) else {
        panic!("expected call");
    };
    assert_eq!(arena.list_len(args), 0);
}

#[test]
fn function_can_call_itself() {
    let (arena, _) = parse_ok("func f(int n) { f(n); }");
    assert!(matches!(kind(&arena, 3), NodeKind::FuncCall { func, .. } if *func == id(1)));
    assert!(arena.node(id(3)).is_stmt);
}

#[test]
fn nested_call_is_an_argument_not_a_statement() {
    let (arena, _) = parse_ok("func f(int a){ return a; } f(f(1));");
    assert_eq!(
        kind(&arena, 3),
        &NodeKind::Return {
            value: id(2),
            data_type: DataType::Int,
        }
    );
    assert!(arena.node(id(4)).is_stmt);
    assert!(matches!(kind(&arena, 5), NodeKind::FuncCall { .. }));
    assert!(!arena.node(id(5)).is_stmt);
}

#[test]
fn string_literal_quotes_are_stripped() {
    let (arena, interner) = parse_ok(r#"string s = "hello world";"#);
    let NodeKind::Str(name) = *kind(&arena, 2) else {
        panic!("expected string literal");
    };
    assert_eq!(interner.lookup(name), "hello world");
}

#[test]
fn literal_kinds() {
    let (arena, _) = parse_ok("var a = true; var b = 'x'; var c = 1.5; var d = 2.5f; var e = 9l;");
    assert_eq!(kind(&arena, 2), &NodeKind::Bool(true));
    assert_eq!(kind(&arena, 4), &NodeKind::Char('x'));
    assert_eq!(kind(&arena, 6), &NodeKind::Double(1.5));
    assert_eq!(kind(&arena, 8), &NodeKind::Float(2.5));
    assert_eq!(kind(&arena, 10), &NodeKind::Long(9));
}

#[test]
fn for_loop_header_lives_in_body_scope() {
    let (arena, _) = parse_ok("for (int i = 0; i < 3; i++) { }");
    let body = ScopeId::new(2);
    assert_eq!(
        kind(&arena, 1),
        &NodeKind::For {
            var: id(2),
            cond: id(4),
            step: id(2),
            body,
        }
    );
    assert!(arena.node(id(1)).is_stmt);
    assert_eq!(arena.node(id(1)).scope, ScopeId::GLOBAL);
    assert_eq!(arena.node(id(2)).scope, body);
    assert!(matches!(
        kind(&arena, 2),
        NodeKind::Var { inc_dec: IncDec::Inc, .. }
    ));
    assert_eq!(
        kind(&arena, 4),
        &NodeKind::Binary {
            left: id(2),
            right: id(5),
            op: BinaryOp::Lt,
        }
    );
}

#[test]
fn inner_declaration_shadows_until_block_ends() {
    let (arena, _) = parse_ok("int a = 1; if (a) { int a = 2; } int b = a;");
    assert_eq!(
        kind(&arena, 3),
        &NodeKind::If {
            cond: id(1),
            body: ScopeId::new(2),
        }
    );
    assert_eq!(arena.node(id(4)).scope, ScopeId::new(2));
    assert!(matches!(kind(&arena, 6), NodeKind::Var { init: Some(init), .. } if *init == id(1)));
}

#[test]
fn single_statement_bodies() {
    let (arena, _) = parse_ok("int a = 0; while (a < 3) a = a + 1; a = 5;");
    let NodeKind::While { body, .. } = *kind(&arena, 3) else {
        panic!("expected while");
    };
    let body_stmts: Vec<_> = arena
        .nodes_in_scope(body)
        .iter()
        .filter(|n| arena.node(**n).is_stmt)
        .collect();
    assert_eq!(body_stmts.len(), 1);
    assert_eq!(arena.node(id(6)).scope, body);
    assert!(arena.node(id(9)).is_stmt);
    assert_eq!(arena.node(id(9)).scope, ScopeId::GLOBAL);
}

#[test]
fn switch_with_cases() {
    let (arena, _) = parse_ok("int a = 1; switch (a) { case 1: { a = 2; } case 2: a = 3; }");
    let NodeKind::Switch { body, .. } = *kind(&arena, 3) else {
        panic!("expected switch");
    };
    let cases: Vec<_> = arena
        .nodes_in_scope(body)
        .iter()
        .filter(|n| matches!(arena.node(**n).kind, NodeKind::Case { .. }))
        .collect();
    assert_eq!(cases.len(), 2);
}

#[test]
fn statements_after_return_are_skipped() {
    let (arena, interner) = parse_ok("func f() { return 1; int dead = 2; { dead; } } int x = 3;");
    assert_eq!(arena.node_count(), 5);
    assert!(arena.nodes().all(|n| match n.kind {
        NodeKind::Var { name, .. } => interner.lookup(name) != "dead",
        _ => true,
    }));
    assert_eq!(arena.node(id(4)).scope, ScopeId::GLOBAL);
}

#[test]
fn bare_return_has_no_value() {
    let (arena, _) = parse_ok("func f() { return; }");
    assert_eq!(
        kind(&arena, 2),
        &NodeKind::Return {
            value: condor_ir::NodeId::INVALID,
            data_type: DataType::Undefined,
        }
    );
}

#[test]
fn return_type_follows_declared_var() {
    let (arena, _) = parse_ok("func f() { var x = 2.5; return x; }");
    assert!(matches!(
        kind(&arena, 4),
        NodeKind::Return { data_type: DataType::Double, .. }
    ));
}

#[test]
fn break_without_semicolon() {
    let (arena, _) = parse_ok("while (true) { break }");
    assert!(matches!(kind(&arena, 3), NodeKind::Break));
    assert!(arena.node(id(3)).is_stmt);
}

#[test]
fn arena_is_sealed() {
    let (arena, _) = parse_ok("");
    assert!(arena.is_sealed());
    assert_eq!(arena.node_count(), 0);
}

#[test]
fn untyped_parameter_reuses_the_outer_variable() {
    let (arena, _) = parse_ok("int x = 1; func f(x) { return x; } f(7);");
    let NodeKind::Func { params, body, .. } = *kind(&arena, 3) else {
        panic!("expected func, got {:?}", kind(&arena, 3));
    };
    assert_eq!(arena.list_nodes(params).collect::<Vec<_>>(), vec![id(1)]);
    assert_eq!(arena.node(id(1)).scope, ScopeId::GLOBAL);
    assert_ne!(body, ScopeId::GLOBAL);
    assert_eq!(
        kind(&arena, 4),
        &NodeKind::Return {
            value: id(1),
            data_type: DataType::Int,
        }
    );
}

#[test]
fn for_header_lookup_replaces_the_initializer() {
    let (arena, _) = parse_ok("int i = 5; for (i = 0; i < 3; i++) {}");
    assert_eq!(arena.node_count(), 6);
    let NodeKind::For {
        var,
        cond,
        step,
        body,
    } = *kind(&arena, 3)
    else {
        panic!("expected for, got {:?}", kind(&arena, 3));
    };
    assert_eq!((var, cond, step), (id(1), id(5), id(1)));
    assert!(matches!(
        kind(&arena, 1),
        NodeKind::Var {
            data_type: DataType::Int,
            init: Some(init),
            inc_dec: IncDec::Inc,
            ..
        } if *init == id(4)
    ));
    assert_eq!(kind(&arena, 4), &NodeKind::Int(0));
    assert_eq!(arena.node(id(4)).scope, body);
    // The declaration stays where it was declared.
    assert_eq!(arena.node(id(1)).scope, ScopeId::GLOBAL);
}
