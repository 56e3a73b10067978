//! Text dumps of tokens and nodes.

use std::fmt::Write as _;

use condor_ir::{AstArena, IncDec, ListId, Node, NodeId, NodeKind, StringInterner, Token, TokenKind};

/// `start..end kind [payload]`
pub fn describe_token(token: &Token, interner: &StringInterner) -> String {
    let range = token.span.to_range();
    let mut line = format!("{}..{} {}", range.start, range.end, token.kind.describe());
    let payload = match token.kind {
        TokenKind::Ident(name) | TokenKind::Str(name) => Some(interner.lookup(name).to_string()),
        TokenKind::Int(v) => Some(v.to_string()),
        TokenKind::Long(v) => Some(format!("{v}l")),
        TokenKind::Float(bits) => Some(format!("{}f", f32::from_bits(bits))),
        TokenKind::Double(bits) => Some(f64::from_bits(bits).to_string()),
        TokenKind::Char(c) => Some(format!("{c:?}")),
        _ => None,
    };
    if let Some(payload) = payload {
        line.push(' ');
        line.push_str(&payload);
    }
    line
}

/// `#id scope [stmt] kind details`
pub fn describe_node(node: &Node, arena: &AstArena, interner: &StringInterner) -> String {
    let mut line = format!("{} {} ", node.id, node.scope);
    if node.is_stmt {
        line.push_str("stmt ");
    }
    line.push_str(node.kind.label());

    // Writing to a String cannot fail.
    let _ = match node.kind {
        NodeKind::Bool(v) => write!(line, " {v}"),
        NodeKind::Byte(v) => write!(line, " {v}"),
        NodeKind::Short(v) => write!(line, " {v}"),
        NodeKind::Int(v) => write!(line, " {v}"),
        NodeKind::Float(v) => write!(line, " {v}"),
        NodeKind::Double(v) => write!(line, " {v}"),
        NodeKind::Long(v) => write!(line, " {v}"),
        NodeKind::Char(v) => write!(line, " {v:?}"),
        NodeKind::Str(name) => write!(line, " {:?}", interner.lookup(name)),
        NodeKind::Binary { left, right, op } => write!(line, " {left} {op} {right}"),
        NodeKind::Var {
            name,
            data_type,
            init,
            inc_dec,
        } => {
            let _ = write!(line, " {}: {data_type}", interner.lookup(name));
            if let Some(init) = init {
                let _ = write!(line, " = {init}");
            }
            match inc_dec {
                IncDec::Inc => write!(line, " ++"),
                IncDec::Dec => write!(line, " --"),
                IncDec::None => Ok(()),
            }
        }
        NodeKind::For {
            var,
            cond,
            step,
            body,
        } => write!(line, " ({var}; {cond}; {step}) {body}"),
        NodeKind::If { cond, body }
        | NodeKind::While { cond, body }
        | NodeKind::Switch { cond, body }
        | NodeKind::Case { cond, body } => write!(line, " {cond} {body}"),
        NodeKind::Return { value, data_type } if value.is_valid() => {
            write!(line, " {value}: {data_type}")
        }
        NodeKind::Return { .. } | NodeKind::Break => Ok(()),
        NodeKind::Func { name, params, body } => write!(
            line,
            " {}({}) {body}",
            interner.lookup(name),
            list(arena, params)
        ),
        NodeKind::FuncCall { func, args } => write!(line, " {func}({})", list(arena, args)),
    };
    line
}

fn list(arena: &AstArena, list: ListId) -> String {
    arena
        .list_nodes(list)
        .map(|id: NodeId| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
