use crate::{BinaryOp, DataType, IncDec, ListId, Name, NodeId, ScopeId, Span};

/// An AST node.
///
/// `scope` is the block the node belongs to and `parent_scope` that block's
/// enclosing block. Only nodes with `is_stmt` set are executed directly when
/// their scope runs; everything else is reached through a statement.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub scope: ScopeId,
    pub parent_scope: ScopeId,
    pub is_stmt: bool,
    pub span: Span,
    pub kind: NodeKind,
}

impl Node {
    #[inline]
    pub fn is_decl(&self) -> bool {
        matches!(self.kind, NodeKind::Var { .. } | NodeKind::Func { .. })
    }
}

/// Node payload.
///
/// Children that are parsed after their parent is allocated start out as
/// `NodeId::INVALID` and are patched once known.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    Bool(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Float(f32),
    Double(f64),
    Long(i64),
    Char(char),
    /// String literal text with its quotes stripped.
    Str(Name),

    Binary {
        left: NodeId,
        right: NodeId,
        op: BinaryOp,
    },

    /// Variable or parameter declaration.
    Var {
        name: Name,
        data_type: DataType,
        init: Option<NodeId>,
        inc_dec: IncDec,
    },

    For {
        var: NodeId,
        cond: NodeId,
        step: NodeId,
        body: ScopeId,
    },
    If {
        cond: NodeId,
        body: ScopeId,
    },
    While {
        cond: NodeId,
        body: ScopeId,
    },
    Switch {
        cond: NodeId,
        body: ScopeId,
    },
    Case {
        cond: NodeId,
        body: ScopeId,
    },

    Return {
        value: NodeId,
        data_type: DataType,
    },
    Break,

    Func {
        name: Name,
        params: ListId,
        body: ScopeId,
    },
    FuncCall {
        func: NodeId,
        args: ListId,
    },
}

impl NodeKind {
    /// Short label used by the AST dump.
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Bool(_) => "bool",
            NodeKind::Byte(_) => "byte",
            NodeKind::Short(_) => "short",
            NodeKind::Int(_) => "int",
            NodeKind::Float(_) => "float",
            NodeKind::Double(_) => "double",
            NodeKind::Long(_) => "long",
            NodeKind::Char(_) => "char",
            NodeKind::Str(_) => "string",
            NodeKind::Binary { .. } => "binary",
            NodeKind::Var { .. } => "var",
            NodeKind::For { .. } => "for",
            NodeKind::If { .. } => "if",
            NodeKind::While { .. } => "while",
            NodeKind::Switch { .. } => "switch",
            NodeKind::Case { .. } => "case",
            NodeKind::Return { .. } => "return",
            NodeKind::Break => "break",
            NodeKind::Func { .. } => "func",
            NodeKind::FuncCall { .. } => "call",
        }
    }

    /// The literal's type, if this is a literal.
    pub fn literal_type(&self) -> Option<DataType> {
        let ty = match self {
            NodeKind::Bool(_) => DataType::Boolean,
            NodeKind::Byte(_) => DataType::Byte,
            NodeKind::Short(_) => DataType::Short,
            NodeKind::Int(_) => DataType::Int,
            NodeKind::Float(_) => DataType::Float,
            NodeKind::Double(_) => DataType::Double,
            NodeKind::Long(_) => DataType::Long,
            NodeKind::Char(_) => DataType::Char,
            NodeKind::Str(_) => DataType::String,
            _ => return None,
        };
        Some(ty)
    }
}
