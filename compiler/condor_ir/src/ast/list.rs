use crate::{ListItemId, NodeId};

/// Header of an intrusive doubly-linked list of nodes.
///
/// Used for function parameters and call arguments. Items come from the
/// arena's list-item pool; `current` is the insertion cursor.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct AstList {
    pub first: Option<ListItemId>,
    pub last: Option<ListItemId>,
    pub current: Option<ListItemId>,
    pub len: u32,
}

/// One link of an [`AstList`].
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct AstListItem {
    pub node: NodeId,
    pub prev: Option<ListItemId>,
    pub next: Option<ListItemId>,
}
