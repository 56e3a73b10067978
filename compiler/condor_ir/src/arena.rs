//! Fixed-capacity arena pools for the AST.
//!
//! Capacities are decided once, before parsing, from the counting pre-pass.
//! Pools only grow by bumping a cursor; nothing is ever released until the
//! whole arena is dropped. Running past a capacity is an error, never a
//! reallocation.

use std::fmt;

use crate::ast::{AstList, AstListItem, Node, NodeKind};
use crate::{ListId, ListItemId, NodeId, ScopeId, Span};

/// Which pool ran out.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PoolKind {
    Nodes,
    Scopes,
    Lists,
    ListItems,
}

impl PoolKind {
    pub fn name(self) -> &'static str {
        match self {
            PoolKind::Nodes => "node",
            PoolKind::Scopes => "scope",
            PoolKind::Lists => "list",
            PoolKind::ListItems => "list item",
        }
    }
}

/// Allocation past a pool's fixed capacity.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ArenaExhausted {
    pub pool: PoolKind,
    pub capacity: usize,
}

impl fmt::Display for ArenaExhausted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} pool exhausted (capacity {})",
            self.pool.name(),
            self.capacity
        )
    }
}

impl std::error::Error for ArenaExhausted {}

/// A bump allocator with a hard capacity.
#[derive(Clone, Debug)]
pub struct Pool<T> {
    items: Vec<T>,
    capacity: usize,
    kind: PoolKind,
}

impl<T> Pool<T> {
    pub fn new(kind: PoolKind, capacity: usize) -> Self {
        Pool {
            items: Vec::with_capacity(capacity),
            capacity,
            kind,
        }
    }

    /// Append a value, returning its index.
    pub fn alloc(&mut self, value: T) -> Result<usize, ArenaExhausted> {
        if self.items.len() >= self.capacity {
            return Err(ArenaExhausted {
                pool: self.kind,
                capacity: self.capacity,
            });
        }
        self.items.push(value);
        Ok(self.items.len() - 1)
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

/// Upper bounds produced by the counting pre-pass.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Capacity {
    pub nodes: usize,
    /// Block bodies, not counting the implicit global scope.
    pub scopes: usize,
    pub funcs: usize,
    pub calls: usize,
    pub list_items: usize,
}

impl Capacity {
    /// One list per function declaration and one per call.
    #[inline]
    pub fn lists(&self) -> usize {
        self.funcs + self.calls
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nodes={} scopes={} funcs={} calls={} lists={} list_items={}",
            self.nodes,
            self.scopes,
            self.funcs,
            self.calls,
            self.lists(),
            self.list_items
        )
    }
}

/// A block body.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ScopeInfo {
    pub id: ScopeId,
    pub parent: ScopeId,
}

/// Owner of every node, scope and list of one parse.
pub struct AstArena {
    nodes: Pool<Node>,
    scopes: Pool<ScopeInfo>,
    lists: Pool<AstList>,
    items: Pool<AstListItem>,
    /// Filled by `seal`: node ids per scope, indexed by raw scope id.
    scope_nodes: Vec<Vec<NodeId>>,
    sealed: bool,
}

impl AstArena {
    pub fn new(capacity: Capacity) -> Self {
        AstArena {
            nodes: Pool::new(PoolKind::Nodes, capacity.nodes),
            scopes: Pool::new(PoolKind::Scopes, capacity.scopes),
            lists: Pool::new(PoolKind::Lists, capacity.lists()),
            items: Pool::new(PoolKind::ListItems, capacity.list_items),
            scope_nodes: Vec::new(),
            sealed: false,
        }
    }

    // ===== Nodes =====

    /// Allocate a node; its identity is the next id in allocation order.
    pub fn alloc_node(
        &mut self,
        kind: NodeKind,
        scope: ScopeId,
        parent_scope: ScopeId,
        span: Span,
    ) -> Result<NodeId, ArenaExhausted> {
        debug_assert!(!self.sealed, "allocation into a sealed arena");
        let id = NodeId::new(self.next_node_raw());
        self.nodes.alloc(Node {
            id,
            scope,
            parent_scope,
            is_stmt: false,
            span,
            kind,
        })?;
        Ok(id)
    }

    fn next_node_raw(&self) -> u32 {
        u32::try_from(self.nodes.len() + 1).unwrap_or(u32::MAX)
    }

    /// Get a node by id.
    ///
    /// # Panics
    /// Panics if `id` was not allocated by this arena.
    #[inline]
    #[track_caller]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes.items[id.index()]
    }

    #[inline]
    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        if id.is_valid() {
            self.nodes.get(id.index())
        } else {
            None
        }
    }

    /// Get a mutable node by id, for patching children parsed after it.
    ///
    /// # Panics
    /// Panics if `id` was not allocated by this arena.
    #[inline]
    #[track_caller]
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes.items[id.index()]
    }

    #[inline]
    pub fn node_capacity(&self) -> usize {
        self.nodes.capacity()
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    // ===== Scopes =====

    /// Mint the next scope id, nested in `parent`.
    pub fn new_scope(&mut self, parent: ScopeId) -> Result<ScopeId, ArenaExhausted> {
        let raw = u32::try_from(self.scopes.len() + 2).unwrap_or(u32::MAX);
        let id = ScopeId::new(raw);
        self.scopes.alloc(ScopeInfo { id, parent })?;
        Ok(id)
    }

    /// Number of scopes including the global one.
    #[inline]
    pub fn scope_count(&self) -> usize {
        self.scopes.len() + 1
    }

    // ===== Lists =====

    pub fn new_list(&mut self) -> Result<ListId, ArenaExhausted> {
        let index = self.lists.alloc(AstList::default())?;
        Ok(ListId::new(u32::try_from(index).unwrap_or(u32::MAX)))
    }

    /// Link `node` at the end of `list`.
    ///
    /// # Panics
    /// Panics if `list` was not allocated by this arena.
    #[track_caller]
    pub fn push_item(&mut self, list: ListId, node: NodeId) -> Result<ListItemId, ArenaExhausted> {
        let prev = self.lists.items[list.index()].last;
        let index = self.items.alloc(AstListItem {
            node,
            prev,
            next: None,
        })?;
        let item = ListItemId::new(u32::try_from(index).unwrap_or(u32::MAX));

        if let Some(prev) = prev {
            self.items.items[prev.index()].next = Some(item);
        }
        let header = &mut self.lists.items[list.index()];
        if header.first.is_none() {
            header.first = Some(item);
        }
        header.last = Some(item);
        header.current = Some(item);
        header.len += 1;
        Ok(item)
    }

    #[inline]
    pub fn list(&self, list: ListId) -> Option<&AstList> {
        self.lists.get(list.index())
    }

    #[inline]
    pub fn item(&self, item: ListItemId) -> Option<&AstListItem> {
        self.items.get(item.index())
    }

    /// Nodes of a list, first to last.
    pub fn list_nodes(&self, list: ListId) -> ListNodes<'_> {
        ListNodes {
            arena: self,
            next: self.list(list).and_then(|l| l.first),
        }
    }

    pub fn list_len(&self, list: ListId) -> usize {
        self.list(list).map_or(0, |l| l.len as usize)
    }

    // ===== Sealing =====

    /// Freeze the arena and build the per-scope node index.
    pub fn seal(&mut self) {
        if self.sealed {
            return;
        }
        let mut scope_nodes = vec![Vec::new(); self.scope_count() + 1];
        for node in self.nodes.iter() {
            if let Some(bucket) = scope_nodes.get_mut(node.scope.raw() as usize) {
                bucket.push(node.id);
            }
        }
        self.scope_nodes = scope_nodes;
        self.sealed = true;
    }

    #[inline]
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Nodes belonging to `scope`, in declaration order. Empty before `seal`.
    pub fn nodes_in_scope(&self, scope: ScopeId) -> &[NodeId] {
        self.scope_nodes
            .get(scope.raw() as usize)
            .map_or(&[], Vec::as_slice)
    }

    /// `(pool, used, capacity)` for every pool.
    pub fn usage(&self) -> [(PoolKind, usize, usize); 4] {
        [
            (PoolKind::Nodes, self.nodes.len(), self.nodes.capacity()),
            (PoolKind::Scopes, self.scopes.len(), self.scopes.capacity()),
            (PoolKind::Lists, self.lists.len(), self.lists.capacity()),
            (PoolKind::ListItems, self.items.len(), self.items.capacity()),
        ]
    }
}

impl fmt::Debug for AstArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AstArena")
            .field("nodes", &self.nodes.len())
            .field("scopes", &self.scope_count())
            .field("lists", &self.lists.len())
            .field("list_items", &self.items.len())
            .field("sealed", &self.sealed)
            .finish()
    }
}

/// Iterator over the nodes of an [`AstList`].
pub struct ListNodes<'a> {
    arena: &'a AstArena,
    next: Option<ListItemId>,
}

impl Iterator for ListNodes<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let item = self.arena.item(self.next?)?;
        self.next = item.next;
        Some(item.node)
    }
}
