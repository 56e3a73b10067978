//! Handles into the arena pools.
//!
//! Every cross-reference in the AST is one of these `u32` handles rather than
//! a pointer, so a declaration node can be shared by any number of use sites
//! without aliasing an owner.

use std::fmt;

/// Identity of an AST node.
///
/// Assigned at allocation time, starting at 1 and strictly increasing in
/// allocation order across one parse. `NodeId(n)` lives at pool index `n - 1`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Sentinel for a child that has not been parsed yet.
    pub const INVALID: NodeId = NodeId(0);

    #[inline]
    pub const fn new(raw: u32) -> Self {
        NodeId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index into the node pool.
    #[inline]
    pub const fn index(self) -> usize {
        self.0.saturating_sub(1) as usize
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "NodeId({})", self.0)
        } else {
            write!(f, "NodeId::INVALID")
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::INVALID
    }
}

/// Identity of one block's statement list.
///
/// `ScopeId::GLOBAL` (1) is the top level; every parsed body mints the next
/// id. `ScopeId::NONE` is the parent of the global scope.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct ScopeId(u32);

impl ScopeId {
    pub const NONE: ScopeId = ScopeId(0);
    pub const GLOBAL: ScopeId = ScopeId(1);

    #[inline]
    pub const fn new(raw: u32) -> Self {
        ScopeId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_global(self) -> bool {
        self.0 == 1
    }
}

impl fmt::Debug for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScopeId({})", self.0)
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}", self.0)
    }
}

impl Default for ScopeId {
    fn default() -> Self {
        Self::NONE
    }
}

/// Index of an argument or parameter list in the list pool.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct ListId(u32);

impl ListId {
    pub const INVALID: ListId = ListId(u32::MAX);

    #[inline]
    pub const fn new(index: u32) -> Self {
        ListId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Index of one item in the list-item pool.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct ListItemId(u32);

impl ListItemId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        ListItemId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[cfg(test)]
mod tests;
