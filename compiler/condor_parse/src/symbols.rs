//! Scope-chain symbol table used during parsing.
//!
//! Resolution happens once, at parse time; afterwards every use site simply
//! holds the declaration's `NodeId`.

use condor_ir::{Name, NodeId};
use rustc_hash::FxHashMap;

pub(crate) struct SymbolTable {
    /// Innermost frame last. Frame 0 is the global scope.
    frames: Vec<FxHashMap<Name, NodeId>>,
}

impl SymbolTable {
    pub(crate) fn new() -> Self {
        SymbolTable {
            frames: vec![FxHashMap::default()],
        }
    }

    pub(crate) fn push(&mut self) {
        self.frames.push(FxHashMap::default());
    }

    pub(crate) fn pop(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// Declare `name` in the innermost frame, shadowing outer declarations.
    pub(crate) fn declare(&mut self, name: Name, node: NodeId) {
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(name, node);
        }
    }

    /// Innermost declaration of `name`.
    pub(crate) fn resolve(&self, name: Name) -> Option<NodeId> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.get(&name).copied())
    }

    #[cfg(test)]
    pub(crate) fn depth(&self) -> usize {
        self.frames.len()
    }
}
