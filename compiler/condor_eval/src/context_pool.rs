//! Fixed-capacity pool of value cells ("contexts").
//!
//! A context bound to a node memoizes that node's value until it is detached
//! or released. At most one context is bound to a node at a time; the
//! `NodeId -> slot` map is a dense vector indexed by node.

use std::fmt;

use condor_ir::NodeId;
use tracing::trace;

use crate::Value;

/// Index of a context in the pool.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SlotId(u32);

impl SlotId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ctx{}", self.0)
    }
}

/// One pool slot. `owner: None` on an occupied slot marks a transient result.
#[derive(Clone, Debug, Default, PartialEq)]
struct Context {
    value: Option<Value>,
    owner: Option<NodeId>,
    occupied: bool,
}

/// Every slot is occupied.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("context pool exhausted (capacity {capacity})")]
pub struct PoolExhausted {
    pub capacity: usize,
}

pub struct ContextPool {
    slots: Vec<Context>,
    /// Free slots; the most recently released is reused first.
    free: Vec<SlotId>,
    /// Bound slot per node, indexed by `NodeId::index`.
    by_node: Vec<Option<SlotId>>,
    occupied: usize,
}

impl ContextPool {
    /// A pool of `capacity` slots for an arena of `node_count` nodes.
    pub fn new(capacity: usize, node_count: usize) -> Self {
        let capacity = capacity.min(u32::MAX as usize);
        ContextPool {
            slots: vec![Context::default(); capacity],
            free: (0..capacity)
                .rev()
                .map(|i| SlotId(u32::try_from(i).unwrap_or(u32::MAX)))
                .collect(),
            by_node: vec![None; node_count],
            occupied: 0,
        }
    }

    /// Take a free slot: empty, unowned.
    pub fn acquire(&mut self) -> Result<SlotId, PoolExhausted> {
        let Some(slot) = self.free.pop() else {
            return Err(PoolExhausted {
                capacity: self.capacity(),
            });
        };
        self.slots[slot.index()] = Context {
            value: None,
            owner: None,
            occupied: true,
        };
        self.occupied += 1;
        trace!(%slot, occupied = self.occupied, "acquire");
        Ok(slot)
    }

    /// Make `slot` the memo of `node`. A slot previously bound to `node`
    /// becomes transient; a previous owner of `slot` loses its binding.
    pub fn bind(&mut self, slot: SlotId, node: NodeId) {
        self.detach(slot);
        if let Some(entry) = self.by_node.get_mut(node.index()) {
            if let Some(previous) = entry.replace(slot) {
                self.slots[previous.index()].owner = None;
            }
            self.slots[slot.index()].owner = Some(node);
        }
    }

    /// Unbind `slot` from its owner, keeping its value.
    pub fn detach(&mut self, slot: SlotId) {
        if let Some(owner) = self.slots[slot.index()].owner.take() {
            if let Some(entry) = self.by_node.get_mut(owner.index()) {
                if *entry == Some(slot) {
                    *entry = None;
                }
            }
        }
    }

    /// Return `slot` to the free list. Releasing a free slot does nothing.
    pub fn release(&mut self, slot: SlotId) {
        if !self.slots[slot.index()].occupied {
            return;
        }
        self.detach(slot);
        self.slots[slot.index()] = Context::default();
        self.free.push(slot);
        self.occupied -= 1;
        trace!(%slot, occupied = self.occupied, "release");
    }

    /// The slot bound to `node`, if any.
    #[inline]
    pub fn lookup(&self, node: NodeId) -> Option<SlotId> {
        self.by_node.get(node.index()).copied().flatten()
    }

    #[inline]
    pub fn value(&self, slot: SlotId) -> Option<Value> {
        self.slots[slot.index()].value
    }

    #[inline]
    pub fn set_value(&mut self, slot: SlotId, value: Option<Value>) {
        self.slots[slot.index()].value = value;
    }

    #[inline]
    pub fn owner(&self, slot: SlotId) -> Option<NodeId> {
        self.slots[slot.index()].owner
    }

    /// Occupied and unowned.
    #[inline]
    pub fn is_transient(&self, slot: SlotId) -> bool {
        let context = &self.slots[slot.index()];
        context.occupied && context.owner.is_none()
    }

    /// Every `(node, slot)` binding, in node order.
    pub fn live_bindings(&self) -> impl Iterator<Item = (NodeId, SlotId)> + '_ {
        self.by_node.iter().enumerate().filter_map(|(index, slot)| {
            let raw = u32::try_from(index + 1).ok()?;
            slot.map(|slot| (NodeId::new(raw), slot))
        })
    }

    #[inline]
    pub fn occupied(&self) -> usize {
        self.occupied
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

impl fmt::Debug for ContextPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextPool")
            .field("capacity", &self.capacity())
            .field("occupied", &self.occupied)
            .field("bindings", &self.live_bindings().count())
            .finish()
    }
}
