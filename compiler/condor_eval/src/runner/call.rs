//! The call protocol.
//!
//! Arguments are evaluated in the caller's bindings, then every binding of the
//! callee's body scope is suspended so a recursive activation starts clean.
//! On unwind the body's contexts are released and the suspended ones
//! restored. Only the (transient) result survives the call.

use condor_ir::{ListId, NodeId, NodeKind, ScopeId};
use condor_stack::ensure_sufficient_stack;
use smallvec::SmallVec;
use tracing::debug;

use super::Runner;
use crate::{EvalError, SlotId};

impl Runner<'_> {
    /// Call `func` with the argument expressions in `args`.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn run_func_with_args(
        &mut self,
        func: NodeId,
        args: ListId,
    ) -> Result<Option<SlotId>, EvalError> {
        ensure_sufficient_stack(|| self.call(func, args))
    }

    fn call(&mut self, func: NodeId, args: ListId) -> Result<Option<SlotId>, EvalError> {
        let arena = self.arena;
        let NodeKind::Func { params, body, .. } = arena.node(func).kind else {
            return Err(EvalError::internal(format!("{func} is not a function")));
        };

        let mut arg_slots: SmallVec<[SlotId; 8]> = SmallVec::with_capacity(arena.list_len(args));
        for arg in arena.list_nodes(args) {
            let slot = self.set_node_value(arg)?;
            let slot = if arena.node(arg).is_decl() {
                // A variable passed by name keeps its own binding.
                let copy = self.pool.acquire()?;
                self.pool.set_value(copy, self.pool.value(slot));
                copy
            } else {
                self.pool.detach(slot);
                slot
            };
            arg_slots.push(slot);
        }

        // Nodes whose bindings belong to this activation: the body scope,
        // plus parameters that name a variable declared outside it.
        let frame: SmallVec<[NodeId; 16]> = arena
            .nodes_in_scope(body)
            .iter()
            .copied()
            .chain(
                arena
                    .list_nodes(params)
                    .filter(|&param| arena.node(param).scope != body),
            )
            .collect();

        let mut suspended: SmallVec<[(NodeId, SlotId); 8]> = SmallVec::new();
        for &node in &frame {
            if let Some(slot) = self.pool.lookup(node) {
                self.pool.detach(slot);
                suspended.push((node, slot));
            }
        }
        debug!(suspended = suspended.len(), "enter body");

        let mut arg_slots = arg_slots.into_iter();
        for param in arena.list_nodes(params) {
            let Some(slot) = arg_slots.next() else { break };
            self.pool.bind(slot, param);
        }
        for surplus in arg_slots {
            self.pool.release(surplus);
        }

        let result = self.run(body);

        // Unwind even on error.
        let result = result.and_then(|result| self.detach_result(result, body));
        for &node in &frame {
            if let Some(slot) = self.pool.lookup(node) {
                self.pool.release(slot);
            }
        }
        for (node, slot) in suspended {
            self.pool.bind(slot, node);
        }
        result
    }

    /// Turn the body's result into a transient slot the caller owns.
    fn detach_result(
        &mut self,
        result: Option<SlotId>,
        body: ScopeId,
    ) -> Result<Option<SlotId>, EvalError> {
        let Some(slot) = result else {
            return Ok(None);
        };
        match self.pool.owner(slot) {
            None => Ok(Some(slot)),
            Some(owner) if self.arena.node(owner).scope == body => {
                self.pool.detach(slot);
                Ok(Some(slot))
            }
            Some(_) => {
                let copy = self.pool.acquire()?;
                self.pool.set_value(copy, self.pool.value(slot));
                Ok(Some(copy))
            }
        }
    }
}
