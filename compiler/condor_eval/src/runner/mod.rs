//! The runner: executes statements of a scope against the context pool.
//!
//! Every evaluation yields a context slot. A slot bound to a node memoizes
//! it; an unbound (transient) slot belongs to whoever received it, and that
//! receiver must either pass it on or release it.

mod builder;
mod call;
mod math;

pub use builder::{RunnerBuilder, RunnerConfig, MIN_CONTEXT_CAPACITY};

use condor_ir::{AstArena, NodeId, NodeKind, ScopeId, StringInterner};
use condor_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ContextPool, EvalError, SharedPrintHandler, SlotId, Value};

pub struct Runner<'a> {
    arena: &'a AstArena,
    interner: &'a StringInterner,
    pool: ContextPool,
    print: SharedPrintHandler,
}

impl<'a> Runner<'a> {
    /// Run the top-level scope, echoing each statement's result.
    pub fn run_program(&mut self) -> Result<(), EvalError> {
        if let Some(slot) = self.run(ScopeId::GLOBAL)? {
            self.release_if_transient(slot);
        }
        Ok(())
    }

    /// Execute the statements of `scope` in declaration order.
    ///
    /// A `return` stops the scan and yields its result.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn run(&mut self, scope: ScopeId) -> Result<Option<SlotId>, EvalError> {
        let arena = self.arena;
        for &id in arena.nodes_in_scope(scope) {
            let node = arena.node(id);
            if !node.is_stmt {
                continue;
            }
            let result = self.run_statement(id).map_err(|e| e.or_span(node.span))?;
            if let NodeKind::Return { .. } = node.kind {
                return Ok(result);
            }
            let Some(slot) = result else { continue };
            if scope.is_global() && !matches!(node.kind, NodeKind::Func { .. }) {
                self.echo(slot);
            }
            self.release_if_transient(slot);
        }
        Ok(None)
    }

    /// Dispatch one statement.
    pub fn run_statement(&mut self, id: NodeId) -> Result<Option<SlotId>, EvalError> {
        let arena = self.arena;
        ensure_sufficient_stack(|| match arena.node(id).kind {
            NodeKind::FuncCall { func, args } => self.run_func_with_args(func, args),
            NodeKind::Return { value, .. } if value.is_valid() => self.run_statement(value),
            NodeKind::Return { .. } => Ok(None),
            NodeKind::Binary { .. } => self.run_binary(id).map(Some),
            _ => self.set_node_value(id).map(Some),
        })
    }

    /// The memoized value protocol: the context bound to `id`, computing and
    /// binding it first if there is none.
    pub fn set_node_value(&mut self, id: NodeId) -> Result<SlotId, EvalError> {
        if let Some(slot) = self.pool.lookup(id) {
            return Ok(slot);
        }
        let slot = self.pool.acquire()?;
        self.pool.bind(slot, id);

        let arena = self.arena;
        let value = match arena.node(id).kind {
            NodeKind::Var {
                data_type, init, ..
            } => match init {
                Some(init) => {
                    let source = self.set_node_value(init)?;
                    self.pool.value(source).map(|v| v.convert(data_type))
                }
                None => None,
            },
            NodeKind::FuncCall { func, args } => match self.run_func_with_args(func, args)? {
                Some(result) => {
                    let value = self.pool.value(result);
                    self.release_if_transient(result);
                    value
                }
                None => None,
            },
            NodeKind::Binary { .. } => {
                let result = self.run_binary(id)?;
                self.pool.value(result)
            }
            ref kind => Value::from_literal(kind),
        };
        trace!(%id, %slot, ?value, "set node value");
        self.pool.set_value(slot, value);
        Ok(slot)
    }

    /// Left operand through the value protocol, right operand as a
    /// statement; the result is written into the left context.
    fn run_binary(&mut self, id: NodeId) -> Result<SlotId, EvalError> {
        let arena = self.arena;
        let node = arena.node(id);
        let NodeKind::Binary { left, right, op } = node.kind else {
            return Err(EvalError::internal(format!("{id} is not a binary expression")));
        };
        let left = self.set_node_value(left)?;
        let right = self.run_statement(right)?;
        let result = self.run_math(left, right, op);
        if let Some(right) = right {
            if right != left {
                self.release_if_transient(right);
            }
        }
        result.map_err(|e| e.or_span(node.span))?;
        Ok(left)
    }

    fn echo(&self, slot: SlotId) {
        if let Some(value) = self.pool.value(slot) {
            self.print
                .println(&format!(">> {}", value.display(self.interner)));
        }
    }

    fn release_if_transient(&mut self, slot: SlotId) {
        if self.pool.is_transient(slot) {
            self.pool.release(slot);
        }
    }

    /// The context pool, for inspection after a run.
    pub fn pool(&self) -> &ContextPool {
        &self.pool
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print
    }
}
