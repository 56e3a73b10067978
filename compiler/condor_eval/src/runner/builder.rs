//! `RunnerBuilder` and runner configuration.

use condor_ir::{AstArena, StringInterner};

use super::Runner;
use crate::{stdout_handler, ContextPool, SharedPrintHandler};

/// Smallest default context pool.
pub const MIN_CONTEXT_CAPACITY: usize = 16;

/// Runner options set by the driver.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Context pool size. `None` sizes the pool from the arena's node
    /// capacity (at least [`MIN_CONTEXT_CAPACITY`]).
    pub context_capacity: Option<usize>,
}

impl RunnerConfig {
    /// The pool size this config gives a runner over `arena`.
    pub fn context_capacity_for(&self, arena: &AstArena) -> usize {
        self.context_capacity
            .unwrap_or_else(|| arena.node_capacity().max(MIN_CONTEXT_CAPACITY))
    }
}

/// Builder for [`Runner`].
///
/// ```text
/// let mut runner = RunnerBuilder::new(&arena, &interner)
///     .context_capacity(64)
///     .print_handler(buffer_handler())
///     .build();
/// runner.run_program()?;
/// ```
pub struct RunnerBuilder<'a> {
    arena: &'a AstArena,
    interner: &'a StringInterner,
    config: RunnerConfig,
    print_handler: Option<SharedPrintHandler>,
}

impl<'a> RunnerBuilder<'a> {
    pub fn new(arena: &'a AstArena, interner: &'a StringInterner) -> Self {
        RunnerBuilder {
            arena,
            interner,
            config: RunnerConfig::default(),
            print_handler: None,
        }
    }

    #[must_use]
    pub fn config(mut self, config: RunnerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn context_capacity(mut self, capacity: usize) -> Self {
        self.config.context_capacity = Some(capacity);
        self
    }

    /// Where top-level results are echoed. Defaults to stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// The arena must be sealed; an unsealed arena has no scope index.
    pub fn build(self) -> Runner<'a> {
        debug_assert!(self.arena.is_sealed(), "runner over an unsealed arena");
        let capacity = self.config.context_capacity_for(self.arena);
        tracing::debug!(capacity, "context pool");
        Runner {
            arena: self.arena,
            interner: self.interner,
            pool: ContextPool::new(capacity, self.arena.node_count()),
            print: self.print_handler.unwrap_or_else(stdout_handler),
        }
    }
}
