//! Condor Eval - the tree-walking runner.
//!
//! Executes a sealed [`AstArena`](condor_ir::AstArena) directly:
//!
//! - `ContextPool`: fixed-capacity value cells, memoizing one node's value each
//! - `Runner`: statement dispatch, the memoized value protocol, arithmetic and
//!   the call protocol with suspension of recursive activations
//! - `PrintHandler`: where top-level results are echoed (`>> 7`)
//!
//! Contexts are reclaimed explicitly: transient statement results after each
//! statement, and every context bound to a function body when a call unwinds.

mod context_pool;
pub mod errors;
mod print_handler;
mod runner;
mod value;

pub use context_pool::{ContextPool, PoolExhausted, SlotId};
pub use errors::{EvalError, EvalErrorKind};
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
    StdoutPrintHandler,
};
pub use runner::{Runner, RunnerBuilder, RunnerConfig, MIN_CONTEXT_CAPACITY};
pub use value::Value;

#[cfg(test)]
mod tests;
