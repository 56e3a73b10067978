//! Condor driver: argument parsing, logging setup and the `condor` commands.
//!
//! Every command reads one source file and runs the pipeline up to the stage
//! it reports on: `lex` (tokens), `count` (arena capacities), `parse` (AST
//! dump) or `run` (evaluate and echo).

pub mod cli;
pub mod commands;
mod tracing_setup;

pub use cli::{parse_args, Command, Invocation, UsageError};
pub use tracing_setup::init_tracing;
