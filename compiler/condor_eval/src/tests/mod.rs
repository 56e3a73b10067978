#![allow(clippy::unwrap_used, clippy::expect_used)]

mod programs;

use crate::{buffer_handler, EvalError, Runner, RunnerBuilder, RunnerConfig};
use condor_ir::{AstArena, StringInterner};

/// Lex, parse and build a buffered runner for `source`, then hand both to `f`.
pub(crate) fn with_program<R>(
    source: &str,
    config: RunnerConfig,
    f: impl FnOnce(&mut Runner<'_>, &AstArena) -> R,
) -> R {
    let interner = StringInterner::new();
    let tokens = condor_lexer::lex(source, &interner).unwrap();
    let output = condor_parse::parse(&tokens, &interner)
        .unwrap_or_else(|err| panic!("`{source}` failed to parse: {err}"));
    let mut runner = RunnerBuilder::new(&output.arena, &interner)
        .config(config)
        .print_handler(buffer_handler())
        .build();
    f(&mut runner, &output.arena)
}

/// Run `source` and return what it echoed plus the run's outcome.
pub(crate) fn run_source(source: &str) -> (String, Result<(), EvalError>) {
    with_program(source, RunnerConfig::default(), |runner, _| {
        let result = runner.run_program();
        (runner.print_handler().get_output(), result)
    })
}

pub(crate) fn output_of(source: &str) -> String {
    let (output, result) = run_source(source);
    if let Err(err) = result {
        panic!("`{source}` failed: {err}");
    }
    output
}
