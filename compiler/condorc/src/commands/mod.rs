//! The `condor` commands.
//!
//! Each command takes the source text and writes its report to `out`. A
//! failure comes back as the [`Diagnostic`] to render; reading the file and
//! rendering are the caller's job.

mod dump;

pub use dump::{describe_node, describe_token};

use std::io::Write;

use condor_diagnostic::{Diagnostic, ErrorCode, IntoDiagnostic};
use condor_eval::{RunnerBuilder, RunnerConfig, SharedPrintHandler};
use condor_ir::{StringInterner, TokenList};
use condor_parse::ParseOutput;

fn lex(source: &str, interner: &StringInterner) -> Result<TokenList, Diagnostic> {
    condor_lexer::lex(source, interner).map_err(|err| err.to_diagnostic())
}

fn parse(source: &str, interner: &StringInterner) -> Result<ParseOutput, Diagnostic> {
    let tokens = lex(source, interner)?;
    condor_parse::parse(&tokens, interner).map_err(|err| err.to_diagnostic())
}

/// Output that could not be written is reported like any other failure.
fn io_failure(err: &std::io::Error) -> Diagnostic {
    Diagnostic::error(ErrorCode::E9001)
        .with_message(format!("failed to write output: {err}"))
}

/// `condor explain`: `CODE: description`, or `None` for an unknown code.
pub fn explain(code: &str) -> Option<String> {
    ErrorCode::from_code(code).map(|code| format!("{code}: {}", code.description()))
}

/// `condor lex`: one token per line.
pub fn lex_source(source: &str, out: &mut impl Write) -> Result<(), Diagnostic> {
    let interner = StringInterner::new();
    let tokens = lex(source, &interner)?;
    for token in tokens.iter() {
        writeln!(out, "{}", describe_token(token, &interner)).map_err(|e| io_failure(&e))?;
    }
    Ok(())
}

/// `condor count`: the capacities the counting pass computes.
pub fn count_source(source: &str, out: &mut impl Write) -> Result<(), Diagnostic> {
    let interner = StringInterner::new();
    let tokens = lex(source, &interner)?;
    let capacity = condor_parse::count_capacity(&tokens);
    writeln!(out, "{capacity}").map_err(|e| io_failure(&e))
}

/// `condor parse`: one node per line, followed by pool usage.
pub fn parse_source(source: &str, out: &mut impl Write) -> Result<(), Diagnostic> {
    let interner = StringInterner::new();
    let output = parse(source, &interner)?;
    let arena = &output.arena;
    let write = |out: &mut dyn Write| -> std::io::Result<()> {
        for node in arena.nodes() {
            writeln!(out, "{}", describe_node(node, arena, &interner))?;
        }
        for (pool, used, capacity) in arena.usage() {
            writeln!(out, "// {} pool: {used}/{capacity}", pool.name())?;
        }
        Ok(())
    };
    write(out).map_err(|e| io_failure(&e))
}

/// `condor run`: evaluate, echoing top-level results to `print`.
pub fn run_source(
    source: &str,
    config: RunnerConfig,
    print: SharedPrintHandler,
) -> Result<(), Diagnostic> {
    let interner = StringInterner::new();
    let output = parse(source, &interner)?;
    tracing::debug!(capacity = %output.capacity, "parsed");
    let mut runner = RunnerBuilder::new(&output.arena, &interner)
        .config(config)
        .print_handler(print)
        .build();
    runner.run_program().map_err(|err| err.to_diagnostic())
}
