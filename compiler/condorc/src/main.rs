//! Condor CLI.

use std::io::IsTerminal;
use std::process::ExitCode;

use condor_diagnostic::{ColorMode, Diagnostic, DiagnosticEmitter, TerminalEmitter};
use condorc::cli::USAGE;
use condorc::commands::{count_source, explain, lex_source, parse_source, run_source};
use condorc::{init_tracing, parse_args, Command};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let invocation = match parse_args(&args) {
        Ok(invocation) => invocation,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(invocation.verbose);

    let path = match &invocation.command {
        Command::Help => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Command::Explain { code } => {
            return match explain(code) {
                Some(text) => {
                    println!("{text}");
                    ExitCode::SUCCESS
                }
                None => {
                    eprintln!("error: unknown error code `{code}`");
                    ExitCode::FAILURE
                }
            };
        }
        Command::Run { path, .. }
        | Command::Parse { path }
        | Command::Lex { path }
        | Command::Count { path } => path.clone(),
    };

    let source = match std::fs::read_to_string(&path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: cannot read '{path}': {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout().lock();
    let result = match invocation.command {
        Command::Run { config, .. } => {
            drop(stdout);
            run_source(&source, config, condor_eval::stdout_handler())
        }
        Command::Parse { .. } => parse_source(&source, &mut stdout),
        Command::Lex { .. } => lex_source(&source, &mut stdout),
        Command::Count { .. } => count_source(&source, &mut stdout),
        Command::Help | Command::Explain { .. } => Ok(()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(diagnostic) => {
            report(&diagnostic, &path, &source);
            ExitCode::FAILURE
        }
    }
}

fn report(diagnostic: &Diagnostic, path: &str, source: &str) {
    let is_tty = std::io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::stderr(ColorMode::Auto, is_tty).with_source(path, source);
    emitter.emit(diagnostic);
    emitter.flush();
}
