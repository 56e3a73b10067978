//! Command-line parsing.

use condor_eval::RunnerConfig;

pub const USAGE: &str = "\
Usage: condor <command> <file> [options]
       condor explain <code>

Commands:
  run <file>      Evaluate a program, echoing top-level results
  parse <file>    Dump the AST
  lex <file>      Dump the tokens
  count <file>    Print the arena capacities of the counting pass
  explain <code>  Describe an error code such as E4002

Options:
  --contexts=N    Size of the runner's context pool (run only)
  -v, --verbose   Debug logging for the condor crates";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run { path: String, config: RunnerConfig },
    Parse { path: String },
    Lex { path: String },
    Count { path: String },
    Explain { code: String },
    Help,
}

/// A parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub verbose: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("missing command")]
    MissingCommand,
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("missing file path")]
    MissingPath,
    #[error("missing error code")]
    MissingCode,
    #[error("invalid value `{0}` for --contexts")]
    InvalidContexts(String),
    #[error("unknown option `{0}`")]
    UnknownOption(String),
}

/// Parse `args` (without the program name).
pub fn parse_args(args: &[String]) -> Result<Invocation, UsageError> {
    let Some((command, rest)) = args.split_first() else {
        return Err(UsageError::MissingCommand);
    };

    let mut path = None;
    let mut verbose = false;
    let mut config = RunnerConfig::default();
    for arg in rest {
        if arg == "--verbose" || arg == "-v" {
            verbose = true;
        } else if let Some(value) = arg.strip_prefix("--contexts=") {
            let capacity = value
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| UsageError::InvalidContexts(value.to_string()))?;
            config.context_capacity = Some(capacity);
        } else if arg.starts_with('-') {
            return Err(UsageError::UnknownOption(arg.clone()));
        } else if path.is_none() {
            path = Some(arg.clone());
        }
    }

    let command = match command.as_str() {
        "help" | "--help" | "-h" => Command::Help,
        "run" => Command::Run {
            path: path.ok_or(UsageError::MissingPath)?,
            config,
        },
        "parse" => Command::Parse {
            path: path.ok_or(UsageError::MissingPath)?,
        },
        "lex" => Command::Lex {
            path: path.ok_or(UsageError::MissingPath)?,
        },
        "count" => Command::Count {
            path: path.ok_or(UsageError::MissingPath)?,
        },
        "explain" => Command::Explain {
            code: path.ok_or(UsageError::MissingCode)?,
        },
        other => return Err(UsageError::UnknownCommand(other.to_string())),
    };
    Ok(Invocation { command, verbose })
}
