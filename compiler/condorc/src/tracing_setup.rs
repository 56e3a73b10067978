//! Logging setup.
//!
//! Filter directives come from `CONDOR_LOG`, falling back to `RUST_LOG`.
//! Output is a `tracing-tree` hierarchy on stderr, so a runner span nests
//! under the call that opened it.

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use tracing_tree::HierarchicalLayer;

const VERBOSE_DIRECTIVES: &str =
    "condor_lexer=debug,condor_parse=debug,condor_eval=debug,condorc=debug";

/// Install the global subscriber.
///
/// Installs nothing when neither variable is set and `verbose` is off.
pub fn init_tracing(verbose: bool) {
    let directives = std::env::var("CONDOR_LOG").or_else(|_| std::env::var("RUST_LOG"));
    let filter = match directives {
        Ok(directives) => {
            EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("warn"))
        }
        Err(_) if verbose => EnvFilter::new(VERBOSE_DIRECTIVES),
        Err(_) => return,
    };

    let layer = HierarchicalLayer::new(2)
        .with_writer(std::io::stderr)
        .with_targets(true)
        .with_bracketed_fields(true);

    // A subscriber may already be installed (tests); keep it.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
