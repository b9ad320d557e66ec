//! fatlisp: a small Lisp.
//!
//! ```
//! let results = fatlisp::run("demo", "(def double (fn (x) (+ x x))) (double 21)").unwrap();
//! assert_eq!(results[1].to_string(), "42");
//! ```
//!
//! [`run`] evaluates with a fresh [`Interpreter`]. [`run_with`] evaluates
//! into an existing one, so top-level definitions carry over between
//! calls. Every failure comes back as an [`Error`] whose `Display` is
//! `"<sourceName>:<line>:<column> <message>"`.

mod error;

use std::sync::Once;

pub use error::Error;
pub use fatlisp_diagnostic::{ErrorCode, Location};
pub use fatlisp_eval::{
    buffer_handler, silent_handler, stdout_handler, EvalConfig, Interpreter, SharedPrintHandler,
};
pub use fatlisp_ir::Span;
pub use fatlisp_value::{Type, Value, ValueKind};

use tracing::debug;

/// Results of [`run_with`]: the values of the top-level forms evaluated
/// before the first failure, and that failure.
#[derive(Debug, Default)]
pub struct RunOutput {
    pub results: Vec<Value>,
    pub error: Option<Error>,
}

impl RunOutput {
    pub fn into_result(self) -> Result<Vec<Value>, Error> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.results),
        }
    }
}

/// Parse `source` into its root list.
pub fn parse(name: &str, source: &str) -> Result<Value, Error> {
    fatlisp_parse::parse(name, source)
        .map_err(|error| Error::locate(error.to_diagnostic(), name, source))
}

/// Parse and evaluate `source` with a default interpreter.
pub fn run(name: &str, source: &str) -> Result<Vec<Value>, Error> {
    run_with(&mut Interpreter::new(), name, source).into_result()
}

/// Parse `source` and evaluate it in `interp`'s global scope.
///
/// A syntax error means nothing is evaluated.
pub fn run_with(interp: &mut Interpreter, name: &str, source: &str) -> RunOutput {
    let root = match parse(name, source) {
        Ok(root) => root,
        Err(error) => {
            debug!(%error, "parse failed");
            return RunOutput {
                results: Vec::new(),
                error: Some(error),
            };
        }
    };
    let output = interp.eval_program(&root);
    RunOutput {
        results: output.results,
        error: output
            .error
            .map(|error| Error::locate(error.to_diagnostic(), name, source)),
    }
}

static TRACING_INIT: Once = Once::new();

/// Install a tree-shaped tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set, e.g. `RUST_LOG=fatlisp_eval=debug`.
/// Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var("RUST_LOG").is_ok() {
            // Another subscriber may already be installed by the host.
            let _ = tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(
                    HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .try_init();
        }
    });
}
