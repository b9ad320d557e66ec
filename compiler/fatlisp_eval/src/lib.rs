//! Evaluator for fatlisp.
//!
//! [`Interpreter`] walks a parsed tree against a global [`Environment`]
//! seeded by [`prelude`]. Ordinary functions receive evaluated arguments
//! checked against their [`Signature`](fatlisp_value::Signature); special
//! forms receive the raw argument expressions and decide what to evaluate.
//!
//! [`Environment`]: fatlisp_value::Environment

mod builtins;
mod config;
mod interpreter;
mod print_handler;
mod special_forms;
mod stack;

pub use builtins::prelude;
pub use config::EvalConfig;
pub use interpreter::{Interpreter, ProgramOutput};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use stack::ensure_sufficient_stack;
