//! Interpreter configuration.

use std::fmt;

use crate::{stdout_handler, SharedPrintHandler};

/// Evaluation settings.
///
/// ```
/// use fatlisp_eval::{buffer_handler, EvalConfig};
///
/// let config = EvalConfig::default()
///     .max_call_depth(Some(64))
///     .print_handler(buffer_handler());
/// assert_eq!(config.max_call_depth, Some(64));
/// ```
#[derive(Clone)]
pub struct EvalConfig {
    /// Maximum nested function applications, or `None` to rely on stack
    /// growth alone.
    pub max_call_depth: Option<usize>,
    /// Where `puts` writes.
    pub print: SharedPrintHandler,
}

impl EvalConfig {
    #[must_use]
    pub fn max_call_depth(mut self, depth: Option<usize>) -> Self {
        self.max_call_depth = depth;
        self
    }

    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print = handler;
        self
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            max_call_depth: default_max_call_depth(),
            print: stdout_handler(),
        }
    }
}

impl fmt::Debug for EvalConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let print = match *self.print {
            crate::PrintHandlerImpl::Stdout(_) => "stdout",
            crate::PrintHandlerImpl::Buffer(_) => "buffer",
            crate::PrintHandlerImpl::Silent => "silent",
        };
        f.debug_struct("EvalConfig")
            .field("max_call_depth", &self.max_call_depth)
            .field("print", &print)
            .finish()
    }
}

/// `None` on native targets (stacker grows the stack); WASM has a fixed
/// stack, so it gets a bound.
fn default_max_call_depth() -> Option<usize> {
    #[cfg(target_arch = "wasm32")]
    {
        Some(200)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[cfg(test)]
mod tests;
