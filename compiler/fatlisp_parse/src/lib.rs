//! Parser for fatlisp.
//!
//! Turns a token stream into the root list [`Value`](fatlisp_value::Value):
//! one element per top-level form, nested lists mirroring the parentheses,
//! and every `'x` rewritten to `(quote x)`.

mod error;
mod parser;

pub use error::{ParseError, ParseErrorKind};
pub use parser::{parse, Parser};
