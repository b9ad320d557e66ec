//! Runtime data model shared by the parser and the evaluator.
//!
//! - [`Value`]: the tagged union every phase passes around, with the source
//!   [`Span`](fatlisp_ir::Span) it was parsed from
//! - [`Signature`]: arity and argument type contract of a callable
//! - [`FunctionValue`] / [`SpecialForm`]: the two kinds of callables
//! - [`Environment`]: the lexical scope chain
//! - [`EvalError`]: structured evaluation failures
//!
//! Evaluation itself lives in `fatlisp_eval`; this crate only defines the
//! data it operates on, plus the [`EvalContext`] seam native functions use
//! to reach back into the interpreter.

mod environment;
mod errors;
mod function;
mod heap;
mod types;
mod value;

pub use environment::Environment;
pub use errors::{
    arity_mismatch, division_by_zero, incomparable_types, integer_overflow, invalid_parameter,
    not_a_function, not_comparable, recursion_limit, type_mismatch, unresolved_identifier,
    EvalError, EvalErrorKind, EvalResult,
};
pub use function::{
    Closure, EvalContext, FunctionBody, FunctionValue, NativeFn, SpecialForm, SpecialFormKind,
};
pub use heap::Heap;
pub use types::{ArgTypes, Signature, Type, TypeSet};
pub use value::{Name, Value, ValueKind};
