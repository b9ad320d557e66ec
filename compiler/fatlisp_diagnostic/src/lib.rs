//! Diagnostic system for positioned error reporting.
//!
//! Every failure in the pipeline (lexing, parsing, evaluation) is turned
//! into a [`Diagnostic`]: an [`ErrorCode`], a message, and the [`Span`] it
//! points at. Pairing a diagnostic with its [`SourceFile`] resolves the span
//! to a [`Location`] and renders the single-line form tooling relies on:
//!
//! ```text
//! <sourceName>:<line>:<column> <message>
//! ```
//!
//! [`Span`]: fatlisp_ir::Span

mod diagnostic;
mod error_code;
mod source;
pub mod span_utils;

pub use diagnostic::{Diagnostic, LocatedDiagnostic};
pub use error_code::ErrorCode;
pub use source::{Location, SourceFile};
