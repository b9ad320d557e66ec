//! Evaluation errors.
//!
//! `EvalErrorKind` carries the structured data of each failure and renders
//! the message through `Display`. `EvalError` adds the span. Factory
//! functions are the public way to build them and are `#[cold]` since they
//! only run on the failure path.

use std::fmt;

use fatlisp_diagnostic::{Diagnostic, ErrorCode};
use fatlisp_ir::Span;

use crate::{Type, TypeSet, Value};

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    UnresolvedIdentifier {
        name: String,
    },
    ArityMismatch {
        name: String,
        min: usize,
        max: Option<usize>,
        got: usize,
    },
    TypeMismatch {
        /// 1-based argument position.
        position: usize,
        name: String,
        expected: TypeSet,
        got: Type,
    },
    /// `fn` parameter list entry that is not an identifier.
    InvalidParameter {
        got: Type,
    },
    /// `compare` across non-numeric mismatched types.
    IncomparableTypes {
        left: Type,
        right: Type,
    },
    /// `compare` on a type with no ordering.
    NotComparable {
        ty: Type,
    },
    NotAFunction {
        value: String,
    },
    DivisionByZero,
    IntegerOverflow {
        operation: &'static str,
    },
    RecursionLimit {
        depth: usize,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedIdentifier { name } => write!(f, "unable to resolve '{name}'"),
            Self::ArityMismatch {
                name,
                min,
                max,
                got,
            } => {
                let arg_word = |n: usize| if n == 1 { "argument" } else { "arguments" };
                match max {
                    Some(max) if max == min => {
                        write!(f, "{name} expects {min} {}, got {got}", arg_word(*min))
                    }
                    Some(max) => write!(f, "{name} expects {min} to {max} arguments, got {got}"),
                    None => write!(
                        f,
                        "{name} expects at least {min} {}, got {got}",
                        arg_word(*min)
                    ),
                }
            }
            Self::TypeMismatch {
                position,
                name,
                expected,
                got,
            } => write!(
                f,
                "argument {position} of {name} should be of type {expected}, got {got}"
            ),
            Self::InvalidParameter { got } => {
                write!(f, "fn parameters must be identifiers, got {got}")
            }
            Self::IncomparableTypes { left, right } => {
                write!(f, "can't compare {left} with {right}")
            }
            Self::NotComparable { ty } => write!(f, "can't compare type {ty}"),
            Self::NotAFunction { value } => write!(f, "not a function: {value}"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::IntegerOverflow { operation } => write!(f, "integer overflow in {operation}"),
            Self::RecursionLimit { depth } => {
                write!(f, "maximum call depth exceeded (limit: {depth})")
            }
        }
    }
}

impl EvalErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnresolvedIdentifier { .. } => ErrorCode::E2001,
            Self::ArityMismatch { .. } => ErrorCode::E2002,
            Self::TypeMismatch { .. } | Self::InvalidParameter { .. } => ErrorCode::E2003,
            Self::NotAFunction { .. } => ErrorCode::E2004,
            Self::IncomparableTypes { .. } | Self::NotComparable { .. } => ErrorCode::E2005,
            Self::DivisionByZero => ErrorCode::E2006,
            Self::IntegerOverflow { .. } => ErrorCode::E2007,
            Self::RecursionLimit { .. } => ErrorCode::E2008,
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Source location where the error occurred. Native functions raise
    /// errors without one; the evaluator fills in the call site.
    pub span: Option<Span>,
}

impl EvalError {
    #[cold]
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError { kind, span: None }
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach `span` unless a location is already known.
    #[must_use]
    pub fn or_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
        }
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code())
            .with_message(self.message())
            .at(self.span.unwrap_or(Span::DUMMY))
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl std::error::Error for EvalError {}

// Factories

#[cold]
pub fn unresolved_identifier(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnresolvedIdentifier {
        name: name.to_string(),
    })
}

#[cold]
pub fn arity_mismatch(name: &str, min: usize, max: Option<usize>, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        min,
        max,
        got,
    })
}

#[cold]
pub fn type_mismatch(position: usize, name: &str, expected: TypeSet, got: Type) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        position,
        name: name.to_string(),
        expected,
        got,
    })
}

#[cold]
pub fn invalid_parameter(got: Type) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidParameter { got })
}

#[cold]
pub fn incomparable_types(left: Type, right: Type) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IncomparableTypes { left, right })
}

#[cold]
pub fn not_comparable(ty: Type) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotComparable { ty })
}

#[cold]
pub fn not_a_function(value: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAFunction {
        value: value.to_string(),
    })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { operation })
}

#[cold]
pub fn recursion_limit(depth: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RecursionLimit { depth })
}
