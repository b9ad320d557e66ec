//! Core diagnostic type shared by every phase.

use fatlisp_ir::Span;
use std::fmt;

use crate::{ErrorCode, Location, SourceFile};

/// A diagnostic message with an error code and the span it points at.
///
/// Built with a small fluent API:
///
/// ```
/// use fatlisp_diagnostic::{Diagnostic, ErrorCode};
/// use fatlisp_ir::Span;
///
/// let diag = Diagnostic::error(ErrorCode::E2001)
///     .with_message("unable to resolve 'foo'")
///     .at(Span::new(1, 4));
/// assert_eq!(diag.span, Span::new(1, 4));
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
}

impl Diagnostic {
    /// Create an error diagnostic. The message defaults to the code's
    /// description until [`with_message`](Self::with_message) replaces it.
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: code.description().to_string(),
            span: Span::DUMMY,
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[must_use]
    pub fn at(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Resolve the span against `source`, producing the renderable form.
    pub fn locate(self, source: &SourceFile) -> LocatedDiagnostic {
        LocatedDiagnostic {
            location: source.location(self.span),
            diagnostic: self,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

/// A diagnostic paired with its resolved source location.
///
/// `Display` renders exactly `"<sourceName>:<line>:<column> <message>"`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct LocatedDiagnostic {
    pub diagnostic: Diagnostic,
    pub location: Location,
}

impl LocatedDiagnostic {
    pub fn code(&self) -> ErrorCode {
        self.diagnostic.code
    }
}

impl fmt::Display for LocatedDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.location, self.diagnostic.message)
    }
}
