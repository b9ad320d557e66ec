//! The error returned at the crate boundary.

use fatlisp_diagnostic::{Diagnostic, ErrorCode, LocatedDiagnostic, Location, SourceFile};
use thiserror::Error;

/// A lexer, parser or evaluation failure resolved to its source position.
///
/// `Display` renders `"<sourceName>:<line>:<column> <message>"`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{location} {message}")]
pub struct Error {
    pub code: ErrorCode,
    pub location: Location,
    pub message: String,
}

impl Error {
    pub(crate) fn locate(diagnostic: Diagnostic, name: &str, source: &str) -> Self {
        Error::from(diagnostic.locate(&SourceFile::new(name, source)))
    }

    /// True for errors raised before evaluation started.
    pub fn is_syntax_error(&self) -> bool {
        self.code.is_syntax_error()
    }
}

impl From<LocatedDiagnostic> for Error {
    fn from(located: LocatedDiagnostic) -> Self {
        Error {
            code: located.code(),
            location: located.location,
            message: located.diagnostic.message,
        }
    }
}
