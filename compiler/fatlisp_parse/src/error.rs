//! Parse errors.

use std::fmt;

use fatlisp_diagnostic::{Diagnostic, ErrorCode};
use fatlisp_ir::{LexErrorKind, Span};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Error token from the lexer.
    Lex(LexErrorKind),
    /// Number token that is neither a valid integer nor a valid float,
    /// e.g. `1.2.3` or `1-2`.
    InvalidNumber { text: String },
    /// `)` with no open list.
    UnexpectedCloseList,
    /// `'` with nothing after it in the same list.
    DanglingQuote,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::Lex(kind) => write!(f, "{kind}"),
            ParseErrorKind::InvalidNumber { text } => write!(f, "invalid number: {text}"),
            ParseErrorKind::UnexpectedCloseList => write!(f, "unexpected ')'"),
            ParseErrorKind::DanglingQuote => write!(f, "quote is not followed by a value"),
        }
    }
}

/// Fatal parse error. Parsing stops at the first one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    #[cold]
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    pub fn code(&self) -> ErrorCode {
        match &self.kind {
            ParseErrorKind::Lex(LexErrorKind::InvalidNumber) => ErrorCode::E0001,
            ParseErrorKind::Lex(LexErrorKind::UnterminatedString) => ErrorCode::E0002,
            ParseErrorKind::Lex(LexErrorKind::UnterminatedList) => ErrorCode::E0003,
            ParseErrorKind::Lex(LexErrorKind::SourceTooLarge) => ErrorCode::E0004,
            ParseErrorKind::InvalidNumber { .. } => ErrorCode::E1001,
            ParseErrorKind::UnexpectedCloseList => ErrorCode::E1002,
            ParseErrorKind::DanglingQuote => ErrorCode::E1003,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .at(self.span)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests;
