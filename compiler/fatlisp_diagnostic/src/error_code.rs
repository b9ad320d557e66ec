//! Error codes for all diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the phase that raised it.

use std::fmt;

/// Error codes for all diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E2xxx: Evaluation errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Malformed number literal
    E0001,
    /// Unterminated string literal
    E0002,
    /// Unterminated list at end of input
    E0003,
    /// Source text too large to address with 32-bit offsets
    E0004,

    // Parser Errors (E1xxx)
    /// Number token that converts to neither integer nor float
    E1001,
    /// `)` without a matching `(`
    E1002,
    /// Quote marker not followed by a value
    E1003,

    // Evaluation Errors (E2xxx)
    /// Identifier has no binding in the environment chain
    E2001,
    /// Wrong number of arguments
    E2002,
    /// Argument of the wrong type
    E2003,
    /// List head is neither a function nor a special form
    E2004,
    /// Comparison between incompatible types
    E2005,
    /// Integer division by zero
    E2006,
    /// Integer arithmetic overflow
    E2007,
    /// Maximum call depth exceeded
    E2008,
}

impl ErrorCode {
    /// Get the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E2007 => "E2007",
            ErrorCode::E2008 => "E2008",
        }
    }

    /// One-line description of the error class.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "malformed number literal",
            ErrorCode::E0002 => "unterminated string literal",
            ErrorCode::E0003 => "unterminated list",
            ErrorCode::E0004 => "source too large",
            ErrorCode::E1001 => "invalid number conversion",
            ErrorCode::E1002 => "unmatched closing parenthesis",
            ErrorCode::E1003 => "dangling quote",
            ErrorCode::E2001 => "unresolved identifier",
            ErrorCode::E2002 => "wrong number of arguments",
            ErrorCode::E2003 => "argument type mismatch",
            ErrorCode::E2004 => "not a function",
            ErrorCode::E2005 => "incomparable types",
            ErrorCode::E2006 => "division by zero",
            ErrorCode::E2007 => "integer overflow",
            ErrorCode::E2008 => "call depth limit exceeded",
        }
    }

    /// Whether this code was raised before evaluation started.
    pub fn is_syntax_error(&self) -> bool {
        self.as_str().starts_with("E0") || self.as_str().starts_with("E1")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
