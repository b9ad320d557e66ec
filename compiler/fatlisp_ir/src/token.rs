//! Token types produced by the lexer.
//!
//! Tokens borrow their text from the source, so a token stream is only
//! valid while the source string is alive. Error tokens carry the
//! [`LexErrorKind`] in their kind and the offending lexeme in `text`.

use crate::Span;
use std::fmt;

/// A token with its span and lexeme.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub span: Span,
    /// Exact source text of the token. Empty for end-of-input and for
    /// errors raised at end-of-input.
    pub text: &'a str,
}

impl<'a> Token<'a> {
    #[inline]
    pub fn new(kind: TokenKind, span: Span, text: &'a str) -> Self {
        Token { kind, span, text }
    }

    /// End-of-input token positioned at `offset`.
    pub fn eof(offset: u32) -> Self {
        Token {
            kind: TokenKind::Eof,
            span: Span::point(offset),
            text: "",
        }
    }

    /// Whether this token ends the stream (end-of-input or error).
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, TokenKind::Eof | TokenKind::Error(_))
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @ {}", self.kind, self.text, self.span)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "EOF"),
            TokenKind::Error(kind) => write!(f, "{kind}"),
            _ if self.text.chars().count() > 10 => {
                let head: String = self.text.chars().take(10).collect();
                write!(f, "{head:?}...")
            }
            _ => write!(f, "{:?}", self.text),
        }
    }
}

/// Token kinds.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// Numeric literal body: characters from `+-.0123456789`.
    Number,
    /// Any other bare word, including `true`, `false` and `nil`.
    Identifier,
    /// String literal including both double quotes.
    String,
    /// `(`
    StartList,
    /// `)`
    CloseList,
    /// `'` reader quote marker.
    Quote,
    /// Lexical error. Always the last token of the stream.
    Error(LexErrorKind),
    /// End of input.
    Eof,
}

/// What went wrong while scanning.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// Number body followed by something other than whitespace, `(`, `)`
    /// or end-of-input (e.g. `42d`).
    InvalidNumber,
    /// End-of-input inside a string literal.
    UnterminatedString,
    /// End-of-input with unclosed `(`.
    UnterminatedList,
    /// Source longer than `u32::MAX` bytes; nothing is scanned.
    SourceTooLarge,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::InvalidNumber => write!(f, "Invalid number"),
            LexErrorKind::UnterminatedString => write!(f, "unexpected end of file"),
            LexErrorKind::UnterminatedList => write!(f, "Unexpected EOF"),
            LexErrorKind::SourceTooLarge => {
                write!(f, "source exceeds {} bytes", u32::MAX)
            }
        }
    }
}
