//! Fatlisp IR - positioned token types.
//!
//! This crate holds the small data types every phase agrees on:
//! - [`Span`]: byte range into the source text
//! - [`Token`] / [`TokenKind`]: lexer output, borrowed from the source
//! - [`LexErrorKind`]: what an error token reports
//!
//! It has no dependencies so external tools (highlighters, formatters) can
//! use the token stream without pulling in the evaluator.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod token;

pub use span::{Span, SpanError};
pub use token::{LexErrorKind, Token, TokenKind};
