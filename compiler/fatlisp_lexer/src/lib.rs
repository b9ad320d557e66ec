//! Tokenizer for fatlisp source text.
//!
//! [`Lexer`] hands out one [`Token`] per [`Lexer::next_token`] call, with a
//! single token of lookahead through [`Lexer::peek_token`]. The stream always
//! ends with exactly one terminal token: [`TokenKind::Eof`] on success or
//! [`TokenKind::Error`] on the first lexical error. There is no recovery.
//!
//! [`Token`]: fatlisp_ir::Token
//! [`TokenKind::Eof`]: fatlisp_ir::TokenKind::Eof
//! [`TokenKind::Error`]: fatlisp_ir::TokenKind::Error

mod cursor;
mod lexer;

pub use cursor::Cursor;
pub use lexer::{lex, Lexer};
