//! Pull-based lexer.

use std::iter::FusedIterator;

use fatlisp_ir::{LexErrorKind, Span, Token, TokenKind};
use tracing::{debug, trace};

use crate::Cursor;

/// Tokenizer producing one token per call.
///
/// State is the cursor position, a one-token lookahead buffer and the open
/// paren count. Once a terminal token (end-of-input or error) has been
/// scanned the lexer never scans again and answers every further call with
/// end-of-input.
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    name: &'a str,
    cursor: Cursor<'a>,
    pending: Option<Token<'a>>,
    nesting: u32,
    /// A terminal token has been scanned.
    finished: bool,
    /// A terminal token has been handed out by `next_token`.
    done: bool,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over `source`. `name` only labels trace output.
    ///
    /// A source too large for 32-bit spans yields a single
    /// [`LexErrorKind::SourceTooLarge`] token.
    pub fn new(name: &'a str, source: &'a str) -> Self {
        match Cursor::new(source) {
            Ok(cursor) => Lexer {
                name,
                cursor,
                pending: None,
                nesting: 0,
                finished: false,
                done: false,
            },
            Err(err) => {
                debug!(file = name, %err, "source rejected");
                Lexer::too_large(name)
            }
        }
    }

    fn too_large(name: &'a str) -> Self {
        Lexer {
            name,
            cursor: Cursor::default(),
            pending: Some(Token::new(
                TokenKind::Error(LexErrorKind::SourceTooLarge),
                Span::point(0),
                "",
            )),
            nesting: 0,
            finished: true,
            done: false,
        }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Return the next token, consuming it.
    pub fn next_token(&mut self) -> Token<'a> {
        let token = match self.pending.take() {
            Some(token) => token,
            None => self.scan(),
        };
        if token.is_terminal() {
            self.done = true;
        }
        token
    }

    /// Return the next token without consuming it.
    pub fn peek_token(&mut self) -> Token<'a> {
        if let Some(token) = self.pending {
            return token;
        }
        let token = self.scan();
        self.pending = Some(token);
        token
    }

    fn scan(&mut self) -> Token<'a> {
        if self.finished {
            return Token::eof(self.cursor.source_len());
        }
        let token = self.scan_token();
        if token.is_terminal() {
            self.finished = true;
        }
        trace!(file = self.name, kind = ?token.kind, span = %token.span, "token");
        token
    }

    fn scan_token(&mut self) -> Token<'a> {
        self.cursor.eat_while(is_space);
        let start = self.cursor.pos();

        if self.cursor.is_eof() {
            if self.nesting > 0 {
                return Token::new(
                    TokenKind::Error(LexErrorKind::UnterminatedList),
                    Span::point(start),
                    "",
                );
            }
            return Token::eof(start);
        }

        match self.cursor.current() {
            b'(' => {
                self.cursor.advance();
                self.nesting = self.nesting.saturating_add(1);
                self.token(TokenKind::StartList, start)
            }
            b')' => {
                self.cursor.advance();
                self.nesting = self.nesting.saturating_sub(1);
                self.token(TokenKind::CloseList, start)
            }
            b'\'' => {
                self.cursor.advance();
                self.token(TokenKind::Quote, start)
            }
            b'"' => self.string(start),
            b'+' | b'-' if self.cursor.peek().is_ascii_digit() => self.number(start),
            b'0'..=b'9' => self.number(start),
            _ => self.identifier(start),
        }
    }

    #[inline]
    fn token(&self, kind: TokenKind, start: u32) -> Token<'a> {
        Token::new(
            kind,
            Span::new(start, self.cursor.pos()),
            self.cursor.slice_from(start),
        )
    }

    /// Number body is greedy over `+-.0-9` and must be followed by a
    /// delimiter. Whether the body is a well-formed number is the parser's
    /// concern.
    fn number(&mut self, start: u32) -> Token<'a> {
        self.cursor
            .eat_while(|b| matches!(b, b'+' | b'-' | b'.' | b'0'..=b'9'));
        let next = self.cursor.current();
        if self.cursor.is_eof() || is_space(next) || next == b'(' || next == b')' {
            self.token(TokenKind::Number, start)
        } else {
            self.token(TokenKind::Error(LexErrorKind::InvalidNumber), start)
        }
    }

    /// Runs to the next unescaped `"`. A backslash skips the byte after it.
    fn string(&mut self, start: u32) -> Token<'a> {
        self.cursor.advance();
        loop {
            match self.cursor.skip_to_string_delim() {
                b'"' => {
                    self.cursor.advance();
                    return self.token(TokenKind::String, start);
                }
                b'\\' => {
                    self.cursor.advance();
                    self.cursor.advance();
                }
                _ => {
                    return self.token(TokenKind::Error(LexErrorKind::UnterminatedString), start);
                }
            }
        }
    }

    fn identifier(&mut self, start: u32) -> Token<'a> {
        self.cursor
            .eat_while(|b| !is_space(b) && !matches!(b, b'(' | b')' | b'"'));
        self.token(TokenKind::Identifier, start)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    /// Yields every token including the terminal one, then `None`.
    fn next(&mut self) -> Option<Token<'a>> {
        if self.done {
            None
        } else {
            Some(self.next_token())
        }
    }
}

impl FusedIterator for Lexer<'_> {}

/// Tokenize all of `source`. The last token is always terminal.
pub fn lex<'a>(name: &'a str, source: &'a str) -> Vec<Token<'a>> {
    Lexer::new(name, source).collect()
}

#[inline]
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n')
}

#[cfg(test)]
mod tests;
