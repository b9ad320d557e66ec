//! Byte cursor over the source text.
//!
//! All lexemes are delimited by ASCII bytes, so the cursor works on bytes and
//! only ever stops on character boundaries: every byte it stops *before* is
//! ASCII or the end of input. Reads past the end return `0`, which none of
//! the classification predicates accept.

use fatlisp_ir::{Span, SpanError};

/// Cursor over a source string.
///
/// The cursor is [`Copy`], enabling cheap state snapshots. The default
/// cursor is over the empty source.
#[derive(Clone, Copy, Debug, Default)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Current read position (byte index into `source`).
    pos: u32,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    ///
    /// Fails if the source is longer than `u32::MAX` bytes, since token
    /// spans could not address its tail.
    pub fn new(source: &'a str) -> Result<Self, SpanError> {
        Span::try_from_range(0..source.len())?;
        Ok(Cursor { source, pos: 0 })
    }

    /// Returns the byte at the current position, or `0` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Returns the byte one position ahead of current, or `0` past EOF.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos.saturating_add(1))
    }

    #[inline]
    fn byte_at(&self, pos: u32) -> u8 {
        self.source.as_bytes().get(pos as usize).copied().unwrap_or(0)
    }

    /// Advance the cursor by one byte, never past the end.
    #[inline]
    pub fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Returns `true` if the cursor has consumed the whole source.
    ///
    /// Interior NUL bytes are not EOF; they are read as `0` but still
    /// consumed by [`advance`](Self::advance).
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source in bytes.
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "constructor rejects sources over u32::MAX bytes"
    )]
    pub fn source_len(&self) -> u32 {
        self.source.len() as u32
    }

    /// Source text from `start` to the current position.
    ///
    /// Returns `""` if the range does not fall on character boundaries,
    /// which the lexer never produces.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.source
            .get(start as usize..self.pos as usize)
            .unwrap_or_default()
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// Stops at EOF regardless of `pred(0)`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance past string content to the next `"` or `\`.
    /// Returns the byte found, or `0` at EOF.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < source_len which fits in u32"
    )]
    pub fn skip_to_string_delim(&mut self) -> u8 {
        let remaining = self
            .source
            .as_bytes()
            .get(self.pos as usize..)
            .unwrap_or_default();
        if let Some(offset) = memchr::memchr2(b'"', b'\\', remaining) {
            self.pos += offset as u32;
            self.current()
        } else {
            self.pos = self.source_len();
            0
        }
    }
}
