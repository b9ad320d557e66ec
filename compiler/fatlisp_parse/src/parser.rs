//! Tree builder.
//!
//! The parser keeps a stack of open lists. Each open list is a `Frame`
//! that owns its elements and the quote markers seen directly inside it.
//! A quote marker records the index the *next* element of that list will
//! take; once the list is closed (the root closes at end of input) every
//! record is resolved in order by replacing that slot with
//! `(quote <element>)`. Resolving at close time rather than at the marker
//! is what lets `'(1 2 3)` quote a list that did not exist yet.

use fatlisp_ir::{Span, Token, TokenKind};
use fatlisp_lexer::Lexer;
use fatlisp_value::Value;
use tracing::{debug, trace};

use crate::{ParseError, ParseErrorKind};

/// Head identifier of an expanded quote.
const QUOTE_FORM: &str = "quote";

struct QuoteRecord {
    index: usize,
    form: &'static str,
    origin: Span,
}

struct Frame {
    origin: Span,
    items: Vec<Value>,
    quotes: Vec<QuoteRecord>,
}

impl Frame {
    fn new(origin: Span) -> Self {
        Frame {
            origin,
            items: Vec::new(),
            quotes: Vec::new(),
        }
    }

    /// Resolve quote records and turn the frame into a list value
    /// spanning `origin..end`.
    fn close(mut self, end: u32, expanded: &mut usize) -> Result<Value, ParseError> {
        for quote in std::mem::take(&mut self.quotes) {
            let Some(slot) = self.items.get_mut(quote.index) else {
                return Err(ParseError::new(ParseErrorKind::DanglingQuote, quote.origin));
            };
            let quoted = std::mem::replace(slot, Value::nil());
            let origin = quote.origin.merge(quoted.origin);
            trace!(index = quote.index, %origin, "expand quote");
            *slot = Value::list(vec![
                Value::ident(quote.form).with_origin(quote.origin),
                quoted,
            ])
            .with_origin(origin);
            *expanded += 1;
        }
        let origin = Span::new(self.origin.start, end.max(self.origin.start));
        Ok(Value::list(self.items).with_origin(origin))
    }
}

/// Single-pass parser over a [`Lexer`].
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    root: Frame,
    /// Open lists inside the root, innermost last.
    open: Vec<Frame>,
    expanded: usize,
}

impl<'a> Parser<'a> {
    pub fn new(name: &'a str, source: &'a str) -> Self {
        Parser {
            lexer: Lexer::new(name, source),
            root: Frame::new(Span::point(0)),
            open: Vec::new(),
            expanded: 0,
        }
    }

    /// Consume the whole token stream and return the root list.
    pub fn parse(mut self) -> Result<Value, ParseError> {
        debug!(file = self.lexer.name(), "parse start");
        loop {
            let token = self.lexer.next_token();
            match token.kind {
                TokenKind::StartList => self.open.push(Frame::new(token.span)),
                TokenKind::CloseList => self.close_list(token)?,
                TokenKind::Identifier => self.push(classify_identifier(token)),
                TokenKind::Number => {
                    let value = parse_number(token)?;
                    self.push(value);
                }
                TokenKind::String => self.push(parse_string(token)),
                TokenKind::Quote => {
                    let current = self.current();
                    let index = current.items.len();
                    current.quotes.push(QuoteRecord {
                        index,
                        form: QUOTE_FORM,
                        origin: token.span,
                    });
                }
                TokenKind::Error(kind) => {
                    return Err(ParseError::new(ParseErrorKind::Lex(kind), token.span));
                }
                TokenKind::Eof => return self.finish(token),
            }
        }
    }

    fn current(&mut self) -> &mut Frame {
        self.open.last_mut().unwrap_or(&mut self.root)
    }

    fn push(&mut self, value: Value) {
        self.current().items.push(value);
    }

    fn close_list(&mut self, token: Token<'_>) -> Result<(), ParseError> {
        let Some(frame) = self.open.pop() else {
            return Err(ParseError::new(
                ParseErrorKind::UnexpectedCloseList,
                token.span,
            ));
        };
        let list = frame.close(token.span.end, &mut self.expanded)?;
        self.push(list);
        Ok(())
    }

    fn finish(mut self, eof: Token<'_>) -> Result<Value, ParseError> {
        if !self.open.is_empty() {
            // The lexer reports unclosed lists itself; this only guards
            // against a lexer that does not.
            return Err(ParseError::new(
                ParseErrorKind::Lex(fatlisp_ir::LexErrorKind::UnterminatedList),
                eof.span,
            ));
        }
        let root = self.root.close(eof.span.end, &mut self.expanded)?;
        let forms = root.as_list().map_or(0, <[Value]>::len);
        debug!(forms, quotes = self.expanded, "parse done");
        Ok(root)
    }
}

/// Parse `source` into its root list. `name` labels trace output only.
pub fn parse(name: &str, source: &str) -> Result<Value, ParseError> {
    Parser::new(name, source).parse()
}

fn classify_identifier(token: Token<'_>) -> Value {
    let value = match token.text {
        "true" => Value::bool(true),
        "false" => Value::bool(false),
        "nil" => Value::nil(),
        name => Value::ident(name),
    };
    value.with_origin(token.span)
}

/// Integer first, then float.
fn parse_number(token: Token<'_>) -> Result<Value, ParseError> {
    let value = if let Ok(n) = token.text.parse::<i64>() {
        Value::int(n)
    } else if let Ok(x) = token.text.parse::<f64>() {
        Value::float(x)
    } else {
        return Err(ParseError::new(
            ParseErrorKind::InvalidNumber {
                text: token.text.to_string(),
            },
            token.span,
        ));
    };
    Ok(value.with_origin(token.span))
}

/// Strip the enclosing quotes. Escapes are kept verbatim.
fn parse_string(token: Token<'_>) -> Value {
    let text = token
        .text
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(token.text);
    Value::string(text).with_origin(token.span)
}

#[cfg(test)]
mod tests;
