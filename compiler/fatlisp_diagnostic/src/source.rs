//! Named source text and resolved positions.

use fatlisp_ir::Span;
use std::fmt;
use std::sync::Arc;

use crate::span_utils::LineOffsetTable;

/// Source text together with the name used in diagnostics.
///
/// The line table is built once on construction so resolving many spans
/// stays cheap.
#[derive(Clone, Debug)]
pub struct SourceFile {
    name: Arc<str>,
    text: Arc<str>,
    lines: LineOffsetTable,
}

impl SourceFile {
    pub fn new(name: impl Into<Arc<str>>, text: impl Into<Arc<str>>) -> Self {
        let text = text.into();
        let lines = LineOffsetTable::build(&text);
        SourceFile {
            name: name.into(),
            text,
            lines,
        }
    }

    /// Resolve the start of `span` to a 1-based line and column.
    pub fn location(&self, span: Span) -> Location {
        let (line, column) = self.lines.offset_to_line_col(&self.text, span.start);
        Location {
            file: Arc::clone(&self.name),
            line,
            column,
        }
    }
}

/// A resolved `<file>:<line>:<column>` position.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Location {
    pub file: Arc<str>,
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}
