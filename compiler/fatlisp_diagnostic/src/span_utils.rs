//! Line and column computation from byte offsets.
//!
//! Lines and columns are 1-based. Columns count characters, not bytes, from
//! the start of the line, so multi-byte text before an error does not shift
//! the reported column.
//!
//! [`LineOffsetTable`] pre-computes line starts so each lookup is a binary
//! search.

/// Pre-computed line offset table for efficient line/column lookup.
///
/// # Example
///
/// ```
/// use fatlisp_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "line1\nline2\nline3";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 6), (2, 1));
/// assert_eq!(table.offset_to_line_col(source, 14), (3, 3));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start. `offsets[0]` is always 0.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    /// Build a line offset table from source text.
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        offsets.extend(newline_offsets(source).map(|i| u32::try_from(i + 1).unwrap_or(u32::MAX)));
        LineOffsetTable { offsets }
    }

    /// Get 1-based line number from a byte offset using binary search.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// Get 1-based (line, column) from a byte offset.
    ///
    /// Offsets past the end of `source` clamp to the end. An offset that
    /// falls inside a multi-byte character counts that character as
    /// already consumed.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self
            .offsets
            .get((line - 1) as usize)
            .copied()
            .unwrap_or(0) as usize;
        (line, column(source, line_start, offset as usize))
    }
}

fn newline_offsets(source: &str) -> impl Iterator<Item = usize> + '_ {
    source
        .bytes()
        .enumerate()
        .filter_map(|(i, b)| (b == b'\n').then_some(i))
}

fn column(source: &str, line_start: usize, offset: usize) -> u32 {
    let end = offset.min(source.len());
    let prefix = source.as_bytes().get(line_start..end).unwrap_or_default();
    // Count char starts; continuation bytes (0b10xx_xxxx) never start one.
    let chars = prefix.iter().filter(|&&b| (b & 0xC0) != 0x80).count();
    u32::try_from(chars).unwrap_or(u32::MAX - 1) + 1
}
