//! Line and column lookup for byte positions.
//!
//! Parse positions are byte offsets into the input. Rendering a diagnostic
//! needs the 1-based line and column, and the text of the line itself.

/// Pre-computed line start table for O(log L) lookups.
///
/// ```
/// use snbt_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "{a:1,\nb:2}";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 6), (2, 1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start; `offsets[0] == 0`.
    offsets: Vec<usize>,
}

impl LineOffsetTable {
    /// Build a line offset table from source text.
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0];
        offsets.extend(
            source
                .bytes()
                .enumerate()
                .filter(|(_, byte)| *byte == b'\n')
                .map(|(i, _)| i + 1),
        );
        LineOffsetTable { offsets }
    }

    /// Get 1-based line number containing `offset`.
    #[inline]
    pub fn line_from_offset(&self, offset: usize) -> usize {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        line_idx + 1
    }

    /// Get 1-based (line, column) from a byte offset.
    ///
    /// The column counts characters, not bytes.
    pub fn offset_to_line_col(&self, source: &str, offset: usize) -> (usize, usize) {
        let line = self.line_from_offset(offset);
        let line_start = self.offsets.get(line - 1).copied().unwrap_or(0);
        let end = offset.min(source.len());
        let col = source
            .get(line_start..end)
            .map_or(0, |prefix| prefix.chars().count());
        (line, col + 1)
    }

    /// Text of a 1-based line, without its line terminator.
    pub fn line_text<'a>(&self, source: &'a str, line: usize) -> Option<&'a str> {
        let start = *self.offsets.get(line.checked_sub(1)?)?;
        let end = self.offsets.get(line).map_or(source.len(), |next| next - 1);
        source
            .get(start..end)
            .map(|text| text.strip_suffix('\r').unwrap_or(text))
    }

    /// Get the number of lines in the source.
    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}
