//! Line lookups for rendering diagnostics.
//!
//! Diagnostics carry their own [`SourcePosition`], so these helpers are for
//! the other direction: finding the text of a line to show under a
//! diagnostic, or recomputing a position from a bare offset.

use cscan_ir::SourcePosition;

/// Pre-computed line offset table for O(log L) line lookup.
///
/// ```
/// use cscan_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "int a;\nint b;\n";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.line_from_offset(7), 2);
/// assert_eq!(table.line_text(source, 2), Some("int b;"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start; `offsets[0] == 0`.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    /// Build the table with one pass over the source.
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                offsets.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        LineOffsetTable { offsets }
    }

    /// 1-based line containing `offset`.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// Full position of `offset`, with the column counted in characters.
    pub fn position(&self, source: &str, offset: u32) -> SourcePosition {
        let line = self.line_from_offset(offset);
        let line_start = self.line_start_offset(line).unwrap_or(0) as usize;
        let end = (offset as usize).min(source.len());
        let column = source
            .get(line_start..end)
            .map_or(0, |text| text.chars().count());
        SourcePosition::new(
            line,
            u32::try_from(column).unwrap_or(u32::MAX - 1) + 1,
            offset,
        )
    }

    /// Byte offset of the start of a 1-based line.
    pub fn line_start_offset(&self, line: u32) -> Option<u32> {
        if line == 0 {
            return None;
        }
        self.offsets.get((line - 1) as usize).copied()
    }

    /// Text of a 1-based line without its line terminator.
    pub fn line_text<'a>(&self, source: &'a str, line: u32) -> Option<&'a str> {
        let start = self.line_start_offset(line)? as usize;
        let end = self
            .line_start_offset(line + 1)
            .map_or(source.len(), |next| next as usize);
        let text = source.get(start..end)?;
        let text = text.strip_suffix('\n').unwrap_or(text);
        Some(text.strip_suffix('\r').unwrap_or(text))
    }

    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}

#[cfg(test)]
mod tests;
