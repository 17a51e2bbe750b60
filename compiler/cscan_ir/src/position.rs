//! Line/column/offset positions.
//!
//! A [`SourcePosition`] is what a human reads in a diagnostic (`12:5`) plus
//! the byte offset a tool needs to slice the source. Lines and columns are
//! 1-based; columns count characters, not bytes, matching how editors
//! report positions for non-ASCII text.

use std::fmt;

/// A point in the source text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct SourcePosition {
    /// 1-based line number.
    pub line: u32,
    /// 1-based column, in characters from the start of the line.
    pub column: u32,
    /// Byte offset from the start of the source.
    pub offset: u32,
}

impl SourcePosition {
    /// Position of the first character of any source.
    pub const START: SourcePosition = SourcePosition {
        line: 1,
        column: 1,
        offset: 0,
    };

    #[inline]
    pub const fn new(line: u32, column: u32, offset: u32) -> Self {
        SourcePosition {
            line,
            column,
            offset,
        }
    }

    /// The position reached after reading `text` starting at `self`.
    ///
    /// `\n` starts a new line; every other character (including `\r`)
    /// advances the column by one.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "callers only pass slices of sources that fit in u32"
    )]
    pub fn advance(self, text: &str) -> SourcePosition {
        let mut pos = self;
        for c in text.chars() {
            if c == '\n' {
                pos.line += 1;
                pos.column = 1;
            } else {
                pos.column += 1;
            }
            pos.offset += c.len_utf8() as u32;
        }
        pos
    }
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
