//! Byte ranges in the scanned source.
//!
//! Offsets are `u32`: the scanner refuses sources larger than that, so
//! every span it hands out fits.

use std::fmt;

use crate::SourcePosition;

/// Half-open byte range `start..end` in the source.
///
/// Ordered by start, then end, which is source order for the
/// non-overlapping spans the scanner produces.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
pub struct Span {
    pub start: u32,
    /// Exclusive.
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// The span from one position to another.
    #[inline]
    pub const fn between(start: SourcePosition, end: SourcePosition) -> Self {
        Span::new(start.offset, end.offset)
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Whether `other` starts exactly where this span ends.
    #[inline]
    pub const fn is_followed_by(&self, other: Span) -> bool {
        self.end == other.start
    }

    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }

    /// The text this span covers, or `None` if it does not fit `source`
    /// or splits a character.
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.to_range())
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Span;
    crate::static_assert_size!(Span, 8);
}
