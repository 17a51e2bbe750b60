//! Delimiter balance tracking.
//!
//! A stack of open `(`, `{` and `[`. This is a lexical heuristic, not a
//! parser: it only answers whether each closer matches the most recent
//! unclosed opener.

use cscan_ir::{SourcePosition, Span};
use cscan_lexer_core::RawTag;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Delimiter {
    Paren,
    Brace,
    Bracket,
}

impl Delimiter {
    pub(crate) fn from_opener(tag: RawTag) -> Option<Self> {
        match tag {
            RawTag::LeftParen => Some(Delimiter::Paren),
            RawTag::LeftBrace => Some(Delimiter::Brace),
            RawTag::LeftBracket => Some(Delimiter::Bracket),
            _ => None,
        }
    }

    pub(crate) fn from_closer(tag: RawTag) -> Option<Self> {
        match tag {
            RawTag::RightParen => Some(Delimiter::Paren),
            RawTag::RightBrace => Some(Delimiter::Brace),
            RawTag::RightBracket => Some(Delimiter::Bracket),
            _ => None,
        }
    }

    pub(crate) fn open(self) -> char {
        match self {
            Delimiter::Paren => '(',
            Delimiter::Brace => '{',
            Delimiter::Bracket => '[',
        }
    }

    pub(crate) fn close(self) -> char {
        match self {
            Delimiter::Paren => ')',
            Delimiter::Brace => '}',
            Delimiter::Bracket => ']',
        }
    }
}

/// An opener still waiting for its closer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct OpenDelimiter {
    pub delimiter: Delimiter,
    pub position: SourcePosition,
    pub span: Span,
}

/// Result of offering a closer to the stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum CloseOutcome {
    /// The closer matched the innermost opener.
    Matched,
    /// The closer matched no opener; the stack is unchanged.
    Unopened,
    /// The closer matched an opener below the top. `abandoned` holds the
    /// openers that were unwound, innermost first; the last entry is the
    /// one matching the closer.
    Mismatched { abandoned: Vec<OpenDelimiter> },
}

#[derive(Clone, Debug, Default)]
pub(crate) struct DelimiterStack {
    open: Vec<OpenDelimiter>,
}

impl DelimiterStack {
    pub(crate) fn push(&mut self, delimiter: Delimiter, position: SourcePosition, span: Span) {
        self.open.push(OpenDelimiter {
            delimiter,
            position,
            span,
        });
    }

    pub(crate) fn close(&mut self, delimiter: Delimiter) -> CloseOutcome {
        let Some(depth) = self
            .open
            .iter()
            .rposition(|open| open.delimiter == delimiter)
        else {
            return CloseOutcome::Unopened;
        };
        if depth + 1 == self.open.len() {
            self.open.pop();
            return CloseOutcome::Matched;
        }
        let mut abandoned = self.open.split_off(depth);
        abandoned.reverse();
        CloseOutcome::Mismatched { abandoned }
    }

    /// Remaining openers, outermost first.
    pub(crate) fn drain(&mut self) -> std::vec::Drain<'_, OpenDelimiter> {
        self.open.drain(..)
    }

    pub(crate) fn depth(&self) -> usize {
        self.open.len()
    }
}

#[cfg(test)]
mod tests;
