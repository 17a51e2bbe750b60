//! Embedded error documentation for `--explain` support.
//!
//! Each error code has a markdown file in this directory explaining the
//! fault, showing an example, and giving a fix. The files are embedded at
//! compile time.
//!
//! To document a new code, add `EXXXX.md` here and an entry to `DOCS`.

use crate::ErrorKind;

/// Registry of embedded error documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Get the markdown documentation for an error kind.
    pub fn get(kind: ErrorKind) -> Option<&'static str> {
        DOCS.iter().find(|(k, _)| *k == kind).map(|(_, doc)| *doc)
    }

    /// Get all documented error kinds.
    pub fn all_kinds() -> impl Iterator<Item = ErrorKind> {
        DOCS.iter().map(|(kind, _)| *kind)
    }

    pub fn has_docs(kind: ErrorKind) -> bool {
        DOCS.iter().any(|(k, _)| *k == kind)
    }
}

static DOCS: &[(ErrorKind, &str)] = &[
    (ErrorKind::InvalidIdentifierStart, include_str!("E0001.md")),
    (ErrorKind::MalformedNumber, include_str!("E0002.md")),
    (ErrorKind::UnterminatedLiteral, include_str!("E0003.md")),
    (ErrorKind::InvalidEscapeSequence, include_str!("E0004.md")),
    (ErrorKind::UnmatchedDelimiter, include_str!("E0005.md")),
    (ErrorKind::UnterminatedComment, include_str!("E0006.md")),
    (ErrorKind::InvalidCharacter, include_str!("E0007.md")),
    (ErrorKind::UnexpectedPunctuation, include_str!("E0008.md")),
];
