//! The closed set of lexical faults.
//!
//! Each kind has a stable code (e.g., `E0003`) used for `--explain`
//! lookups and machine-readable output.

use std::fmt;

/// Lexical fault classification.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum ErrorKind {
    /// A run that looks like an identifier but begins with a digit.
    InvalidIdentifierStart,
    /// A numeric run with more than one decimal point or an invalid shape.
    MalformedNumber,
    /// A string or char literal not closed before end of line.
    UnterminatedLiteral,
    /// A backslash followed by a character with no escape meaning.
    InvalidEscapeSequence,
    /// A closing delimiter without its opener, or an opener never closed.
    UnmatchedDelimiter,
    /// A block comment never closed.
    UnterminatedComment,
    /// A character that starts no token.
    InvalidCharacter,
    /// Punctuation that is not valid in its context.
    UnexpectedPunctuation,
}

impl ErrorKind {
    /// All kinds, in code order.
    ///
    /// `as_str()` is exhaustive; when adding a variant add it here too.
    /// `all_kinds_have_distinct_codes` catches an omission.
    pub const ALL: &[ErrorKind] = &[
        ErrorKind::InvalidIdentifierStart,
        ErrorKind::MalformedNumber,
        ErrorKind::UnterminatedLiteral,
        ErrorKind::InvalidEscapeSequence,
        ErrorKind::UnmatchedDelimiter,
        ErrorKind::UnterminatedComment,
        ErrorKind::InvalidCharacter,
        ErrorKind::UnexpectedPunctuation,
    ];

    /// The stable error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidIdentifierStart => "E0001",
            ErrorKind::MalformedNumber => "E0002",
            ErrorKind::UnterminatedLiteral => "E0003",
            ErrorKind::InvalidEscapeSequence => "E0004",
            ErrorKind::UnmatchedDelimiter => "E0005",
            ErrorKind::UnterminatedComment => "E0006",
            ErrorKind::InvalidCharacter => "E0007",
            ErrorKind::UnexpectedPunctuation => "E0008",
        }
    }

    /// The variant name, as shown in listings (`UnterminatedLiteral`).
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::InvalidIdentifierStart => "InvalidIdentifierStart",
            ErrorKind::MalformedNumber => "MalformedNumber",
            ErrorKind::UnterminatedLiteral => "UnterminatedLiteral",
            ErrorKind::InvalidEscapeSequence => "InvalidEscapeSequence",
            ErrorKind::UnmatchedDelimiter => "UnmatchedDelimiter",
            ErrorKind::UnterminatedComment => "UnterminatedComment",
            ErrorKind::InvalidCharacter => "InvalidCharacter",
            ErrorKind::UnexpectedPunctuation => "UnexpectedPunctuation",
        }
    }

    /// Short lowercase title used when a diagnostic has no custom message.
    pub fn title(&self) -> &'static str {
        match self {
            ErrorKind::InvalidIdentifierStart => "invalid identifier start",
            ErrorKind::MalformedNumber => "malformed number",
            ErrorKind::UnterminatedLiteral => "unterminated literal",
            ErrorKind::InvalidEscapeSequence => "invalid escape sequence",
            ErrorKind::UnmatchedDelimiter => "unmatched delimiter",
            ErrorKind::UnterminatedComment => "unterminated comment",
            ErrorKind::InvalidCharacter => "invalid character",
            ErrorKind::UnexpectedPunctuation => "unexpected punctuation",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known error kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownErrorCode(pub String);

impl fmt::Display for UnknownErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown error code `{}`", self.0)
    }
}

impl std::error::Error for UnknownErrorCode {}

/// Parse either a code (`"E0003"`, case-insensitive) or a variant name
/// (`"UnterminatedLiteral"`).
impl std::str::FromStr for ErrorKind {
    type Err = UnknownErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .find(|kind| {
                kind.as_str().eq_ignore_ascii_case(trimmed) || kind.name() == trimmed
            })
            .copied()
            .ok_or_else(|| UnknownErrorCode(trimmed.to_owned()))
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
