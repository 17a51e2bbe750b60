//! Token types produced by the scanner.
//!
//! A [`Token`] owns its lexeme so the stream can outlive the source buffer
//! it was scanned from.

use std::fmt;

use crate::{SourcePosition, Span};

/// Classification of a token.
///
/// Keywords are not a separate kind: they are `Identifier` tokens whose
/// lexeme appears in the keyword table.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum TokenKind {
    Identifier,
    IntegerLiteral,
    FloatLiteral,
    StringLiteral,
    CharLiteral,
    Operator,
    Punctuation,
    Comment,
    /// A preprocessor line such as `#include <iostream>`.
    Directive,
    /// A run of whitespace. Kept so the stream covers the whole input.
    Whitespace,
    /// Zero-length marker at the end of the input.
    EndOfInput,
}

impl TokenKind {
    /// All kinds, in declaration order.
    pub const ALL: [TokenKind; 11] = [
        TokenKind::Identifier,
        TokenKind::IntegerLiteral,
        TokenKind::FloatLiteral,
        TokenKind::StringLiteral,
        TokenKind::CharLiteral,
        TokenKind::Operator,
        TokenKind::Punctuation,
        TokenKind::Comment,
        TokenKind::Directive,
        TokenKind::Whitespace,
        TokenKind::EndOfInput,
    ];

    /// Human-readable name for messages and listings.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::IntegerLiteral => "integer literal",
            TokenKind::FloatLiteral => "float literal",
            TokenKind::StringLiteral => "string literal",
            TokenKind::CharLiteral => "char literal",
            TokenKind::Operator => "operator",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Comment => "comment",
            TokenKind::Directive => "directive",
            TokenKind::Whitespace => "whitespace",
            TokenKind::EndOfInput => "end of input",
        }
    }

    /// Trivia tokens carry no meaning for later stages.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }

    #[inline]
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::IntegerLiteral
                | TokenKind::FloatLiteral
                | TokenKind::StringLiteral
                | TokenKind::CharLiteral
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A classified, position-tagged piece of the source.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    /// Position of the first character.
    pub start: SourcePosition,
    /// Position just past the last character.
    pub end: SourcePosition,
}

impl Token {
    #[inline]
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        start: SourcePosition,
        end: SourcePosition,
    ) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            start,
            end,
        }
    }

    /// Byte span of the lexeme.
    #[inline]
    pub fn span(&self) -> Span {
        Span::between(self.start, self.end)
    }

    #[inline]
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}({:?}) @ {}",
            self.kind,
            self.lexeme,
            self.span()
        )
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::TokenKind;
    crate::static_assert_size!(TokenKind, 1);
}

#[cfg(test)]
mod tests;
