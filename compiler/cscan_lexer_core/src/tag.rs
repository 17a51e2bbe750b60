//! Raw token tags and the `(tag, len)` token pair.
//!
//! Discriminants are grouped into semantic ranges so that category checks
//! are a single comparison:
//!
//! | Range     | Category                 |
//! |-----------|--------------------------|
//! | 0-31      | Identifiers and literals |
//! | 32-79     | Operators                |
//! | 80-111    | Punctuation              |
//! | 112-127   | Trivia                   |
//! | 240-254   | Errors                   |
//! | 255       | End of input             |

/// Classification of a raw token.
///
/// Raw tags carry no text. Keyword resolution, number classification and
/// escape validation happen in the cooking layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // Identifiers & literals
    Ident = 0,
    /// Maximal numeric run, not yet classified.
    Number = 1,
    String = 2,
    Char = 3,

    // Operators
    Plus = 32,
    Minus = 33,
    Star = 34,
    Slash = 35,
    Percent = 36,
    Equal = 37,
    EqualEqual = 38,
    BangEqual = 39,
    Less = 40,
    Greater = 41,
    LessEqual = 42,
    GreaterEqual = 43,
    /// `<=>`
    Spaceship = 44,
    AmpAmp = 45,
    PipePipe = 46,
    Bang = 47,
    Amp = 48,
    Pipe = 49,
    Caret = 50,
    Tilde = 51,
    Shl = 52,
    Shr = 53,
    PlusEqual = 54,
    MinusEqual = 55,
    StarEqual = 56,
    SlashEqual = 57,
    PercentEqual = 58,
    AmpEqual = 59,
    PipeEqual = 60,
    CaretEqual = 61,
    ShlEqual = 62,
    ShrEqual = 63,
    PlusPlus = 64,
    MinusMinus = 65,
    Arrow = 66,
    /// `->*`
    ArrowStar = 67,
    /// `.*`
    DotStar = 68,
    Question = 69,

    // Punctuation
    LeftParen = 80,
    RightParen = 81,
    LeftBrace = 82,
    RightBrace = 83,
    LeftBracket = 84,
    RightBracket = 85,
    Semicolon = 86,
    Comma = 87,
    Dot = 88,
    Colon = 89,
    ColonColon = 90,
    Ellipsis = 91,

    // Trivia
    Whitespace = 112,
    LineComment = 113,
    BlockComment = 114,
    /// Preprocessor line starting with `#` at the beginning of a line.
    Directive = 115,

    // Errors
    /// A byte (or UTF-8 character) that starts no token.
    InvalidByte = 240,
    UnterminatedString = 241,
    UnterminatedChar = 242,
    UnterminatedBlockComment = 243,
    /// `=+` or `=-` followed by whitespace, almost always a typo for `+=`/`-=`.
    ReversedCompoundAssign = 244,

    Eof = 255,
}

const _: () = assert!(std::mem::size_of::<RawTag>() == 1);

impl RawTag {
    /// Returns the fixed source text of this tag, if it has one.
    pub const fn lexeme(self) -> Option<&'static str> {
        Some(match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Equal => "=",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Spaceship => "<=>",
            Self::AmpAmp => "&&",
            Self::PipePipe => "||",
            Self::Bang => "!",
            Self::Amp => "&",
            Self::Pipe => "|",
            Self::Caret => "^",
            Self::Tilde => "~",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::PlusEqual => "+=",
            Self::MinusEqual => "-=",
            Self::StarEqual => "*=",
            Self::SlashEqual => "/=",
            Self::PercentEqual => "%=",
            Self::AmpEqual => "&=",
            Self::PipeEqual => "|=",
            Self::CaretEqual => "^=",
            Self::ShlEqual => "<<=",
            Self::ShrEqual => ">>=",
            Self::PlusPlus => "++",
            Self::MinusMinus => "--",
            Self::Arrow => "->",
            Self::ArrowStar => "->*",
            Self::DotStar => ".*",
            Self::Question => "?",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::Semicolon => ";",
            Self::Comma => ",",
            Self::Dot => ".",
            Self::Colon => ":",
            Self::ColonColon => "::",
            Self::Ellipsis => "...",
            _ => return None,
        })
    }

    #[inline]
    pub const fn is_operator(self) -> bool {
        let d = self as u8;
        d >= 32 && d < 80
    }

    #[inline]
    pub const fn is_punctuation(self) -> bool {
        let d = self as u8;
        d >= 80 && d < 112
    }

    #[inline]
    pub const fn is_trivia(self) -> bool {
        let d = self as u8;
        d >= 112 && d < 128
    }

    #[inline]
    pub const fn is_error(self) -> bool {
        let d = self as u8;
        d >= 240 && d < 255
    }

    /// Human-readable name used in trace output and test failures.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ident => "identifier",
            Self::Number => "number",
            Self::String => "string literal",
            Self::Char => "character literal",
            Self::Whitespace => "whitespace",
            Self::LineComment => "line comment",
            Self::BlockComment => "block comment",
            Self::Directive => "directive",
            Self::InvalidByte => "invalid byte",
            Self::UnterminatedString => "unterminated string",
            Self::UnterminatedChar => "unterminated character literal",
            Self::UnterminatedBlockComment => "unterminated block comment",
            Self::ReversedCompoundAssign => "reversed compound assignment",
            Self::Eof => "end of input",
            other => match other.lexeme() {
                Some(text) => text,
                None => "token",
            },
        }
    }
}

/// A raw token: tag plus byte length.
///
/// Start offsets are not stored; consumers accumulate lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

const _: () = assert!(std::mem::size_of::<RawToken>() == 8);

#[cfg(test)]
mod tests;
