//! Escape sequence validation.
//!
//! Only closed literals are checked. The literal keeps its source text;
//! invalid escapes are reported but never rewritten.
//!
//! Recognized escapes: `\n`, `\t`, `\r`, `\\`, `\'`, `\"`, `\0`-`\7`
//! (octal), `\a`, `\b`, `\f`, `\v`, `\?`, `\x` (hex), `\u` and `\U`
//! (universal character names).

/// Returns `true` if `c` may follow a backslash.
#[inline]
pub(crate) fn is_valid_escape(c: char) -> bool {
    matches!(
        c,
        'n' | 't' | 'r' | '\\' | '\'' | '"' | '0'..='7' | 'a' | 'b' | 'f' | 'v' | '?' | 'x' | 'u'
            | 'U'
    )
}

/// An unrecognized escape inside a literal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct InvalidEscape {
    /// Byte offset of the backslash within the literal text.
    pub offset: usize,
    /// The character after the backslash.
    pub escaped: char,
}

impl InvalidEscape {
    /// Byte length of the backslash plus the escaped character.
    pub(crate) fn len(self) -> usize {
        1 + self.escaped.len_utf8()
    }
}

/// Find every invalid escape in `literal`, quotes included.
///
/// Each backslash consumes the character after it, so `\\q` is a valid
/// `\\` followed by a plain `q`.
pub(crate) fn invalid_escapes(literal: &str) -> Vec<InvalidEscape> {
    let mut found = Vec::new();
    let mut chars = literal.char_indices();
    while let Some((offset, c)) = chars.next() {
        if c != '\\' {
            continue;
        }
        match chars.next() {
            Some((_, escaped)) if !is_valid_escape(escaped) => {
                found.push(InvalidEscape { offset, escaped });
            }
            _ => {}
        }
    }
    found
}
