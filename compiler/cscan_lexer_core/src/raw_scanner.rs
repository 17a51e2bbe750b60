//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces
//! [`RawToken`] values with zero heap allocation. It does not resolve
//! keywords, validate escapes, classify numbers or match delimiters. Those
//! are deferred to the cooking layer.
//!
//! # Design
//!
//! Main dispatch covers all 256 byte values. Each arm calls a focused method
//! that advances the cursor and returns `RawToken { tag, len }`. The sentinel
//! byte (`0x00`) naturally dispatches to `null_byte()`.
//!
//! The only state besides the cursor is whether the scanner sits at the
//! start of a line (ignoring horizontal whitespace), which decides if `#`
//! opens a preprocessor directive.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};
use crate::SourceBuffer;

/// Pure, allocation-free scanner.
///
/// Produces one token at a time as a `(tag, length)` pair.
/// Error conditions are encoded as `RawTag` variants, not as `Result::Err`.
/// The scanner is [`Clone`], so callers can look ahead by scanning a copy.
#[derive(Clone, Debug)]
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
    /// No token other than whitespace has been seen on the current line.
    line_start: bool,
}

impl<'a> RawScanner<'a> {
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self {
            cursor,
            line_start: true,
        }
    }

    /// Byte offset of the next token.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        let token = match self.cursor.current() {
            0 => self.null_byte(start),
            b' ' | b'\t' | b'\r' | b'\n' | 0x0B | 0x0C => return self.whitespace(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'"' => self.quoted(start, b'"', RawTag::String, RawTag::UnterminatedString),
            b'\'' => self.quoted(start, b'\'', RawTag::Char, RawTag::UnterminatedChar),
            b'/' => self.slash_or_comment(start),
            b'#' => self.hash(start),
            b'.' => self.dot(start),
            b'=' => self.equal(start),
            b'+' => self.plus(start),
            b'-' => self.minus(start),
            b'*' => self.with_equal(start, RawTag::Star, RawTag::StarEqual),
            b'%' => self.with_equal(start, RawTag::Percent, RawTag::PercentEqual),
            b'^' => self.with_equal(start, RawTag::Caret, RawTag::CaretEqual),
            b'!' => self.with_equal(start, RawTag::Bang, RawTag::BangEqual),
            b'<' => self.less(start),
            b'>' => self.greater(start),
            b'&' => self.doubled(start, b'&', RawTag::Amp, RawTag::AmpAmp, RawTag::AmpEqual),
            b'|' => self.doubled(start, b'|', RawTag::Pipe, RawTag::PipePipe, RawTag::PipeEqual),
            b':' => self.colon(start),
            b'~' => self.single(start, RawTag::Tilde),
            b'?' => self.single(start, RawTag::Question),
            b'(' => self.single(start, RawTag::LeftParen),
            b')' => self.single(start, RawTag::RightParen),
            b'{' => self.single(start, RawTag::LeftBrace),
            b'}' => self.single(start, RawTag::RightBrace),
            b'[' => self.single(start, RawTag::LeftBracket),
            b']' => self.single(start, RawTag::RightBracket),
            b';' => self.single(start, RawTag::Semicolon),
            b',' => self.single(start, RawTag::Comma),
            // `@`, `$`, backtick, stray backslash, control bytes, DEL and
            // non-ASCII characters start no token.
            b'@' | b'$' | b'`' | b'\\' | 1..=8 | 14..=31 | 127..=255 => self.invalid_byte(start),
        };
        if token.tag != RawTag::Eof {
            self.line_start = false;
        }
        token
    }

    // ─── EOF ─────────────────────────────────────────────────────

    fn null_byte(&mut self, start: u32) -> RawToken {
        if self.cursor.is_eof() {
            RawToken {
                tag: RawTag::Eof,
                len: 0,
            }
        } else {
            // Interior null byte.
            self.cursor.advance();
            RawToken {
                tag: RawTag::InvalidByte,
                len: self.cursor.pos() - start,
            }
        }
    }

    // ─── Whitespace ──────────────────────────────────────────────

    fn whitespace(&mut self, start: u32) -> RawToken {
        let mut saw_newline = false;
        while is_whitespace(self.cursor.current()) {
            saw_newline |= self.cursor.current() == b'\n';
            self.cursor.advance();
        }
        if saw_newline {
            self.line_start = true;
        }
        RawToken {
            tag: RawTag::Whitespace,
            len: self.cursor.pos() - start,
        }
    }

    // ─── Comments & Directives ───────────────────────────────────

    fn slash_or_comment(&mut self, start: u32) -> RawToken {
        match self.cursor.peek() {
            b'/' => {
                self.cursor.advance_n(2);
                self.cursor.eat_until_newline_or_eof();
                RawToken {
                    tag: RawTag::LineComment,
                    len: self.cursor.pos() - start,
                }
            }
            b'*' => {
                self.cursor.advance_n(2);
                let tag = if self.cursor.eat_block_comment_body() {
                    RawTag::BlockComment
                } else {
                    RawTag::UnterminatedBlockComment
                };
                RawToken {
                    tag,
                    len: self.cursor.pos() - start,
                }
            }
            _ => self.with_equal(start, RawTag::Slash, RawTag::SlashEqual),
        }
    }

    /// `#` opens a directive only as the first token on its line.
    fn hash(&mut self, start: u32) -> RawToken {
        if !self.line_start {
            return self.invalid_byte(start);
        }
        loop {
            self.cursor.eat_until_newline_or_eof();
            if self.cursor.is_eof() || !self.continues_line(start) {
                break;
            }
            self.cursor.advance(); // consume '\n' of a continued line
        }
        RawToken {
            tag: RawTag::Directive,
            len: self.cursor.pos() - start,
        }
    }

    /// Returns `true` if the line ending at the cursor ends in `\` (or `\`
    /// before a trailing `\r`).
    fn continues_line(&self, start: u32) -> bool {
        let line = self.cursor.slice_from(start).as_bytes();
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        line.ends_with(b"\\")
    }

    // ─── Identifiers & Numbers ───────────────────────────────────

    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);
        RawToken {
            tag: RawTag::Ident,
            len: self.cursor.pos() - start,
        }
    }

    /// Maximal run of identifier bytes and dots, plus an exponent sign.
    ///
    /// The sign after `e`/`E` is only taken while the run is a plain
    /// decimal mantissa (digits and dots) and a digit follows it.
    fn number(&mut self, start: u32) -> RawToken {
        let mut plain = true;
        loop {
            match self.cursor.current() {
                b'0'..=b'9' | b'.' => self.cursor.advance(),
                b'e' | b'E' => {
                    self.cursor.advance();
                    if plain
                        && matches!(self.cursor.current(), b'+' | b'-')
                        && self.cursor.peek().is_ascii_digit()
                    {
                        self.cursor.advance();
                    }
                    plain = false;
                }
                b if is_ident_continue(b) => {
                    self.cursor.advance();
                    plain = false;
                }
                _ => break,
            }
        }
        RawToken {
            tag: RawTag::Number,
            len: self.cursor.pos() - start,
        }
    }

    // ─── Literals ────────────────────────────────────────────────

    /// String or character literal, from the opening quote to the matching
    /// unescaped quote.
    ///
    /// A line break or end of input before the closing quote produces the
    /// `unterminated` tag, ending just before the line break.
    fn quoted(&mut self, start: u32, quote: u8, closed: RawTag, unterminated: RawTag) -> RawToken {
        self.cursor.advance(); // opening quote
        let tag = loop {
            match self.cursor.skip_to_literal_delim(quote) {
                b'\\' => {
                    self.cursor.advance();
                    match self.cursor.current() {
                        b'\n' | b'\r' => break unterminated,
                        0 if self.cursor.is_eof() => break unterminated,
                        _ => self.cursor.advance_char(),
                    }
                }
                b'\n' | b'\r' | 0 => break unterminated,
                _ => {
                    self.cursor.advance(); // closing quote
                    break closed;
                }
            }
        };
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    // ─── Operators & Punctuation ─────────────────────────────────

    /// Single-byte token: advance one byte and emit the given tag.
    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    /// `op` or `op=`.
    fn with_equal(&mut self, start: u32, bare: RawTag, assign: RawTag) -> RawToken {
        self.cursor.advance();
        let tag = if self.eat(b'=') { assign } else { bare };
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    /// `op`, `opop` or `op=`.
    fn doubled(
        &mut self,
        start: u32,
        byte: u8,
        bare: RawTag,
        double: RawTag,
        assign: RawTag,
    ) -> RawToken {
        self.cursor.advance();
        let tag = if self.eat(byte) {
            double
        } else if self.eat(b'=') {
            assign
        } else {
            bare
        };
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    fn plus(&mut self, start: u32) -> RawToken {
        self.doubled(start, b'+', RawTag::Plus, RawTag::PlusPlus, RawTag::PlusEqual)
    }

    fn minus(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() != b'>' {
            return self.doubled(start, b'-', RawTag::Minus, RawTag::MinusMinus, RawTag::MinusEqual);
        }
        self.cursor.advance_n(2);
        let tag = if self.eat(b'*') {
            RawTag::ArrowStar
        } else {
            RawTag::Arrow
        };
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    /// `=`, `==`, or a reversed compound assignment (`=+`/`=-` followed
    /// by whitespace or end of input).
    fn equal(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        let tag = match self.cursor.current() {
            b'=' => {
                self.cursor.advance();
                RawTag::EqualEqual
            }
            b'+' | b'-' if self.reversed_operator_ends_here() => {
                self.cursor.advance();
                RawTag::ReversedCompoundAssign
            }
            _ => RawTag::Equal,
        };
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    fn reversed_operator_ends_here(&self) -> bool {
        let mut after = self.cursor;
        after.advance();
        is_whitespace(after.current()) || after.is_eof()
    }

    fn less(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        let tag = match self.cursor.current() {
            b'<' => {
                self.cursor.advance();
                if self.eat(b'=') {
                    RawTag::ShlEqual
                } else {
                    RawTag::Shl
                }
            }
            b'=' => {
                self.cursor.advance();
                if self.eat(b'>') {
                    RawTag::Spaceship
                } else {
                    RawTag::LessEqual
                }
            }
            _ => RawTag::Less,
        };
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    fn greater(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        let tag = match self.cursor.current() {
            b'>' => {
                self.cursor.advance();
                if self.eat(b'=') {
                    RawTag::ShrEqual
                } else {
                    RawTag::Shr
                }
            }
            b'=' => {
                self.cursor.advance();
                RawTag::GreaterEqual
            }
            _ => RawTag::Greater,
        };
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    fn colon(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        let tag = if self.eat(b':') {
            RawTag::ColonColon
        } else {
            RawTag::Colon
        };
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    /// `.`, `...`, `.*`, or a number such as `.5` when the previous byte
    /// cannot end an operand.
    fn dot(&mut self, start: u32) -> RawToken {
        let next = self.cursor.peek();
        if next.is_ascii_digit() && !ends_operand(self.cursor.prev()) {
            return self.number(start);
        }
        let tag = if next == b'.' && self.cursor.peek2() == b'.' {
            self.cursor.advance_n(3);
            RawTag::Ellipsis
        } else if next == b'*' {
            self.cursor.advance_n(2);
            RawTag::DotStar
        } else {
            self.cursor.advance();
            RawTag::Dot
        };
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    // ─── Errors ──────────────────────────────────────────────────

    /// One full character that starts no token.
    fn invalid_byte(&mut self, start: u32) -> RawToken {
        self.cursor.advance_char();
        RawToken {
            tag: RawTag::InvalidByte,
            len: self.cursor.pos() - start,
        }
    }

    #[inline]
    fn eat(&mut self, byte: u8) -> bool {
        if self.cursor.current() == byte {
            self.cursor.advance();
            true
        } else {
            false
        }
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    /// Yields tokens up to, but not including, `Eof`.
    fn next(&mut self) -> Option<RawToken> {
        let token = self.next_token();
        (token.tag != RawTag::Eof).then_some(token)
    }
}

/// Scan `source` into raw tokens, excluding the final `Eof`.
pub fn tokenize(source: &str) -> Vec<RawToken> {
    let buf = SourceBuffer::new(source);
    RawScanner::new(buf.cursor()).collect()
}

#[inline]
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n' | 0x0B | 0x0C)
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Bytes after which `.` is member access rather than a number's start.
#[inline]
fn ends_operand(b: u8) -> bool {
    is_ident_continue(b) || b == b')' || b == b']'
}
