//! Token cooking: raw `(RawTag, len)` pairs to positioned [`Token`]s.
//!
//! The cooker sits between the raw scanner (`cscan_lexer_core`) and the
//! caller:
//!
//! ```text
//! source → RawScanner → (RawTag, len) → Scanner → Token + Diagnostic
//! ```
//!
//! Each `RawTag` category has a dedicated cooking path:
//! - **Operators/punctuation**: direct mapping, delimiters go through the
//!   balance stack, `.` through the spaced-member-access check
//! - **Numbers**: classified into integer, float, or a faulty unit
//! - **Strings/chars**: escapes validated, literal kept as written
//! - **Errors**: a diagnostic is recorded and the raw token's text becomes
//!   its skipped span
//!
//! Every raw token either becomes exactly one `Token` or is skipped by
//! exactly one diagnostic, so the input is always fully accounted for.

use cscan_diagnostic::{Diagnostic, DiagnosticCollector};
use cscan_ir::{SourcePosition, Span, Token, TokenKind};
use cscan_lexer_core::{RawTag, RawToken};
use tracing::debug;

use crate::delimiters::{CloseOutcome, Delimiter, DelimiterStack};
use crate::escape;
use crate::lex_error;
use crate::number::{self, NumberKind};
use crate::LexerConfig;

/// Cooks one source into tokens, recording faults as it goes.
///
/// [`new`](Self::new) runs the raw scanner over the whole source up front;
/// cooking is lazy, so a token's diagnostics are recorded only when the
/// iterator reaches it. Yields every token including whitespace, ending
/// with exactly one `EndOfInput`. Call [`finish`](Self::finish) to get the
/// diagnostics.
///
/// Sources longer than `u32::MAX` bytes are only scanned up to that length;
/// [`try_scan`](crate::try_scan) rejects them up front.
pub struct Scanner<'src> {
    source: &'src str,
    config: LexerConfig,
    raw: Vec<RawToken>,
    /// Index of the next raw token to cook.
    next_raw: usize,
    /// Position of the next raw token.
    pos: SourcePosition,
    delimiters: DelimiterStack,
    collector: DiagnosticCollector,
    /// Kind of the last emitted token that is neither whitespace nor a
    /// comment. Cleared when input is skipped.
    prev_significant: Option<TokenKind>,
    emitted: usize,
    finished: bool,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str, config: &LexerConfig) -> Self {
        Scanner {
            source,
            config: *config,
            raw: cscan_lexer_core::tokenize(source),
            next_raw: 0,
            pos: SourcePosition::START,
            delimiters: DelimiterStack::default(),
            collector: DiagnosticCollector::new(),
            prev_significant: None,
            emitted: 0,
            finished: false,
        }
    }

    /// Diagnostics recorded so far.
    pub fn collector(&self) -> &DiagnosticCollector {
        &self.collector
    }

    /// Scan whatever is left and return every recorded diagnostic.
    pub fn finish(mut self) -> DiagnosticCollector {
        self.by_ref().for_each(drop);
        self.collector
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        self.collector.record(diagnostic);
    }

    /// Cook one raw token. Returns `None` when a diagnostic consumed it.
    fn cook(&mut self, raw: RawToken) -> Option<Token> {
        let start = self.pos;
        let from = start.offset as usize;
        let text = self
            .source
            .get(from..from + raw.len as usize)
            .unwrap_or_default();
        let end = start.advance(text);
        self.pos = end;
        let span = Span::between(start, end);

        let kind = match raw.tag {
            RawTag::Ident => Some(TokenKind::Identifier),
            RawTag::Number => self.cook_number(start, span, text),
            RawTag::String => {
                self.check_escapes(start, text);
                Some(TokenKind::StringLiteral)
            }
            RawTag::Char => {
                self.check_escapes(start, text);
                Some(TokenKind::CharLiteral)
            }

            RawTag::Plus
            | RawTag::Minus
            | RawTag::Star
            | RawTag::Slash
            | RawTag::Percent
            | RawTag::Equal
            | RawTag::EqualEqual
            | RawTag::BangEqual
            | RawTag::Less
            | RawTag::Greater
            | RawTag::LessEqual
            | RawTag::GreaterEqual
            | RawTag::Spaceship
            | RawTag::AmpAmp
            | RawTag::PipePipe
            | RawTag::Bang
            | RawTag::Amp
            | RawTag::Pipe
            | RawTag::Caret
            | RawTag::Tilde
            | RawTag::Shl
            | RawTag::Shr
            | RawTag::PlusEqual
            | RawTag::MinusEqual
            | RawTag::StarEqual
            | RawTag::SlashEqual
            | RawTag::PercentEqual
            | RawTag::AmpEqual
            | RawTag::PipeEqual
            | RawTag::CaretEqual
            | RawTag::ShlEqual
            | RawTag::ShrEqual
            | RawTag::PlusPlus
            | RawTag::MinusMinus
            | RawTag::Arrow
            | RawTag::ArrowStar
            | RawTag::DotStar
            | RawTag::Question => Some(TokenKind::Operator),

            RawTag::LeftParen
            | RawTag::RightParen
            | RawTag::LeftBrace
            | RawTag::RightBrace
            | RawTag::LeftBracket
            | RawTag::RightBracket => self.cook_delimiter(raw.tag, start, span),
            RawTag::Dot => self.cook_dot(start, span),
            RawTag::Semicolon
            | RawTag::Comma
            | RawTag::Colon
            | RawTag::ColonColon
            | RawTag::Ellipsis => Some(TokenKind::Punctuation),

            RawTag::Whitespace => Some(TokenKind::Whitespace),
            RawTag::LineComment | RawTag::BlockComment => Some(TokenKind::Comment),
            RawTag::Directive => Some(TokenKind::Directive),

            RawTag::InvalidByte => {
                self.report(lex_error::invalid_character(start, span, text));
                None
            }
            RawTag::UnterminatedString => {
                self.report(lex_error::unterminated_literal(start, span, '"'));
                None
            }
            RawTag::UnterminatedChar => {
                self.report(lex_error::unterminated_literal(start, span, '\''));
                None
            }
            RawTag::UnterminatedBlockComment => {
                self.report(lex_error::unterminated_comment(start, span));
                None
            }
            RawTag::ReversedCompoundAssign => {
                self.report(lex_error::reversed_compound_assign(start, span, text));
                None
            }
            // `tokenize` never yields it.
            RawTag::Eof => None,
        };

        match kind {
            Some(kind) => {
                if !matches!(kind, TokenKind::Whitespace | TokenKind::Comment) {
                    self.prev_significant = Some(kind);
                }
                Some(Token::new(kind, text, start, end))
            }
            None => {
                self.prev_significant = None;
                None
            }
        }
    }

    fn cook_number(&mut self, start: SourcePosition, span: Span, text: &str) -> Option<TokenKind> {
        match number::classify(text) {
            Ok(NumberKind::Integer) => Some(TokenKind::IntegerLiteral),
            Ok(NumberKind::Float) => Some(TokenKind::FloatLiteral),
            Err(error) => {
                self.report(lex_error::number_fault(start, span, text, error));
                None
            }
        }
    }

    /// Report invalid escapes in a closed literal starting at `start`.
    fn check_escapes(&mut self, start: SourcePosition, text: &str) {
        for escape in escape::invalid_escapes(text) {
            let before = text.get(..escape.offset).unwrap_or_default();
            let at = start.advance(before);
            let sequence = text
                .get(escape.offset..escape.offset + escape.len())
                .unwrap_or_default();
            let span = Span::new(at.offset, at.advance(sequence).offset);
            self.report(lex_error::invalid_escape(at, span, escape));
        }
    }

    fn cook_delimiter(
        &mut self,
        tag: RawTag,
        start: SourcePosition,
        span: Span,
    ) -> Option<TokenKind> {
        if !self.config.track_delimiters {
            return Some(TokenKind::Punctuation);
        }
        if let Some(delimiter) = Delimiter::from_opener(tag) {
            self.delimiters.push(delimiter, start, span);
            return Some(TokenKind::Punctuation);
        }
        let delimiter = Delimiter::from_closer(tag)?;
        match self.delimiters.close(delimiter) {
            CloseOutcome::Matched => Some(TokenKind::Punctuation),
            CloseOutcome::Unopened => {
                self.report(lex_error::unopened_closer(start, span, delimiter));
                None
            }
            CloseOutcome::Mismatched { abandoned } => {
                self.report(lex_error::mismatched_closer(
                    start, span, delimiter, &abandoned,
                ));
                None
            }
        }
    }

    fn cook_dot(&mut self, start: SourcePosition, span: Span) -> Option<TokenKind> {
        if self.config.flag_spaced_member_access && self.is_spaced_member_access() {
            self.report(lex_error::spaced_member_access(start, span));
            None
        } else {
            Some(TokenKind::Punctuation)
        }
    }

    /// `ident . ident`: whitespace on both sides of the dot just cooked,
    /// an identifier before it and an identifier as the next significant
    /// token.
    fn is_spaced_member_access(&self) -> bool {
        let dot = self.next_raw - 1;
        let is_whitespace =
            |idx: usize| self.raw.get(idx).is_some_and(|t| t.tag == RawTag::Whitespace);

        self.prev_significant == Some(TokenKind::Identifier)
            && dot > 0
            && is_whitespace(dot - 1)
            && is_whitespace(dot + 1)
            && self.raw[dot + 1..]
                .iter()
                .find(|t| {
                    !matches!(
                        t.tag,
                        RawTag::Whitespace | RawTag::LineComment | RawTag::BlockComment
                    )
                })
                .is_some_and(|t| t.tag == RawTag::Ident)
    }

    fn end_of_input(&mut self) -> Token {
        self.finished = true;
        let unclosed = self.delimiters.depth();
        for open in self.delimiters.drain() {
            self.collector.record(lex_error::unclosed_opener(open));
        }
        self.emitted += 1;
        debug!(
            bytes = self.source.len(),
            tokens = self.emitted,
            diagnostics = self.collector.len(),
            unclosed,
            "scan finished"
        );
        Token::new(TokenKind::EndOfInput, "", self.pos, self.pos)
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while !self.finished {
            let Some(&raw) = self.raw.get(self.next_raw) else {
                return Some(self.end_of_input());
            };
            self.next_raw += 1;
            if let Some(token) = self.cook(raw) {
                self.emitted += 1;
                return Some(token);
            }
        }
        None
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}
