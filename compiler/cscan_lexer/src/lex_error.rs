//! Diagnostic constructors for lexical faults.
//!
//! Each constructor fills in the kind, the message, and any suggestion. The
//! caller decides whether the reported region was consumed (`with_skipped`)
//! or is still covered by a token.

use cscan_diagnostic::{Diagnostic, ErrorKind};
use cscan_ir::{SourcePosition, Span};

use crate::delimiters::{Delimiter, OpenDelimiter};
use crate::escape::InvalidEscape;
use crate::number::NumberError;

/// A numeric run that reads as an identifier (`123variable`).
#[cold]
pub(crate) fn invalid_identifier_start(pos: SourcePosition, span: Span, text: &str) -> Diagnostic {
    Diagnostic::new(ErrorKind::InvalidIdentifierStart, pos, span)
        .with_message(format!("invalid identifier `{text}`"))
        .with_note("identifiers must start with a letter or `_`")
        .with_skipped(span)
}

#[cold]
pub(crate) fn malformed_number(
    pos: SourcePosition,
    span: Span,
    text: &str,
    error: NumberError,
) -> Diagnostic {
    Diagnostic::new(ErrorKind::MalformedNumber, pos, span)
        .with_message(format!("malformed number `{text}`"))
        .with_note(error.reason())
        .with_skipped(span)
}

/// A number fault, routed to the kind that fits the run's shape.
#[cold]
pub(crate) fn number_fault(
    pos: SourcePosition,
    span: Span,
    text: &str,
    error: NumberError,
) -> Diagnostic {
    if error.is_identifier_like() {
        invalid_identifier_start(pos, span, text)
    } else {
        malformed_number(pos, span, text, error)
    }
}

#[cold]
pub(crate) fn unterminated_literal(pos: SourcePosition, span: Span, quote: char) -> Diagnostic {
    let what = if quote == '"' {
        "string literal"
    } else {
        "character literal"
    };
    Diagnostic::new(ErrorKind::UnterminatedLiteral, pos, span)
        .with_message(format!("unterminated {what}"))
        .with_suggestion(format!("add a closing `{quote}` before the end of the line"))
        .with_skipped(span)
}

/// An invalid escape inside a closed literal. The literal stays a token,
/// so nothing is skipped.
#[cold]
pub(crate) fn invalid_escape(pos: SourcePosition, span: Span, escape: InvalidEscape) -> Diagnostic {
    let escaped = escape.escaped.escape_debug();
    Diagnostic::new(ErrorKind::InvalidEscapeSequence, pos, span)
        .with_message(format!("unknown escape sequence `\\{escaped}`"))
        .with_note(r#"valid escapes are \n \t \r \\ \' \" \0-\7 \a \b \f \v \? \x \u \U"#)
        .with_suggestion(format!("write `\\\\{escaped}` for a literal backslash"))
}

/// A closer with no opener of its kind on the stack.
#[cold]
pub(crate) fn unopened_closer(pos: SourcePosition, span: Span, delimiter: Delimiter) -> Diagnostic {
    Diagnostic::new(ErrorKind::UnmatchedDelimiter, pos, span)
        .with_message(format!("unexpected closing delimiter `{}`", delimiter.close()))
        .with_skipped(span)
}

/// A closer that skips over unclosed openers to reach its match.
#[cold]
pub(crate) fn mismatched_closer(
    pos: SourcePosition,
    span: Span,
    delimiter: Delimiter,
    abandoned: &[OpenDelimiter],
) -> Diagnostic {
    let mut diag = Diagnostic::new(ErrorKind::UnmatchedDelimiter, pos, span)
        .with_message(format!("mismatched closing delimiter `{}`", delimiter.close()))
        .with_skipped(span);
    for open in abandoned {
        let message = if open.delimiter == delimiter {
            format!("`{}` opened here", open.delimiter.open())
        } else {
            format!("unclosed `{}` opened here", open.delimiter.open())
        };
        diag = diag.with_label(open.position, open.span, message);
    }
    if let Some(innermost) = abandoned.first() {
        diag = diag.with_suggestion(format!(
            "close `{}` with `{}` first",
            innermost.delimiter.open(),
            innermost.delimiter.close()
        ));
    }
    diag
}

/// An opener still open at end of input. The opener is already a token.
#[cold]
pub(crate) fn unclosed_opener(open: OpenDelimiter) -> Diagnostic {
    Diagnostic::new(ErrorKind::UnmatchedDelimiter, open.position, open.span)
        .with_message(format!("unclosed delimiter `{}`", open.delimiter.open()))
        .with_suggestion(format!("add a closing `{}`", open.delimiter.close()))
}

#[cold]
pub(crate) fn unterminated_comment(pos: SourcePosition, span: Span) -> Diagnostic {
    Diagnostic::new(ErrorKind::UnterminatedComment, pos, span)
        .with_message("unterminated block comment")
        .with_note("the comment runs to the end of the input")
        .with_suggestion("add `*/` to close the comment")
        .with_skipped(span)
}

#[cold]
pub(crate) fn invalid_character(pos: SourcePosition, span: Span, text: &str) -> Diagnostic {
    let mut diag = Diagnostic::new(ErrorKind::InvalidCharacter, pos, span).with_skipped(span);
    let mut chars = text.chars();
    diag.message = match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_graphic() => format!("invalid character `{c}`"),
        (Some(c), None) => format!("invalid character U+{:04X}", u32::from(c)),
        _ => format!("invalid character sequence `{}`", text.escape_debug()),
    };
    if text == "#" {
        diag = diag.with_note("preprocessor directives must be the first token on their line");
    }
    diag
}

/// `=+` or `=-` written where `+=` or `-=` was meant.
#[cold]
pub(crate) fn reversed_compound_assign(pos: SourcePosition, span: Span, text: &str) -> Diagnostic {
    let fixed: String = text.chars().rev().collect();
    Diagnostic::new(ErrorKind::InvalidCharacter, pos, span)
        .with_message(format!("invalid operator `{text}`"))
        .with_suggestion(format!("did you mean `{fixed}`?"))
        .with_skipped(span)
}

/// `.` with whitespace on both sides between identifiers.
#[cold]
pub(crate) fn spaced_member_access(pos: SourcePosition, span: Span) -> Diagnostic {
    Diagnostic::new(ErrorKind::UnexpectedPunctuation, pos, span)
        .with_message("unexpected `.` between identifiers")
        .with_suggestion("remove the spaces around `.` for member access")
        .with_skipped(span)
}
