//! Numeric run classification.
//!
//! The raw scanner hands over the maximal run of identifier bytes and dots
//! that starts with a digit (or `.digit`). This module decides whether the
//! run is an integer literal, a float literal, or a faulty unit.
//!
//! Accepted shapes:
//!
//! ```text
//! 0x<hex>+ <int-suffix>?        0b<bin>+ <int-suffix>?
//! <dec>* [. <dec>*] [e [+-] <dec>+] <suffix>?
//! ```

/// Classification of a well-formed numeric run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum NumberKind {
    Integer,
    Float,
}

/// Why a numeric run is not a literal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum NumberError {
    /// Plain digits followed by letters, such as `123variable`.
    IdentifierStartsWithDigit,
    /// More than one `.` in the run.
    MultipleDecimalPoints,
    /// Digits, then letters, then a `.`, such as `123abc.5`.
    LettersBeforeDecimalPoint,
    /// `0x` or `0b` with no digits after the prefix.
    MissingRadixDigits { radix: u32 },
    /// Hex or binary digits followed by something other than an integer suffix.
    InvalidRadixDigits { radix: u32 },
    /// A float followed by something other than `f` or `l`.
    InvalidFloatSuffix,
}

impl NumberError {
    /// Whether the run reads as an identifier that starts with a digit.
    pub(crate) fn is_identifier_like(self) -> bool {
        matches!(self, NumberError::IdentifierStartsWithDigit)
    }

    pub(crate) fn reason(self) -> &'static str {
        match self {
            NumberError::IdentifierStartsWithDigit => "identifiers cannot start with a digit",
            NumberError::MultipleDecimalPoints => "a number can contain at most one `.`",
            NumberError::LettersBeforeDecimalPoint => {
                "the integer part of a number cannot contain letters"
            }
            NumberError::MissingRadixDigits { radix: 16 } => {
                "expected hexadecimal digits after `0x`"
            }
            NumberError::MissingRadixDigits { .. } => "expected binary digits after `0b`",
            NumberError::InvalidRadixDigits { radix: 16 } => {
                "invalid digit or suffix in hexadecimal literal"
            }
            NumberError::InvalidRadixDigits { .. } => "invalid digit or suffix in binary literal",
            NumberError::InvalidFloatSuffix => "invalid suffix on floating-point literal",
        }
    }
}

/// Classify a numeric run.
pub(crate) fn classify(text: &str) -> Result<NumberKind, NumberError> {
    let bytes = text.as_bytes();
    if bytes.iter().filter(|&&b| b == b'.').count() > 1 {
        return Err(NumberError::MultipleDecimalPoints);
    }

    match bytes {
        [b'0', b'x' | b'X', rest @ ..] => classify_radix(rest, 16),
        [b'0', b'b' | b'B', rest @ ..] => classify_radix(rest, 2),
        _ => classify_decimal(bytes),
    }
}

fn classify_radix(rest: &[u8], radix: u32) -> Result<NumberKind, NumberError> {
    let digits = rest
        .iter()
        .take_while(|&&b| char::from(b).is_digit(radix))
        .count();
    if digits == 0 {
        return Err(NumberError::MissingRadixDigits { radix });
    }
    if is_int_suffix(&rest[digits..]) {
        Ok(NumberKind::Integer)
    } else {
        Err(NumberError::InvalidRadixDigits { radix })
    }
}

fn classify_decimal(bytes: &[u8]) -> Result<NumberKind, NumberError> {
    let mut i = count_digits(bytes);
    let mut is_float = false;

    if bytes.get(i) == Some(&b'.') {
        is_float = true;
        i += 1;
        i += count_digits(&bytes[i..]);
    }

    if let Some(exp_len) = exponent_len(&bytes[i..]) {
        is_float = true;
        i += exp_len;
    }

    let suffix = &bytes[i..];
    match (is_float, is_float_suffix(suffix), is_int_suffix(suffix)) {
        (true, true, _) => Ok(NumberKind::Float),
        (true, false, _) => Err(NumberError::InvalidFloatSuffix),
        (false, _, true) => Ok(NumberKind::Integer),
        (false, _, false) if suffix.contains(&b'.') => {
            Err(NumberError::LettersBeforeDecimalPoint)
        }
        (false, _, false) => Err(NumberError::IdentifierStartsWithDigit),
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Length of an exponent (`e10`, `E-3`) at the start of `bytes`, if any.
fn exponent_len(bytes: &[u8]) -> Option<usize> {
    let (b'e' | b'E') = *bytes.first()? else {
        return None;
    };
    let sign = usize::from(matches!(bytes.get(1), Some(b'+' | b'-')));
    let digits = count_digits(&bytes[1 + sign..]);
    (digits > 0).then_some(1 + sign + digits)
}

fn is_float_suffix(suffix: &[u8]) -> bool {
    matches!(suffix, [] | [b'f' | b'F' | b'l' | b'L'])
}

/// `u`, `l`, `ul`, `lu`, `ll`, `ull`, `llu` in any case, or nothing.
fn is_int_suffix(suffix: &[u8]) -> bool {
    if suffix.len() > 3 {
        return false;
    }
    let lower = suffix.to_ascii_lowercase();
    matches!(
        lower.as_slice(),
        b"" | b"u" | b"l" | b"ul" | b"lu" | b"ll" | b"ull" | b"llu"
    )
}
