//! Low-level raw scanner for C-family source text.
//!
//! This crate turns bytes into `(RawTag, len)` pairs and nothing more:
//! no keyword lookup, no escape validation, no delimiter matching and no
//! diagnostics. Malformed input is encoded as error tags
//! (`UnterminatedString`, `InvalidByte`, ...), so scanning never fails.
//!
//! ```text
//! &str → SourceBuffer → Cursor → RawScanner → RawToken { tag, len }
//! ```
//!
//! Raw token lengths always sum to the source length, so a consumer that
//! tracks offsets can rebuild every lexeme.

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::{tokenize, RawScanner};
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
