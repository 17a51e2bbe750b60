//! Operational errors.
//!
//! Lexical faults are never errors; they are recorded as diagnostics and
//! scanning continues. This type covers inputs the scanner refuses to
//! start on.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LexerError {
    #[error("source is {len} bytes, exceeding the {limit}-byte limit")]
    SourceTooLarge { len: usize, limit: usize },
}
