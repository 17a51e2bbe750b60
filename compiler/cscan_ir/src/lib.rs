//! cscan IR - data types shared across the lexer pipeline.
//!
//! This crate contains the plain data structures every other cscan crate
//! speaks in:
//! - [`Span`] for byte ranges in the source
//! - [`SourcePosition`] for line/column/offset triples
//! - [`Token`] and [`TokenKind`] for scanner output
//!
//! Every type here is immutable once built and derives
//! `Clone, Eq, PartialEq, Hash, Debug` so results can be compared and
//! stored by callers without extra glue.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod position;
mod span;
mod token;

pub use position::SourcePosition;
pub use span::Span;
pub use token::{Token, TokenKind};
