//! Diagnostic system for lexical error reporting.
//!
//! Every fault the scanner finds becomes a [`Diagnostic`]:
//! - an [`ErrorKind`] with a stable code for searchability
//! - a clear message (what went wrong)
//! - a position and span (where it went wrong)
//! - secondary labels (related locations)
//! - suggestions (how to fix)
//!
//! Diagnostics for one scan are gathered by a [`DiagnosticCollector`],
//! which keeps them ordered by source position. Emitters in [`emitter`]
//! render them for humans or tools, and [`ErrorDocs`] serves the long-form
//! explanation for each code.

mod collector;
mod diagnostic;
pub mod emitter;
mod error_kind;
pub mod errors;
pub mod span_utils;

pub use collector::DiagnosticCollector;
pub use diagnostic::{Diagnostic, Label};
pub use error_kind::{ErrorKind, UnknownErrorCode};
pub use errors::ErrorDocs;
