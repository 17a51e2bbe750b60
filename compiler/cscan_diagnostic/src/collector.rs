//! Per-scan diagnostic collection.
//!
//! The collector keeps diagnostics ordered by source offset as they arrive,
//! so a report made late (an opener left unclosed at end of input) still
//! lands at its opener's position. Equal offsets keep recording order.
//! There is no deduplication: each recorded fault is kept.

use tracing::trace;

use crate::{Diagnostic, ErrorKind};

/// Diagnostics recorded during one scan.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic, keeping the list ordered by offset.
    pub fn record(&mut self, diagnostic: Diagnostic) {
        trace!(
            code = diagnostic.code(),
            line = diagnostic.position.line,
            column = diagnostic.position.column,
            "recorded diagnostic: {}",
            diagnostic.message
        );
        let offset = diagnostic.span.start;
        let idx = self
            .diagnostics
            .partition_point(|d| d.span.start <= offset);
        self.diagnostics.insert(idx, diagnostic);
    }

    /// All diagnostics, ordered by source position.
    pub fn all(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of recorded diagnostics of `kind`.
    pub fn error_count_by_kind(&self, kind: ErrorKind) -> usize {
        self.diagnostics.iter().filter(|d| d.kind == kind).count()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl Extend<Diagnostic> for DiagnosticCollector {
    fn extend<T: IntoIterator<Item = Diagnostic>>(&mut self, iter: T) {
        for diagnostic in iter {
            self.record(diagnostic);
        }
    }
}

#[cfg(test)]
mod tests;
