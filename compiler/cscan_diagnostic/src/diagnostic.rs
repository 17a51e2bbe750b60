//! Core diagnostic types for structured error reporting.
//!
//! Defines [`Diagnostic`] and [`Label`], the values the scanner records for
//! every lexical fault.

use std::fmt;

use cscan_ir::{SourcePosition, Span};

use crate::ErrorKind;

/// A secondary location related to a diagnostic.
///
/// The primary location is the diagnostic's own `position`/`span`; labels
/// point elsewhere (e.g., the opener an unmatched closer abandoned).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub position: SourcePosition,
    pub span: Span,
    pub message: String,
}

impl Label {
    pub fn new(position: SourcePosition, span: Span, message: impl Into<String>) -> Self {
        Label {
            position,
            span,
            message: message.into(),
        }
    }
}

/// A recorded lexical fault.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be recorded, not silently dropped"]
pub struct Diagnostic {
    pub kind: ErrorKind,
    /// Where the fault starts.
    pub position: SourcePosition,
    /// The reported region.
    pub span: Span,
    /// Input consumed by this diagnostic instead of a token.
    ///
    /// `None` when the reported text is still covered by a token, as for an
    /// invalid escape inside a closed literal.
    pub skipped: Option<Span>,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    /// Create a diagnostic whose message defaults to the kind's title.
    #[cold]
    pub fn new(kind: ErrorKind, position: SourcePosition, span: Span) -> Self {
        Diagnostic {
            kind,
            position,
            span,
            skipped: None,
            message: kind.title().to_owned(),
            labels: Vec::new(),
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Mark `span` as consumed by this diagnostic.
    pub fn with_skipped(mut self, span: Span) -> Self {
        self.skipped = Some(span);
        self
    }

    /// Add a secondary label.
    pub fn with_label(
        mut self,
        position: SourcePosition,
        span: Span,
        message: impl Into<String>,
    ) -> Self {
        self.labels.push(Label::new(position, span, message));
        self
    }

    /// Add a note providing additional context.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a suggestion for fixing the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// The stable error code of this diagnostic's kind.
    pub fn code(&self) -> &'static str {
        self.kind.as_str()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error[{}]: {}\n  --> {}",
            self.kind, self.message, self.position
        )?;

        for label in &self.labels {
            write!(f, "\n      {}: {}", label.position, label.message)?;
        }

        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }

        for suggestion in &self.suggestions {
            write!(f, "\n  = help: {suggestion}")?;
        }

        Ok(())
    }
}
