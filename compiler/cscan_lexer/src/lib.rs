//! Scanner for C-family source with structured error recovery.
//!
//! Two layers:
//! - `cscan_lexer_core` produces raw `(RawTag, len)` pairs
//! - the [`Scanner`] here cooks them into positioned [`Token`]s and records
//!   every lexical fault in a [`DiagnosticCollector`]
//!
//! Scanning never stops at a fault. After each diagnostic the scanner
//! resumes right after the skipped text; only an unterminated block comment
//! ends tokenization early, because it consumes the rest of the input.
//!
//! Every byte of the input ends up in exactly one token lexeme or exactly
//! one diagnostic's skipped span.
//!
//! ```text
//! scan("int 123variable = 42;")
//!   tokens:      int ␠ ␠ = ␠ 42 ; EndOfInput
//!   diagnostics: E0001 invalid identifier `123variable` at 1:5
//! ```

mod config;
mod cooker;
mod delimiters;
mod error;
mod escape;
pub mod keywords;
mod lex_error;
mod number;
mod symbol_table;

pub use config::LexerConfig;
pub use cooker::Scanner;
pub use error::LexerError;
pub use keywords::is_keyword;
pub use symbol_table::{SymbolList, SymbolTable};

use cscan_diagnostic::{Diagnostic, DiagnosticCollector};
use cscan_ir::Token;

/// Result of scanning one source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanOutput {
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
}

impl ScanOutput {
    /// All tokens, including whitespace, ending with `EndOfInput`.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Diagnostics ordered by source position.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Tokens other than whitespace.
    pub fn significant_tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| !t.is_trivia())
    }

    pub fn into_parts(self) -> (Vec<Token>, Vec<Diagnostic>) {
        (self.tokens, self.diagnostics)
    }
}

/// Scan `source` with the default configuration.
///
/// # Panics
///
/// Panics if `source` is longer than `u32::MAX` bytes. Use [`try_scan`] to
/// get an error instead.
pub fn scan(source: &str) -> ScanOutput {
    match try_scan(source, &LexerConfig::default()) {
        Ok(output) => output,
        Err(err) => panic!("{err}"),
    }
}

/// Scan `source`, rejecting inputs over the configured size limit.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn try_scan(source: &str, config: &LexerConfig) -> Result<ScanOutput, LexerError> {
    check_size(source, config)?;
    let mut scanner = Scanner::new(source, config);
    let tokens: Vec<Token> = scanner.by_ref().collect();
    let diagnostics = scanner.finish().into_diagnostics();
    Ok(ScanOutput {
        tokens,
        diagnostics,
    })
}

/// Scan `source` into a collector, discarding tokens.
pub fn check(source: &str, config: &LexerConfig) -> Result<DiagnosticCollector, LexerError> {
    check_size(source, config)?;
    Ok(Scanner::new(source, config).finish())
}

fn check_size(source: &str, config: &LexerConfig) -> Result<(), LexerError> {
    let limit = config.source_limit();
    if source.len() > limit {
        return Err(LexerError::SourceTooLarge {
            len: source.len(),
            limit,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests;
