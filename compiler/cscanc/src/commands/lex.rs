//! The `lex` command: print the significant token stream.

use std::io::{self, Write};
use std::process::ExitCode;

use cscan_lexer::{try_scan, LexerConfig};

use super::{fail, read_file, CommandError};

/// Scan a file and list its tokens on stdout.
pub fn lex_file(path: &str) -> ExitCode {
    let result = read_file(path).and_then(|source| {
        let stdout = io::stdout();
        write_tokens(&mut stdout.lock(), path, &source)
    });
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(&err),
    }
}

/// Write one line per non-whitespace token: position, kind, lexeme.
///
/// Lexical faults do not fail the command; a trailing line counts them.
pub fn write_tokens<W: Write>(out: &mut W, name: &str, source: &str) -> Result<(), CommandError> {
    let output = try_scan(source, &LexerConfig::default())?;
    let count = output.significant_tokens().count();
    writeln!(out, "Tokens for '{name}' ({count} tokens):")?;
    for token in output.significant_tokens() {
        let position = token.start.to_string();
        writeln!(
            out,
            "  {position:<8} {:<16} {:?}",
            token.kind.display_name(),
            token.lexeme
        )?;
    }
    if output.has_errors() {
        let n = output.diagnostics().len();
        writeln!(
            out,
            "({n} lexical errors; run `cscan check {name}` for details)"
        )?;
    }
    Ok(())
}
