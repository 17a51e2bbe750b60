//! Command handlers for the cscan CLI.
//!
//! Each submodule implements one command. The `*_file` entry points read
//! the file, write to stdout/stderr and return the process exit code; the
//! `write_*` functions underneath take any writer.

use std::io;
use std::process::ExitCode;

use cscan_lexer::LexerError;

mod check;
mod explain;
mod lex;
mod symbols;

pub use check::{check_file, parse_check_options, write_check, CheckOptions, OutputFormat};
pub use explain::{explain_error, explain_text};
pub use lex::{lex_file, write_tokens};
pub use symbols::{symbols_file, write_symbols};

/// Failures that stop a command. Lexical faults are not among them.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    Read(String),
    #[error(transparent)]
    Lexer(#[from] LexerError),
    #[error("cannot write output: {0}")]
    Write(#[from] io::Error),
    #[error("{0}")]
    Usage(String),
}

/// Read a source file, mapping I/O failures to a one-line message.
pub fn read_file(path: &str) -> Result<String, CommandError> {
    std::fs::read_to_string(path).map_err(|e| {
        CommandError::Read(match e.kind() {
            io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
            io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
            io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
            _ => format!("error reading '{path}': {e}"),
        })
    })
}

/// Report `err` on stderr and fail.
pub(crate) fn fail(err: &CommandError) -> ExitCode {
    eprintln!("error: {err}");
    ExitCode::FAILURE
}
