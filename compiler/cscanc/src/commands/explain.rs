//! The `explain` command: display documentation for an error code.

use std::process::ExitCode;

use cscan_diagnostic::{ErrorDocs, ErrorKind};

use super::{fail, CommandError};

/// Print the documentation for `code_str` (`E0003` or `UnterminatedLiteral`).
pub fn explain_error(code_str: &str) -> ExitCode {
    match explain_text(code_str) {
        Ok(doc) => {
            println!("{doc}");
            ExitCode::SUCCESS
        }
        Err(err) => fail(&err),
    }
}

pub fn explain_text(code_str: &str) -> Result<&'static str, CommandError> {
    let kind: ErrorKind = code_str.parse().map_err(|_| {
        CommandError::Usage(format!(
            "unknown error code `{code_str}` (codes run from E0001 to E{:04})",
            ErrorKind::ALL.len()
        ))
    })?;
    ErrorDocs::get(kind).ok_or_else(|| {
        CommandError::Usage(format!("no documentation available for {}", kind.as_str()))
    })
}
