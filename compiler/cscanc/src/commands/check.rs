//! The `check` command: report every lexical fault in a file.

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use std::str::FromStr;

use cscan_diagnostic::emitter::{ColorMode, DiagnosticEmitter, JsonEmitter, TerminalEmitter};
use cscan_lexer::{check, LexerConfig};
use tracing::debug;

use super::{fail, read_file, CommandError};

/// How diagnostics are rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable, with source snippets, on stderr.
    #[default]
    Terminal,
    /// A JSON array on stdout.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "invalid format `{other}` (expected terminal or json)"
            )),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CheckOptions {
    pub format: OutputFormat,
    pub color: ColorMode,
}

/// Parse the flags following `cscan check <file>`.
pub fn parse_check_options(args: &[String]) -> Result<CheckOptions, CommandError> {
    let mut options = CheckOptions::default();
    for arg in args {
        if let Some(format) = arg.strip_prefix("--format=") {
            options.format = format.parse().map_err(CommandError::Usage)?;
        } else if let Some(color) = arg.strip_prefix("--color=") {
            options.color = color.parse().map_err(CommandError::Usage)?;
        } else {
            return Err(CommandError::Usage(format!("unknown option `{arg}`")));
        }
    }
    Ok(options)
}

/// Check a file. Exits with failure when any diagnostic was recorded.
pub fn check_file(path: &str, options: &CheckOptions) -> ExitCode {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(err) => return fail(&err),
    };
    let result = match options.format {
        OutputFormat::Terminal => {
            let stderr = io::stderr();
            let is_tty = stderr.is_terminal();
            write_check(&mut stderr.lock(), is_tty, path, &source, options)
        }
        OutputFormat::Json => write_check(&mut io::stdout().lock(), false, path, &source, options),
    };
    match result {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => fail(&err),
    }
}

/// Render the diagnostics for `source` and return how many there were.
///
/// `is_tty` only matters for `ColorMode::Auto`.
pub fn write_check<W: Write>(
    out: &mut W,
    is_tty: bool,
    name: &str,
    source: &str,
    options: &CheckOptions,
) -> Result<usize, CommandError> {
    let collector = check(source, &LexerConfig::default())?;
    debug!(name, diagnostics = collector.len(), "checked");

    match options.format {
        OutputFormat::Terminal => {
            let mut emitter = TerminalEmitter::with_color_mode(&mut *out, options.color, is_tty)
                .with_source(name, source);
            emitter.emit_all(collector.all());
            emitter.emit_summary(collector.len());
            emitter.flush();
        }
        OutputFormat::Json => {
            let mut emitter = JsonEmitter::new(&mut *out);
            emitter.begin();
            emitter.emit_all(collector.all());
            emitter.end();
            emitter.flush();
        }
    }
    out.flush()?;
    Ok(collector.len())
}
