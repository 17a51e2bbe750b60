//! The `symbols` command: print the identifier, number and string tables.

use std::io::{self, Write};
use std::process::ExitCode;

use cscan_lexer::{try_scan, LexerConfig, SymbolList, SymbolTable};

use super::{fail, read_file, CommandError};

pub fn symbols_file(path: &str) -> ExitCode {
    let result = read_file(path).and_then(|source| {
        let stdout = io::stdout();
        write_symbols(&mut stdout.lock(), &source)
    });
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(&err),
    }
}

/// Write the three tables built from the tokens of `source`.
///
/// Text skipped by a diagnostic contributes nothing.
pub fn write_symbols<W: Write>(out: &mut W, source: &str) -> Result<(), CommandError> {
    let output = try_scan(source, &LexerConfig::default())?;
    let table = SymbolTable::build(output.tokens());
    write_list(out, "Identifiers", &table.identifiers)?;
    write_list(out, "Numbers", &table.numbers)?;
    write_list(out, "String constants", &table.strings)?;
    Ok(())
}

fn write_list<W: Write>(out: &mut W, title: &str, list: &SymbolList) -> io::Result<()> {
    writeln!(out, "{title} ({}):", list.len())?;
    for (index, lexeme) in list.iter() {
        writeln!(out, "  {index:>4}  {lexeme}")?;
    }
    Ok(())
}
