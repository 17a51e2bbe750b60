//! cscan: lexical analyzer for C-family source.

use std::process::ExitCode;

use cscanc::commands::{check_file, explain_error, lex_file, parse_check_options, symbols_file};

fn main() -> ExitCode {
    cscanc::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let Some(command) = args.get(1) else {
        print_usage();
        return ExitCode::SUCCESS;
    };
    let operand = args.get(2);

    match (command.as_str(), operand) {
        ("lex", Some(path)) => lex_file(path),
        ("check", Some(path)) => {
            let flags = args.get(3..).unwrap_or_default();
            match parse_check_options(flags) {
                Ok(options) => check_file(path, &options),
                Err(err) => {
                    eprintln!("error: {err}");
                    eprintln!("Usage: cscan check <file> [--format=terminal|json] [--color=auto|always|never]");
                    ExitCode::FAILURE
                }
            }
        }
        ("symbols", Some(path)) => symbols_file(path),
        ("explain" | "--explain", Some(code)) => explain_error(code),
        ("lex" | "check" | "symbols", None) => usage_error(&format!("cscan {command} <file>")),
        ("explain" | "--explain", None) => usage_error("cscan explain <CODE>"),
        ("help" | "--help" | "-h", _) => {
            print_usage();
            ExitCode::SUCCESS
        }
        ("version" | "--version" | "-V", _) => {
            println!("cscan {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            ExitCode::FAILURE
        }
    }
}

fn usage_error(usage: &str) -> ExitCode {
    eprintln!("Usage: {usage}");
    ExitCode::FAILURE
}

fn print_usage() {
    println!("cscan: lexical analyzer for C-family source");
    println!();
    println!("Usage: cscan <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>          Tokenize and list tokens");
    println!("  check <file>        Report lexical errors (exit 1 if any)");
    println!("  symbols <file>      Print identifier, number and string tables");
    println!("  explain <code>      Explain an error code (e.g., E0003)");
    println!("  help                Show this help message");
    println!("  version             Show version information");
    println!();
    println!("Check options:");
    println!("  --format=<fmt>      Output format: terminal (default), json");
    println!("  --color=<mode>      Colors: auto (default), always, never");
    println!();
    println!("Logging:");
    println!("  RUST_LOG=cscan_lexer=debug cscan check main.cpp");
    println!();
    println!("Examples:");
    println!("  cscan check main.cpp");
    println!("  cscan check main.cpp --format=json");
    println!("  cscan explain E0005");
}
