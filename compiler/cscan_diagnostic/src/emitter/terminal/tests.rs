use cscan_ir::{SourcePosition, Span};

use super::*;
use crate::ErrorKind;

const SOURCE: &str = "int main() {\n    int x = 1 @ 2;\n}\n";

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::new(
        ErrorKind::InvalidCharacter,
        SourcePosition::new(2, 15, 27),
        Span::new(27, 28),
    )
    .with_message("invalid character `@`")
    .with_skipped(Span::new(27, 28))
    .with_label(SourcePosition::new(1, 12, 11), Span::new(11, 12), "inside this block")
    .with_note("`@` does not start any token")
    .with_suggestion("remove the character")
}

fn render(mode: ColorMode, with_source: bool, diags: &[Diagnostic]) -> String {
    let mut output = Vec::new();
    {
        let mut emitter = TerminalEmitter::with_color_mode(&mut output, mode, false);
        if with_source {
            emitter = emitter.with_source("main.cpp", SOURCE);
        }
        emitter.emit_all(diags);
        emitter.flush();
    }
    String::from_utf8(output).unwrap()
}

#[test]
fn test_terminal_emitter_no_color() {
    let text = render(ColorMode::Never, false, &[sample_diagnostic()]);
    assert!(text.contains("error[E0007]: invalid character `@`"));
    assert!(text.contains("  --> 2:15"));
    assert!(text.contains("  ::: 1:12: inside this block"));
    assert!(text.contains("= note: `@` does not start any token"));
    assert!(text.contains("= help: remove the character"));
    assert!(!text.contains("\x1b["));
}

#[test]
fn test_terminal_emitter_with_color() {
    let text = render(ColorMode::Always, false, &[sample_diagnostic()]);
    assert!(text.contains("\x1b["));
    assert!(text.contains("E0007"));
}

#[test]
fn snippet_points_at_span() {
    let text = render(ColorMode::Never, true, &[sample_diagnostic()]);
    assert!(text.contains("  --> main.cpp:2:15"), "{text}");
    assert!(text.contains("2 |     int x = 1 @ 2;"), "{text}");
    assert!(text.contains(&format!("\n | {}^\n", " ".repeat(14))), "{text}");
    assert!(text.contains("  ::: main.cpp:1:12"), "{text}");
}

#[test]
fn snippet_caret_covers_first_line_of_multiline_span() {
    let source = "a /* open\nmore";
    let diag = Diagnostic::new(
        ErrorKind::UnterminatedComment,
        SourcePosition::new(1, 3, 2),
        Span::new(2, 14),
    );
    let mut output = Vec::new();
    {
        let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false)
            .with_source("c.cpp", source);
        emitter.emit(&diag);
    }
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("1 | a /* open\n |   ^^^^^^^\n"), "{text}");
}

#[test]
fn test_emit_all() {
    let diagnostics = vec![
        sample_diagnostic().with_message("error 1"),
        sample_diagnostic().with_message("error 2"),
    ];
    let text = render(ColorMode::Never, false, &diagnostics);
    assert!(text.contains("error 1"));
    assert!(text.contains("error 2"));
}

#[test]
fn test_emit_summary() {
    let mut output = Vec::new();
    {
        let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
        emitter.emit_summary(0);
        emitter.emit_summary(1);
        emitter.emit_summary(3);
    }
    let text = String::from_utf8(output).unwrap();
    assert_eq!(
        text,
        "error: found 1 lexical error\nerror: found 3 lexical errors\n"
    );
}

#[test]
fn test_color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}

#[test]
fn test_color_mode_from_str() {
    assert_eq!("always".parse(), Ok(ColorMode::Always));
    assert_eq!("never".parse(), Ok(ColorMode::Never));
    assert_eq!("auto".parse(), Ok(ColorMode::Auto));
    assert!("sometimes".parse::<ColorMode>().is_err());
}

#[test]
fn test_caret_follows_tab_indentation() {
    let source = "\tint x = @;\n";
    let diag = Diagnostic::new(
        ErrorKind::InvalidCharacter,
        SourcePosition::new(1, 10, 9),
        Span::new(9, 10),
    )
    .with_message("invalid character `@`");
    let mut output = Vec::new();
    {
        let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false)
            .with_source("tabs.cpp", source);
        emitter.emit(&diag);
    }
    let text = String::from_utf8(output).unwrap();
    assert!(
        text.contains("1 | \tint x = @;\n  | \t        ^\n"),
        "{text:?}"
    );
}

#[test]
fn test_caret_indent_keeps_only_tabs() {
    assert_eq!(caret_indent("\t\tab c", 5), "\t\t  ");
    assert_eq!(caret_indent("xy", 1), "");
}
