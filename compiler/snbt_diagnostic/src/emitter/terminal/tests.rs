use super::*;
use crate::ErrorCode;
use pretty_assertions::assert_eq;

fn render(diagnostic: &Diagnostic, source: &SourceInfo, mode: ColorMode) -> String {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, mode, false);
    emitter.emit(diagnostic, source);
    emitter.flush();
    String::from_utf8(output).unwrap_or_default()
}

#[test]
fn test_plain_rendering() {
    let source = SourceInfo::new("input.snbt", "{a:1,\nb:00}");
    let diagnostic = Diagnostic::error(ErrorCode::E1016).at(9);

    let text = render(&diagnostic, &source, ColorMode::Never);
    assert_eq!(
        text,
        "error[E1016]: leading zero not allowed\n\
         \x20--> input.snbt:2:4\n\
         \x20 |\n\
         2 | b:00}\n\
         \x20 |    ^\n\n"
    );
}

#[test]
fn test_notes_and_suggestions() {
    let source = SourceInfo::new("-", "[1,");
    let diagnostic = Diagnostic::error(ErrorCode::E3003)
        .with_message("failed to parse: expected ']', expected unquoted string")
        .at(3)
        .with_note("2 candidate errors")
        .with_suggestion("]")
        .with_suggestion("true");

    let text = render(&diagnostic, &source, ColorMode::Never);
    assert!(text.contains("-:1:4"));
    assert!(text.contains(" = note: 2 candidate errors"));
    assert!(text.contains(" = help: expected one of: ], true"));
}

#[test]
fn test_colored_rendering() {
    let source = SourceInfo::new("-", "x");
    let diagnostic = Diagnostic::error(ErrorCode::E3002);
    let text = render(&diagnostic, &source, ColorMode::Always);
    assert!(text.contains("\x1b["));
    assert!(text.contains("E3002"));
}

#[test]
fn test_color_mode_from_str() {
    assert_eq!("never".parse::<ColorMode>(), Ok(ColorMode::Never));
    assert_eq!("always".parse::<ColorMode>(), Ok(ColorMode::Always));
    assert!("sometimes".parse::<ColorMode>().is_err());
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Auto.should_use_colors(true));
}
