use super::*;
use pretty_assertions::assert_eq;
use snbt_diagnostic::ErrorCode;

fn source(text: &str) -> SourceInfo {
    SourceInfo::new("input.snbt", text)
}

fn rendered_error(text: &str, compound: bool) -> String {
    let source = source(text);
    let Err(error) = parse_source(&source, compound) else {
        return String::new();
    };
    let mut out = Vec::new();
    report(&mut out, &error, &source, ColorMode::Never, false);
    String::from_utf8_lossy(&out).into_owned()
}

#[test]
fn test_parse_source_renders_compact_snbt() {
    assert_eq!(
        parse_source(&source("{ b: [1b, 2b], a: 'x' }"), false),
        Ok("{a:\"x\",b:[1b,2b]}".to_string())
    );
    assert_eq!(
        parse_source(&source("[I; 1, 2]"), false),
        Ok("[I;1,2]".to_string())
    );
}

#[test]
fn test_parse_source_compound_mode() {
    assert_eq!(
        parse_source(&source("{a:1}"), true),
        Ok("{a:1}".to_string())
    );
    assert_eq!(
        parse_source(&source("1"), true).map_err(|e| e.code()),
        Err(ErrorCode::E3002)
    );
}

#[test]
fn test_report_shows_location_and_caret() {
    let output = rendered_error("{a: }", false);
    assert!(output.contains("error[E1009]: expected unquoted string"));
    assert!(output.contains(" --> input.snbt:1:5"));
    assert!(output.contains("1 | {a: }"));
    assert!(output.contains("  |     ^"));
}

#[test]
fn test_report_lists_suggestions() {
    let output = rendered_error("_x", false);
    assert!(output.contains("error[E1008]: invalid unquoted start"));
    assert!(output.contains("= help: expected one of: bool, false, true, uuid"));
}

#[test]
fn test_report_without_color_has_no_escapes() {
    let output = rendered_error("1 2", false);
    assert!(output.contains("error[E3001]: trailing data"));
    assert!(!output.contains('\x1b'));
}

#[test]
fn test_describe() {
    assert_eq!(
        describe(ErrorCode::E1016),
        "E1016: leading zero not allowed\n\nCategory: literal error"
    );
    assert!(describe(ErrorCode::E2001).ends_with("built-in operation error"));
    assert!(describe(ErrorCode::E3003).ends_with("top-level error"));
    assert!(describe(ErrorCode::E0001).ends_with("syntax error"));
}

#[test]
fn test_options_flags() {
    let mut options = Options::default();
    assert_eq!(options.apply_flag("--compound"), Ok(()));
    assert_eq!(options.apply_flag("--color=never"), Ok(()));
    assert_eq!(
        options,
        Options {
            compound: true,
            color: ColorMode::Never,
        }
    );
    assert!(options.apply_flag("--color=sometimes").is_err());
    assert!(options.apply_flag("--verbose").is_err());
}

#[test]
fn test_read_source_missing_file() {
    assert!(read_source("/nonexistent/path/input.snbt").is_err());
}
