use super::*;
use pretty_assertions::assert_eq;
use snbt_peg::Suggestions;

fn entry(cursor: usize, reason: ErrorReason, suggestions: &[&str]) -> ErrorEntry {
    ErrorEntry {
        cursor,
        suggestions: if suggestions.is_empty() {
            Suggestions::none()
        } else {
            suggestions.iter().copied().collect()
        },
        reason,
    }
}

#[test]
fn test_single_reason_is_reported_as_is() {
    let error = ParseError::from_entries(
        &[entry(4, ErrorReason::new(ErrorCode::E1009), &[])],
        0,
    );
    assert_eq!(error.code(), ErrorCode::E1009);
    assert_eq!(error.message(), "expected unquoted string");
    assert_eq!(error.position(), 4);
    assert_eq!(error.to_string(), "expected unquoted string at position 4");
}

#[test]
fn test_duplicate_reasons_count_once() {
    let reason = ErrorReason::with_detail(ErrorCode::E0001, "'}'");
    let error = ParseError::from_entries(
        &[entry(2, reason.clone(), &["}"]), entry(2, reason, &["}"])],
        0,
    );
    assert_eq!(error.code(), ErrorCode::E0001);
    assert_eq!(error.candidates().len(), 1);
    assert_eq!(error.suggestions(), ["}".to_string()]);
}

#[test]
fn test_several_reasons_collapse() {
    let error = ParseError::from_entries(
        &[
            entry(1, ErrorReason::with_detail(ErrorCode::E0001, "'.'"), &["."]),
            entry(1, ErrorReason::new(ErrorCode::E1016), &[]),
            entry(1, ErrorReason::with_detail(ErrorCode::E0001, "','"), &[","]),
        ],
        0,
    );
    assert_eq!(error.code(), ErrorCode::E3003);
    assert_eq!(
        error.message(),
        "failed to parse: expected '.', leading zero not allowed, expected ','"
    );
    assert_eq!(error.suggestions(), [",".to_string(), ".".to_string()]);

    let diagnostic = error.to_diagnostic();
    assert_eq!(diagnostic.position, 1);
    assert_eq!(diagnostic.notes.len(), 3);
    assert_eq!(diagnostic.notes[1], "E1016: leading zero not allowed");
}

#[test]
fn test_no_entries_falls_back() {
    let error = ParseError::from_entries(&[], 3);
    assert_eq!(error.code(), ErrorCode::E3003);
    assert_eq!(error.position(), 3);
    assert!(error.candidates().is_empty());
}

#[test]
fn test_expected_compound_points_past_whitespace() {
    let error = ParseError::expected_compound("  [1]");
    assert_eq!(error.code(), ErrorCode::E3002);
    assert_eq!(error.position(), 2);
    assert!(error.to_diagnostic().notes.is_empty());
}
