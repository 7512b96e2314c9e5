use super::*;
use pretty_assertions::assert_eq;
use snbt_diagnostic::ErrorCode;

fn reason(code: ErrorCode) -> ErrorReason {
    ErrorReason::new(code)
}

#[test]
fn test_deeper_failure_discards_shallower() {
    let mut errors = LongestOnly::new();
    errors.store(1, &Suggestions::none(), &reason(ErrorCode::E1013));
    errors.store(1, &Suggestions::none(), &reason(ErrorCode::E1014));
    errors.store(4, &Suggestions::none(), &reason(ErrorCode::E1009));

    let entries = errors.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].cursor, 4);
    assert_eq!(entries[0].reason.code(), ErrorCode::E1009);
}

#[test]
fn test_shallower_failure_is_ignored() {
    let mut errors = LongestOnly::new();
    errors.store(4, &Suggestions::none(), &reason(ErrorCode::E1009));
    errors.store(2, &Suggestions::none(), &reason(ErrorCode::E1013));
    assert_eq!(errors.entries().len(), 1);
    assert_eq!(errors.cursor(), Some(4));
}

#[test]
fn test_ties_accumulate_in_order() {
    let mut errors = LongestOnly::new();
    errors.store(3, &Suggestions::none(), &reason(ErrorCode::E1016));
    errors.store(3, &Suggestions::none(), &reason(ErrorCode::E1008));
    let codes: Vec<ErrorCode> = errors.entries().iter().map(|e| e.reason.code()).collect();
    assert_eq!(codes, vec![ErrorCode::E1016, ErrorCode::E1008]);
}

#[test]
fn test_finish_past_failures_clears_them() {
    let mut errors = LongestOnly::new();
    errors.store(2, &Suggestions::none(), &reason(ErrorCode::E0001));
    errors.finish(2);
    assert_eq!(errors.entries().len(), 1);
    errors.finish(5);
    assert!(errors.entries().is_empty());
    assert_eq!(errors.cursor(), Some(5));
}

#[test]
fn test_nop_keeps_nothing() {
    let mut errors = Nop;
    errors.store(0, &Suggestions::none(), &reason(ErrorCode::E0001));
    errors.finish(1);
}

#[test]
fn test_reason_message() {
    let expected = ErrorReason::with_detail(ErrorCode::E0001, "':'");
    assert_eq!(expected.to_string(), "expected ':'");
    assert_eq!(expected.detail(), Some("':'"));
    assert_eq!(reason(ErrorCode::E1015).message(), "empty key");
}

#[test]
fn test_suggestions() {
    let suggestions: Suggestions = ["true", "false"].into_iter().collect();
    assert_eq!(suggestions.iter().collect::<Vec<_>>(), vec!["true", "false"]);
    assert!(!suggestions.is_empty());
    assert!(Suggestions::none().is_empty());
}
