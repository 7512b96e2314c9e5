use super::*;
use pretty_assertions::assert_eq;

fn compound(entries: &[(&str, Tag)]) -> Tag {
    Tag::Compound(
        entries
            .iter()
            .map(|(key, value)| ((*key).to_string(), value.clone()))
            .collect(),
    )
}

#[test]
fn test_scalar_suffixes() {
    assert_eq!(Tag::Byte(1).to_string(), "1b");
    assert_eq!(Tag::Short(-2).to_string(), "-2s");
    assert_eq!(Tag::Int(3).to_string(), "3");
    assert_eq!(Tag::Long(4).to_string(), "4L");
    assert_eq!(Tag::Float(1.5).to_string(), "1.5f");
    assert_eq!(Tag::Double(0.25).to_string(), "0.25d");
    assert_eq!(Tag::End.to_string(), "END");
}

#[test]
fn test_whole_floats_keep_their_suffix() {
    assert_eq!(Tag::Float(1.0).to_string(), "1f");
    assert_eq!(Tag::Double(-3.0).to_string(), "-3d");
}

#[test]
fn test_typed_arrays() {
    assert_eq!(Tag::ByteArray(vec![1, 2]).to_string(), "[B;1B,2B]");
    assert_eq!(Tag::IntArray(vec![1, -2]).to_string(), "[I;1,-2]");
    assert_eq!(Tag::LongArray(vec![7]).to_string(), "[L;7L]");
    assert_eq!(Tag::IntArray(Vec::new()).to_string(), "[I;]");
}

#[test]
fn test_lists() {
    let list = Tag::List(vec![Tag::Int(1), Tag::from("a"), Tag::List(Vec::new())]);
    assert_eq!(list.to_string(), "[1,\"a\",[]]");
}

#[test]
fn test_compound_keys_sorted_and_quoted_when_needed() {
    let tag = compound(&[
        ("b", Tag::Int(2)),
        ("a", Tag::Int(1)),
        ("has space", Tag::Byte(0)),
        ("true", Tag::Byte(1)),
    ]);
    assert_eq!(
        tag.to_string(),
        "{a:1,b:2,\"has space\":0b,\"true\":1b}"
    );
}

#[test]
fn test_nested_compound() {
    let tag = compound(&[("outer", compound(&[("x", Tag::Long(5))]))]);
    assert_eq!(tag.to_string(), "{outer:{x:5L}}");
}

#[test]
fn test_kind() {
    assert_eq!(Tag::Byte(0).kind(), TagKind::Byte);
    assert_eq!(Tag::LongArray(Vec::new()).kind(), TagKind::LongArray);
    assert_eq!(compound(&[]).kind(), TagKind::Compound);
    assert!(TagKind::Double.is_numeric());
    assert!(!TagKind::String.is_numeric());
    assert_eq!(TagKind::ByteArray.to_string(), "byte array");
}

#[test]
fn test_as_number() {
    assert_eq!(Tag::Byte(-1).as_number(), Some(-1.0));
    assert_eq!(Tag::Long(1 << 40).as_number(), Some(1_099_511_627_776.0));
    assert_eq!(Tag::Float(0.5).as_number(), Some(0.5));
    assert_eq!(Tag::from("1").as_number(), None);
    assert_eq!(Tag::IntArray(vec![1]).as_number(), None);
}

#[test]
fn test_accessors() {
    let tag = compound(&[("name", Tag::from("steve"))]);
    assert_eq!(tag.get("name").and_then(Tag::as_str), Some("steve"));
    assert_eq!(tag.get("missing"), None);
    assert_eq!(Tag::Int(1).get("name"), None);
    assert_eq!(Tag::List(vec![Tag::End]).as_list(), Some(&[Tag::End][..]));
    assert!(tag.clone().into_compound().is_ok());
    assert_eq!(Tag::Int(1).into_compound(), Err(Tag::Int(1)));
}
