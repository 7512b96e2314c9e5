use super::*;
use crate::TagBuilder;
use pretty_assertions::assert_eq;
use snbt_tag::Tag;

fn call(name: &str, args: &[Tag]) -> Option<Result<Tag, ErrorCode>> {
    let builtins = Builtins::<TagBuilder>::standard();
    let operation = builtins.get(&BuiltinKey::new(name, args.len()))?;
    Some(operation(&TagBuilder, args).map_err(|reason| reason.code()))
}

#[test]
fn test_key_display() {
    assert_eq!(BuiltinKey::new("nosuch", 1).to_string(), "nosuch/1");
    assert_eq!(BuiltinKey::new("uuid", 0).to_string(), "uuid/0");
}

#[test]
fn test_lookup_is_arity_sensitive() {
    assert!(call("bool", &[Tag::Int(1)]).is_some());
    assert!(call("bool", &[]).is_none());
    assert!(call("bool", &[Tag::Int(1), Tag::Int(2)]).is_none());
    assert!(call("nosuch", &[Tag::Int(1)]).is_none());
}

#[test]
fn test_bool_of_numbers() {
    assert_eq!(call("bool", &[Tag::Int(1)]), Some(Ok(Tag::Byte(1))));
    assert_eq!(call("bool", &[Tag::Double(0.0)]), Some(Ok(Tag::Byte(0))));
    assert_eq!(call("bool", &[Tag::Long(-7)]), Some(Ok(Tag::Byte(1))));
}

#[test]
fn test_bool_rejects_non_numbers() {
    assert_eq!(call("bool", &[Tag::from("yes")]), Some(Err(ErrorCode::E2002)));
    assert_eq!(
        call("bool", &[Tag::List(Vec::new())]),
        Some(Err(ErrorCode::E2002))
    );
}

#[test]
fn test_uuid_words() {
    assert_eq!(
        call("uuid", &[Tag::from("00000000-0000-0000-0000-000000000000")]),
        Some(Ok(Tag::IntArray(vec![0, 0, 0, 0])))
    );
    assert_eq!(
        parse_uuid("f81d4fae-7dec-11d0-a765-00a0c91e6bf6"),
        Some([
            i32::from_ne_bytes(0xf81d_4fae_u32.to_ne_bytes()),
            0x7dec_11d0,
            i32::from_ne_bytes(0xa765_00a0_u32.to_ne_bytes()),
            i32::from_ne_bytes(0xc91e_6bf6_u32.to_ne_bytes()),
        ])
    );
}

#[test]
fn test_uuid_rejects_malformed() {
    assert_eq!(parse_uuid(""), None);
    assert_eq!(parse_uuid("00000000000000000000000000000000"), None);
    assert_eq!(parse_uuid("0000000-00000-0000-0000-000000000000"), None);
    assert_eq!(parse_uuid("g0000000-0000-0000-0000-000000000000"), None);
    assert_eq!(call("uuid", &[Tag::Int(0)]), Some(Err(ErrorCode::E2001)));
}
