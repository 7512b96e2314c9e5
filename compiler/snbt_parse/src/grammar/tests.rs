use super::*;
use crate::literal::ArrayValues;
use pretty_assertions::assert_eq;

/// A loosely typed tree with real booleans, to exercise the builder seam.
#[derive(Clone, PartialEq, Debug)]
enum Json {
    Bool(bool),
    Num(f64),
    Str(String),
    List(Vec<Json>),
    Map(Vec<(String, Json)>),
}

struct JsonBuilder;

impl ValueBuilder for JsonBuilder {
    type Value = Json;

    fn boolean(&self, value: bool) -> Json {
        Json::Bool(value)
    }

    fn byte(&self, value: i8) -> Json {
        Json::Num(f64::from(value))
    }

    fn short(&self, value: i16) -> Json {
        Json::Num(f64::from(value))
    }

    fn int(&self, value: i32) -> Json {
        Json::Num(f64::from(value))
    }

    #[expect(clippy::cast_precision_loss, reason = "test values are small")]
    fn long(&self, value: i64) -> Json {
        Json::Num(value as f64)
    }

    fn float(&self, value: f32) -> Json {
        Json::Num(f64::from(value))
    }

    fn double(&self, value: f64) -> Json {
        Json::Num(value)
    }

    fn string(&self, value: String) -> Json {
        Json::Str(value)
    }

    fn byte_array(&self, values: Vec<i8>) -> Json {
        Json::List(values.into_iter().map(|v| self.byte(v)).collect())
    }

    fn int_array(&self, values: Vec<i32>) -> Json {
        Json::List(values.into_iter().map(|v| self.int(v)).collect())
    }

    fn long_array(&self, values: Vec<i64>) -> Json {
        Json::List(values.into_iter().map(|v| self.long(v)).collect())
    }

    fn empty_list(&self) -> Json {
        Json::List(Vec::new())
    }

    fn list(&self, items: Vec<Json>) -> Json {
        Json::List(items)
    }

    fn empty_map(&self) -> Json {
        Json::Map(Vec::new())
    }

    fn map(&self, entries: Vec<(String, Json)>) -> Json {
        Json::Map(entries)
    }

    fn as_bool(&self, value: &Json) -> Option<bool> {
        match value {
            Json::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn as_number(&self, value: &Json) -> Option<f64> {
        match value {
            Json::Num(n) => Some(*n),
            _ => None,
        }
    }

    fn as_str<'v>(&self, value: &'v Json) -> Option<&'v str> {
        match value {
            Json::Str(s) => Some(s),
            _ => None,
        }
    }

    fn is_map(&self, value: &Json) -> bool {
        matches!(value, Json::Map(_))
    }
}

fn num(n: f64) -> Json {
    Json::Num(n)
}

#[test]
fn test_keywords_use_builder_booleans() {
    let grammar = SnbtGrammar::new(JsonBuilder);
    assert_eq!(grammar.parse("true"), Ok(Json::Bool(true)));
    assert_eq!(grammar.parse("False"), Ok(Json::Bool(false)));
    assert_eq!(grammar.parse("truely"), Ok(Json::Str("truely".to_string())));
}

#[test]
fn test_bool_builtin_prefers_builder_booleans() {
    let grammar = SnbtGrammar::new(JsonBuilder);
    assert_eq!(grammar.parse("bool(true)"), Ok(Json::Bool(true)));
    assert_eq!(grammar.parse("bool(2s)"), Ok(Json::Bool(true)));
    assert_eq!(grammar.parse("bool(0)"), Ok(Json::Bool(false)));
}

#[test]
fn test_arrays_go_through_provided_conversion() {
    let grammar = SnbtGrammar::new(JsonBuilder);
    assert_eq!(
        grammar.parse("[I; 1, 2]"),
        Ok(Json::List(vec![num(1.0), num(2.0)]))
    );
    assert_eq!(
        grammar.parse("uuid('00000000-0000-0001-0000-000000000002')"),
        Ok(Json::List(vec![num(0.0), num(1.0), num(0.0), num(2.0)]))
    );
}

#[test]
fn test_map_entries_arrive_in_source_order() {
    let grammar = SnbtGrammar::new(JsonBuilder);
    assert_eq!(
        grammar.parse("{b: 1, a: 'x', b: 2}"),
        Ok(Json::Map(vec![
            ("b".to_string(), num(1.0)),
            ("a".to_string(), Json::Str("x".to_string())),
            ("b".to_string(), num(2.0)),
        ]))
    );
}

#[test]
fn test_empty_collections_are_shared_values() {
    let grammar = SnbtGrammar::new(JsonBuilder);
    assert_eq!(grammar.parse("[]"), Ok(Json::List(Vec::new())));
    assert_eq!(grammar.parse("{ }"), Ok(Json::Map(Vec::new())));
    assert_eq!(
        grammar.parse("[[],{}]"),
        Ok(Json::List(vec![Json::List(Vec::new()), Json::Map(Vec::new())]))
    );
}

#[test]
fn test_parse_compound_uses_builder_inspection() {
    let grammar = SnbtGrammar::new(JsonBuilder);
    assert_eq!(grammar.parse_compound("{}"), Ok(Json::Map(Vec::new())));
    let error = grammar.parse_compound("  'x'").err();
    assert_eq!(error.as_ref().map(ParseError::code), Some(ErrorCode::E3002));
    assert_eq!(error.as_ref().map(ParseError::position), Some(2));
}

#[test]
fn test_grammar_is_reusable_across_inputs() {
    let grammar = SnbtGrammar::new(JsonBuilder);
    assert!(grammar.parse("{a:").is_err());
    assert_eq!(grammar.parse("1.5"), Ok(num(1.5)));
    assert!(grammar.parse("[1,").is_err());
    assert_eq!(grammar.parse("[1]"), Ok(Json::List(vec![num(1.0)])));
}

#[test]
fn test_rules_are_all_bound() {
    let grammar = SnbtGrammar::new(JsonBuilder);
    assert_eq!(grammar.dictionary.unbound().count(), 0);
}

#[test]
fn test_array_values_shape() {
    let builder = JsonBuilder;
    assert_eq!(
        builder.array(ArrayValues::Longs(vec![3])),
        Json::List(vec![num(3.0)])
    );
}

#[test]
fn test_bare_word_start() {
    let grammar = SnbtGrammar::new(JsonBuilder);
    assert_eq!(grammar.parse("abc"), Ok(Json::Str("abc".to_string())));
    assert_eq!(grammar.parse("Z9"), Ok(Json::Str("Z9".to_string())));
    for text in ["_abc", ".abc", "-abc", "9abc"] {
        assert!(grammar.parse(text).is_err(), "{text}");
    }
    let error = grammar.parse("{a: _x}").err();
    assert_eq!(error.as_ref().map(ParseError::code), Some(ErrorCode::E1008));
    assert_eq!(error.as_ref().map(ParseError::position), Some(4));
}

#[test]
fn test_string_chunks_join() {
    assert_eq!(strings::join_chunks(Vec::new()), "");
    let lone = "abc".to_string();
    let address = lone.as_ptr();
    let joined = strings::join_chunks(vec![lone]);
    assert_eq!(joined.as_ptr(), address);
    assert_eq!(
        strings::join_chunks(vec!["a".to_string(), "\n".to_string(), "b".to_string()]),
        "a\nb"
    );

    let grammar = SnbtGrammar::new(JsonBuilder);
    assert_eq!(grammar.parse("''"), Ok(Json::Str(String::new())));
    assert_eq!(grammar.parse("'plain'"), Ok(Json::Str("plain".to_string())));
    assert_eq!(grammar.parse(r"'a\tb\'c'"), Ok(Json::Str("a\tb'c".to_string())));
}
