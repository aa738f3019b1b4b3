use json_object::{parse, parse_document, parse_document_with, parse_with, ParseError, ParseOptions, Value};

/// Helper: parse and unwrap, for inputs that must succeed.
fn ok(text: &str) -> (Value, usize) {
    parse(text).unwrap_or_else(|e| panic!("parse({text:?}) failed: {e}"))
}

fn list(items: Vec<Value>) -> Value {
    Value::List(items)
}

fn ints(ns: &[i64]) -> Value {
    ns.iter().copied().map(Value::Int).collect()
}

// ============================================================================
// Empty input and whitespace
// ============================================================================

#[test]
fn empty_input_is_null_with_zero_length() {
    assert_eq!(ok(""), (Value::Null, 0));
}

#[test]
fn whitespace_only_input_is_null() {
    assert_eq!(ok("  \n\t"), (Value::Null, 4));
}

#[test]
fn leading_whitespace_counts_toward_length() {
    assert_eq!(ok("   42"), (Value::Int(42), 5));
}

#[test]
fn whitespace_set_covers_control_characters() {
    assert_eq!(ok("\n\t\r\x0b\x0c\x0042"), (Value::Int(42), 8));
}

#[test]
fn whitespace_skipping_is_additive() {
    let (value, len) = ok("[1, {\"a\": 2}]");
    for k in 0..6 {
        let padded = format!("{}[1, {{\"a\": 2}}]", " ".repeat(k));
        assert_eq!(ok(&padded), (value.clone(), k + len), "k = {k}");
    }
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn integer() {
    assert_eq!(ok("42"), (Value::Int(42), 2));
}

#[test]
fn negative_and_signed_integers() {
    assert_eq!(ok("-7"), (Value::Int(-7), 2));
    assert_eq!(ok("+5"), (Value::Int(5), 2));
}

#[test]
fn float_with_fraction() {
    assert_eq!(ok("42.0"), (Value::Float(42.0), 4));
}

#[test]
fn float_with_exponent() {
    assert_eq!(ok("1e10"), (Value::Float(1e10), 4));
    assert_eq!(ok("-3.14e-2"), (Value::Float(-3.14e-2), 8));
    assert_eq!(ok("2E+3"), (Value::Float(2000.0), 4));
}

#[test]
fn integer_overflow_falls_back_to_float() {
    assert_eq!(
        ok("9223372036854775808"),
        (Value::Float(9_223_372_036_854_775_808.0), 19)
    );
    assert_eq!(ok("9223372036854775807"), (Value::Int(i64::MAX), 19));
}

#[test]
fn number_match_is_a_prefix() {
    assert_eq!(ok("12abc"), (Value::Int(12), 2));
    assert_eq!(ok("1."), (Value::Int(1), 1));
    assert_eq!(ok("3e"), (Value::Int(3), 1));
}

#[test]
fn lone_sign_is_invalid_number() {
    assert_eq!(
        parse("-"),
        Err(ParseError::InvalidNumber {
            offset: 0,
            literal: "-".to_string()
        })
    );
    assert_eq!(
        parse(" +abc, 1"),
        Err(ParseError::InvalidNumber {
            offset: 1,
            literal: "+abc".to_string()
        })
    );
}

#[test]
fn float_overflow_is_invalid_number() {
    assert_eq!(
        parse("1e400"),
        Err(ParseError::InvalidNumber {
            offset: 0,
            literal: "1e400".to_string()
        })
    );
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn plain_string() {
    assert_eq!(ok("\"hello\""), (Value::from("hello"), 7));
}

#[test]
fn empty_string() {
    assert_eq!(ok("\"\""), (Value::from(""), 2));
}

#[test]
fn newline_escape_counts_raw_length() {
    assert_eq!(ok("\"a\\nb\""), (Value::from("a\nb"), 6));
}

#[test]
fn escaped_quote_does_not_terminate() {
    assert_eq!(ok(r#""say \"hi\"""#), (Value::from("say \"hi\""), 12));
}

#[test]
fn full_escape_table() {
    let (value, len) = ok(r#""\a\b\f\v\0\r\t\n\\\/\x""#);
    assert_eq!(
        value,
        Value::from("\u{07}\u{08}\u{0c}\u{0b}\0\r\t\n\\/x")
    );
    assert_eq!(len, 24);
}

#[test]
fn multibyte_characters_pass_through() {
    assert_eq!(ok("\"h\u{e9}llo\""), (Value::from("h\u{e9}llo"), 8));
}

#[test]
fn unterminated_string() {
    assert_eq!(
        parse("  \"abc"),
        Err(ParseError::UnterminatedString { offset: 2 })
    );
    assert_eq!(
        parse("\"abc\\\""),
        Err(ParseError::UnterminatedString { offset: 0 })
    );
}

// ============================================================================
// Keywords and unknown tokens
// ============================================================================

#[test]
fn keywords() {
    assert_eq!(ok("true"), (Value::Bool(true), 4));
    assert_eq!(ok("false"), (Value::Bool(false), 5));
    assert_eq!(ok("null"), (Value::Null, 4));
}

#[test]
fn truncated_keyword_is_unexpected_token() {
    assert_eq!(
        parse("nul"),
        Err(ParseError::UnexpectedToken {
            offset: 0,
            found: 'n'
        })
    );
}

#[test]
fn unknown_token_reports_offset() {
    assert_eq!(
        parse("   ?"),
        Err(ParseError::UnexpectedToken {
            offset: 3,
            found: '?'
        })
    );
}

// ============================================================================
// Lists
// ============================================================================

#[test]
fn flat_list() {
    assert_eq!(ok("[1,2,3]"), (ints(&[1, 2, 3]), 7));
}

#[test]
fn empty_lists() {
    assert_eq!(ok("[]"), (list(vec![]), 2));
    assert_eq!(ok("[ \n ]"), (list(vec![]), 5));
}

#[test]
fn list_with_spaces_around_elements() {
    assert_eq!(ok("[ 1 , 2 ]"), (ints(&[1, 2]), 9));
}

#[test]
fn commas_are_optional() {
    assert_eq!(ok("[1 2 3]"), (ints(&[1, 2, 3]), 7));
}

#[test]
fn trailing_comma_is_accepted() {
    assert_eq!(ok("[1,2,]"), (ints(&[1, 2]), 6));
}

#[test]
fn nested_mixed_list() {
    let (value, len) = ok(r#"[1, [2.5, "x"], null, true]"#);
    assert_eq!(
        value,
        list(vec![
            Value::Int(1),
            list(vec![Value::Float(2.5), Value::from("x")]),
            Value::Null,
            Value::Bool(true),
        ])
    );
    assert_eq!(len, 27);
}

#[test]
fn unclosed_list() {
    assert!(matches!(
        parse("[1,2"),
        Err(ParseError::InvalidContainer { offset: 0, .. })
    ));
    assert!(matches!(
        parse("  [1, [2] "),
        Err(ParseError::InvalidContainer { offset: 2, .. })
    ));
}

#[test]
fn bad_element_propagates() {
    assert_eq!(
        parse("[1, ?]"),
        Err(ParseError::UnexpectedToken {
            offset: 4,
            found: '?'
        })
    );
}

// ============================================================================
// Objects
// ============================================================================

#[test]
fn empty_object() {
    assert_eq!(ok("{}"), (Value::Object(Default::default()), 2));
}

#[test]
fn duplicate_keys_last_write_wins() {
    let (value, len) = ok(r#"{"a":1,"a":2}"#);
    assert_eq!(value.len(), Some(1));
    assert_eq!(value["a"], Value::Int(2));
    assert_eq!(len, 13);
}

#[test]
fn colon_is_optional() {
    let (value, len) = ok(r#"{"a" 1}"#);
    assert_eq!(value["a"], Value::Int(1));
    assert_eq!(len, 7);
}

#[test]
fn object_with_trailing_comma_and_whitespace() {
    let (value, len) = ok("{ \"a\" : 1 , \"b\" : [] , }");
    assert_eq!(value["a"], Value::Int(1));
    assert_eq!(value["b"], list(vec![]));
    assert_eq!(len, 24);
}

#[test]
fn non_string_key() {
    assert_eq!(
        parse("{1: 2}"),
        Err(ParseError::NonStringKey {
            offset: 1,
            found: "int"
        })
    );
    assert_eq!(
        parse(r#"{"a": 1, null: 2}"#),
        Err(ParseError::NonStringKey {
            offset: 9,
            found: "null"
        })
    );
}

#[test]
fn key_without_value() {
    assert!(matches!(
        parse(r#"{"a"}"#),
        Err(ParseError::InvalidContainer { offset: 4, .. })
    ));
}

#[test]
fn input_ends_after_colon() {
    assert_eq!(
        parse(r#"{"a":"#),
        Err(ParseError::UnexpectedEnd { offset: 5 })
    );
}

#[test]
fn unclosed_object() {
    assert!(matches!(
        parse(r#"{"a": 1"#),
        Err(ParseError::InvalidContainer { offset: 0, .. })
    ));
}

#[test]
fn nested_structure_end_to_end() {
    let text = r#"{"work":996,"school":[985,211]}"#;
    let (value, len) = ok(text);
    assert_eq!(len, text.len());
    assert_eq!(value["work"], Value::Int(996));
    assert_eq!(value["school"], ints(&[985, 211]));
}

#[test]
fn multi_line_document() {
    let text = r#"{
        "work": 996,
        "school": [985, 211],
        "my_school":{
            "name": "UofT",
            "rank": 21
            }
        }
    "#;
    let (value, len) = ok(text);
    assert_eq!(len, text.trim_end().len());
    assert_eq!(value["my_school"]["name"], Value::from("UofT"));
    assert_eq!(value["my_school"]["rank"], Value::Int(21));
}

// ============================================================================
// Consumed length drives a cursor
// ============================================================================

#[test]
fn consumed_length_advances_over_a_stream_of_values() {
    let text = r#"[1] {"k": "v"} 7 "s""#;
    let mut rest = text;
    let mut values = Vec::new();
    while !rest.is_empty() {
        let (value, len) = ok(rest);
        assert!(len > 0);
        values.push(value);
        rest = &rest[len..];
        rest = rest.trim_start();
    }
    assert_eq!(values.len(), 4);
    assert_eq!(values[0], ints(&[1]));
    assert_eq!(values[1]["k"], Value::from("v"));
    assert_eq!(values[2], Value::Int(7));
    assert_eq!(values[3], Value::from("s"));
}

// ============================================================================
// Options and whole-document parsing
// ============================================================================

#[test]
fn depth_limit() {
    let options = ParseOptions::new().max_depth(2);
    assert_eq!(
        parse_with("[[[1]]]", &options),
        Err(ParseError::DepthLimitExceeded {
            offset: 2,
            limit: 2
        })
    );
    assert!(parse_with("[[1]]", &options).is_ok());
}

#[test]
fn default_depth_limit_allows_moderate_nesting() {
    let text = format!("{}{}", "[".repeat(100), "]".repeat(100));
    let (_, len) = ok(&text);
    assert_eq!(len, 200);
}

#[test]
fn document_rejects_trailing_content() {
    assert_eq!(
        parse_document("[1] x"),
        Err(ParseError::TrailingCharacters { offset: 4 })
    );
    assert_eq!(parse_document("[1]  \n"), Ok(ints(&[1])));
}

#[test]
fn document_allows_trailing_when_configured() {
    let options = ParseOptions::new().allow_trailing(true);
    assert_eq!(parse_document_with("42 43", &options), Ok(Value::Int(42)));
}

#[test]
fn from_str_parses_a_document() {
    let value: Value = r#"{"a": [true]}"#.parse().unwrap();
    assert_eq!(value["a"], list(vec![Value::Bool(true)]));
    assert!("1 2".parse::<Value>().is_err());
}

#[test_log::test]
fn error_display_includes_offset() {
    let err = parse("[1, 2, }").unwrap_err();
    assert_eq!(err.offset(), 7);
    assert_eq!(err.to_string(), "unexpected token '}' at offset 7");
}
