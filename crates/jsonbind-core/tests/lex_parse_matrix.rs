use jsonbind_core::lexer::{tokenize, TokenKind};
use jsonbind_core::{parse_text, parse_text_with, JsonError, JsonNode, ParseOptions};

fn kinds(text: &str) -> Vec<TokenKind> {
    tokenize(text)
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

#[test]
fn token_sequence_matrix() {
    assert_eq!(
        kinds(r#"{"a": [1, true, null]}"#),
        vec![
            TokenKind::OpenBrace,
            TokenKind::Str("a".into()),
            TokenKind::Colon,
            TokenKind::OpenBracket,
            TokenKind::Num("1".into()),
            TokenKind::Comma,
            TokenKind::True,
            TokenKind::Comma,
            TokenKind::Null,
            TokenKind::CloseBracket,
            TokenKind::CloseBrace,
            TokenKind::Eof,
        ]
    );
    assert_eq!(kinds("  \t\r\n "), vec![TokenKind::Eof]);
    assert_eq!(kinds("false"), vec![TokenKind::False, TokenKind::Eof]);
}

#[test]
fn string_escape_decoding_matrix() {
    let cases = [
        (r#""plain""#, "plain"),
        (r#""a\"b""#, "a\"b"),
        (r#""a\\b""#, "a\\b"),
        (r#""a\/b""#, "a/b"),
        (r#""\b\f\n\r\t""#, "\u{8}\u{c}\n\r\t"),
        (r#""\u0041""#, "A"),
        (r#""\u00e9""#, "é"),
        (r#""\uD83D\uDE00""#, "😀"),
        ("\"日本語\"", "日本語"),
        (r#""""#, ""),
    ];
    for (input, expected) in cases {
        assert_eq!(
            kinds(input),
            vec![TokenKind::Str(expected.into()), TokenKind::Eof],
            "decoding {input}"
        );
    }
}

#[test]
fn number_token_keeps_raw_text() {
    for raw in ["0", "-0", "42", "-1.5", "1.0", "2e10", "2E+3", "0.1e-2", "1e-100"] {
        assert_eq!(
            kinds(raw),
            vec![TokenKind::Num(raw.into()), TokenKind::Eof],
            "lexing {raw}"
        );
    }
}

#[test]
fn lexical_rejection_matrix() {
    let bad = [
        "01",                    // leading zero
        ".5",                    // bare fraction
        "1.",                    // trailing dot
        "1e",                    // empty exponent
        "-",                     // lone minus
        "\"unterminated",        // no closing quote
        "\"bad \\x escape\"",    // unknown escape
        "\"ctrl \u{0001} char\"", // unescaped control character
        "\"\\uD83D alone\"",     // lone high surrogate
        "\"\\uDE00\"",           // lone low surrogate
        "\"\\u12G4\"",           // non-hex digits
        "tru",                   // truncated keyword
        "#",                     // junk punctuation
    ];
    for input in bad {
        let err = tokenize(input).unwrap_err();
        assert!(
            matches!(err, JsonError::Lex { .. }),
            "{input:?} should fail to lex, got {err:?}"
        );
    }
}

#[test]
fn lex_error_reports_position() {
    let err = tokenize("[1, 01]").unwrap_err();
    assert_eq!(
        err,
        JsonError::Lex {
            position: 4,
            reason: "leading zero in number".into()
        }
    );
}

#[test]
fn parse_value_matrix() {
    assert_eq!(parse_text("null").unwrap(), JsonNode::Null);
    assert_eq!(parse_text("true").unwrap(), JsonNode::Bool(true));
    assert_eq!(parse_text("[]").unwrap(), JsonNode::Array(vec![]));
    assert_eq!(
        parse_text("[[], {}]").unwrap(),
        JsonNode::Array(vec![
            JsonNode::Array(vec![]),
            JsonNode::Object(Default::default()),
        ])
    );

    let node = parse_text(r#"{"name": "ada", "tags": ["a", "b"]}"#).unwrap();
    let JsonNode::Object(fields) = &node else {
        panic!("expected an object");
    };
    assert_eq!(fields.get("name"), Some(&JsonNode::Str("ada".into())));
    assert_eq!(
        fields.get("tags"),
        Some(&JsonNode::Array(vec![
            JsonNode::Str("a".into()),
            JsonNode::Str("b".into()),
        ]))
    );
}

#[test]
fn duplicate_keys_are_last_write_wins() {
    // Deliberate policy, not an accident: the last occurrence of a repeated
    // key overwrites earlier ones, keeping the first occurrence's position.
    let node = parse_text(r#"{"a": 1, "b": 2, "a": 3}"#).unwrap();
    let JsonNode::Object(fields) = &node else {
        panic!("expected an object");
    };
    assert_eq!(fields.len(), 2);
    assert_eq!(jsonbind_core::render(&node), r#"{"a":3,"b":2}"#);
}

#[test]
fn parse_rejection_matrix() {
    let bad = [
        "",                   // empty input
        "[1, 2,]",            // trailing comma in array
        r#"{"a": 1,}"#,       // trailing comma in object
        "[1 2]",              // missing comma
        r#"{"a" 1}"#,         // missing colon
        r#"{1: 2}"#,          // non-string key
        "[1, 2",              // missing close bracket
        r#"{"a": }"#,         // missing value
        "{} {}",              // trailing content
        "1 2",                // trailing content after scalar
        ",",                  // separator as value
    ];
    for input in bad {
        let err = parse_text(input).unwrap_err();
        assert!(
            matches!(err, JsonError::Parse { .. }),
            "{input:?} should fail to parse, got {err:?}"
        );
    }
}

#[test]
fn depth_limit_returns_parse_error() {
    let deep = "[".repeat(600) + &"]".repeat(600);
    let err = parse_text(&deep).unwrap_err();
    assert!(matches!(err, JsonError::Parse { .. }), "got {err:?}");

    let options = ParseOptions { max_depth: 3 };
    assert!(parse_text_with("[[[1]]]", &options).is_ok());
    let err = parse_text_with("[[[[1]]]]", &options).unwrap_err();
    assert_eq!(
        err,
        JsonError::Parse {
            position: 4,
            reason: "nesting deeper than 3 levels".into()
        }
    );
}
