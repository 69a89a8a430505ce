use jsonbind_core::{parse_text, render, render_pretty, JsonNode, JsonNumber, JsonObject};

#[test]
fn number_fidelity_matrix() {
    // The decimal text of a literal survives parse and render untouched: no
    // trailing-zero trimming, no exponent normalization.
    for raw in [
        "0", "-0", "1", "1.0", "1.00", "-1.5", "100", "0.10", "3.14159", "2e10", "2E+3", "1e-100",
        "123456789012345678901234567890",
    ] {
        let node = parse_text(raw).unwrap();
        assert_eq!(render(&node), raw, "round-tripping {raw}");
    }
}

#[test]
fn minified_render_matrix() {
    let cases = [
        ("null", "null"),
        ("[ 1 , 2 ]", "[1,2]"),
        (r#"{ "a" : true , "b" : [ ] }"#, r#"{"a":true,"b":[]}"#),
        (r#""say \"hi\"""#, r#""say \"hi\"""#),
        ("[[[]]]", "[[[]]]"),
    ];
    for (input, expected) in cases {
        assert_eq!(render(&parse_text(input).unwrap()), expected);
    }
}

#[test]
fn escapes_are_reencoded() {
    let node = parse_text(r#""tab\there  quote\"""#).unwrap();
    assert_eq!(render(&node), r#""tab\there  quote\"""#);
    // Decoded escapes that have a short form come back in short form.
    let node = JsonNode::Str("a\nb\\c\u{7f}".into());
    assert_eq!(render(&node), "\"a\\nb\\\\c\u{7f}\"");
}

#[test]
fn object_order_equals_insertion_order() {
    let text = r#"{"zeta":1,"alpha":2,"mid":3}"#;
    assert_eq!(render(&parse_text(text).unwrap()), text);

    let mut obj = JsonObject::new();
    obj.insert("b", JsonNode::Num(JsonNumber::from_i64(1)));
    obj.insert("a", JsonNode::Num(JsonNumber::from_i64(2)));
    assert_eq!(render(&JsonNode::Object(obj)), r#"{"b":1,"a":2}"#);
}

#[test]
fn pretty_render_layout() {
    let node = parse_text(r#"{"name":"ada","tags":["a","b"],"meta":{}}"#).unwrap();
    let expected = "{\n\
         \x20 \"name\": \"ada\",\n\
         \x20 \"tags\": [\n\
         \x20   \"a\",\n\
         \x20   \"b\"\n\
         \x20 ],\n\
         \x20 \"meta\": {}\n\
         }";
    assert_eq!(render_pretty(&node, 2), expected);

    let four = render_pretty(&parse_text("[1]").unwrap(), 4);
    assert_eq!(four, "[\n    1\n]");
}

#[test]
fn value_roundtrip_through_text() {
    let text = r#"{"a":{"b":[1,2.5,null,true,"x"]},"c":""}"#;
    let node = parse_text(text).unwrap();
    let rendered = render(&node);
    assert_eq!(parse_text(&rendered).unwrap(), node);
}
