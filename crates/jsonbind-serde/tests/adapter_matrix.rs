use jsonbind_core::{parse_text, render, JsonNode, JsonNumber};
use jsonbind_serde::{from_value, to_value};
use serde_json::{json, Value};

#[test]
fn all_six_kinds_map_both_ways() {
    let value = json!({
        "null": null,
        "bool": true,
        "int": 42,
        "float": 2.5,
        "string": "hi",
        "array": [1, "two", false],
        "object": {"nested": []}
    });
    let node = from_value(&value);
    assert_eq!(to_value(&node), value);
}

#[test]
fn object_order_survives_both_directions() {
    // serde_json is built with preserve_order, so insertion order is the
    // document order on both sides of the adapter.
    let text = r#"{"zeta":1,"alpha":2,"mid":3}"#;
    let value: Value = serde_json::from_str(text).unwrap();
    assert_eq!(render(&from_value(&value)), text);

    let node = parse_text(text).unwrap();
    assert_eq!(serde_json::to_string(&to_value(&node)).unwrap(), text);
}

#[test]
fn integers_map_exactly() {
    for raw in ["0", "-1", "9223372036854775807", "18446744073709551615"] {
        let node = parse_text(raw).unwrap();
        let value = to_value(&node);
        assert_eq!(value.to_string(), raw, "narrowing {raw}");
        assert_eq!(from_value(&value), node);
    }
}

#[test]
fn wide_numbers_narrow_to_f64() {
    // Documented adapter lossiness: the core preserves the text, the
    // adapter narrows to the closest f64.
    let node = parse_text("123456789012345678901234567890").unwrap();
    let value = to_value(&node);
    assert_eq!(value.as_f64(), Some(1.2345678901234568e29));

    let fractional = parse_text("2.50").unwrap();
    assert_eq!(to_value(&fractional).as_f64(), Some(2.5));
}

#[test]
fn serde_number_text_becomes_raw_number() {
    let value = json!(1.5);
    assert_eq!(
        from_value(&value),
        JsonNode::Num(JsonNumber::from_raw("1.5").unwrap())
    );
}
