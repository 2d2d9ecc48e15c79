//! Tests for output module

use super::*;
use serde_json::json;

#[test]
fn test_compact_writes_one_line_per_hit() {
    let mut writer = JsonWriter::new(Vec::new(), OutputStyle::Compact);
    writer.emit(&json!({"b": 1, "a": [1, 2]})).unwrap();
    writer.emit(&json!({"c": "x"})).unwrap();
    writer.flush().unwrap();

    assert_eq!(writer.written(), 2);
    let out = String::from_utf8(writer.into_inner()).unwrap();
    assert_eq!(out, "{\"b\":1,\"a\":[1,2]}\n{\"c\":\"x\"}\n");
}

#[test]
fn test_pretty_indents_documents() {
    let mut writer = JsonWriter::new(Vec::new(), OutputStyle::Pretty);
    writer.emit(&json!({"msg": "hello"})).unwrap();

    let out = String::from_utf8(writer.into_inner()).unwrap();
    assert_eq!(out, "{\n  \"msg\": \"hello\"\n}\n");
}

#[test]
fn test_vec_sink_collects_in_order() {
    let mut sink: Vec<serde_json::Value> = Vec::new();
    sink.emit(&json!(1)).unwrap();
    sink.emit(&json!(2)).unwrap();
    assert_eq!(sink, vec![json!(1), json!(2)]);
}

#[test]
fn test_default_style_is_compact() {
    assert_eq!(OutputStyle::default(), OutputStyle::Compact);
}
