use schema_gbnf::{compile, CompileError};
use serde_json::json;

#[test]
fn required_string() {
    let schema = json!({"type": "object", "properties": {"name": {"type": "string"}}, "required": ["name"]});
    assert_eq!(compile(&schema).unwrap(), r#"{ "name" : <string> }"#);
}

#[test]
fn optional_string() {
    let schema = json!({"type": "object", "properties": {"name": {"type": "string"}}});
    assert_eq!(compile(&schema).unwrap(), r#"{ "name" : <string> | ε }"#);
}

#[test]
fn optional_string_array() {
    let schema = json!({"type": "object", "properties": {"tags": {"type": "array", "items": {"type": "string"}}}});
    assert_eq!(compile(&schema).unwrap(), r#"{ "tags" : [<string>*] | ε }"#);
}

#[test]
fn required_enum() {
    let schema = json!({
        "type": "object",
        "properties": {"status": {"type": "string", "enum": ["a", "b"]}},
        "required": ["status"]
    });
    assert_eq!(compile(&schema).unwrap(), r#"{ "status" : ["a" | "b"] }"#);
}

#[test]
fn no_properties_is_empty_object() {
    assert_eq!(compile(&json!({"type": "object"})).unwrap(), "{}");
    assert_eq!(compile(&json!({"type": "object", "additionalProperties": true})).unwrap(), "{}");
    let empty = json!({"type": "object", "properties": {}, "additionalProperties": {"type": "string"}});
    assert_eq!(compile(&empty).unwrap(), "{}");
}

#[test]
fn non_object_roots_are_rejected() {
    for root in [
        json!({"type": "string"}),
        json!({"type": "array", "items": {"type": "string"}}),
        json!({"properties": {}}),
        json!([{"type": "object"}]),
        json!(null),
    ] {
        assert!(matches!(compile(&root), Err(CompileError::InvalidSchema(_))), "{root}");
    }
}

#[test]
fn string_precedence_end_to_end() {
    let schema = json!({
        "type": "object",
        "required": ["a", "b", "c", "d"],
        "properties": {
            "a": {"type": "string", "enum": ["x"], "pattern": "^y$", "format": "uri"},
            "b": {"type": "string", "pattern": "^y$", "format": "uri"},
            "c": {"type": "string", "format": "uri"},
            "d": {"type": "string", "format": "ipv4"}
        }
    });
    assert_eq!(
        compile(&schema).unwrap(),
        r#"{ "a" : ["x"], "b" : <pattern ^y$>, "c" : <uri>, "d" : <string> }"#
    );
}

#[test]
fn additional_properties_wildcards() {
    let any = json!({
        "type": "object",
        "required": ["id"],
        "properties": {"id": {"type": "integer"}},
        "additionalProperties": true
    });
    assert_eq!(compile(&any).unwrap(), r#"{ "id" : <integer>, "*" : <any> }"#);

    let typed = json!({
        "type": "object",
        "properties": {"id": {"type": "integer"}},
        "additionalProperties": {"type": "boolean"}
    });
    assert_eq!(compile(&typed).unwrap(), r#"{ "id" : <integer> | ε, "*" : <boolean> }"#);

    let closed = json!({
        "type": "object",
        "properties": {"id": {"type": "integer"}},
        "additionalProperties": false
    });
    assert_eq!(compile(&closed).unwrap(), r#"{ "id" : <integer> | ε }"#);
}

#[test]
fn refs_and_unknown_required_names() {
    let schema = json!({
        "type": "object",
        "required": ["owner", "ghost"],
        "properties": {
            "owner": {"$ref": "#/definitions/user"},
            "note": {"type": "null"}
        }
    });
    assert_eq!(compile(&schema).unwrap(), r#"{ <ref>, "note" : null | ε }"#);
}

#[test]
fn property_error_reports_chain() {
    let schema = json!({
        "type": "object",
        "properties": {"meta": {"type": "object", "properties": {"when": {"kind": "date"}}}}
    });
    let err = compile(&schema).unwrap_err();
    assert_eq!(err.to_string(), "error processing property 'meta'");
    assert_eq!(err.property_path(), ["meta", "when"]);
    assert!(matches!(err.root_cause(), CompileError::MissingType));
    let source = std::error::Error::source(&err).map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("error processing property 'when'"));
}
