//! Lower a loaded document (`serde_json::Value`) into the typed [`Schema`] IR.
//!
//! Every structural problem is reported here, so emission in
//! [`crate::gbnf`] is infallible.
use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::CompileError;
use crate::ir::{Additional, Cardinality, Format, Property, Schema, StringConstraint};

/// Entry point: the root must be a mapping declaring `"type": "object"`.
pub fn lower_root(root: &Value) -> Result<Schema, CompileError> {
    let Value::Object(map) = root else {
        return Err(CompileError::InvalidSchema("schema must be a mapping".into()));
    };
    if map.get("type").and_then(Value::as_str) != Some("object") {
        return Err(CompileError::InvalidSchema("root schema must be an object type".into()));
    }
    lower_object(map)
}

/// Dispatch on `type`. Fails closed on anything outside the known kinds.
pub fn lower_type(node: &Value) -> Result<Schema, CompileError> {
    let Value::Object(map) = node else {
        return Err(CompileError::InvalidDefinition(format!("schema node {node}")));
    };
    let ty = map.get("type").ok_or(CompileError::MissingType)?;
    let schema = match ty.as_str() {
        Some("object") => lower_object(map)?,
        Some("array") => lower_array(map)?,
        Some("string") => Schema::String(lower_string(map)),
        Some("integer") => Schema::Integer,
        Some("number") => Schema::Number,
        Some("boolean") => Schema::Boolean,
        Some("null") => Schema::Null,
        Some(other) => return Err(CompileError::UnsupportedType(other.to_owned())),
        None => return Err(CompileError::UnsupportedType(ty.to_string())),
    };
    debug!(kind = schema.kind(), "lowered schema node");
    Ok(schema)
}

// ————————————————————————————————————————————————————————————————————————————
// OBJECTS
// ————————————————————————————————————————————————————————————————————————————

fn lower_object(map: &Map<String, Value>) -> Result<Schema, CompileError> {
    let declared = match map.get("properties") {
        None => None,
        Some(v) if !is_truthy(v) => None,
        Some(Value::Object(props)) => Some(props),
        Some(other) => {
            return Err(CompileError::InvalidDefinition(format!("properties {other}")));
        }
    };
    // No declared properties: the object collapses to `{}` and
    // additionalProperties is never looked at.
    let Some(declared) = declared else {
        return Ok(Schema::Object { properties: IndexMap::new(), additional: Additional::Closed });
    };

    let required = required_names(map);
    let mut properties = IndexMap::with_capacity(declared.len());
    for (name, definition) in declared {
        let property = lower_property(name, definition, required.contains(&name.as_str()))
            .map_err(|cause| CompileError::in_property(name, cause))?;
        properties.insert(name.clone(), property);
    }

    let additional = lower_additional(map.get("additionalProperties"))?;
    Ok(Schema::Object { properties, additional })
}

fn lower_property(name: &str, definition: &Value, required: bool) -> Result<Property, CompileError> {
    let Value::Object(def) = definition else {
        return Err(CompileError::InvalidDefinition(name.to_owned()));
    };
    if let Some(target) = def.get("$ref") {
        let target = target.as_str().map(str::to_owned).unwrap_or_else(|| target.to_string());
        debug!(property = name, target = %target, "leaving $ref unresolved");
        return Ok(Property::Ref(target));
    }
    Ok(Property::Typed { schema: lower_type(definition)?, required })
}

/// Names listed under `required`. Names not declared as properties are
/// simply never matched.
fn required_names(map: &Map<String, Value>) -> Vec<&str> {
    map.get("required")
        .and_then(Value::as_array)
        .map(|xs| xs.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

fn lower_additional(value: Option<&Value>) -> Result<Additional, CompileError> {
    match value {
        None => Ok(Additional::Closed),
        Some(v) if !is_truthy(v) => Ok(Additional::Closed),
        Some(Value::Bool(true)) => Ok(Additional::Any),
        Some(node @ Value::Object(_)) => Ok(Additional::Schema(Box::new(lower_type(node)?))),
        Some(other) => Err(CompileError::InvalidDefinition(format!("additionalProperties {other}"))),
    }
}

// ————————————————————————————————————————————————————————————————————————————
// ARRAYS
// ————————————————————————————————————————————————————————————————————————————

fn lower_array(map: &Map<String, Value>) -> Result<Schema, CompileError> {
    let items = map.get("items").ok_or(CompileError::MissingItems)?;
    let items = Box::new(lower_type(items)?);
    let cardinality = cardinality(map.get("minItems"), map.get("maxItems"));
    Ok(Schema::Array { items, cardinality })
}

/// Only `min ∈ {0, 1}` without an upper bound has a quantifier; every other
/// combination drops its bounds.
fn cardinality(min_items: Option<&Value>, max_items: Option<&Value>) -> Cardinality {
    let min = match min_items {
        None => Some(0.0),
        Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
        Some(v) => v.as_f64(),
    };
    if max_items.is_some_and(is_truthy) {
        return Cardinality::Bare;
    }
    match min {
        Some(n) if n == 0.0 => Cardinality::ZeroOrMore,
        Some(n) if n == 1.0 => Cardinality::OneOrMore,
        _ => Cardinality::Bare,
    }
}

/// `0`, `null`, `false`, `""` and empty containers count as undeclared.
fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(xs) => !xs.is_empty(),
        Value::Object(m) => !m.is_empty(),
    }
}

// ————————————————————————————————————————————————————————————————————————————
// STRINGS
// ————————————————————————————————————————————————————————————————————————————

fn lower_string(map: &Map<String, Value>) -> StringConstraint {
    if let Some(values) = map.get("enum") {
        let literals = match values {
            Value::Array(xs) => xs.iter().map(literal_text).collect(),
            other => vec![literal_text(other)],
        };
        return StringConstraint::Enum(literals);
    }
    if let Some(pattern) = map.get("pattern") {
        return StringConstraint::Pattern(literal_text(pattern));
    }
    // Unknown or non-string formats degrade to a plain string.
    match map.get("format").cloned().map(serde_json::from_value::<Format>) {
        Some(Ok(format)) => StringConstraint::Format(format),
        _ => StringConstraint::Unconstrained,
    }
}

fn literal_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
