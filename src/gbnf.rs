//! Emit GBNF-style grammar text from the typed [`Schema`] IR.
use serde_json::Value;

use crate::error::CompileError;
use crate::ir::{Additional, Cardinality, Format, Property, Schema, StringConstraint};

// ————————————————————————————————————————————————————————————————————————————
// TOKENS
// ————————————————————————————————————————————————————————————————————————————

pub const STRING: &str = "<string>";
pub const INTEGER: &str = "<integer>";
pub const NUMBER: &str = "<number>";
pub const BOOLEAN: &str = "<boolean>";
pub const NULL: &str = "null";
pub const ANY: &str = "<any>";
pub const REF: &str = "<ref>";
pub const EMPTY_OBJECT: &str = "{}";

const MEMBER_SEP: &str = ", ";
const ALT_SEP: &str = " | ";
const OPTIONAL: &str = " | ε";
const WILDCARD_KEY: &str = "*";

// ————————————————————————————————————————————————————————————————————————————
// ENTRY
// ————————————————————————————————————————————————————————————————————————————

/// Compile a loaded schema document into a grammar fragment.
///
/// The root must be a mapping with `"type": "object"`; the result is
/// `{ <member>, ... }` or `{}` when nothing is declared.
pub fn compile(schema: &Value) -> Result<String, CompileError> {
    let root = crate::lower::lower_root(schema)?;
    Ok(emit(&root))
}

/// Render one IR node.
pub fn emit(schema: &Schema) -> String {
    match schema {
        Schema::Null => NULL.to_owned(),
        Schema::Boolean => BOOLEAN.to_owned(),
        Schema::Integer => INTEGER.to_owned(),
        Schema::Number => NUMBER.to_owned(),
        Schema::String(constraint) => emit_string(constraint),
        Schema::Array { items, cardinality } => emit_array(items, *cardinality),
        Schema::Object { properties, additional } => {
            if properties.is_empty() {
                return EMPTY_OBJECT.to_owned();
            }
            let mut obj = ObjectFragment::default();
            for (name, property) in properties {
                match property {
                    Property::Ref(_) => obj.push_raw(REF),
                    Property::Typed { schema, required } => obj.push_member(name, &emit(schema), *required),
                }
            }
            match additional {
                Additional::Closed => {}
                Additional::Any => obj.push_member(WILDCARD_KEY, ANY, true),
                Additional::Schema(value) => obj.push_member(WILDCARD_KEY, &emit(value), true),
            }
            obj.finish()
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// EMITTERS
// ————————————————————————————————————————————————————————————————————————————

/// Members are collected and joined once in [`ObjectFragment::finish`].
#[derive(Debug, Default)]
struct ObjectFragment {
    members: Vec<String>,
}

impl ObjectFragment {
    fn push_member(&mut self, key: &str, value: &str, required: bool) {
        let mut member = format!("\"{key}\" : {value}");
        if !required {
            member.push_str(OPTIONAL);
        }
        self.members.push(member);
    }
    fn push_raw(&mut self, member: &str) {
        self.members.push(member.to_owned());
    }
    fn finish(self) -> String {
        format!("{{ {} }}", self.members.join(MEMBER_SEP))
    }
}

fn emit_array(items: &Schema, cardinality: Cardinality) -> String {
    let items = emit(items);
    match cardinality {
        Cardinality::ZeroOrMore => format!("[{items}*]"),
        Cardinality::OneOrMore => format!("[{items}+]"),
        Cardinality::Bare => format!("[{items}]"),
    }
}

fn emit_string(constraint: &StringConstraint) -> String {
    match constraint {
        StringConstraint::Unconstrained => STRING.to_owned(),
        StringConstraint::Enum(values) => {
            let alts: Vec<String> = values.iter().map(|v| format!("\"{v}\"")).collect();
            format!("[{}]", alts.join(ALT_SEP))
        }
        StringConstraint::Pattern(raw) => format!("<pattern {raw}>"),
        StringConstraint::Format(format) => format_token(*format).to_owned(),
    }
}

pub fn format_token(format: Format) -> &'static str {
    match format {
        Format::DateTime => "<datetime>",
        Format::Date => "<date>",
        Format::Email => "<email>",
        Format::Uri => "<uri>",
    }
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
