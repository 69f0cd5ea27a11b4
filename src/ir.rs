// Strongly-typed schema IR for grammar emission. No serde_json::Value here.
use indexmap::IndexMap;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    Null,
    Boolean,
    Integer,
    Number,
    String(StringConstraint),
    Array {
        items: Box<Schema>,
        cardinality: Cardinality,
    },
    Object {
        /// Declaration order of the source document.
        properties: IndexMap<String, Property>,
        additional: Additional,
    },
}

/// One declared member of an object.
#[derive(Debug, Clone, PartialEq)]
pub enum Property {
    /// `$ref` indirection; never followed.
    Ref(String),
    Typed { schema: Schema, required: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Additional {
    Closed,
    Any,
    Schema(Box<Schema>),
}

/// Repetition expressible in the grammar. Anything else collapses to `Bare`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    ZeroOrMore,
    OneOrMore,
    Bare,
}

/// At most one constraint survives, picked by precedence enum > pattern > format.
#[derive(Debug, Clone, PartialEq)]
pub enum StringConstraint {
    Unconstrained,
    Enum(Vec<String>),
    Pattern(String),
    Format(Format),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    DateTime,
    Date,
    Email,
    Uri,
}

impl Schema {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::String(_) => "string",
            Self::Array { .. } => "array",
            Self::Object { .. } => "object",
        }
    }
}
