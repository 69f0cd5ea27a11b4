//! JSON Schema → GBNF grammar compiler.
//!
//! ```
//! let schema = serde_json::json!({
//!     "type": "object",
//!     "properties": {"name": {"type": "string"}},
//!     "required": ["name"]
//! });
//! assert_eq!(schema_gbnf::compile(&schema).unwrap(), r#"{ "name" : <string> }"#);
//! ```
pub mod cli;
pub mod error;
pub mod gbnf;
pub mod ir;
pub mod load;
pub mod lower;
pub mod pretty;

pub use error::{CompileError, LoadError};
pub use gbnf::compile;
