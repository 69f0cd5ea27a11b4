//! Error types for schema loading and grammar compilation.
use std::path::PathBuf;

use thiserror::Error;

/// Failures while lowering a schema tree into a grammar.
#[derive(Debug, Error)]
pub enum CompileError {
    /// Root is not a mapping, or its `type` is not `object`.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    #[error("missing type in definition")]
    MissingType,

    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    #[error("array definition missing items")]
    MissingItems,

    /// A node that should be a schema mapping is some other value.
    #[error("invalid definition for {0}")]
    InvalidDefinition(String),

    /// Wraps the failure of a named property; the cause stays reachable
    /// through [`std::error::Error::source`].
    #[error("error processing property '{name}'")]
    PropertyError {
        name: String,
        #[source]
        source: Box<CompileError>,
    },
}

impl CompileError {
    pub(crate) fn in_property(name: &str, cause: CompileError) -> Self {
        Self::PropertyError { name: name.to_owned(), source: Box::new(cause) }
    }

    /// Innermost error of a `PropertyError` chain.
    pub fn root_cause(&self) -> &CompileError {
        match self {
            Self::PropertyError { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Property names from outermost to innermost.
    pub fn property_path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        let mut cur = self;
        while let Self::PropertyError { name, source } = cur {
            path.push(name.as_str());
            cur = source;
        }
        path
    }
}

/// Failures while reading a schema document from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("unsupported file format: {0:?}")]
    UnsupportedFormat(String),

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error parsing JSON input")]
    Json(#[from] serde_json::Error),

    #[error("error parsing YAML input")]
    Yaml(#[from] serde_yaml::Error),
}
