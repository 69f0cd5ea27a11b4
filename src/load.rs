//! Read a schema document from disk into a generic value tree.
//!
//! JSON and YAML both land in `serde_json::Value` (with `preserve_order`),
//! so property declaration order survives either way.
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::LoadError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Yaml,
}

impl SourceFormat {
    /// Pick a format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let Some(ext) = path.extension().map(|e| e.to_string_lossy()) else {
            return Err(LoadError::UnsupportedFormat(String::new()));
        };
        match ext.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(LoadError::UnsupportedFormat(format!(".{ext}"))),
        }
    }
}

pub fn load_schema(path: &Path) -> Result<Value, LoadError> {
    if !path.exists() {
        return Err(LoadError::InputNotFound(path.to_path_buf()));
    }
    let format = SourceFormat::from_path(path)?;
    debug!(path = %path.display(), ?format, "loading schema");
    let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_schema(&source, format)
}

pub fn parse_schema(source: &str, format: SourceFormat) -> Result<Value, LoadError> {
    match format {
        SourceFormat::Json => Ok(serde_json::from_str(source)?),
        SourceFormat::Yaml => Ok(serde_yaml::from_str(source)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn extension_dispatch() {
        assert_eq!(SourceFormat::from_path(Path::new("a.json")).unwrap(), SourceFormat::Json);
        assert_eq!(SourceFormat::from_path(Path::new("a.YML")).unwrap(), SourceFormat::Yaml);
        assert_eq!(SourceFormat::from_path(Path::new("dir/a.yaml")).unwrap(), SourceFormat::Yaml);
        assert!(matches!(
            SourceFormat::from_path(Path::new("a.toml")),
            Err(LoadError::UnsupportedFormat(ext)) if ext == ".toml"
        ));
        let bare = SourceFormat::from_path(Path::new("schema")).unwrap_err();
        assert_eq!(bare.to_string(), r#"unsupported file format: """#);
    }

    #[test]
    fn yaml_keeps_key_order() {
        let src = "type: object\nproperties:\n  zeta:\n    type: string\n  alpha:\n    type: integer\n";
        let value = parse_schema(src, SourceFormat::Yaml).unwrap();
        let keys: Vec<&str> = value["properties"].as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha"]);
    }

    #[test]
    fn parse_errors_are_distinct() {
        let json = parse_schema("{\"type\": ", SourceFormat::Json).unwrap_err();
        assert!(matches!(json, LoadError::Json(_)));
        let yaml = parse_schema("type: [object", SourceFormat::Yaml).unwrap_err();
        assert!(matches!(yaml, LoadError::Yaml(_)));
    }

    #[test]
    fn missing_file() {
        let path = PathBuf::from("definitely/not/here.json");
        assert!(matches!(load_schema(&path), Err(LoadError::InputNotFound(p)) if p == path));
    }
}
