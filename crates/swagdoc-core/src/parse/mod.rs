pub mod operation;
pub mod parameter;
pub mod response;
pub mod schema;
pub mod spec;

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::ParseError;
use spec::SwaggerSpec;

/// Top-level sections a document must carry before it is deserialized.
pub const REQUIRED_SECTIONS: [&str; 3] = ["swagger", "info", "paths"];

/// Parse a Swagger document from JSON.
pub fn from_json(input: &str) -> Result<SwaggerSpec, ParseError> {
    let raw: Value = serde_json::from_str(input)?;
    from_value(raw)
}

/// Parse a Swagger document from YAML.
pub fn from_yaml(input: &str) -> Result<SwaggerSpec, ParseError> {
    let raw: Value = serde_yaml_ng::from_str(input)?;
    from_value(raw)
}

/// Read and parse a Swagger document, picking the format from the file extension.
pub fn from_file(path: &Path) -> Result<SwaggerSpec, ParseError> {
    let content = fs::read_to_string(path).map_err(|source| ParseError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
    match ext {
        "yaml" | "yml" => from_yaml(&content),
        _ => from_json(&content),
    }
}

fn from_value(raw: Value) -> Result<SwaggerSpec, ParseError> {
    validate_sections(&raw)?;
    let spec: SwaggerSpec = serde_json::from_value(raw)?;
    if !spec.swagger.starts_with("2.") {
        log::warn!(
            "document declares swagger `{}`, only 2.x is understood",
            spec.swagger
        );
    }
    Ok(spec)
}

fn validate_sections(raw: &Value) -> Result<(), ParseError> {
    let object = raw.as_object().ok_or(ParseError::NotAnObject)?;
    for section in REQUIRED_SECTIONS {
        let present = match object.get(section) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(Value::Bool(b)) => *b,
            Some(_) => true,
        };
        if !present {
            return Err(ParseError::MissingSection(section));
        }
    }
    Ok(())
}
