use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unable to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid swagger document: top level is not an object")]
    NotAnObject,

    #[error("invalid swagger document: missing required section `{0}`")]
    MissingSection(&'static str),
}

/// Data errors found while walking operations. All of them abort the run.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("{method} {path}: operation declares no `tags` array")]
    MissingTags { method: String, path: String },

    #[error("{method} {path}: operation declares no `responses`")]
    MissingResponses { method: String, path: String },

    #[error("{method} {path}: no 2xx response declared")]
    MissingSuccessResponse { method: String, path: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to resolve output directory {}: {source}", path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("refusing to write `{name}`: not a plain file name")]
    InvalidFileName { name: String },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
