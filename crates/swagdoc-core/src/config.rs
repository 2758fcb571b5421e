use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ConfigError;

/// Project configuration loaded from `.swagdoc.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DocConfig {
    pub input: String,
    pub output: String,
    pub languages: Vec<SampleLanguage>,
    pub grouping: GroupingStrategy,
    /// Prefix for code-sample URIs. Derived from `host`/`basePath` when unset.
    pub base_url: Option<String>,
}

impl Default for DocConfig {
    fn default() -> Self {
        Self {
            input: "swagger.json".to_string(),
            output: ".".to_string(),
            languages: SampleLanguage::ALL.to_vec(),
            grouping: GroupingStrategy::PathItem,
            base_url: None,
        }
    }
}

/// Client languages an "Example Request" can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleLanguage {
    Curl,
    Csharp,
    Java,
}

impl SampleLanguage {
    pub const ALL: [SampleLanguage; 3] = [
        SampleLanguage::Curl,
        SampleLanguage::Csharp,
        SampleLanguage::Java,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SampleLanguage::Curl => "curl",
            SampleLanguage::Csharp => "csharp",
            SampleLanguage::Java => "java",
        }
    }

    /// Info string of the Markdown code fence.
    pub fn fence(&self) -> &'static str {
        match self {
            SampleLanguage::Curl => "curl",
            SampleLanguage::Csharp => "cs",
            SampleLanguage::Java => "java",
        }
    }
}

impl fmt::Display for SampleLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SampleLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "curl" => Ok(SampleLanguage::Curl),
            "csharp" | "cs" => Ok(SampleLanguage::Csharp),
            "java" => Ok(SampleLanguage::Java),
            other => Err(format!(
                "unknown language `{other}` (expected curl, csharp or java)"
            )),
        }
    }
}

/// How path items are partitioned into resource pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupingStrategy {
    /// The lead operation's tag decides the page for every operation of the path item.
    #[default]
    PathItem,
    /// Every operation is grouped by its own primary tag.
    Operation,
}

impl FromStr for GroupingStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "path_item" | "path-item" => Ok(GroupingStrategy::PathItem),
            "operation" => Ok(GroupingStrategy::Operation),
            other => Err(format!(
                "unknown grouping `{other}` (expected path_item or operation)"
            )),
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".swagdoc.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<DocConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: DocConfig =
        serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# swagdoc configuration
input: swagger.json
output: docs

# Example Request languages, in page order: curl | csharp | java
languages:
  - curl
  - csharp
  - java

# path_item: the first operation's tag decides the page of the whole path
# operation: every operation is grouped by its own tag
grouping: path_item

# base_url: https://api.example.com
"#
}
