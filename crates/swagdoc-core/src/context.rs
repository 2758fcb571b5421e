use indexmap::IndexMap;

use crate::parse::operation::Operation;
use crate::parse::schema::Schema;
use crate::parse::spec::{SwaggerSpec, Tag};

/// Literal placeholder substituted with the document version in URI templates.
pub const VERSION_TOKEN: &str = "{version}";

/// Read-only lookups shared by every renderer during one run.
#[derive(Debug, Clone)]
pub struct DocContext<'a> {
    pub spec: &'a SwaggerSpec,
    /// `info.version` without its leading `v`/`V`.
    pub version: String,
    /// Prefix of code-sample URIs; empty when samples use the bare path.
    pub base_url: String,
    tags: IndexMap<&'a str, &'a Tag>,
}

impl<'a> DocContext<'a> {
    pub fn new(spec: &'a SwaggerSpec, base_url: Option<&str>) -> Self {
        let tags = spec.tags.iter().map(|t| (t.name.as_str(), t)).collect();
        let base_url = base_url
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or_else(|| derive_base_url(spec));

        Self {
            spec,
            version: numeric_version(&spec.info.version),
            base_url,
            tags,
        }
    }

    pub fn tag(&self, name: &str) -> Option<&'a Tag> {
        self.tags.get(name).copied()
    }

    pub fn definition(&self, name: &str) -> Option<&'a Schema> {
        self.spec.definitions.get(name)
    }

    /// The URI template with every `{version}` token replaced.
    pub fn format_uri(&self, path: &str) -> String {
        path.replace(VERSION_TOKEN, &self.version)
    }

    /// The absolute URI used by code samples.
    pub fn sample_uri(&self, path: &str) -> String {
        format!("{}{}", self.base_url, self.format_uri(path))
    }

    /// The operation's first produced content type, falling back to the document's.
    pub fn response_content_type<'o>(&'o self, op: &'o Operation) -> Option<&'o str> {
        op.produces
            .first()
            .or_else(|| self.spec.produces.first())
            .map(String::as_str)
    }
}

/// Strip a leading `v` or `V` from a version string.
pub fn numeric_version(version: &str) -> String {
    let trimmed = version.trim();
    trimmed
        .strip_prefix(['v', 'V'])
        .unwrap_or(trimmed)
        .to_string()
}

fn derive_base_url(spec: &SwaggerSpec) -> String {
    let Some(host) = spec.host.as_deref().filter(|h| !h.is_empty()) else {
        return String::new();
    };
    let scheme = spec.schemes.first().map(String::as_str).unwrap_or("https");
    let base_path = spec
        .base_path
        .as_deref()
        .unwrap_or("")
        .trim_end_matches('/');
    format!("{scheme}://{host}{base_path}")
}
