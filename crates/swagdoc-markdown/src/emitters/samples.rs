use minijinja::{Environment, context};
use serde::Serialize;
use serde_json::Value;
use swagdoc_core::config::SampleLanguage;
use swagdoc_core::context::DocContext;
use swagdoc_core::grouping::Endpoint;
use swagdoc_core::parse::operation::HttpMethod;
use swagdoc_core::parse::parameter::Parameter;

use crate::error::MarkdownError;

/// Headers every sample sends, in this order.
pub const DEFAULT_HEADERS: [(&str, &str); 3] = [
    ("Authorization", "Bearer {Token}"),
    ("Accept", "application/json"),
    ("Content-Type", "application/json"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub name: String,
    pub value: String,
}

/// The body parameter of a request, with the example of the type it points at.
#[derive(Debug, Clone)]
pub struct SampleBody<'a> {
    pub parameter: &'a Parameter,
    pub example: Option<&'a Value>,
}

/// Normalized description of one call, independent of the target language.
#[derive(Debug, Clone)]
pub struct SampleRequest<'a> {
    /// Already version-substituted.
    pub uri: String,
    pub method: HttpMethod,
    pub headers: Vec<Header>,
    pub query: Vec<&'a Parameter>,
    pub body: Option<SampleBody<'a>>,
}

impl<'a> SampleRequest<'a> {
    pub fn from_endpoint(ctx: &DocContext<'a>, endpoint: &Endpoint<'a>) -> Self {
        let body = endpoint.body_parameter().map(|parameter| SampleBody {
            parameter,
            example: body_example(ctx, parameter),
        });

        Self {
            uri: ctx.sample_uri(endpoint.path),
            method: endpoint.method,
            headers: DEFAULT_HEADERS
                .iter()
                .map(|(name, value)| Header {
                    name: name.to_string(),
                    value: value.to_string(),
                })
                .collect(),
            query: endpoint.query_parameters(),
            body,
        }
    }
}

/// Example of the definition a body schema points at, else the schema's own example.
fn body_example<'a>(ctx: &DocContext<'a>, parameter: &'a Parameter) -> Option<&'a Value> {
    let schema = parameter.schema.as_ref()?;
    match schema.ref_name() {
        Some(name) => match ctx.definition(name) {
            Some(definition) => definition.example.as_ref(),
            None => {
                log::warn!(
                    "body parameter `{}` references unknown type `{name}`",
                    parameter.name
                );
                None
            }
        },
        None => schema.example.as_ref(),
    }
}

/// Compact JSON with literal `\n` escape sequences removed.
pub fn compact_example(example: &Value) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(example)?.replace("\\n", ""))
}

/// Escape single quotes for a single-quoted shell argument.
fn shell_quote(value: String) -> String {
    value.replace('\'', "'\\''")
}

/// Renders [`SampleRequest`]s with one template per [`SampleLanguage`].
pub struct SampleRenderer {
    env: Environment<'static>,
}

impl SampleRenderer {
    pub fn new() -> Result<Self, MarkdownError> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.add_filter("shell_quote", shell_quote);
        env.add_template("curl.sh.j2", include_str!("../../templates/curl.sh.j2"))?;
        env.add_template("csharp.cs.j2", include_str!("../../templates/csharp.cs.j2"))?;
        env.add_template("java.java.j2", include_str!("../../templates/java.java.j2"))?;
        Ok(Self { env })
    }

    pub fn render(
        &self,
        language: SampleLanguage,
        request: &SampleRequest<'_>,
    ) -> Result<String, MarkdownError> {
        let tmpl = self.env.get_template(template_name(language))?;

        let body = request
            .body
            .as_ref()
            .and_then(|b| b.example)
            .map(compact_example)
            .transpose()?;
        // A quoted string literal, valid in both C# and Java.
        let body_literal = body.as_ref().map(serde_json::to_string).transpose()?;

        Ok(tmpl.render(context! {
            uri => &request.uri,
            method => request.method.as_str(),
            method_pascal => request.method.pascal_case(),
            headers => &request.headers,
            body => body,
            body_literal => body_literal,
        })?)
    }
}

fn template_name(language: SampleLanguage) -> &'static str {
    match language {
        SampleLanguage::Curl => "curl.sh.j2",
        SampleLanguage::Csharp => "csharp.cs.j2",
        SampleLanguage::Java => "java.java.j2",
    }
}
