use swagdoc_core::config::SampleLanguage;
use swagdoc_core::context::DocContext;
use swagdoc_core::error::RenderError;
use swagdoc_core::grouping::Endpoint;
use swagdoc_core::naming::operation_title;
use swagdoc_core::parse::parameter::Parameter;
use swagdoc_core::parse::response::Response;

use super::samples::{SampleRenderer, SampleRequest};
use super::tables::{body_table, query_table};
use crate::error::MarkdownError;
use crate::markdown::Block;

/// Indentation of continuation lines in the endpoint block's query string.
const QUERY_INDENT: &str = "        ";

/// Status code whose response never shows an example body.
const NO_CONTENT: &str = "204";

/// The success response of an endpoint, with its status code.
#[derive(Debug, Clone, Copy)]
pub struct SuccessResponse<'a> {
    pub status_code: &'a str,
    pub response: &'a Response,
}

/// First declared 2xx response. Missing `responses` or a missing 2xx entry is an error.
pub fn success_response<'a>(endpoint: &Endpoint<'a>) -> Result<SuccessResponse<'a>, RenderError> {
    let op = endpoint.operation;
    if op.responses.is_none() {
        return Err(RenderError::MissingResponses {
            method: endpoint.method.to_string(),
            path: endpoint.path.to_string(),
        });
    }
    op.success_response()
        .map(|(status_code, response)| SuccessResponse {
            status_code,
            response,
        })
        .ok_or_else(|| RenderError::MissingSuccessResponse {
            method: endpoint.method.to_string(),
            path: endpoint.path.to_string(),
        })
}

/// Render the section documenting one operation.
pub fn render_endpoint(
    ctx: &DocContext<'_>,
    endpoint: &Endpoint<'_>,
    languages: &[SampleLanguage],
    samples: &SampleRenderer,
) -> Result<Vec<Block>, MarkdownError> {
    let op = endpoint.operation;
    let success = success_response(endpoint)?;
    let query = endpoint.query_parameters();

    let mut blocks = vec![
        Block::heading(3, operation_title(endpoint.method, endpoint.path, op)),
        Block::Paragraph(
            op.description
                .clone()
                .or_else(|| op.summary.clone())
                .unwrap_or_default(),
        ),
        Block::code("endpoint", endpoint_line(ctx, endpoint, &query)),
        Block::heading(4, "Example Request"),
    ];

    let request = SampleRequest::from_endpoint(ctx, endpoint);
    for &language in languages {
        blocks.push(Block::code(language.fence(), samples.render(language, &request)?));
    }

    if let Some(table) = query_table(&query) {
        blocks.push(Block::Table(table));
    }
    if let Some(table) = endpoint
        .body_parameter()
        .and_then(|body| body_table(ctx, body))
    {
        blocks.push(Block::Table(table));
    }

    blocks.push(Block::heading(4, "Example Response"));
    let mut status_line = format!(
        "HTTP/1.1 {} {}",
        success.status_code, success.response.description
    );
    if let Some(content_type) = ctx.response_content_type(op) {
        status_line.push_str(&format!("\nContent-Type: {content_type}"));
    }
    blocks.push(Block::code("http", status_line));

    if success.status_code != NO_CONTENT {
        if let Some(example) = success.response.first_example() {
            blocks.push(Block::code("json", serde_json::to_string_pretty(example)?));
        }
    }

    Ok(blocks)
}

/// `METHOD /uri?first={first}` with further query parameters on indented `&` lines,
/// followed by the permission marker.
pub fn endpoint_line(ctx: &DocContext<'_>, endpoint: &Endpoint<'_>, query: &[&Parameter]) -> String {
    let mut line = format!("{} {}", endpoint.method, ctx.format_uri(endpoint.path));

    let pairs: Vec<String> = query
        .iter()
        .map(|p| format!("{}={{{}}}", p.name, p.name.replace('.', "")))
        .collect();
    if !pairs.is_empty() {
        line.push('?');
        line.push_str(&pairs.join(&format!("\n{QUERY_INDENT}&")));
    }

    if let Some(permission) = endpoint
        .operation
        .permission
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
    {
        line.push(' ');
        line.push_str(permission);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use swagdoc_core::config::GroupingStrategy;
    use swagdoc_core::grouping::group_paths;
    use swagdoc_core::parse;
    use swagdoc_core::parse::spec::SwaggerSpec;

    fn spec(paths: &str) -> SwaggerSpec {
        parse::from_json(&format!(
            r#"{{"swagger":"2.0","info":{{"title":"T","version":"v3"}},"paths":{paths}}}"#
        ))
        .unwrap()
    }

    fn render(spec: &SwaggerSpec) -> Result<String, MarkdownError> {
        let ctx = DocContext::new(spec, None);
        let groups = group_paths(spec, GroupingStrategy::PathItem)?;
        let samples = SampleRenderer::new()?;
        let blocks = render_endpoint(&ctx, &groups[0].endpoints[0], &[SampleLanguage::Curl], &samples)?;
        Ok(blocks.iter().map(Block::render).collect::<Vec<_>>().join("\n\n"))
    }

    #[test]
    fn test_endpoint_line_with_query_and_permission() {
        let spec = spec(
            r#"{"/v{version}/items": {"get": {"tags": ["Items"], "x-permission": "items:read",
                "parameters": [
                    {"name": "filter.name", "in": "query", "type": "string"},
                    {"name": "limit", "in": "query", "type": "integer"},
                    {"name": "body", "in": "body"}
                ],
                "responses": {"200": {"description": "OK"}}}}}"#,
        );
        let ctx = DocContext::new(&spec, None);
        let groups = group_paths(&spec, GroupingStrategy::PathItem).unwrap();
        let endpoint = &groups[0].endpoints[0];
        let query = endpoint.query_parameters();
        assert_eq!(
            endpoint_line(&ctx, endpoint, &query),
            "GET /v3/items?filter.name={filtername}\n        &limit={limit} items:read"
        );
    }

    #[test]
    fn test_description_falls_back_to_summary() {
        let spec = spec(
            r#"{"/x": {"get": {"operationId": "X_Get", "tags": ["X"], "summary": "Short",
                "responses": {"200": {"description": "OK"}}}}}"#,
        );
        let out = render(&spec).unwrap();
        assert!(out.starts_with("### X_Get\n\nShort\n\n```endpoint\nGET /x\n```"));
    }

    #[test]
    fn test_no_content_never_shows_example() {
        let spec = spec(
            r#"{"/x": {"delete": {"operationId": "X_Delete", "tags": ["X"],
                "responses": {"204": {"description": "No Content",
                    "examples": {"application/json": {"a": 1}}}}}}}"#,
        );
        let out = render(&spec).unwrap();
        assert!(out.ends_with("```http\nHTTP/1.1 204 No Content\n```"));
        assert!(!out.contains("```json"));
    }

    #[test]
    fn test_example_is_pretty_printed() {
        let spec = spec(
            r#"{"/x": {"get": {"operationId": "X_Get", "tags": ["X"], "produces": ["application/json"],
                "responses": {"200": {"description": "OK",
                    "examples": {"application/json": {"a": {"b": 1}}}}}}}}"#,
        );
        let out = render(&spec).unwrap();
        assert!(out.ends_with(
            "```http\nHTTP/1.1 200 OK\nContent-Type: application/json\n```\n\n```json\n{\n  \"a\": {\n    \"b\": 1\n  }\n}\n```"
        ));
    }

    #[test]
    fn test_missing_responses_is_an_error() {
        let spec = spec(r#"{"/x": {"get": {"operationId": "X_Get", "tags": ["X"]}}}"#);
        let err = render(&spec).unwrap_err();
        assert!(matches!(
            err,
            MarkdownError::Render(RenderError::MissingResponses { .. })
        ));
    }

    #[test]
    fn test_missing_success_response_is_an_error() {
        let spec = spec(
            r#"{"/x": {"get": {"operationId": "X_Get", "tags": ["X"],
                "responses": {"404": {"description": "Not Found"}}}}}"#,
        );
        let err = render(&spec).unwrap_err();
        assert!(err.to_string().contains("GET /x: no 2xx response declared"));
    }
}
