use swagdoc_core::config::{DocConfig, GroupingStrategy, SampleLanguage};
use swagdoc_core::error::RenderError;
use swagdoc_core::{DocGenerator, GeneratedFile, parse};
use swagdoc_markdown::{MarkdownError, MarkdownGenerator, TYPEDEFS_FILE};

const WIDGETS: &str = include_str!("../../swagdoc-core/tests/fixtures/widgets.json");

fn generate(config: &DocConfig) -> Vec<GeneratedFile> {
    let spec = parse::from_json(WIDGETS).unwrap();
    MarkdownGenerator.generate(&spec, config).unwrap()
}

fn page<'a>(files: &'a [GeneratedFile], name: &str) -> &'a str {
    &files
        .iter()
        .find(|f| f.path == name)
        .unwrap_or_else(|| panic!("missing {name}"))
        .content
}

/// The text of one operation section, from its heading up to the next one.
fn section<'a>(content: &'a str, title: &str) -> &'a str {
    let start = content
        .find(&format!("### {title}\n"))
        .unwrap_or_else(|| panic!("missing section {title}"));
    let rest = &content[start + 4..];
    match rest.find("\n### ") {
        Some(end) => &rest[..end],
        None => rest,
    }
}

#[test]
fn generates_one_page_per_group_plus_typedefs() {
    let files = generate(&DocConfig::default());
    let names: Vec<_> = files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(names, vec!["widgets.md", "orders.md", TYPEDEFS_FILE]);
}

#[test]
fn group_page_header_uses_tag_metadata() {
    let files = generate(&DocConfig::default());
    assert!(page(&files, "widgets.md")
        .starts_with("## Widget Catalog\n\nCreate, list and remove widgets.\n\n### Widgets_List\n\n"));
    // No x-title: the operationId prefix names the page.
    assert!(page(&files, "orders.md").starts_with("## Orders\n\nWidget orders.\n\n### Orders_Create\n\n"));
}

#[test]
fn endpoint_block_and_query_table() {
    let files = generate(&DocConfig::default());
    let list = section(page(&files, "widgets.md"), "Widgets_List");

    assert!(list.contains(
        "```endpoint\nGET /v2/widgets?filter.name={filtername}\n        &limit={limit} widgets:read\n```"
    ));
    assert!(list.contains(concat!(
        "Parameter | Type | Description\n",
        "---|---|---\n",
        "`limit`|`integer`|Max results\n",
        "`filter.name (optional)`|`string`|Filter by name\n",
        "&nbsp;|&nbsp;|[See search and pagination for more parameters](#search)\n",
    )));
    assert!(list.contains(
        "```http\nHTTP/1.1 200 OK\nContent-Type: application/json\n```\n\n```json\n[\n  {\n    \"id\": 1,\n    \"name\": \"gadget\"\n  }\n]\n```"
    ));
}

#[test]
fn body_example_is_compact_in_code_sample() {
    let files = generate(&DocConfig::default());
    let create = section(page(&files, "widgets.md"), "Widgets_Create");

    assert!(create.contains(concat!(
        "```curl\n",
        "curl -X POST \"https://api.widgets.test/v2/widgets\" \\\n",
        "  -H \"Authorization: Bearer {Token}\" \\\n",
        "  -H \"Accept: application/json\" \\\n",
        "  -H \"Content-Type: application/json\" \\\n",
        "  -d '{\"name\":\"gadget\"}'\n",
        "```",
    )));
    assert!(create.contains(concat!(
        "`name`|`string(64)`|Display name\n",
        "`id (optional)`|`integer int64`|Identifier\n",
        "`owner (optional)`|`Owner`|Owning account\n",
    )));
    assert!(create.contains("HTTP/1.1 201 Created\n"));
    assert!(!create.contains("```json"));
}

#[test]
fn body_example_newline_escapes_are_stripped() {
    let files = generate(&DocConfig::default());
    let order = section(page(&files, "orders.md"), "Orders_Create");
    assert!(order.contains(r#"-d '{"widgetId":7,"quantity":2,"note":"line oneline two"}'"#));
    assert!(!order.contains("\\n"));
    assert!(order.contains(concat!(
        "`quantity`|`integer int32`|\n",
        "`widgetId`|`integer`|Ordered widget\n",
        "`lines (optional)`|`array`|\n",
        "`widget (optional)`|`Widget`|\n",
    )));
}

#[test]
fn no_content_response_has_no_json_block() {
    let files = generate(&DocConfig::default());
    let delete = section(page(&files, "widgets.md"), "Remove a widget");
    assert!(delete.contains("```endpoint\nDELETE /v2/widgets/{id}\n```"));
    assert!(delete.ends_with("```http\nHTTP/1.1 204 No Content\nContent-Type: text/plain\n```\n"));
    assert!(!delete.contains("ignored"));
}

#[test]
fn version_token_is_replaced_everywhere() {
    for file in generate(&DocConfig::default()) {
        assert!(!file.content.contains("{version}"), "{} kept a token", file.path);
    }
}

#[test]
fn typedefs_page_lists_response_types_sorted() {
    let files = generate(&DocConfig::default());
    let typedefs = page(&files, TYPEDEFS_FILE);
    assert!(typedefs.starts_with("## Type Definitions\n\n### Order Model\n\n"));
    let order = typedefs.find("### Order Model").unwrap();
    let widget = typedefs.find("### Widget Model").unwrap();
    assert!(order < widget);
    assert!(!typedefs.contains("### Owner Model"));
    assert!(typedefs.contains("`owner`|[`Owner`](#owner-model)|Owning account"));
    assert!(typedefs.contains("`lines`|`array` of [`OrderLine`](#orderline-model)|"));
}

#[test]
fn every_configured_language_is_rendered() {
    let config = DocConfig {
        languages: SampleLanguage::ALL.to_vec(),
        ..DocConfig::default()
    };
    let files = generate(&config);
    let create = section(page(&files, "widgets.md"), "Widgets_Create");

    let curl = create.find("```curl\n").unwrap();
    let cs = create.find("```cs\n").unwrap();
    let java = create.find("```java\n").unwrap();
    assert!(curl < cs && cs < java);
    assert!(create.contains("HttpMethod.Post"));
    assert!(create.contains("con.setRequestMethod(\"POST\");"));
}

#[test]
fn base_url_override_applies_to_samples_only() {
    let config = DocConfig {
        base_url: Some("http://localhost:8080".into()),
        ..DocConfig::default()
    };
    let files = generate(&config);
    let list = section(page(&files, "widgets.md"), "Widgets_List");
    assert!(list.contains("curl -X GET \"http://localhost:8080/v2/widgets\""));
    assert!(list.contains("```endpoint\nGET /v2/widgets?"));
}

#[test]
fn generation_is_deterministic() {
    let config = DocConfig {
        languages: SampleLanguage::ALL.to_vec(),
        grouping: GroupingStrategy::Operation,
        ..DocConfig::default()
    };
    assert_eq!(generate(&config), generate(&config));
}

#[test]
fn minimal_document_round_trip() {
    let spec = parse::from_json(
        r#"{
            "swagger": "2.0",
            "info": {"title": "Min", "version": "1"},
            "paths": {"/resource/{id-url}": {"get": {
                "operationId": "Resource_Get",
                "tags": ["Resource"],
                "parameters": [{"name": "id", "in": "query", "required": true,
                    "type": "string", "description": "Resource id"}],
                "responses": {"200": {"description": "OK"}}
            }}}
        }"#,
    )
    .unwrap();
    let files = MarkdownGenerator.generate(&spec, &DocConfig::default()).unwrap();
    let content = page(&files, "resource.md");

    assert!(content.contains("### Resource_Get\n"));
    assert!(content.contains("```endpoint\nGET /resource/{id-url}?id={id}\n```"));
    assert!(content.contains("`id`|`string`|Resource id\n"));
    assert!(content.ends_with("```http\nHTTP/1.1 200 OK\n```\n"));
    assert!(!content.contains("```json"));
}

#[test]
fn operation_without_tags_aborts_the_run() {
    let spec = parse::from_json(
        r#"{"swagger": "2.0", "info": {"version": "1"},
            "paths": {"/x": {"get": {"responses": {"200": {"description": "OK"}}}}}}"#,
    )
    .unwrap();
    let err = MarkdownGenerator
        .generate(&spec, &DocConfig::default())
        .unwrap_err();
    assert!(matches!(err, MarkdownError::Render(RenderError::MissingTags { .. })));
}

#[test]
fn operation_without_success_response_aborts_the_run() {
    let spec = parse::from_json(
        r#"{"swagger": "2.0", "info": {"version": "1"},
            "paths": {"/x": {"get": {"tags": ["X"],
                "responses": {"500": {"description": "Boom"}}}}}}"#,
    )
    .unwrap();
    let err = MarkdownGenerator
        .generate(&spec, &DocConfig::default())
        .unwrap_err();
    assert!(matches!(
        err,
        MarkdownError::Render(RenderError::MissingSuccessResponse { .. })
    ));
}

fn single_get(path: &str, tags: &str) -> String {
    format!(
        r#"{{"swagger": "2.0", "info": {{"version": "1"}},
            "paths": {{"{path}": {{"get": {{"tags": {tags},
                "responses": {{"200": {{"description": "OK"}}}}}}}}}}}}"#
    )
}

fn page_names(files: &[GeneratedFile]) -> Vec<&str> {
    files.iter().map(|f| f.path.as_str()).collect()
}

#[test]
fn tag_with_path_separator_becomes_flat_file_name() {
    for (tag, expected) in [("Admin/Users", "admin-users.md"), ("../x", "x.md")] {
        let spec = parse::from_json(&single_get("/admin/users", &format!(r#"["{tag}"]"#))).unwrap();
        let files = MarkdownGenerator.generate(&spec, &DocConfig::default()).unwrap();
        assert_eq!(page_names(&files), vec![expected, TYPEDEFS_FILE]);
    }
}

#[test]
fn blank_tag_page_is_named_after_the_path() {
    let spec = parse::from_json(&single_get("/v{version}/api/x/accounts", r#"[""]"#)).unwrap();
    let files = MarkdownGenerator.generate(&spec, &DocConfig::default()).unwrap();
    assert_eq!(page_names(&files), vec!["accounts.md", TYPEDEFS_FILE]);
}

#[test]
fn default_config_renders_every_language() {
    let files = generate(&DocConfig::default());
    let list = section(page(&files, "widgets.md"), "Widgets_List");
    for fence in ["```curl\n", "```cs\n", "```java\n"] {
        assert!(list.contains(fence), "missing {fence}");
    }
}
