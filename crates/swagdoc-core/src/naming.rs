use heck::ToPascalCase;

use crate::parse::operation::{HttpMethod, Operation};

/// Path prefix stripped before deriving a resource name from a URI template.
pub const VERSION_PREFIX: &str = "/v{version}/";

/// Segment index (after stripping [`VERSION_PREFIX`]) that names the resource.
pub const RESOURCE_SEGMENT_INDEX: usize = 2;

/// Heading text for an operation: `x-title`, else `operationId`, else a route-derived name.
pub fn operation_title(method: HttpMethod, path: &str, op: &Operation) -> String {
    op.title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .or(op.operation_id.as_deref())
        .map(String::from)
        .unwrap_or_else(|| route_to_name(method, path))
}

/// Group name for a path whose lead operation carries no tag.
///
/// - `/v{version}/api/x/accounts` → `accounts`
/// - `/users/{id}` → `users`
pub fn resource_name_from_path(path: &str) -> String {
    let stripped = path.replacen(VERSION_PREFIX, "", 1);
    let segments: Vec<&str> = stripped.split('/').collect();

    segments
        .get(RESOURCE_SEGMENT_INDEX)
        .filter(|s| is_resource_segment(s))
        .or_else(|| segments.iter().find(|s| is_resource_segment(s)))
        .map(|s| s.to_lowercase())
        .unwrap_or_else(|| "default".to_string())
}

/// File stem of a group page. Path separators become `-` and leading dots are
/// dropped, so the page always lands directly in the output directory.
///
/// - `admin/users` → `admin-users`
/// - `../secrets` → `secrets`
pub fn page_file_stem(key: &str) -> String {
    let stem = key
        .split(['/', '\\'])
        .map(|s| s.trim().trim_start_matches('.'))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    if stem.is_empty() {
        "default".to_string()
    } else {
        stem
    }
}

fn is_resource_segment(segment: &str) -> bool {
    !segment.is_empty() && !segment.starts_with('{')
}

/// Derive a camelCase operation name from HTTP method + path.
///
/// - `GET /users` → `listUsers`
/// - `GET /users/{userId}` → `getUser`
/// - `POST /v{version}/users` → `createUsers`
pub fn route_to_name(method: HttpMethod, path: &str) -> String {
    let mut resource_parts: Vec<&str> = Vec::new();
    let mut ends_with_param = false;

    for seg in path.split('/').filter(|s| !s.is_empty()) {
        if seg.starts_with('{') && seg.ends_with('}') {
            ends_with_param = true;
        } else if seg == "v{version}" {
            continue;
        } else {
            resource_parts.push(seg);
            ends_with_param = false;
        }
    }

    let prefix = match method {
        HttpMethod::Get if ends_with_param => "get",
        HttpMethod::Get => "list",
        HttpMethod::Post => "create",
        HttpMethod::Put => "update",
        HttpMethod::Delete => "delete",
        HttpMethod::Patch => "patch",
        HttpMethod::Options => "options",
        HttpMethod::Head => "head",
    };

    let mut name = prefix.to_string();
    for (i, part) in resource_parts.iter().enumerate() {
        let is_last = i == resource_parts.len() - 1;
        let word = if is_last && ends_with_param {
            singularize(part)
        } else {
            part.to_string()
        };
        name.push_str(&word.to_pascal_case());
    }
    name
}

/// Naive singularization: strips trailing 's' if present.
fn singularize(word: &str) -> String {
    if word.ends_with("ies") && word.len() > 3 {
        format!("{}y", &word[..word.len() - 3])
    } else if word.ends_with("ses") || word.ends_with("xes") || word.ends_with("zes") {
        word[..word.len() - 2].to_string()
    } else if word.ends_with('s') && !word.ends_with("ss") && word.len() > 1 {
        word[..word.len() - 1].to_string()
    } else {
        word.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_name_from_path() {
        assert_eq!(resource_name_from_path("/v{version}/api/x/accounts"), "accounts");
        assert_eq!(resource_name_from_path("/api/v1/Orders/{id}"), "v1");
        assert_eq!(resource_name_from_path("/users/{id}"), "users");
        assert_eq!(resource_name_from_path("/"), "default");
    }

    #[test]
    fn test_page_file_stem() {
        assert_eq!(page_file_stem("users"), "users");
        assert_eq!(page_file_stem("admin/users"), "admin-users");
        assert_eq!(page_file_stem("a\\b"), "a-b");
        assert_eq!(page_file_stem("../x"), "x");
        assert_eq!(page_file_stem(".hidden"), "hidden");
        assert_eq!(page_file_stem("/"), "default");
    }

    #[test]
    fn test_route_to_name() {
        assert_eq!(route_to_name(HttpMethod::Get, "/users"), "listUsers");
        assert_eq!(route_to_name(HttpMethod::Get, "/users/{userId}"), "getUser");
        assert_eq!(route_to_name(HttpMethod::Post, "/v{version}/users"), "createUsers");
        assert_eq!(
            route_to_name(HttpMethod::Delete, "/categories/{id}"),
            "deleteCategory"
        );
        assert_eq!(route_to_name(HttpMethod::Head, "/"), "head");
    }

    #[test]
    fn test_operation_title_fallbacks() {
        let mut op = Operation {
            operation_id: Some("Users_Get".into()),
            title: Some("  Get a user ".into()),
            ..Operation::default()
        };
        assert_eq!(operation_title(HttpMethod::Get, "/users/{id}", &op), "Get a user");

        op.title = Some("   ".into());
        assert_eq!(operation_title(HttpMethod::Get, "/users/{id}", &op), "Users_Get");

        op.operation_id = None;
        assert_eq!(operation_title(HttpMethod::Get, "/users/{id}", &op), "getUser");
    }
}
