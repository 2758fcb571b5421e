use indexmap::IndexMap;

use crate::config::GroupingStrategy;
use crate::error::RenderError;
use crate::naming::resource_name_from_path;
use crate::parse::operation::{HttpMethod, Operation, PathItem};
use crate::parse::parameter::Parameter;
use crate::parse::spec::SwaggerSpec;

/// A path item together with the URI template it was declared under.
#[derive(Debug, Clone, Copy)]
pub struct PathEntry<'a> {
    pub path: &'a str,
    pub item: &'a PathItem,
}

/// One operation, with the path it lives on.
#[derive(Debug, Clone, Copy)]
pub struct Endpoint<'a> {
    pub path: &'a str,
    pub method: HttpMethod,
    pub item: &'a PathItem,
    pub operation: &'a Operation,
}

impl<'a> Endpoint<'a> {
    /// Operation parameters followed by inherited path-level ones it doesn't override.
    pub fn parameters(&self) -> Vec<&'a Parameter> {
        let own = &self.operation.parameters;
        let inherited = self.item.parameters.iter().filter(|shared| {
            !own.iter()
                .any(|p| p.name == shared.name && p.location == shared.location)
        });
        own.iter().chain(inherited).collect()
    }

    pub fn query_parameters(&self) -> Vec<&'a Parameter> {
        self.parameters().into_iter().filter(|p| p.is_query()).collect()
    }

    /// The first body parameter; any further ones are ignored.
    pub fn body_parameter(&self) -> Option<&'a Parameter> {
        self.parameters().into_iter().find(|p| p.is_body())
    }
}

/// A named resource page and the endpoints it documents.
#[derive(Debug, Clone)]
pub struct ResourceGroup<'a> {
    pub key: String,
    pub path_items: Vec<PathEntry<'a>>,
    pub endpoints: Vec<Endpoint<'a>>,
}

impl<'a> ResourceGroup<'a> {
    fn new(key: String) -> Self {
        Self {
            key,
            path_items: Vec::new(),
            endpoints: Vec::new(),
        }
    }

    fn push_entry(&mut self, entry: PathEntry<'a>) {
        if !self.path_items.iter().any(|e| e.path == entry.path) {
            self.path_items.push(entry);
        }
    }

    /// The first endpoint decides the page title and description.
    pub fn lead_endpoint(&self) -> Option<&Endpoint<'a>> {
        self.endpoints.first()
    }
}

/// Partition the document's paths into resource groups.
///
/// Groups keep the order in which their keys are first encountered, and entries
/// keep document order inside each group.
pub fn group_paths(
    spec: &SwaggerSpec,
    strategy: GroupingStrategy,
) -> Result<Vec<ResourceGroup<'_>>, RenderError> {
    let mut groups: IndexMap<String, ResourceGroup<'_>> = IndexMap::new();

    for (path, item) in &spec.paths {
        let entry = PathEntry { path, item };

        match strategy {
            GroupingStrategy::PathItem => {
                // Every operation must carry tags; the first one names the group.
                let mut key = None;
                for endpoint in endpoints_of(entry) {
                    let own = group_key(endpoint.method, path, endpoint.operation)?;
                    key.get_or_insert(own);
                }
                let key = key.unwrap_or_default();
                let group = groups
                    .entry(key.clone())
                    .or_insert_with(|| ResourceGroup::new(key));
                group.push_entry(entry);
                group.endpoints.extend(endpoints_of(entry));
            }
            GroupingStrategy::Operation => {
                if item.lead_operation().is_none() {
                    groups
                        .entry(String::new())
                        .or_insert_with(|| ResourceGroup::new(String::new()))
                        .push_entry(entry);
                }
                for endpoint in endpoints_of(entry) {
                    let key = group_key(endpoint.method, path, endpoint.operation)?;
                    let group = groups
                        .entry(key.clone())
                        .or_insert_with(|| ResourceGroup::new(key));
                    group.push_entry(entry);
                    group.endpoints.push(endpoint);
                }
            }
        }
    }

    log::debug!("grouped {} paths into {} groups", spec.paths.len(), groups.len());
    Ok(groups.into_values().collect())
}

fn endpoints_of(entry: PathEntry<'_>) -> impl Iterator<Item = Endpoint<'_>> {
    entry.item.operations().map(move |(method, operation)| Endpoint {
        path: entry.path,
        method,
        item: entry.item,
        operation,
    })
}

/// Lowercased primary tag, or a path-derived name when the tag list is empty
/// or its first tag is blank.
fn group_key(method: HttpMethod, path: &str, op: &Operation) -> Result<String, RenderError> {
    let tags = op.tags.as_ref().ok_or_else(|| RenderError::MissingTags {
        method: method.to_string(),
        path: path.to_string(),
    })?;

    Ok(match tags.first().map(|t| t.trim()).filter(|t| !t.is_empty()) {
        Some(tag) => tag.to_lowercase(),
        None => resource_name_from_path(path),
    })
}
