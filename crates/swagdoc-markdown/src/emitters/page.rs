use swagdoc_core::GeneratedFile;
use swagdoc_core::config::SampleLanguage;
use swagdoc_core::context::DocContext;
use swagdoc_core::grouping::ResourceGroup;
use swagdoc_core::naming::{page_file_stem, route_to_name};

use super::endpoint::render_endpoint;
use super::samples::SampleRenderer;
use crate::error::MarkdownError;
use crate::markdown::{Block, Document};

/// Render `<key>.md` for one resource group, with the key made safe as a file stem.
/// Groups without operations produce no page.
pub fn emit_group_page(
    ctx: &DocContext<'_>,
    group: &ResourceGroup<'_>,
    languages: &[SampleLanguage],
    samples: &SampleRenderer,
) -> Result<Option<GeneratedFile>, MarkdownError> {
    if group.endpoints.is_empty() {
        log::debug!("skipping group `{}` without operations", group.key);
        return Ok(None);
    }

    let mut doc = Document::new();
    doc.push(Block::heading(2, group_title(ctx, group)));
    doc.push(Block::Paragraph(group_description(ctx, group)));

    for endpoint in &group.endpoints {
        doc.extend(render_endpoint(ctx, endpoint, languages, samples)?);
    }

    log::debug!(
        "rendered group `{}` with {} operations",
        group.key,
        group.endpoints.len()
    );
    Ok(Some(GeneratedFile {
        path: format!("{}.md", page_file_stem(&group.key)),
        content: doc.render(),
    }))
}

/// The primary tag's trimmed `x-title`, else the `operationId` prefix before `_`.
pub fn group_title(ctx: &DocContext<'_>, group: &ResourceGroup<'_>) -> String {
    let Some(lead) = group.lead_endpoint() else {
        return group.key.clone();
    };
    let op = lead.operation;

    let fallback = match op.operation_id.as_deref() {
        Some(id) => id.split('_').next().unwrap_or(id).to_string(),
        None => route_to_name(lead.method, lead.path),
    };

    op.primary_tag()
        .and_then(|name| ctx.tag(name))
        .and_then(|tag| tag.title.as_deref())
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(String::from)
        .unwrap_or(fallback)
}

pub fn group_description(ctx: &DocContext<'_>, group: &ResourceGroup<'_>) -> String {
    group
        .lead_endpoint()
        .and_then(|lead| lead.operation.primary_tag())
        .and_then(|name| ctx.tag(name))
        .and_then(|tag| tag.description.as_deref())
        .map(|d| d.trim().to_string())
        .unwrap_or_default()
}
