use swagdoc_core::config::DocConfig;
use swagdoc_core::context::DocContext;
use swagdoc_core::grouping::group_paths;
use swagdoc_core::parse::spec::SwaggerSpec;
use swagdoc_core::{DocGenerator, GeneratedFile};

use crate::emitters::page::emit_group_page;
use crate::emitters::samples::SampleRenderer;
use crate::emitters::typedefs::{collect_return_refs, emit_typedefs};
use crate::error::MarkdownError;

/// File name of the aggregate type definitions page.
pub const TYPEDEFS_FILE: &str = "typedefs.md";

/// Markdown reference generator: one page per resource group plus `typedefs.md`.
pub struct MarkdownGenerator;

impl DocGenerator for MarkdownGenerator {
    type Config = DocConfig;
    type Error = MarkdownError;

    fn generate(
        &self,
        spec: &SwaggerSpec,
        config: &DocConfig,
    ) -> Result<Vec<GeneratedFile>, MarkdownError> {
        let ctx = DocContext::new(spec, config.base_url.as_deref());
        let groups = group_paths(spec, config.grouping)?;
        let samples = SampleRenderer::new()?;

        let mut files = Vec::with_capacity(groups.len() + 1);
        for group in &groups {
            if let Some(page) = emit_group_page(&ctx, group, &config.languages, &samples)? {
                files.push(page);
            }
        }

        let refs = collect_return_refs(&groups);
        log::debug!("documenting {} response types", refs.len());
        files.push(GeneratedFile {
            path: TYPEDEFS_FILE.to_string(),
            content: emit_typedefs(&ctx, &refs),
        });

        Ok(files)
    }
}
