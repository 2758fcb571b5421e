use swagdoc_core::error::RenderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarkdownError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("failed to serialize example: {0}")]
    Json(#[from] serde_json::Error),
}
