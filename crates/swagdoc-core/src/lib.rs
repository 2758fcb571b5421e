pub mod config;
pub mod context;
pub mod error;
pub mod grouping;
pub mod naming;
pub mod output;
pub mod parse;

/// A generated file with path and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Trait for generators that produce documentation files from a parsed document.
pub trait DocGenerator {
    type Config;
    type Error: std::error::Error;
    fn generate(
        &self,
        spec: &parse::spec::SwaggerSpec,
        config: &Self::Config,
    ) -> Result<Vec<GeneratedFile>, Self::Error>;
}
