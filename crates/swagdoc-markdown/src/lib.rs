pub mod emitters;
pub mod error;
pub mod generator;
pub mod markdown;

pub use error::MarkdownError;
pub use generator::{MarkdownGenerator, TYPEDEFS_FILE};
