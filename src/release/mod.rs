//! Release content pipeline: fact extraction, validation and rendering.

pub mod facts;
pub mod files;
pub mod markup;
pub mod parser;
pub mod pipeline;
pub mod record;
pub mod renderer;
pub mod sections;
pub mod validator;

pub use facts::{ExtractedFacts, ReleaseType};
pub use parser::ReleaseParser;
pub use pipeline::{Pipeline, PipelineOutput};
pub use record::RawRelease;
pub use renderer::{ReleaseRenderer, RenderedContent};
pub use validator::{ReleaseValidator, ValidationResult};
