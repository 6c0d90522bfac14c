//! Release Herald - release note content pipeline
//!
//! This library turns a free-form, semi-structured release note into
//! structured facts, gates those facts for publication, and renders
//! customer-facing email and internal tracking artifacts.

// Allow certain clippy warnings that are stylistic preferences
#![allow(clippy::uninlined_format_args)] // Style preference
#![allow(clippy::format_push_string)] // Performance improvement but stylistic

pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod logger;
pub mod release;
pub mod ui;

// Re-export important structs and functions for easier testing
pub use config::Config;
pub use release::{
    ExtractedFacts, Pipeline, PipelineOutput, RawRelease, ReleaseParser, ReleaseRenderer,
    ReleaseType, ReleaseValidator, RenderedContent, ValidationResult,
};
