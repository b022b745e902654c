//! Infrastructure layer for dorkforge
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: configuration file loading and template stores.

pub mod config;
pub mod templates;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigIssueCode, ConfigLoader, ConfigValidationError, FileConfig,
    FileGenerationConfig, FileOutputConfig, FilePermutationConfig, FileTemplatesConfig,
};
pub use templates::{
    BundledTemplateSource, DirectoryTemplateSource, JsonBundleSource, TemplateStoreError,
    source_for,
};
