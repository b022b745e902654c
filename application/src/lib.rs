//! Application layer for dorkforge
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::EngineConfig;
pub use ports::{
    progress::{GenerationProgress, NoProgress},
    template_source::{InMemoryTemplateSource, TemplateSource, TemplateSourceError},
};
pub use use_cases::browse_templates::{BrowseError, BrowseTemplatesUseCase};
pub use use_cases::generate_dorks::{
    BatchDorks, CategoryDorks, GenerateDorksRequest, GenerateDorksUseCase,
};
pub use use_cases::inspect_query::{CombineReport, InspectQueryUseCase, QueryReport, SanitizeReport};
pub use use_cases::load_catalog::{LoadCatalogError, LoadCatalogUseCase};
