//! Template source port
//!
//! Defines where category data comes from. Adapters (JSON bundle, template
//! directory, bundled defaults) live in the infrastructure layer and hand
//! back categories already normalized to the domain shape.

use dorkforge_domain::Category;
use thiserror::Error;

/// Errors a template source can report
#[derive(Error, Debug)]
pub enum TemplateSourceError {
    /// The underlying data could not be read
    #[error("Template source unavailable: {0}")]
    Unavailable(String),

    /// The data was read but does not describe valid categories
    #[error("Invalid template data in {location}: {reason}")]
    InvalidData { location: String, reason: String },
}

/// Supplies the categories the catalog is built from
pub trait TemplateSource: Send + Sync {
    /// Load every category, in source order
    fn load_categories(&self) -> Result<Vec<Category>, TemplateSourceError>;

    /// Short human-readable description for logs
    fn describe(&self) -> String;
}

/// Source over categories already held in memory.
///
/// Used by tests and by callers that build categories programmatically.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTemplateSource {
    categories: Vec<Category>,
}

impl InMemoryTemplateSource {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }
}

impl TemplateSource for InMemoryTemplateSource {
    fn load_categories(&self) -> Result<Vec<Category>, TemplateSourceError> {
        Ok(self.categories.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory ({} categories)", self.categories.len())
    }
}
