//! Browse templates use case

use dorkforge_domain::{CategoryDetail, CategorySummary, TemplateCatalog, TemplateMatch};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BrowseError {
    #[error("Unknown category: {requested} (available: {available})")]
    UnknownCategory { requested: String, available: String },
}

/// Read-only views over the template catalog
pub struct BrowseTemplatesUseCase {
    catalog: Arc<TemplateCatalog>,
}

impl BrowseTemplatesUseCase {
    pub fn new(catalog: Arc<TemplateCatalog>) -> Self {
        Self { catalog }
    }

    pub fn list(&self) -> Vec<CategorySummary> {
        self.catalog.get_categories()
    }

    pub fn show(&self, category_id: &str) -> Result<CategoryDetail, BrowseError> {
        self.catalog
            .detail(category_id)
            .ok_or_else(|| BrowseError::UnknownCategory {
                requested: category_id.to_string(),
                available: self
                    .catalog
                    .categories()
                    .iter()
                    .map(|c| c.id.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }

    pub fn search(&self, keyword: &str) -> Vec<TemplateMatch> {
        self.catalog.search_templates(keyword)
    }
}
