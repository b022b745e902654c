//! Load catalog use case
//!
//! Reads categories from a [`TemplateSource`] once and freezes them into an
//! immutable [`TemplateCatalog`] snapshot.

use crate::ports::template_source::{TemplateSource, TemplateSourceError};
use dorkforge_domain::TemplateCatalog;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while loading the catalog
#[derive(Error, Debug)]
pub enum LoadCatalogError {
    #[error("Failed to load templates: {0}")]
    Source(#[from] TemplateSourceError),
}

/// Use case for building the template catalog
pub struct LoadCatalogUseCase {
    source: Arc<dyn TemplateSource>,
}

impl LoadCatalogUseCase {
    pub fn new(source: Arc<dyn TemplateSource>) -> Self {
        Self { source }
    }

    pub fn execute(&self) -> Result<TemplateCatalog, LoadCatalogError> {
        debug!("Loading templates from {}", self.source.describe());
        let categories = self.source.load_categories()?;
        let loaded = categories.len();
        let catalog = TemplateCatalog::new(categories);

        if catalog.is_empty() {
            warn!("Template source {} has no categories", self.source.describe());
        } else if catalog.len() < loaded {
            warn!(
                "{} duplicate categories replaced while loading",
                loaded - catalog.len()
            );
        }

        info!(
            "Loaded {} categories from {}",
            catalog.len(),
            self.source.describe()
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::template_source::InMemoryTemplateSource;
    use dorkforge_domain::Category;

    struct FailingSource;

    impl TemplateSource for FailingSource {
        fn load_categories(
            &self,
        ) -> Result<Vec<dorkforge_domain::Category>, TemplateSourceError> {
            Err(TemplateSourceError::Unavailable("disk gone".to_string()))
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    #[test]
    fn test_load_from_memory() {
        let source = InMemoryTemplateSource::new(vec![Category::new("a"), Category::new("b")]);
        let catalog = LoadCatalogUseCase::new(Arc::new(source)).execute().unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_empty_source_is_not_an_error() {
        let catalog = LoadCatalogUseCase::new(Arc::new(InMemoryTemplateSource::default()))
            .execute()
            .unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_source_error_propagates() {
        let result = LoadCatalogUseCase::new(Arc::new(FailingSource)).execute();
        let err = result.unwrap_err();
        assert!(err.to_string().contains("disk gone"));
    }
}
