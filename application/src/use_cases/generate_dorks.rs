//! Generate dorks use case
//!
//! Runs the generation pipeline for one or more categories:
//!
//! 1. **Expand** - instantiate the category templates with the parameters
//! 2. **Translate** - rewrite operators for the target search engine
//! 3. **Validate** - drop dorks that fail validation (optional)
//! 4. **Filter** - apply `{key, value}` filter criteria
//! 5. **Refine** - include/exclude, extra terms, https-only, limit
//!
//! Unknown categories produce no dorks; they are logged, not reported as
//! errors.

use crate::config::EngineConfig;
use crate::ports::progress::GenerationProgress;
use dorkforge_domain::{
    Dork, FilterCriterion, GenerationRefinements, QueryEngine, SearchEngine, TemplateCatalog,
    concat_queries, filter_dorks,
};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Input for the generation pipeline
#[derive(Debug, Clone, Default)]
pub struct GenerateDorksRequest {
    /// Placeholder values (`domain`, `keyword`, ...)
    pub params: HashMap<String, String>,
    pub filters: Vec<FilterCriterion>,
    pub refinements: GenerationRefinements,
    /// Overrides the configured search engine
    pub search_engine: Option<SearchEngine>,
    /// Overrides the configured validation switch
    pub validate: Option<bool>,
}

impl GenerateDorksRequest {
    pub fn new(params: HashMap<String, String>) -> Self {
        Self {
            params,
            ..Default::default()
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn with_filters(mut self, filters: Vec<FilterCriterion>) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_refinements(mut self, refinements: GenerationRefinements) -> Self {
        self.refinements = refinements;
        self
    }

    pub fn with_search_engine(mut self, engine: SearchEngine) -> Self {
        self.search_engine = Some(engine);
        self
    }

    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = Some(validate);
        self
    }
}

/// Dorks generated for one category
#[derive(Debug, Clone, Serialize)]
pub struct CategoryDorks {
    pub category: String,
    pub dorks: Vec<Dork>,
    /// All queries OR-ed together, when there are at least two
    pub concat: Option<String>,
    /// Number of dorks dropped by validation
    pub rejected: usize,
}

impl CategoryDorks {
    fn empty(category: &str) -> Self {
        Self {
            category: category.to_string(),
            dorks: Vec::new(),
            concat: None,
            rejected: 0,
        }
    }

    pub fn count(&self) -> usize {
        self.dorks.len()
    }
}

/// Result of a multi-category run
#[derive(Debug, Clone, Serialize)]
pub struct BatchDorks {
    pub results: Vec<CategoryDorks>,
    /// Requested categories that do not exist
    pub skipped: Vec<String>,
    pub total_count: usize,
}

/// Use case for generating dorks from the catalog
pub struct GenerateDorksUseCase {
    catalog: Arc<TemplateCatalog>,
    engine: Arc<QueryEngine>,
    config: EngineConfig,
}

impl GenerateDorksUseCase {
    pub fn new(catalog: Arc<TemplateCatalog>, engine: Arc<QueryEngine>, config: EngineConfig) -> Self {
        Self {
            catalog,
            engine,
            config,
        }
    }

    /// Generate dorks for a single category
    pub fn execute(&self, category: &str, request: &GenerateDorksRequest) -> CategoryDorks {
        if self.catalog.category(category).is_none() {
            warn!("Unknown category: {}", category);
            return CategoryDorks::empty(category);
        }

        let search_engine = request.search_engine.unwrap_or(self.config.search_engine);
        let validate = request.validate.unwrap_or(self.config.validate_generated);

        let generated = self.catalog.generate(category, &request.params);
        debug!(
            "Category '{}' expanded to {} dorks",
            category,
            generated.len()
        );

        let translated: Vec<Dork> = generated
            .iter()
            .map(|dork| dork.with_query(search_engine.translate(dork.query())))
            .collect();

        let before = translated.len();
        let checked: Vec<Dork> = if validate {
            translated
                .into_iter()
                .filter(|dork| {
                    let result = self.engine.validate_dork(dork.query());
                    if let Some(error) = &result.error {
                        warn!("Validation failed for dork '{}': {}", dork.query(), error);
                    }
                    result.valid
                })
                .collect()
        } else {
            translated
        };
        let rejected = before - checked.len();

        let filtered = filter_dorks(&checked, &request.filters);
        let dorks = request.refinements.apply(filtered);
        let queries: Vec<&str> = dorks.iter().map(|d| d.query()).collect();
        let concat = concat_queries(&queries);

        info!(
            "Generated {} dorks for '{}' (engine: {}, rejected: {})",
            dorks.len(),
            category,
            search_engine,
            rejected
        );

        CategoryDorks {
            category: category.to_string(),
            dorks,
            concat,
            rejected,
        }
    }

    /// Generate dorks for several categories, skipping unknown ones
    pub fn execute_batch(
        &self,
        categories: &[String],
        request: &GenerateDorksRequest,
        progress: &dyn GenerationProgress,
    ) -> BatchDorks {
        let mut results = Vec::new();
        let mut skipped = Vec::new();

        for (index, category) in categories.iter().enumerate() {
            if self.catalog.category(category).is_none() {
                warn!("Skipping unknown category: {}", category);
                progress.on_category_skipped(category, "unknown category");
                skipped.push(category.clone());
                continue;
            }

            progress.on_category_start(category, index, categories.len());
            let output = self.execute(category, request);
            progress.on_category_complete(category, output.count());
            results.push(output);
        }

        let total_count = results.iter().map(CategoryDorks::count).sum();
        info!(
            "Batch generation complete: {} total dorks across {} categories",
            total_count,
            results.len()
        );

        BatchDorks {
            results,
            skipped,
            total_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use dorkforge_domain::{Category, DESCRIPTION_CONTAINS, Template};
    use std::sync::Mutex;

    fn catalog() -> TemplateCatalog {
        TemplateCatalog::new(vec![
            Category::new("login")
                .with_template(Template::new("site:{domain} inurl:login", "Login pages"))
                .with_template(Template::new("site:{domain} intext:{keyword}", "Keyword pages"))
                .with_template(Template::new("site:{domain} intitle:\"admin", "Broken quote")),
            Category::new("files")
                .with_template(Template::new("site:{domain} ext:sql", "SQL dumps"))
                .with_template(Template::new("site:{domain} ext:log", "Log files")),
        ])
    }

    fn use_case(config: EngineConfig) -> GenerateDorksUseCase {
        GenerateDorksUseCase::new(
            Arc::new(catalog()),
            Arc::new(config.build_engine()),
            config,
        )
    }

    fn request() -> GenerateDorksRequest {
        GenerateDorksRequest::default().with_param("domain", "x.com")
    }

    fn queries(output: &CategoryDorks) -> Vec<&str> {
        output.dorks.iter().map(|d| d.query()).collect()
    }

    #[test]
    fn test_execute_skips_unresolved_and_invalid() {
        let output = use_case(EngineConfig::default()).execute("login", &request());
        assert_eq!(queries(&output), vec!["site:x.com inurl:login"]);
        assert_eq!(output.rejected, 1);
        assert!(output.concat.is_none());
    }

    #[test]
    fn test_execute_without_validation_keeps_invalid() {
        let output =
            use_case(EngineConfig::default()).execute("login", &request().with_validation(false));
        assert_eq!(output.count(), 2);
        assert_eq!(output.rejected, 0);
    }

    #[test]
    fn test_execute_translates() {
        let output = use_case(EngineConfig::default().with_search_engine(SearchEngine::Yandex))
            .execute("files", &request());
        assert_eq!(
            queries(&output),
            vec!["site:x.com mime:sql", "site:x.com mime:log"]
        );
        assert_eq!(
            output.concat.as_deref(),
            Some("(site:x.com mime:sql) OR (site:x.com mime:log)")
        );
    }

    #[test]
    fn test_execute_filters_then_refines() {
        let request = request()
            .with_filters(vec![FilterCriterion::new(DESCRIPTION_CONTAINS, "sql")])
            .with_refinements(GenerationRefinements {
                https_only: true,
                ..Default::default()
            });
        let output = use_case(EngineConfig::default()).execute("files", &request);
        assert_eq!(queries(&output), vec!["site:x.com ext:sql -inurl:http"]);
    }

    #[test]
    fn test_execute_unknown_category_is_empty() {
        let output = use_case(EngineConfig::default()).execute("nope", &request());
        assert_eq!(output.count(), 0);
        assert_eq!(output.category, "nope");
    }

    struct RecordingProgress(Mutex<Vec<String>>);

    impl GenerationProgress for RecordingProgress {
        fn on_category_start(&self, category: &str, index: usize, total: usize) {
            self.0
                .lock()
                .unwrap()
                .push(format!("start {} {}/{}", category, index + 1, total));
        }

        fn on_category_complete(&self, category: &str, count: usize) {
            self.0.lock().unwrap().push(format!("done {} {}", category, count));
        }

        fn on_category_skipped(&self, category: &str, _reason: &str) {
            self.0.lock().unwrap().push(format!("skip {}", category));
        }
    }

    #[test]
    fn test_execute_batch() {
        let categories = vec!["files".to_string(), "ghost".to_string(), "login".to_string()];
        let progress = RecordingProgress(Mutex::new(Vec::new()));
        let batch =
            use_case(EngineConfig::default()).execute_batch(&categories, &request(), &progress);

        assert_eq!(batch.results.len(), 2);
        assert_eq!(batch.skipped, vec!["ghost".to_string()]);
        assert_eq!(batch.total_count, 3);
        assert_eq!(
            *progress.0.lock().unwrap(),
            vec![
                "start files 1/3",
                "done files 2",
                "skip ghost",
                "start login 3/3",
                "done login 1",
            ]
        );
    }

    #[test]
    fn test_execute_batch_with_no_progress() {
        let batch = use_case(EngineConfig::default()).execute_batch(
            &["login".to_string()],
            &request(),
            &NoProgress,
        );
        assert_eq!(batch.total_count, 1);
    }
}
