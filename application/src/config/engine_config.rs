//! Engine configuration used to build the use cases
//!
//! [`EngineConfig`] groups the settings that shape the query engine and the
//! generation pipeline. The infrastructure layer converts file
//! configuration into this type; use cases never read files themselves.

use dorkforge_domain::{PermutationFamilies, QueryEngine, SearchEngine};

/// Query engine and generation settings.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Families used by the permutator.
    pub families: PermutationFamilies,
    /// Dialect generated dorks are translated to.
    pub search_engine: SearchEngine,
    /// Drop generated dorks that fail validation.
    pub validate_generated: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            families: PermutationFamilies::default(),
            search_engine: SearchEngine::Google,
            validate_generated: true,
        }
    }
}

impl EngineConfig {
    // ==================== Builder Methods ====================

    pub fn with_families(mut self, families: PermutationFamilies) -> Self {
        self.families = families;
        self
    }

    pub fn with_search_engine(mut self, engine: SearchEngine) -> Self {
        self.search_engine = engine;
        self
    }

    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate_generated = validate;
        self
    }

    /// Build the query engine these settings describe
    pub fn build_engine(&self) -> QueryEngine {
        QueryEngine::with_families(self.families.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.search_engine, SearchEngine::Google);
        assert!(config.validate_generated);
        assert_eq!(config.families, PermutationFamilies::default());
    }

    #[test]
    fn test_builders() {
        let config = EngineConfig::default()
            .with_search_engine(SearchEngine::Bing)
            .with_validation(false);
        assert_eq!(config.search_engine, SearchEngine::Bing);
        assert!(!config.validate_generated);
    }

    #[test]
    fn test_build_engine_uses_families() {
        let engine = EngineConfig::default().build_engine();
        assert!(
            engine
                .get_variations("ext:php")
                .contains(&"ext:(php|php5|phtml|php7)".to_string())
        );
    }
}
