//! Query engine facade
//!
//! Bundles the lexicon, compatibility rules and permutation families into a
//! single immutable value. All operations are pure; an engine can be shared
//! across threads freely.

use super::diagnostics::{QueryIssue, diagnose_query};
use super::explain::explain_query;
use super::lexicon::OperatorLexicon;
use super::rule::CompatibilityRules;
use super::sanitize::{AuditReport, audit_generated_query, sanitize_generated_query};
use super::validation::{ValidationResult, validate_query};
use crate::permutation::{PermutationFamilies, Permutator};

/// Validates, explains, diagnoses and permutes dork queries
///
/// # Example
///
/// ```
/// use dorkforge_domain::QueryEngine;
///
/// let engine = QueryEngine::default();
/// assert!(engine.validate_dork("site:example.com filetype:pdf").valid);
/// assert!(engine
///     .get_variations("ext:php")
///     .contains(&"ext:(php|php5|phtml|php7)".to_string()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryEngine {
    lexicon: OperatorLexicon,
    rules: CompatibilityRules,
    permutator: Permutator,
}

impl QueryEngine {
    pub fn new(
        lexicon: OperatorLexicon,
        rules: CompatibilityRules,
        families: PermutationFamilies,
    ) -> Self {
        Self {
            lexicon,
            rules,
            permutator: Permutator::new(families),
        }
    }

    /// Engine with default lexicon and rules but custom families
    pub fn with_families(families: PermutationFamilies) -> Self {
        Self::new(
            OperatorLexicon::default(),
            CompatibilityRules::default(),
            families,
        )
    }

    pub fn validate_dork(&self, query: &str) -> ValidationResult {
        validate_query(query, &self.rules)
    }

    pub fn explain_dork(&self, query: &str) -> String {
        explain_query(query)
    }

    /// Sorted, deduplicated variations that always include `query`
    pub fn get_variations(&self, query: &str) -> Vec<String> {
        self.permutator.variations(query)
    }

    pub fn diagnose(&self, query: &str) -> Vec<QueryIssue> {
        diagnose_query(query, &self.lexicon, &self.rules)
    }

    pub fn sanitize_generated(&self, raw: &str) -> String {
        sanitize_generated_query(raw)
    }

    pub fn audit_generated(&self, query: &str) -> AuditReport {
        audit_generated_query(query, &self.lexicon, &self.rules)
    }

    pub fn lexicon(&self) -> &OperatorLexicon {
        &self.lexicon
    }

    pub fn rules(&self) -> &CompatibilityRules {
        &self.rules
    }

    pub fn families(&self) -> &PermutationFamilies {
        self.permutator.families()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permutation::FamilyMap;

    #[test]
    fn test_engine_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<QueryEngine>();
    }

    #[test]
    fn test_engine_validates_and_explains() {
        let engine = QueryEngine::default();
        assert!(!engine.validate_dork("site:a.com allintext:x intext:y").valid);
        assert!(engine.explain_dork("site:a.com").contains("Pages on domain: a.com"));
    }

    #[test]
    fn test_engine_with_custom_families() {
        let families = PermutationFamilies::new(
            FamilyMap::new(vec![("pdf".to_string(), vec!["pdf".to_string(), "ps".to_string()])])
                .unwrap(),
            FamilyMap::empty(),
        );
        let engine = QueryEngine::with_families(families);
        let variations = engine.get_variations("ext:pdf");
        assert_eq!(variations, vec!["ext:(pdf|ps)".to_string(), "ext:pdf".to_string()]);
        assert_eq!(engine.get_variations("ext:php"), vec!["ext:php".to_string()]);
    }
}
