//! Inspect query use case
//!
//! Single-query operations: validation with diagnostics, explanation,
//! permutation, cleanup of generated text and combining several queries.

use dorkforge_domain::query::validation::ValidationResult;
use dorkforge_domain::{AuditReport, QueryCombiner, QueryEngine, QueryIssue, concat_queries};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Validation outcome of a single query
#[derive(Debug, Clone, Serialize)]
pub struct QueryReport {
    pub query: String,
    #[serde(flatten)]
    pub validation: ValidationResult,
    /// Every issue found, warnings included
    pub issues: Vec<QueryIssue>,
    /// Plain-language explanation, only for valid queries
    pub explanation: Option<String>,
}

/// Cleaned-up generated text and its audit
#[derive(Debug, Clone, Serialize)]
pub struct SanitizeReport {
    pub original: String,
    pub sanitized: String,
    pub audit: AuditReport,
}

/// Several queries joined and packed
#[derive(Debug, Clone, Serialize)]
pub struct CombineReport {
    /// `(q1) OR (q2) ...`, absent for fewer than two queries
    pub concat: Option<String>,
    /// Queries packed with shared operators pulled out
    pub optimized: Vec<String>,
}

/// Use case for operations on raw query text
pub struct InspectQueryUseCase {
    engine: Arc<QueryEngine>,
    combiner: QueryCombiner,
}

impl InspectQueryUseCase {
    pub fn new(engine: Arc<QueryEngine>) -> Self {
        Self {
            engine,
            combiner: QueryCombiner::default(),
        }
    }

    pub fn with_combiner(mut self, combiner: QueryCombiner) -> Self {
        self.combiner = combiner;
        self
    }

    pub fn validate(&self, query: &str) -> QueryReport {
        let validation = self.engine.validate_dork(query);
        let issues = self.engine.diagnose(query);
        let explanation = validation
            .is_valid()
            .then(|| self.engine.explain_dork(query));

        debug!(
            "Validated query ({} issues, valid: {})",
            issues.len(),
            validation.valid
        );

        QueryReport {
            query: query.to_string(),
            validation,
            issues,
            explanation,
        }
    }

    pub fn explain(&self, query: &str) -> String {
        self.engine.explain_dork(query)
    }

    pub fn permute(&self, query: &str) -> Vec<String> {
        let variations = self.engine.get_variations(query);
        debug!("Generated {} variations", variations.len());
        variations
    }

    pub fn sanitize(&self, raw: &str) -> SanitizeReport {
        let sanitized = self.engine.sanitize_generated(raw);
        let audit = self.engine.audit_generated(&sanitized);
        SanitizeReport {
            original: raw.to_string(),
            sanitized,
            audit,
        }
    }

    pub fn combine(&self, queries: &[String]) -> CombineReport {
        CombineReport {
            concat: concat_queries(queries),
            optimized: self.combiner.combine(queries),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn use_case() -> InspectQueryUseCase {
        InspectQueryUseCase::new(Arc::new(QueryEngine::default()))
    }

    #[test]
    fn test_validate_valid_query_has_explanation() {
        let report = use_case().validate("site:example.com filetype:pdf");
        assert!(report.validation.valid);
        assert!(report.issues.is_empty());
        assert!(report.explanation.unwrap().contains("Files of type: pdf"));
    }

    #[test]
    fn test_validate_invalid_query() {
        let report = use_case().validate("site:a.com allintext:x intext:y");
        assert!(!report.validation.valid);
        assert!(report.explanation.is_none());
        assert!(!report.issues.is_empty());
    }

    #[test]
    fn test_report_serializes_flat() {
        let report = use_case().validate("site: a.com");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["valid"], false);
        assert!(json["error"].is_string());
        assert!(json["explanation"].is_null());
    }

    #[test]
    fn test_sanitize() {
        let report = use_case().sanitize("```Dork: site: a.com```");
        assert_eq!(report.sanitized, "site:a.com");
        assert!(report.audit.valid);
    }

    #[test]
    fn test_combine() {
        let report = use_case().combine(&["site:a.com ext:sql".to_string(), "site:a.com ext:log".to_string()]);
        assert_eq!(
            report.concat.as_deref(),
            Some("(site:a.com ext:sql) OR (site:a.com ext:log)")
        );
        assert_eq!(report.optimized, vec!["site:a.com ((ext:sql) OR (ext:log))".to_string()]);
    }
}
