//! Output formatter trait

use dorkforge_application::{BatchDorks, CombineReport, QueryReport, SanitizeReport};
use dorkforge_domain::{CategoryDetail, CategorySummary, TemplateMatch};

/// Trait for rendering command results
pub trait OutputFormatter {
    /// Validation result, diagnostics and explanation
    fn query_report(&self, report: &QueryReport) -> String;

    /// Operator-by-operator explanation of a query
    fn explanation(&self, query: &str, explanation: &str) -> String;

    /// Related variants of a query
    fn variations(&self, query: &str, variations: &[String]) -> String;

    fn categories(&self, categories: &[CategorySummary]) -> String;

    fn category_detail(&self, detail: &CategoryDetail) -> String;

    fn template_matches(&self, keyword: &str, matches: &[TemplateMatch]) -> String;

    /// Generated dorks grouped by category
    fn batch(&self, batch: &BatchDorks) -> String;

    fn sanitize_report(&self, report: &SanitizeReport) -> String;

    fn combine_report(&self, report: &CombineReport) -> String;
}
