//! JSON output formatter

use crate::output::formatter::OutputFormatter;
use dorkforge_application::{BatchDorks, CombineReport, QueryReport, SanitizeReport};
use dorkforge_domain::{CategoryDetail, CategorySummary, TemplateMatch};
use serde::Serialize;
use serde_json::json;

/// Formats command results as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    fn render<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn query_report(&self, report: &QueryReport) -> String {
        Self::render(report)
    }

    fn explanation(&self, query: &str, explanation: &str) -> String {
        Self::render(&json!({ "query": query, "explanation": explanation }))
    }

    fn variations(&self, query: &str, variations: &[String]) -> String {
        Self::render(&json!({ "query": query, "variations": variations }))
    }

    fn categories(&self, categories: &[CategorySummary]) -> String {
        Self::render(categories)
    }

    fn category_detail(&self, detail: &CategoryDetail) -> String {
        Self::render(detail)
    }

    fn template_matches(&self, _keyword: &str, matches: &[TemplateMatch]) -> String {
        Self::render(matches)
    }

    fn batch(&self, batch: &BatchDorks) -> String {
        Self::render(batch)
    }

    fn sanitize_report(&self, report: &SanitizeReport) -> String {
        Self::render(report)
    }

    fn combine_report(&self, report: &CombineReport) -> String {
        Self::render(report)
    }
}
