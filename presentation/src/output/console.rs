//! Console output formatter for dorkforge results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use dorkforge_application::{BatchDorks, CombineReport, QueryReport, SanitizeReport};
use dorkforge_domain::core::string::humanize_identifier;
use dorkforge_domain::{CategoryDetail, CategorySummary, QueryIssue, Severity, TemplateMatch};

/// Formats command results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}\n", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn issue_line(issue: &QueryIssue) -> String {
        let tag = match issue.severity {
            Severity::Error => "error".red().bold(),
            Severity::Warning => "warning".yellow().bold(),
        };
        format!("  {} {}\n", tag, issue.message)
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn query_report(&self, report: &QueryReport) -> String {
        let mut output = String::new();

        output.push_str(&format!("{} {}\n", "Query:".cyan().bold(), report.query));

        match &report.validation.error {
            None => output.push_str(&format!("{} {}\n", "Status:".cyan().bold(), "valid".green().bold())),
            Some(error) => output.push_str(&format!(
                "{} {} ({})\n",
                "Status:".cyan().bold(),
                "invalid".red().bold(),
                error
            )),
        }

        if !report.issues.is_empty() {
            output.push_str(&Self::section_header("Issues"));
            for issue in &report.issues {
                output.push_str(&Self::issue_line(issue));
            }
        }

        if let Some(explanation) = &report.explanation {
            output.push_str(&Self::section_header("Explanation"));
            output.push_str(&Self::indent(explanation, "  "));
            output.push('\n');
        }

        output
    }

    fn explanation(&self, query: &str, explanation: &str) -> String {
        format!(
            "{} {}\n\n{}\n",
            "Query:".cyan().bold(),
            query,
            Self::indent(explanation, "  ")
        )
    }

    fn variations(&self, query: &str, variations: &[String]) -> String {
        let mut output = format!("{} {}\n", "Query:".cyan().bold(), query);

        if variations.is_empty() {
            output.push_str(&format!("\n{}\n", "No variations found".dimmed()));
            return output;
        }

        output.push_str(&Self::section_header(&format!("Variations ({})", variations.len())));
        for variation in variations {
            output.push_str(&format!("  {} {}\n", "*".green(), variation));
        }
        output
    }

    fn categories(&self, categories: &[CategorySummary]) -> String {
        let mut output = Self::header("Template Categories");

        let width = categories.iter().map(|c| c.id.len()).max().unwrap_or(0);
        for category in categories {
            let id = format!("{:<width$}", category.id, width = width);
            output.push_str(&format!("  {}  {}\n", id.yellow().bold(), category.desc));
        }

        output.push_str(&format!("\n{} categories\n", categories.len()));
        output
    }

    fn category_detail(&self, detail: &CategoryDetail) -> String {
        let mut output = Self::header(&detail.name);

        output.push_str(&format!("{} {}\n", "Id:".cyan().bold(), detail.id));
        if !detail.description.is_empty() {
            output.push_str(&format!("{} {}\n", "Description:".cyan().bold(), detail.description));
        }

        output.push_str(&Self::section_header(&format!("Templates ({})", detail.template_count)));
        for template in &detail.templates {
            output.push_str(&format!("  {}\n", template.pattern.yellow()));
            if !template.description.is_empty() {
                output.push_str(&format!("    {}\n", template.description.dimmed()));
            }
            for example in &template.examples {
                output.push_str(&format!("    {} {}\n", "e.g.".dimmed(), example));
            }
        }

        if !detail.filters.is_empty() {
            output.push_str(&Self::section_header("Filters"));
            for filter in &detail.filters {
                output.push_str(&format!("  {} ({})\n", filter.label.bold(), filter.key));
                for option in &filter.options {
                    output.push_str(&format!("    {} = {}\n", option.label, option.value));
                }
            }
        }

        output
    }

    fn template_matches(&self, keyword: &str, matches: &[TemplateMatch]) -> String {
        if matches.is_empty() {
            return format!("No templates match '{}'\n", keyword);
        }

        let mut output = format!(
            "{} {} matches for '{}'\n",
            "Search:".cyan().bold(),
            matches.len(),
            keyword
        );
        for m in matches {
            output.push_str(&format!(
                "\n  {} {}\n    {}\n",
                format!("[{}]", m.category).yellow(),
                m.pattern,
                m.description.dimmed()
            ));
        }
        output
    }

    fn batch(&self, batch: &BatchDorks) -> String {
        let mut output = String::new();

        for result in &batch.results {
            output.push_str(&Self::section_header(&format!(
                "{} ({} dorks)",
                humanize_identifier(&result.category),
                result.count()
            )));

            for dork in &result.dorks {
                if !dork.description().is_empty() {
                    output.push_str(&format!("  {}\n", format!("# {}", dork.description()).dimmed()));
                }
                output.push_str(&format!("  {}\n", dork.query().green()));
            }

            if result.rejected > 0 {
                output.push_str(&format!(
                    "  {}\n",
                    format!("{} dorks failed validation and were dropped", result.rejected).yellow()
                ));
            }

            if let Some(concat) = &result.concat {
                output.push_str(&format!("\n  {}\n  {}\n", "Combined:".cyan(), concat));
            }
        }

        for skipped in &batch.skipped {
            output.push_str(&format!(
                "\n{} unknown category '{}'\n",
                "Skipped:".yellow().bold(),
                skipped
            ));
        }

        output.push_str(&format!(
            "\n{} {} dorks across {} categories\n",
            "Total:".cyan().bold(),
            batch.total_count,
            batch.results.len()
        ));
        output
    }

    fn sanitize_report(&self, report: &SanitizeReport) -> String {
        let mut output = format!("{} {}\n", "Sanitized:".cyan().bold(), report.sanitized);

        if report.audit.valid {
            output.push_str(&format!("{} {}\n", "Audit:".cyan().bold(), "passed".green().bold()));
        } else {
            output.push_str(&format!("{} {}\n", "Audit:".cyan().bold(), "failed".red().bold()));
            for issue in &report.audit.issues {
                output.push_str(&format!("  - {}\n", issue));
            }
        }
        output
    }

    fn combine_report(&self, report: &CombineReport) -> String {
        let mut output = String::new();

        if let Some(concat) = &report.concat {
            output.push_str(&Self::section_header("Concatenated"));
            output.push_str(&format!("  {}\n", concat));
        }

        output.push_str(&Self::section_header(&format!(
            "Optimized ({} queries)",
            report.optimized.len()
        )));
        for query in &report.optimized {
            output.push_str(&format!("  {}\n", query.green()));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dorkforge_application::CategoryDorks;
    use dorkforge_domain::{Dork, Template, ValidationResult};

    fn plain<F: FnOnce() -> String>(render: F) -> String {
        colored::control::set_override(false);
        render()
    }

    #[test]
    fn test_query_report_invalid() {
        let report = QueryReport {
            query: "intitle:\"admin".to_string(),
            validation: ValidationResult::invalid("Invalid operator syntax: check quotes or spacing"),
            issues: Vec::new(),
            explanation: None,
        };
        let text = plain(|| ConsoleFormatter.query_report(&report));
        assert!(text.contains("invalid (Invalid operator syntax"));
        assert!(!text.contains("Explanation"));
    }

    #[test]
    fn test_variations_empty() {
        let text = plain(|| ConsoleFormatter.variations("hello", &[]));
        assert!(text.contains("No variations found"));
    }

    #[test]
    fn test_batch() {
        let batch = BatchDorks {
            results: vec![CategoryDorks {
                category: "login_pages".to_string(),
                dorks: vec![
                    Dork::new("site:x.com inurl:login", "Login").unwrap(),
                    Dork::new("site:x.com inurl:admin", "").unwrap(),
                ],
                concat: Some("(site:x.com inurl:login) OR (site:x.com inurl:admin)".to_string()),
                rejected: 1,
            }],
            skipped: vec!["nope".to_string()],
            total_count: 2,
        };
        let text = plain(|| ConsoleFormatter.batch(&batch));
        assert!(text.contains("Login Pages (2 dorks)"));
        assert!(text.contains("# Login"));
        assert!(text.contains("1 dorks failed validation"));
        assert!(text.contains("unknown category 'nope'"));
        assert!(text.contains("Total: 2 dorks across 1 categories"));
    }

    #[test]
    fn test_category_detail_lists_examples() {
        let detail = CategoryDetail {
            id: "docs".to_string(),
            name: "Docs".to_string(),
            description: String::new(),
            template_count: 1,
            filters: Vec::new(),
            templates: vec![
                Template::new("site:{domain} filetype:pdf", "PDFs")
                    .with_examples(vec!["site:example.com filetype:pdf".to_string()]),
            ],
        };
        let text = plain(|| ConsoleFormatter.category_detail(&detail));
        assert!(text.contains("e.g. site:example.com filetype:pdf"));
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "  "), "  a\n  b");
    }
}
