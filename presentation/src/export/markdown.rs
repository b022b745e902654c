//! Markdown exporter

use super::{DorkExporter, ExportError, ExportMetadata, total_count};
use dorkforge_application::CategoryDorks;
use dorkforge_domain::QueryCombiner;
use dorkforge_domain::core::string::humanize_identifier;

/// Report-style output: metadata block, table of contents, one table per
/// category and its combined queries
pub struct MarkdownExporter;

impl MarkdownExporter {
    fn anchor(category: &str) -> String {
        category.to_lowercase().replace('_', "-")
    }

    fn combined_queries(result: &CategoryDorks) -> Vec<String> {
        let queries: Vec<&str> = result.dorks.iter().map(|d| d.query()).collect();
        let combined = QueryCombiner::default().combine(&queries);
        if combined.is_empty() {
            result.concat.iter().cloned().collect()
        } else {
            combined
        }
    }
}

impl DorkExporter for MarkdownExporter {
    fn export(&self, results: &[CategoryDorks], metadata: &ExportMetadata) -> Result<String, ExportError> {
        let mut lines = vec![
            "# DorkForge Report".to_string(),
            String::new(),
            format!("**Generated:** {}", metadata.timestamp()),
        ];
        if let Some(domain) = &metadata.domain {
            lines.push(format!("**Domain:** {}", domain));
        }
        if let Some(keyword) = &metadata.keyword {
            lines.push(format!("**Keyword:** {}", keyword));
        }
        lines.push(format!("**Categories:** {}", results.len()));
        lines.push(format!("**Total Dorks:** {}", total_count(results)));
        lines.push(String::new());

        if results.len() > 1 {
            lines.push("## Table of Contents".to_string());
            lines.push(String::new());
            for result in results {
                lines.push(format!(
                    "- [{}](#{}) ({} dorks)",
                    humanize_identifier(&result.category),
                    Self::anchor(&result.category),
                    result.count()
                ));
            }
            lines.push(String::new());
        }

        lines.push("---".to_string());
        lines.push(String::new());

        for result in results {
            lines.push(format!(
                "## {} ({} dorks)",
                humanize_identifier(&result.category),
                result.count()
            ));
            lines.push(String::new());
            lines.push("| # | Description | Dork Query |".to_string());
            lines.push("|---|-------------|------------|".to_string());
            for (idx, dork) in result.dorks.iter().enumerate() {
                let description = if dork.description().is_empty() {
                    "N/A"
                } else {
                    dork.description()
                };
                lines.push(format!(
                    "| {} | {} | `{}` |",
                    idx + 1,
                    description.replace('|', "\\|"),
                    dork.query().replace('|', "\\|")
                ));
            }
            lines.push(String::new());

            if result.count() > 1 {
                let combined = Self::combined_queries(result);
                if !combined.is_empty() {
                    lines.push("### Combined Query".to_string());
                    lines.push(String::new());
                    for query in combined {
                        lines.push("```".to_string());
                        lines.push(query);
                        lines.push("```".to_string());
                        lines.push(String::new());
                    }
                }
            }
        }

        Ok(lines.join("\n"))
    }

    fn file_extension(&self) -> &'static str {
        "md"
    }
}
