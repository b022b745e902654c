//! Plain text exporter

use super::{DorkExporter, ExportError, ExportMetadata, total_count};
use dorkforge_application::CategoryDorks;
use dorkforge_domain::core::string::humanize_identifier;

/// One query per line, with a `#` comment header and descriptions as comments
pub struct TextExporter;

impl DorkExporter for TextExporter {
    fn export(&self, results: &[CategoryDorks], metadata: &ExportMetadata) -> Result<String, ExportError> {
        let mut lines = vec![
            "# DorkForge Export".to_string(),
            format!("# Generated: {}", metadata.timestamp()),
        ];
        if let Some(domain) = &metadata.domain {
            lines.push(format!("# Domain: {}", domain));
        }
        if let Some(keyword) = &metadata.keyword {
            lines.push(format!("# Keyword: {}", keyword));
        }
        let categories: Vec<&str> = results.iter().map(|r| r.category.as_str()).collect();
        lines.push(format!("# Categories: {}", categories.join(", ")));
        lines.push(format!("# Total: {} dorks", total_count(results)));
        lines.push(String::new());

        for result in results {
            lines.push(format!(
                "# === {} ({} dorks) ===",
                humanize_identifier(&result.category).to_uppercase(),
                result.count()
            ));
            lines.push(String::new());

            for dork in &result.dorks {
                if !dork.description().is_empty() {
                    lines.push(format!("# {}", dork.description()));
                }
                lines.push(dork.query().to_string());
                lines.push(String::new());
            }
        }

        Ok(lines.join("\n"))
    }

    fn file_extension(&self) -> &'static str {
        "txt"
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures;
    use super::*;

    #[test]
    fn test_text_export() {
        let output = TextExporter
            .export(&fixtures::results(), &fixtures::metadata())
            .unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "# DorkForge Export");
        assert_eq!(lines[1], "# Generated: 2026-01-27 22:52:00");
        assert_eq!(lines[2], "# Domain: example.com");
        assert_eq!(lines[3], "# Categories: sensitive_files, login_pages");
        assert_eq!(lines[4], "# Total: 3 dorks");
        assert!(output.contains("# === SENSITIVE FILES (2 dorks) ===\n\n# Environment files\nsite:example.com ext:env\n"));
        // No comment line for a dork without a description
        assert!(output.contains("\n\nsite:example.com ext:sql | ext:db\n"));
    }
}
