//! Exporters for generated dorks
//!
//! Each exporter renders the per-category results of a generation run into
//! one document format. [`exporter_for`] maps the CLI's `--export` value to
//! an implementation.

mod csv_exporter;
mod json_exporter;
mod markdown;
mod text;

pub use csv_exporter::CsvExporter;
pub use json_exporter::JsonExporter;
pub use markdown::MarkdownExporter;
pub use text::TextExporter;

use crate::cli::commands::ExportFormat;
use chrono::{DateTime, Local};
use dorkforge_application::CategoryDorks;
use std::fs;
use std::path::Path;
use thiserror::Error;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export produced invalid UTF-8")]
    Encoding,

    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),
}

/// Run information written alongside the dorks
#[derive(Debug, Clone)]
pub struct ExportMetadata {
    pub generated_at: DateTime<Local>,
    pub domain: Option<String>,
    pub keyword: Option<String>,
}

impl ExportMetadata {
    pub fn new(domain: Option<String>, keyword: Option<String>) -> Self {
        Self {
            generated_at: Local::now(),
            domain,
            keyword,
        }
    }

    pub fn with_generated_at(mut self, generated_at: DateTime<Local>) -> Self {
        self.generated_at = generated_at;
        self
    }

    /// Human-readable generation time
    pub fn timestamp(&self) -> String {
        self.generated_at.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Renders generation results into a document format
pub trait DorkExporter {
    fn export(&self, results: &[CategoryDorks], metadata: &ExportMetadata) -> Result<String, ExportError>;

    /// Default file extension, without the dot
    fn file_extension(&self) -> &'static str;

    fn export_to_file(
        &self,
        results: &[CategoryDorks],
        metadata: &ExportMetadata,
        path: &Path,
    ) -> Result<(), ExportError> {
        fs::write(path, self.export(results, metadata)?)?;
        Ok(())
    }
}

pub fn exporter_for(format: ExportFormat) -> Box<dyn DorkExporter> {
    match format {
        ExportFormat::Txt => Box::new(TextExporter),
        ExportFormat::Csv => Box::new(CsvExporter),
        ExportFormat::Json => Box::new(JsonExporter),
        ExportFormat::Md => Box::new(MarkdownExporter),
    }
}

pub(crate) fn total_count(results: &[CategoryDorks]) -> usize {
    results.iter().map(CategoryDorks::count).sum()
}


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_exporter_for_extensions() {
        assert_eq!(exporter_for(ExportFormat::Txt).file_extension(), "txt");
        assert_eq!(exporter_for(ExportFormat::Csv).file_extension(), "csv");
        assert_eq!(exporter_for(ExportFormat::Json).file_extension(), "json");
        assert_eq!(exporter_for(ExportFormat::Md).file_extension(), "md");
    }

    #[test]
    fn test_timestamp_format() {
        assert_eq!(fixtures::metadata().timestamp(), "2026-01-27 22:52:00");
    }

    #[test]
    fn test_export_to_file() {
        let file = NamedTempFile::new().unwrap();
        TextExporter
            .export_to_file(&fixtures::results(), &fixtures::metadata(), file.path())
            .unwrap();
        let written = std::fs::read_to_string(file.path()).unwrap();
        assert!(written.contains("site:example.com ext:env"));
    }
}
