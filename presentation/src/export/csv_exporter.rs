//! CSV exporter

use super::{DorkExporter, ExportError, ExportMetadata};
use dorkforge_application::CategoryDorks;
use std::fs;
use std::path::Path;

const HEADER: [&str; 6] = ["Category", "Dork", "Description", "Generated_At", "Domain", "Keyword"];
const NOT_AVAILABLE: &str = "N/A";
const UTF8_BOM: &str = "\u{feff}";

/// One row per dork with the run metadata repeated on each row
pub struct CsvExporter;

/// Neutralize cells a spreadsheet would evaluate as a formula
fn neutralize(value: &str) -> String {
    if value.starts_with(['=', '+', '-', '@']) {
        format!("'{}", value)
    } else {
        value.to_string()
    }
}

impl DorkExporter for CsvExporter {
    fn export(&self, results: &[CategoryDorks], metadata: &ExportMetadata) -> Result<String, ExportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(HEADER)?;

        let timestamp = metadata.timestamp();
        let domain = metadata.domain.as_deref().unwrap_or(NOT_AVAILABLE);
        let keyword = metadata.keyword.as_deref().unwrap_or(NOT_AVAILABLE);

        for result in results {
            for dork in &result.dorks {
                writer.write_record([
                    neutralize(&result.category),
                    neutralize(dork.query()),
                    neutralize(dork.description()),
                    neutralize(&timestamp),
                    neutralize(domain),
                    neutralize(keyword),
                ])?;
            }
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ExportError::Io(e.into_error()))?;
        String::from_utf8(bytes).map_err(|_| ExportError::Encoding)
    }

    fn file_extension(&self) -> &'static str {
        "csv"
    }

    /// Files carry a UTF-8 BOM so spreadsheet tools detect the encoding
    fn export_to_file(
        &self,
        results: &[CategoryDorks],
        metadata: &ExportMetadata,
        path: &Path,
    ) -> Result<(), ExportError> {
        let output = self.export(results, metadata)?;
        fs::write(path, format!("{}{}", UTF8_BOM, output))?;
        Ok(())
    }
}
