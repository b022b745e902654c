//! JSON exporter

use super::{DorkExporter, ExportError, ExportMetadata, total_count};
use dorkforge_application::CategoryDorks;
use serde::Serialize;
use std::collections::BTreeMap;

/// Metadata, a flat dork list, and the same dorks grouped by category
pub struct JsonExporter;

#[derive(Serialize)]
struct Document<'a> {
    metadata: Metadata<'a>,
    dorks: Vec<FlatDork<'a>>,
    by_category: BTreeMap<&'a str, Vec<GroupedDork<'a>>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    concat_dorks: BTreeMap<&'a str, &'a str>,
}

#[derive(Serialize)]
struct Metadata<'a> {
    generated_at: String,
    total_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    domain: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    keyword: Option<&'a str>,
    categories: Vec<&'a str>,
}

#[derive(Serialize)]
struct FlatDork<'a> {
    query: &'a str,
    description: &'a str,
    category: &'a str,
}

#[derive(Serialize)]
struct GroupedDork<'a> {
    query: &'a str,
    description: &'a str,
}

impl DorkExporter for JsonExporter {
    fn export(&self, results: &[CategoryDorks], metadata: &ExportMetadata) -> Result<String, ExportError> {
        let document = Document {
            metadata: Metadata {
                generated_at: metadata.generated_at.to_rfc3339(),
                total_count: total_count(results),
                domain: metadata.domain.as_deref(),
                keyword: metadata.keyword.as_deref(),
                categories: results.iter().map(|r| r.category.as_str()).collect(),
            },
            dorks: results
                .iter()
                .flat_map(|r| {
                    r.dorks.iter().map(move |d| FlatDork {
                        query: d.query(),
                        description: d.description(),
                        category: &r.category,
                    })
                })
                .collect(),
            by_category: results
                .iter()
                .map(|r| {
                    let dorks = r
                        .dorks
                        .iter()
                        .map(|d| GroupedDork {
                            query: d.query(),
                            description: d.description(),
                        })
                        .collect();
                    (r.category.as_str(), dorks)
                })
                .collect(),
            concat_dorks: results
                .iter()
                .filter_map(|r| r.concat.as_deref().map(|c| (r.category.as_str(), c)))
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&document)?)
    }

    fn file_extension(&self) -> &'static str {
        "json"
    }
}
