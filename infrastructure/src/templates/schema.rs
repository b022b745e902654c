//! Wire schema of template documents
//!
//! Upstream data names a category's identity either `category` or, in
//! legacy sets, `name`; filters use `key` or `id`. These raw structs accept
//! both spellings and [`RawCategory::normalize`] maps them onto the single
//! domain shape, so nothing past this module sees the variants.

use super::error::TemplateStoreError;
use dorkforge_domain::{Category, FilterDef, FilterOption, Template};
use serde::Deserialize;

/// Bundle document: `{"categories": [...]}`; other top-level keys are ignored
#[derive(Debug, Deserialize)]
pub struct RawBundle {
    #[serde(default)]
    pub categories: Vec<RawCategory>,
}

#[derive(Debug, Deserialize)]
pub struct RawCategory {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub templates: Vec<RawTemplate>,
    #[serde(default)]
    pub filters: Vec<RawFilter>,
}

#[derive(Debug, Deserialize)]
pub struct RawTemplate {
    pub pattern: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub params: Vec<String>,
    #[serde(default)]
    pub examples: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct RawFilter {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub options: Vec<RawFilterOption>,
}

#[derive(Debug, Deserialize)]
pub struct RawFilterOption {
    pub label: String,
    pub value: String,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl RawCategory {
    /// Map onto the domain shape.
    ///
    /// Identity comes from `category`, then `name`, then `fallback_id`
    /// (a file stem for per-file documents). No identity is a schema error.
    pub fn normalize(
        self,
        location: &str,
        fallback_id: Option<&str>,
    ) -> Result<Category, TemplateStoreError> {
        let id = non_blank(self.category)
            .or_else(|| non_blank(self.name))
            .or_else(|| fallback_id.map(str::to_string))
            .ok_or_else(|| {
                TemplateStoreError::schema(location, "category has neither 'category' nor 'name'")
            })?;

        let filters = self
            .filters
            .into_iter()
            .map(|filter| filter.normalize(location, &id))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Category {
            id,
            description: self.description,
            templates: self
                .templates
                .into_iter()
                .map(|t| {
                    Template::new(t.pattern, t.description)
                        .with_params(t.params)
                        .with_examples(t.examples.unwrap_or_default())
                })
                .collect(),
            filters,
        })
    }
}

impl RawFilter {
    fn normalize(self, location: &str, category: &str) -> Result<FilterDef, TemplateStoreError> {
        let key = non_blank(self.key)
            .or_else(|| non_blank(self.id))
            .ok_or_else(|| {
                TemplateStoreError::schema(
                    location,
                    format!("filter in category '{}' has neither 'key' nor 'id'", category),
                )
            })?;

        Ok(FilterDef {
            label: if self.label.is_empty() {
                key.clone()
            } else {
                self.label
            },
            key,
            options: self
                .options
                .into_iter()
                .map(|o| FilterOption {
                    label: o.label,
                    value: o.value,
                })
                .collect(),
        })
    }
}

/// Split a parsed document into its raw categories.
///
/// Accepts a list of categories, a bundle (object with `categories`), or a
/// single category object.
pub fn categories_from_value(
    value: serde_json::Value,
    location: &str,
) -> Result<Vec<RawCategory>, TemplateStoreError> {
    let json_error = |source| TemplateStoreError::Json {
        location: location.to_string(),
        source,
    };

    match value {
        serde_json::Value::Array(_) => serde_json::from_value(value).map_err(json_error),
        serde_json::Value::Object(ref map) if map.contains_key("categories") => {
            let bundle: RawBundle = serde_json::from_value(value).map_err(json_error)?;
            Ok(bundle.categories)
        }
        serde_json::Value::Object(_) => {
            let category: RawCategory = serde_json::from_value(value).map_err(json_error)?;
            Ok(vec![category])
        }
        _ => Err(TemplateStoreError::schema(
            location,
            "expected a category object, a list of categories, or a bundle",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(json: &str) -> RawCategory {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_identity_from_category_field() {
        let category = raw(r#"{"category": "login", "templates": [{"pattern": "inurl:login", "description": "x"}]}"#)
            .normalize("test", None)
            .unwrap();
        assert_eq!(category.id, "login");
        assert_eq!(category.templates.len(), 1);
    }

    #[test]
    fn test_identity_from_legacy_name() {
        let category = raw(r#"{"name": "social_media", "templates": []}"#)
            .normalize("test", None)
            .unwrap();
        assert_eq!(category.id, "social_media");
    }

    #[test]
    fn test_template_params_and_examples() {
        let category = raw(
            r#"{
                "category": "docs",
                "templates": [
                    {"pattern": "site:{domain} filetype:pdf", "description": "PDFs",
                     "params": ["domain"], "examples": ["site:example.com filetype:pdf"]},
                    {"pattern": "ext:sql", "examples": null}
                ]
            }"#,
        )
        .normalize("test", None)
        .unwrap();
        assert_eq!(category.templates[0].params, vec!["domain"]);
        assert_eq!(category.templates[0].examples, vec!["site:example.com filetype:pdf"]);
        assert!(category.templates[1].examples.is_empty());
    }

    #[test]
    fn test_category_field_wins_over_name() {
        let category = raw(r#"{"category": "a", "name": "b"}"#)
            .normalize("test", None)
            .unwrap();
        assert_eq!(category.id, "a");
    }

    #[test]
    fn test_missing_identity() {
        let err = raw(r#"{"templates": []}"#).normalize("bundle.json", None).unwrap_err();
        assert!(matches!(err, TemplateStoreError::Schema { .. }));
        assert!(err.to_string().contains("bundle.json"));

        let category = raw(r#"{"category": "  "}"#)
            .normalize("files/api.json", Some("api"))
            .unwrap();
        assert_eq!(category.id, "api");
    }

    #[test]
    fn test_filter_key_or_id() {
        let category = raw(
            r#"{
                "category": "files",
                "filters": [
                    {"key": "ext", "label": "Extension", "options": [{"label": "SQL", "value": "ext:sql"}]},
                    {"id": "path", "options": []}
                ]
            }"#,
        )
        .normalize("test", None)
        .unwrap();
        assert_eq!(category.filters[0].key, "ext");
        assert_eq!(category.filters[0].options[0].value, "ext:sql");
        assert_eq!(category.filters[1].key, "path");
        assert_eq!(category.filters[1].label, "path");
    }

    #[test]
    fn test_filter_without_key_is_error() {
        let err = raw(r#"{"category": "x", "filters": [{"label": "Nope"}]}"#)
            .normalize("test", None)
            .unwrap_err();
        assert!(err.to_string().contains("neither 'key' nor 'id'"));
    }

    fn shape(json: &str) -> Result<Vec<RawCategory>, TemplateStoreError> {
        categories_from_value(serde_json::from_str(json).unwrap(), "test")
    }

    #[test]
    fn test_document_shapes() {
        assert_eq!(shape(r#"{"category": "a"}"#).unwrap().len(), 1);
        assert_eq!(shape(r#"[{"category": "a"}, {"name": "b"}]"#).unwrap().len(), 2);

        let bundle = shape(r#"{"categories": [{"category": "a"}, {"category": "b"}], "meta": {"v": 1}}"#)
            .unwrap();
        assert_eq!(bundle.len(), 2);
        assert_eq!(bundle[1].category.as_deref(), Some("b"));
    }

    #[test]
    fn test_scalar_document_is_error() {
        assert!(matches!(shape("42"), Err(TemplateStoreError::Schema { .. })));
        assert!(matches!(shape(r#"[1, 2]"#), Err(TemplateStoreError::Json { .. })));
    }
}
