//! Template catalog entities

use crate::core::error::DomainError;
use crate::core::string::humanize_identifier;
use serde::{Deserialize, Serialize};

/// A concrete search query with its description (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dork {
    query: String,
    description: String,
}

impl Dork {
    /// Create a dork, rejecting a blank query
    pub fn new(
        query: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let query = query.into();
        if query.trim().is_empty() {
            return Err(DomainError::EmptyQuery);
        }
        Ok(Self {
            query,
            description: description.into(),
        })
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Copy of this dork carrying a rewritten query
    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            description: self.description.clone(),
        }
    }
}

impl std::fmt::Display for Dork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.query)
    }
}

/// A parametrized query pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub pattern: String,
    #[serde(default)]
    pub description: String,
    /// Parameters the template is documented to take
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<String>,
    /// Sample rendered queries
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
}

impl Template {
    pub fn new(pattern: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            description: description.into(),
            params: Vec::new(),
            examples: Vec::new(),
        }
    }

    pub fn with_params(mut self, params: Vec<String>) -> Self {
        self.params = params;
        self
    }

    pub fn with_examples(mut self, examples: Vec<String>) -> Self {
        self.examples = examples;
        self
    }

    /// Distinct placeholder names in order of first appearance
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for name in super::generator::placeholder_names(&self.pattern) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}

/// One selectable value of a filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

/// A filter a category offers for narrowing its generated dorks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterDef {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub options: Vec<FilterOption>,
}

/// A named set of templates (Entity)
///
/// `id` is the normalized identity; loaders map legacy identity fields onto
/// it before the catalog ever sees a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub templates: Vec<Template>,
    #[serde(default)]
    pub filters: Vec<FilterDef>,
}

impl Category {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: String::new(),
            templates: Vec::new(),
            filters: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_template(mut self, template: Template) -> Self {
        self.templates.push(template);
        self
    }

    pub fn with_filter(mut self, filter: FilterDef) -> Self {
        self.filters.push(filter);
        self
    }

    /// Human-readable name derived from the id
    pub fn display_name(&self) -> String {
        humanize_identifier(&self.id)
    }

    pub fn summary(&self) -> CategorySummary {
        CategorySummary {
            id: self.id.clone(),
            name: self.display_name(),
            desc: self.description.clone(),
        }
    }
}

/// Listing entry for a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
    pub desc: String,
}

/// Full view of one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDetail {
    pub id: String,
    pub name: String,
    pub description: String,
    pub template_count: usize,
    pub filters: Vec<FilterDef>,
    pub templates: Vec<Template>,
}

impl From<&Category> for CategoryDetail {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.clone(),
            name: category.display_name(),
            description: category.description.clone(),
            template_count: category.templates.len(),
            filters: category.filters.clone(),
            templates: category.templates.clone(),
        }
    }
}

/// A template matched by a catalog search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateMatch {
    pub category: String,
    pub pattern: String,
    pub description: String,
}
