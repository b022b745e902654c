//! Immutable snapshot of the template categories

use super::entities::{Category, CategoryDetail, CategorySummary, Dork, TemplateMatch};
use super::generator;
use crate::core::string::contains_ignore_case;
use std::collections::HashMap;

/// Read-only category catalog
///
/// Built once from loaded data and then only queried. Categories keep
/// their load order; a later category with an already-seen id replaces
/// the earlier one in place.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use dorkforge_domain::{Category, Template, TemplateCatalog};
///
/// let catalog = TemplateCatalog::new(vec![
///     Category::new("login").with_template(Template::new("site:{domain} inurl:login", "Login")),
/// ]);
/// let params = HashMap::from([("domain".to_string(), "x.com".to_string())]);
/// let dorks = catalog.generate("login", &params);
/// assert_eq!(dorks[0].query(), "site:x.com inurl:login");
/// assert!(catalog.generate("missing", &params).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateCatalog {
    categories: Vec<Category>,
}

impl TemplateCatalog {
    pub fn new(categories: Vec<Category>) -> Self {
        let mut catalog = Self::default();
        for category in categories {
            match catalog.categories.iter_mut().find(|c| c.id == category.id) {
                Some(existing) => *existing = category,
                None => catalog.categories.push(category),
            }
        }
        catalog
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// `{id, name, desc}` for every category
    pub fn get_categories(&self) -> Vec<CategorySummary> {
        self.categories.iter().map(Category::summary).collect()
    }

    /// Expand the templates of `category_id`; unknown ids yield nothing
    pub fn generate(&self, category_id: &str, params: &HashMap<String, String>) -> Vec<Dork> {
        self.category(category_id)
            .map(|category| generator::generate(category, params))
            .unwrap_or_default()
    }

    pub fn detail(&self, category_id: &str) -> Option<CategoryDetail> {
        self.category(category_id).map(CategoryDetail::from)
    }

    /// Templates whose pattern or description contains `keyword`
    pub fn search_templates(&self, keyword: &str) -> Vec<TemplateMatch> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Vec::new();
        }

        self.categories
            .iter()
            .flat_map(|category| {
                category
                    .templates
                    .iter()
                    .filter(move |t| {
                        contains_ignore_case(&t.pattern, keyword)
                            || contains_ignore_case(&t.description, keyword)
                    })
                    .map(move |t| TemplateMatch {
                        category: category.id.clone(),
                        pattern: t.pattern.clone(),
                        description: t.description.clone(),
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::entities::Template;

    fn catalog() -> TemplateCatalog {
        TemplateCatalog::new(vec![
            Category::new("login_pages")
                .with_description("Authentication portals")
                .with_template(Template::new("site:{domain} inurl:login", "Login pages"))
                .with_template(Template::new("site:{domain} intext:{keyword}", "Keyword")),
            Category::new("sql_dumps")
                .with_template(Template::new("site:{domain} ext:sql", "SQL dump files")),
        ])
    }

    #[test]
    fn test_get_categories() {
        let summaries = catalog().get_categories();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].id, "login_pages");
        assert_eq!(summaries[0].name, "Login Pages");
        assert_eq!(summaries[0].desc, "Authentication portals");
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = TemplateCatalog::default();
        assert!(catalog.get_categories().is_empty());
        assert!(catalog.generate("login", &HashMap::new()).is_empty());
    }

    #[test]
    fn test_duplicate_id_replaces_in_place() {
        let catalog = TemplateCatalog::new(vec![
            Category::new("a"),
            Category::new("b"),
            Category::new("a").with_description("second"),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.categories()[0].description, "second");
    }

    #[test]
    fn test_search_templates() {
        let matches = catalog().search_templates("SQL");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].category, "sql_dumps");

        let matches = catalog().search_templates("inurl");
        assert_eq!(matches[0].pattern, "site:{domain} inurl:login");
        assert!(catalog().search_templates("  ").is_empty());
    }

    #[test]
    fn test_detail() {
        let detail = catalog().detail("login_pages").unwrap();
        assert_eq!(detail.template_count, 2);
        assert!(catalog().detail("nope").is_none());
    }
}
