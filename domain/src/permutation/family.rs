//! Equivalence families
//!
//! A family groups related extensions (`php`, `php5`, `phtml`) or keywords
//! (`login`, `signin`, `auth`). Family order matters: when a term is not a
//! family key, the first family listing it as a member wins.

use crate::core::error::DomainError;

/// A named group of related terms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Family {
    pub key: String,
    pub members: Vec<String>,
}

/// Ordered collection of families
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyMap {
    families: Vec<Family>,
}

impl FamilyMap {
    /// A map with no families; every term maps to itself
    pub fn empty() -> Self {
        Self {
            families: Vec::new(),
        }
    }

    /// Build a map from `(key, members)` entries.
    ///
    /// Keys and members are trimmed and lower-cased. Fails on an empty key,
    /// a family without members or a blank member.
    pub fn new(entries: Vec<(String, Vec<String>)>) -> Result<Self, DomainError> {
        let mut map = Self::empty();
        for (key, members) in entries {
            let family = Self::normalize(key, members)?;
            map.upsert(family);
        }
        Ok(map)
    }

    fn normalize(key: String, members: Vec<String>) -> Result<Family, DomainError> {
        let key = key.trim().to_lowercase();
        if key.is_empty() {
            return Err(DomainError::invalid_family(key, "family key cannot be empty"));
        }
        if members.is_empty() {
            return Err(DomainError::invalid_family(key, "family has no members"));
        }

        let mut normalized: Vec<String> = Vec::with_capacity(members.len());
        for member in members {
            let member = member.trim().to_lowercase();
            if member.is_empty() {
                return Err(DomainError::invalid_family(key, "family member cannot be blank"));
            }
            if !normalized.contains(&member) {
                normalized.push(member);
            }
        }

        Ok(Family {
            key,
            members: normalized,
        })
    }

    fn upsert(&mut self, family: Family) {
        match self.families.iter_mut().find(|f| f.key == family.key) {
            Some(existing) => *existing = family,
            None => self.families.push(family),
        }
    }

    /// Overlay `other` on top of this map.
    ///
    /// Families with an existing key are replaced in place; new keys are
    /// appended after the existing ones.
    pub fn merge(&mut self, other: FamilyMap) {
        for family in other.families {
            self.upsert(family);
        }
    }

    /// Terms related to `term`, including the term itself.
    ///
    /// Key match first, then the first family containing the term, then the
    /// singleton `[term]`.
    pub fn related(&self, term: &str) -> Vec<String> {
        if let Some(family) = self.families.iter().find(|f| f.key == term) {
            return family.members.clone();
        }
        if let Some(family) = self
            .families
            .iter()
            .find(|f| f.members.iter().any(|m| m == term))
        {
            return family.members.clone();
        }
        vec![term.to_string()]
    }

    pub fn get(&self, key: &str) -> Option<&Family> {
        self.families.iter().find(|f| f.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Family> {
        self.families.iter()
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Built-in extension families
    pub fn default_extensions() -> Self {
        Self::from_static(&[
            ("php", &["php", "php5", "phtml", "php7"]),
            ("asp", &["asp", "aspx", "asa"]),
            ("jsp", &["jsp", "jspx", "do", "action"]),
            ("js", &["js", "json", "map"]),
            ("sql", &["sql", "dump", "bak", "db"]),
            ("log", &["log", "txt", "out", "err"]),
            (
                "config",
                &["conf", "config", "cfg", "ini", "env", "xml", "yml", "yaml"],
            ),
            ("doc", &["doc", "docx", "rtf", "odt"]),
            ("xls", &["xls", "xlsx", "csv"]),
            ("ppt", &["ppt", "pptx"]),
            ("bak", &["bak", "old", "backup", "swp", "tmp"]),
            ("zip", &["zip", "rar", "7z", "tar", "gz", "tgz"]),
        ])
    }

    /// Built-in keyword families
    pub fn default_keywords() -> Self {
        Self::from_static(&[
            ("login", &["login", "admin", "signin", "auth", "portal", "cpanel"]),
            (
                "password",
                &["password", "passwd", "pwd", "credentials", "secret"],
            ),
            (
                "admin",
                &["admin", "root", "administrator", "manager", "dashboard"],
            ),
            ("config", &["config", "configuration", "settings", "setup"]),
            ("backup", &["backup", "dump", "export", "archive"]),
            ("index", &["index", "index of", "listing", "directory"]),
            ("api", &["api", "graphql", "rest", "swagger", "v1", "v2"]),
            ("v1", &["v1", "v2", "v3", "api", "mobile"]),
        ])
    }

    fn from_static(entries: &[(&str, &[&str])]) -> Self {
        Self {
            families: entries
                .iter()
                .map(|(key, members)| Family {
                    key: key.to_string(),
                    members: members.iter().map(|m| m.to_string()).collect(),
                })
                .collect(),
        }
    }
}

/// The two family tables the permutator works from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationFamilies {
    pub extensions: FamilyMap,
    pub keywords: FamilyMap,
}

impl PermutationFamilies {
    pub fn new(extensions: FamilyMap, keywords: FamilyMap) -> Self {
        Self {
            extensions,
            keywords,
        }
    }
}

impl Default for PermutationFamilies {
    fn default() -> Self {
        Self::new(FamilyMap::default_extensions(), FamilyMap::default_keywords())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_related_by_key() {
        let map = FamilyMap::default_extensions();
        assert_eq!(map.related("php"), strings(&["php", "php5", "phtml", "php7"]));
    }

    #[test]
    fn test_related_by_membership_uses_first_family() {
        let map = FamilyMap::default_extensions();
        // "bak" is a key, so its own family wins over the sql family
        assert_eq!(map.related("bak")[0], "bak");
        // "db" only appears in the sql family
        assert_eq!(map.related("db"), strings(&["sql", "dump", "bak", "db"]));
        // "admin" is a keyword key, "signin" only a login member
        let keywords = FamilyMap::default_keywords();
        assert_eq!(keywords.related("signin")[0], "login");
    }

    #[test]
    fn test_related_singleton() {
        let map = FamilyMap::default_extensions();
        assert_eq!(map.related("pdf"), strings(&["pdf"]));
    }

    #[test]
    fn test_new_normalizes_and_rejects() {
        let map = FamilyMap::new(vec![("PDF ".to_string(), strings(&["PDF", "ps", "pdf"]))]).unwrap();
        assert_eq!(map.get("pdf").unwrap().members, strings(&["pdf", "ps"]));

        assert!(FamilyMap::new(vec![("".to_string(), strings(&["a"]))]).is_err());
        assert!(FamilyMap::new(vec![("a".to_string(), vec![])]).is_err());
        assert!(FamilyMap::new(vec![("a".to_string(), strings(&["a", " "]))]).is_err());
    }

    #[test]
    fn test_merge_replaces_and_appends() {
        let mut map = FamilyMap::default_extensions();
        let overrides = FamilyMap::new(vec![
            ("php".to_string(), strings(&["php", "inc"])),
            ("pdf".to_string(), strings(&["pdf", "ps"])),
        ])
        .unwrap();
        map.merge(overrides);

        assert_eq!(map.len(), 13);
        assert_eq!(map.iter().next().unwrap().members, strings(&["php", "inc"]));
        assert_eq!(map.related("ps"), strings(&["pdf", "ps"]));
    }
}
