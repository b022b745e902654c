//! Permutation configuration from TOML (`[permutation]` section)
//!
//! ```toml
//! [permutation]
//! replace_defaults = false
//!
//! [permutation.extension_families]
//! pdf = ["pdf", "ps", "xps"]
//!
//! [permutation.keyword_families]
//! login = ["login", "signin", "sso"]
//! ```
//!
//! Configured families override default families with the same key and
//! are appended after the defaults in key order. With `replace_defaults`
//! only the configured families are used.

use super::issues::{ConfigIssue, ConfigIssueCode};
use dorkforge_domain::{DomainError, FamilyMap, PermutationFamilies, Severity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw permutation configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePermutationConfig {
    pub extension_families: BTreeMap<String, Vec<String>>,
    pub keyword_families: BTreeMap<String, Vec<String>>,
    pub replace_defaults: bool,
}

impl FilePermutationConfig {
    /// Build the permutator families
    pub fn to_families(&self) -> Result<PermutationFamilies, DomainError> {
        let extensions = Self::build(
            FamilyMap::default_extensions(),
            &self.extension_families,
            self.replace_defaults,
        )?;
        let keywords = Self::build(
            FamilyMap::default_keywords(),
            &self.keyword_families,
            self.replace_defaults,
        )?;
        Ok(PermutationFamilies::new(extensions, keywords))
    }

    fn build(
        defaults: FamilyMap,
        configured: &BTreeMap<String, Vec<String>>,
        replace: bool,
    ) -> Result<FamilyMap, DomainError> {
        let configured = FamilyMap::new(
            configured
                .iter()
                .map(|(key, members)| (key.clone(), members.clone()))
                .collect(),
        )?;
        if replace {
            return Ok(configured);
        }
        let mut merged = defaults;
        merged.merge(configured);
        Ok(merged)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(Self::validate_table(
            "permutation.extension_families",
            &self.extension_families,
        ));
        issues.extend(Self::validate_table(
            "permutation.keyword_families",
            &self.keyword_families,
        ));
        issues
    }

    fn validate_table(field: &str, table: &BTreeMap<String, Vec<String>>) -> Vec<ConfigIssue> {
        table
            .iter()
            .filter_map(|(key, members)| {
                FamilyMap::new(vec![(key.clone(), members.clone())])
                    .err()
                    .map(|error| {
                        let reason = match &error {
                            DomainError::InvalidFamily { reason, .. } => reason.clone(),
                            other => other.to_string(),
                        };
                        ConfigIssue {
                            severity: Severity::Error,
                            code: ConfigIssueCode::InvalidFamily {
                                field: field.to_string(),
                                family: key.clone(),
                                reason: reason.clone(),
                            },
                            message: format!("{}.{}: {}", field, key, reason),
                        }
                    })
            })
            .collect()
    }
}
