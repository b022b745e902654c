//! Post-generation filter matching
//!
//! Criteria are grouped by key. A dork must satisfy every group, and it
//! satisfies a group when any value of that group is a case-insensitive
//! substring of the target text.

use super::entities::Dork;
use crate::core::error::DomainError;
use crate::core::string::contains_ignore_case;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Filter key that matches against the description instead of the query
pub const DESCRIPTION_CONTAINS: &str = "description_contains";

/// A single `{key, value}` criterion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriterion {
    pub key: String,
    pub value: String,
}

impl FilterCriterion {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    fn target<'a>(&self, dork: &'a Dork) -> &'a str {
        if self.key == DESCRIPTION_CONTAINS {
            dork.description()
        } else {
            dork.query()
        }
    }

    fn matches(&self, dork: &Dork) -> bool {
        contains_ignore_case(self.target(dork), &self.value)
    }
}

/// Parses `key=value`
impl FromStr for FilterCriterion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| DomainError::InvalidCriterion(s.to_string()))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(DomainError::InvalidCriterion(s.to_string()));
        }
        Ok(Self::new(key, value.trim()))
    }
}

/// Keep the dorks that pass every criterion group.
///
/// An empty criteria list keeps everything.
pub fn filter_dorks(dorks: &[Dork], criteria: &[FilterCriterion]) -> Vec<Dork> {
    let groups = group_by_key(criteria);
    dorks
        .iter()
        .filter(|dork| {
            groups
                .iter()
                .all(|group| group.iter().any(|criterion| criterion.matches(dork)))
        })
        .cloned()
        .collect()
}

fn group_by_key(criteria: &[FilterCriterion]) -> Vec<Vec<&FilterCriterion>> {
    let mut groups: Vec<Vec<&FilterCriterion>> = Vec::new();
    for criterion in criteria {
        match groups.iter_mut().find(|g| g[0].key == criterion.key) {
            Some(group) => group.push(criterion),
            None => groups.push(vec![criterion]),
        }
    }
    groups
}
