//! Refinements applied to a generated dork list

use super::entities::Dork;
use serde::{Deserialize, Serialize};

/// Optional post-processing steps for generated dorks.
///
/// Steps run in field order; an empty or zero field is skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationRefinements {
    /// Keep only dorks using at least one of these operators
    pub include_operators: Vec<String>,
    /// Drop dorks containing any of these patterns (case-insensitive)
    pub exclude_patterns: Vec<String>,
    /// Quoted terms appended to every query
    pub custom_keywords: Vec<String>,
    /// Append `-inurl:http` to exclude plain-http results
    pub https_only: bool,
    /// Truncate to this many dorks; 0 means no limit
    pub max_dorks: usize,
}

impl GenerationRefinements {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(&self, dorks: Vec<Dork>) -> Vec<Dork> {
        let mut dorks: Vec<Dork> = dorks
            .into_iter()
            .filter(|dork| self.includes(dork) && !self.excludes(dork))
            .collect();

        if !self.custom_keywords.is_empty() {
            let terms = self
                .custom_keywords
                .iter()
                .map(|kw| format!("\"{}\"", kw))
                .collect::<Vec<_>>()
                .join(" ");
            dorks = dorks
                .iter()
                .map(|dork| dork.with_query(format!("{} {}", dork.query(), terms)))
                .collect();
        }

        if self.https_only {
            dorks = dorks
                .iter()
                .map(|dork| {
                    if dork.query().to_lowercase().contains("-inurl:http") {
                        dork.clone()
                    } else {
                        dork.with_query(format!("{} -inurl:http", dork.query()))
                    }
                })
                .collect();
        }

        if self.max_dorks > 0 {
            dorks.truncate(self.max_dorks);
        }

        dorks
    }

    fn includes(&self, dork: &Dork) -> bool {
        if self.include_operators.is_empty() {
            return true;
        }
        let query = dork.query().to_lowercase();
        self.include_operators
            .iter()
            .any(|op| query.contains(&format!("{}:", op.to_lowercase())))
    }

    fn excludes(&self, dork: &Dork) -> bool {
        let query = dork.query().to_lowercase();
        self.exclude_patterns
            .iter()
            .any(|pattern| query.contains(&pattern.to_lowercase()))
    }
}
