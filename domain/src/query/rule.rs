//! Operator compatibility rules
//!
//! Rules are data: pairs of mutually exclusive operators and prefix groups
//! of which only one member may appear in a query.

use super::token::OperatorSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single compatibility rule
///
/// # Example
///
/// ```
/// use dorkforge_domain::query::rule::CompatibilityRule;
/// use dorkforge_domain::query::token::OperatorSet;
///
/// let rule = CompatibilityRule::exclusive("allintext", "intext");
/// let ops = OperatorSet::parse("allintext:a intext:b");
/// assert!(rule.check(&ops).is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityRule {
    /// The two operators may not appear together
    MutuallyExclusive(String, String),
    /// At most one operator starting with this prefix may appear
    SinglePrefix(String),
}

impl CompatibilityRule {
    pub fn exclusive(a: impl Into<String>, b: impl Into<String>) -> Self {
        CompatibilityRule::MutuallyExclusive(a.into(), b.into())
    }

    pub fn single_prefix(prefix: impl Into<String>) -> Self {
        CompatibilityRule::SinglePrefix(prefix.into())
    }

    /// Check the rule against a collapsed operator set
    pub fn check(&self, operators: &OperatorSet) -> Option<RuleViolation> {
        match self {
            CompatibilityRule::MutuallyExclusive(a, b) => (operators.contains(a)
                && operators.contains(b))
            .then(|| RuleViolation::Conflict {
                first: a.clone(),
                second: b.clone(),
            }),
            CompatibilityRule::SinglePrefix(prefix) => {
                let found: Vec<String> = operators
                    .names()
                    .filter(|name| name.starts_with(prefix.as_str()))
                    .map(str::to_string)
                    .collect();
                (found.len() > 1).then(|| RuleViolation::RepeatedPrefix {
                    prefix: prefix.clone(),
                    operators: found,
                })
            }
        }
    }
}

/// A broken compatibility rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    Conflict { first: String, second: String },
    RepeatedPrefix { prefix: String, operators: Vec<String> },
}

impl fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleViolation::Conflict { first, second } => {
                write!(f, "Cannot combine '{}' and '{}'", first, second)
            }
            RuleViolation::RepeatedPrefix { prefix, operators } => write!(
                f,
                "Multiple '{}' operators found: {}. Use only one.",
                prefix,
                operators.join(", ")
            ),
        }
    }
}

/// Ordered rule table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityRules {
    rules: Vec<CompatibilityRule>,
}

impl CompatibilityRules {
    pub fn new(rules: Vec<CompatibilityRule>) -> Self {
        Self { rules }
    }

    /// First violation in table order
    pub fn first_violation(&self, operators: &OperatorSet) -> Option<RuleViolation> {
        self.rules.iter().find_map(|rule| rule.check(operators))
    }

    /// Every violation in table order
    pub fn violations(&self, operators: &OperatorSet) -> Vec<RuleViolation> {
        self.rules
            .iter()
            .filter_map(|rule| rule.check(operators))
            .collect()
    }

    pub fn rules(&self) -> &[CompatibilityRule] {
        &self.rules
    }
}

impl Default for CompatibilityRules {
    fn default() -> Self {
        Self::new(vec![
            CompatibilityRule::exclusive("allintext", "intext"),
            CompatibilityRule::exclusive("allintitle", "intitle"),
            CompatibilityRule::exclusive("allinurl", "inurl"),
            CompatibilityRule::single_prefix("allin"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflicting_pair() {
        let rules = CompatibilityRules::default();
        let ops = OperatorSet::parse("site:a.com allintext:x intext:y");
        let violation = rules.first_violation(&ops).unwrap();
        assert_eq!(violation.to_string(), "Cannot combine 'allintext' and 'intext'");
    }

    #[test]
    fn test_multiple_allin_lists_names() {
        let rules = CompatibilityRules::default();
        let ops = OperatorSet::parse("allintitle:a allinurl:b");
        let violation = rules.first_violation(&ops).unwrap();
        assert_eq!(
            violation,
            RuleViolation::RepeatedPrefix {
                prefix: "allin".to_string(),
                operators: vec!["allintitle".to_string(), "allinurl".to_string()],
            }
        );
        assert_eq!(
            violation.to_string(),
            "Multiple 'allin' operators found: allintitle, allinurl. Use only one."
        );
    }

    #[test]
    fn test_compatible_operators() {
        let rules = CompatibilityRules::default();
        let ops = OperatorSet::parse("site:a.com intitle:x inurl:y intext:z");
        assert!(rules.first_violation(&ops).is_none());
        assert!(rules.violations(&ops).is_empty());
    }

    #[test]
    fn test_all_violations_reported() {
        let rules = CompatibilityRules::default();
        let ops = OperatorSet::parse("allintext:a intext:b allinurl:c inurl:d");
        assert_eq!(rules.violations(&ops).len(), 3);
    }

    #[test]
    fn test_custom_rule_table() {
        let rules = CompatibilityRules::new(vec![CompatibilityRule::exclusive("site", "related")]);
        let ops = OperatorSet::parse("site:a.com related:b.com");
        assert!(rules.first_violation(&ops).is_some());
        let ops = OperatorSet::parse("allintext:a intext:b");
        assert!(rules.first_violation(&ops).is_none());
    }
}
