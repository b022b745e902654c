//! Detailed query diagnostics.
//!
//! Where [`validate_query`](super::validation::validate_query) stops at the
//! first problem, [`diagnose_query`] reports every issue it can find,
//! including non-fatal warnings such as unrecognized operators.
//!
//! ```
//! use dorkforge_domain::query::diagnostics::{diagnose_query, Severity};
//! use dorkforge_domain::query::{CompatibilityRules, OperatorLexicon};
//!
//! let issues = diagnose_query(
//!     "site: example.com badop:x",
//!     &OperatorLexicon::default(),
//!     &CompatibilityRules::default(),
//! );
//! assert!(issues.iter().any(|i| i.severity == Severity::Error));
//! assert!(issues.iter().any(|i| i.severity == Severity::Warning));
//! ```

use super::lexicon::OperatorLexicon;
use super::rule::{CompatibilityRules, RuleViolation};
use super::token::OperatorSet;
use super::validation::{has_unmatched_quotes, operator_colons, spaced_operators};
use serde::Serialize;

/// Severity level of a query issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The query is malformed or self-contradictory.
    Error,
    /// The query works but may not behave as expected.
    Warning,
}

/// Identifies a specific query issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QueryIssueCode {
    InvalidSpacing { operator: String },
    UnmatchedQuotes,
    EmptyValue { operator: String },
    UnknownOperator { operator: String },
    IncompatibleOperators { first: String, second: String },
    MultipleExclusive { operators: Vec<String> },
}

/// A detected issue in a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryIssue {
    pub severity: Severity,
    pub code: QueryIssueCode,
    pub message: String,
}

impl QueryIssue {
    fn error(code: QueryIssueCode, message: String) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message,
        }
    }

    fn warning(code: QueryIssueCode, message: String) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Report every syntax and compatibility issue in `query`.
pub fn diagnose_query(
    query: &str,
    lexicon: &OperatorLexicon,
    rules: &CompatibilityRules,
) -> Vec<QueryIssue> {
    let mut issues = Vec::new();

    for operator in spaced_operators(query) {
        issues.push(QueryIssue::error(
            QueryIssueCode::InvalidSpacing {
                operator: operator.clone(),
            },
            format!(
                "Invalid spacing after operator \"{}\" (use {}:value)",
                operator, operator
            ),
        ));
    }

    if has_unmatched_quotes(query) {
        issues.push(QueryIssue::error(
            QueryIssueCode::UnmatchedQuotes,
            "Unmatched quotes".to_string(),
        ));
    }

    for operator in empty_value_operators(query) {
        issues.push(QueryIssue::error(
            QueryIssueCode::EmptyValue {
                operator: operator.clone(),
            },
            format!("Empty value for operator \"{}\"", operator),
        ));
    }

    for (operator, _) in operator_colons(query) {
        if !lexicon.is_recognized(operator) {
            issues.push(QueryIssue::warning(
                QueryIssueCode::UnknownOperator {
                    operator: operator.to_string(),
                },
                format!("Unknown operator: {}", operator),
            ));
        }
    }

    let operators = OperatorSet::parse(query);
    for violation in rules.violations(&operators) {
        let message = violation.to_string();
        let code = match violation {
            RuleViolation::Conflict { first, second } => {
                QueryIssueCode::IncompatibleOperators { first, second }
            }
            RuleViolation::RepeatedPrefix { operators, .. } => {
                QueryIssueCode::MultipleExclusive { operators }
            }
        };
        issues.push(QueryIssue::error(code, message));
    }

    issues
}

/// Operators whose colon is followed by nothing, or only by a bare
/// `OR`/`AND` keyword.
fn empty_value_operators(query: &str) -> Vec<String> {
    operator_colons(query)
        .filter(|(_, colon)| {
            let rest = query[colon + 1..].trim_start();
            let next_word = rest.split_whitespace().next();
            rest.is_empty() || matches!(next_word, Some("OR") | Some("AND"))
        })
        .map(|(name, _)| name.to_string())
        .collect()
}
