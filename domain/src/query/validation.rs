//! Query validation
//!
//! Validation runs in three passes over the raw text:
//!
//! 1. Syntax: balanced double quotes, no whitespace after an operator colon
//! 2. Tokenization into an [`OperatorSet`]
//! 3. Compatibility rules over the collapsed operator set
//!
//! Failures are reported through [`ValidationResult`], never as errors.

use super::rule::CompatibilityRules;
use super::token::OperatorSet;
use crate::core::string::word_start_before;
use serde::{Deserialize, Serialize};

pub const EMPTY_QUERY_MESSAGE: &str = "Empty query";
pub const SYNTAX_ERROR_MESSAGE: &str = "Invalid operator syntax: check quotes or spacing";

/// Outcome of validating a query
///
/// `error` is `None` exactly when `valid` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(error.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// Validate `query` against the syntax checks and `rules`.
pub fn validate_query(query: &str, rules: &CompatibilityRules) -> ValidationResult {
    if query.trim().is_empty() {
        return ValidationResult::invalid(EMPTY_QUERY_MESSAGE);
    }

    if has_unmatched_quotes(query) || !spaced_operators(query).is_empty() {
        return ValidationResult::invalid(SYNTAX_ERROR_MESSAGE);
    }

    let operators = OperatorSet::parse(query);
    match rules.first_violation(&operators) {
        Some(violation) => ValidationResult::invalid(violation.to_string()),
        None => ValidationResult::ok(),
    }
}

/// Odd number of `"` characters
pub fn has_unmatched_quotes(query: &str) -> bool {
    query.matches('"').count() % 2 != 0
}

/// Names of words directly followed by a colon and whitespace (`site: x`).
pub fn spaced_operators(query: &str) -> Vec<String> {
    operator_colons(query)
        .filter(|(_, colon)| {
            query[colon + 1..]
                .chars()
                .next()
                .is_some_and(char::is_whitespace)
        })
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Every `word:` occurrence as `(word, colon_byte_index)`.
pub(crate) fn operator_colons(query: &str) -> impl Iterator<Item = (&str, usize)> {
    query.match_indices(':').filter_map(move |(colon, _)| {
        word_start_before(query, colon).map(|start| (&query[start..colon], colon))
    })
}
