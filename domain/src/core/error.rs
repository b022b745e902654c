//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Engine operations never fail; these only surface when building
/// domain values or configuration tables from caller-supplied data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Dork query cannot be empty")]
    EmptyQuery,

    #[error("Invalid family '{family}': {reason}")]
    InvalidFamily { family: String, reason: String },

    #[error("Unknown search engine: {0}")]
    UnknownEngine(String),

    #[error("Invalid filter criterion: {0}")]
    InvalidCriterion(String),
}

impl DomainError {
    pub(crate) fn invalid_family(family: impl Into<String>, reason: impl Into<String>) -> Self {
        DomainError::InvalidFamily {
            family: family.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_display() {
        assert_eq!(DomainError::EmptyQuery.to_string(), "Dork query cannot be empty");
    }

    #[test]
    fn test_invalid_family_display() {
        let error = DomainError::invalid_family("php", "no members");
        assert_eq!(error.to_string(), "Invalid family 'php': no members");
    }
}
