//! Configuration issues reported by [`FileConfig::validate`](super::FileConfig::validate)

use dorkforge_domain::Severity;

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A string field holds a value outside its accepted set.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// A permutation family is malformed and cannot be used.
    InvalidFamily {
        field: String,
        family: String,
        reason: String,
    },
    /// The configured template path does not exist.
    MissingTemplatePath { path: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
