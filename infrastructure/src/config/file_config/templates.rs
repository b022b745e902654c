//! Template store configuration from TOML (`[templates]` section)

use super::issues::{ConfigIssue, ConfigIssueCode};
use dorkforge_domain::Severity;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw template configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTemplatesConfig {
    /// JSON bundle file or directory of category files.
    /// `None` uses the bundled template set.
    pub path: Option<PathBuf>,
}

impl FileTemplatesConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        match &self.path {
            Some(path) if !path.exists() => vec![ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::MissingTemplatePath {
                    path: path.display().to_string(),
                },
                message: format!("templates.path: '{}' does not exist", path.display()),
            }],
            _ => vec![],
        }
    }
}
