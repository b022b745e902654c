//! Template store errors

use dorkforge_application::TemplateSourceError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateStoreError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {location}: {source}")]
    Json {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid TOML in {location}: {source}")]
    Toml {
        location: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid YAML in {location}: {source}")]
    Yaml {
        location: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid template schema in {location}: {reason}")]
    Schema { location: String, reason: String },

    #[error("Template path not found: {0}")]
    NotFound(PathBuf),
}

impl TemplateStoreError {
    pub(crate) fn schema(location: impl Into<String>, reason: impl Into<String>) -> Self {
        TemplateStoreError::Schema {
            location: location.into(),
            reason: reason.into(),
        }
    }
}

impl From<TemplateStoreError> for TemplateSourceError {
    fn from(error: TemplateStoreError) -> Self {
        match error {
            TemplateStoreError::Io { .. } | TemplateStoreError::NotFound(_) => {
                TemplateSourceError::Unavailable(error.to_string())
            }
            TemplateStoreError::Json { ref location, .. }
            | TemplateStoreError::Toml { ref location, .. }
            | TemplateStoreError::Yaml { ref location, .. }
            | TemplateStoreError::Schema { ref location, .. } => {
                TemplateSourceError::InvalidData {
                    location: location.clone(),
                    reason: error.to_string(),
                }
            }
        }
    }
}
