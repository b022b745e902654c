//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application types by
//! [`FileConfig::to_engine_config`].

mod generation;
mod issues;
mod output;
mod permutation;
mod templates;

pub use generation::FileGenerationConfig;
pub use issues::{ConfigIssue, ConfigIssueCode};
pub use output::FileOutputConfig;
pub use permutation::FilePermutationConfig;
pub use templates::FileTemplatesConfig;

use dorkforge_application::EngineConfig;
use dorkforge_domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration that cannot be turned into a working engine
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("invalid permutation family: {0}")]
    InvalidFamily(#[from] DomainError),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Template store location
    pub templates: FileTemplatesConfig,
    /// Extension and keyword families
    pub permutation: FilePermutationConfig,
    /// Generation pipeline settings
    pub generation: FileGenerationConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks:
    /// 1. Template path existence
    /// 2. Permutation families (empty keys, no members, blank members)
    /// 3. Enum parse failures (generation.engine)
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.templates.validate());
        issues.extend(self.permutation.validate());
        issues.extend(self.generation.parse_engine().1);
        issues
    }

    /// Convert into the application's engine configuration.
    ///
    /// Unknown engine names fall back to Google; malformed families fail.
    pub fn to_engine_config(&self) -> Result<EngineConfig, ConfigValidationError> {
        let families = self.permutation.to_families()?;
        let (engine, _) = self.generation.parse_engine();
        Ok(EngineConfig::default()
            .with_families(families)
            .with_search_engine(engine)
            .with_validation(self.generation.validate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dorkforge_domain::{OutputFormat, SearchEngine};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[templates]
path = "./my-templates"

[permutation]
replace_defaults = true

[permutation.extension_families]
pdf = ["pdf", "ps"]

[generation]
engine = "duckduckgo"
validate = false

[output]
format = "json"
color = false
progress = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.templates.path.as_deref(),
            Some(std::path::Path::new("./my-templates"))
        );
        assert!(config.permutation.replace_defaults);
        assert_eq!(config.permutation.extension_families["pdf"], vec!["pdf", "ps"]);
        assert_eq!(config.generation.engine, "duckduckgo");
        assert!(!config.generation.validate);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.progress);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[generation]
engine = "bing"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.generation.parse_engine().0, SearchEngine::Bing);
        // Defaults should apply
        assert!(config.generation.validate);
        assert!(config.templates.path.is_none());
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let toml_str = r#"
[permutation.keyword_families]
broken = []

[generation]
engine = "altavista"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues.iter().filter(|i| i.is_error()).count(), 1);
    }

    #[test]
    fn test_to_engine_config() {
        let toml_str = r#"
[generation]
engine = "yandex"
validate = false
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let engine_config = config.to_engine_config().unwrap();
        assert_eq!(engine_config.search_engine, SearchEngine::Yandex);
        assert!(!engine_config.validate_generated);
    }

    #[test]
    fn test_to_engine_config_rejects_bad_family() {
        let toml_str = r#"
[permutation.extension_families]
"" = ["x"]
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.to_engine_config(),
            Err(ConfigValidationError::InvalidFamily(_))
        ));
    }
}
