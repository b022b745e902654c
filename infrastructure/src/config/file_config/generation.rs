//! Generation configuration from TOML (`[generation]` section)

use super::issues::{ConfigIssue, ConfigIssueCode};
use dorkforge_domain::{SearchEngine, Severity};
use serde::{Deserialize, Serialize};

/// Raw generation configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Target search engine: "google", "bing", "duckduckgo", "yahoo",
    /// "yandex" or "baidu"
    pub engine: String,
    /// Drop generated dorks that fail validation
    pub validate: bool,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        Self {
            engine: "google".to_string(),
            validate: true,
        }
    }
}

impl FileGenerationConfig {
    /// Parse the engine name, falling back to Google on unknown values
    pub fn parse_engine(&self) -> (SearchEngine, Vec<ConfigIssue>) {
        match self.engine.parse::<SearchEngine>() {
            Ok(engine) => (engine, vec![]),
            Err(_) => {
                let issue = ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "generation.engine".to_string(),
                        value: self.engine.clone(),
                        valid_values: SearchEngine::ALL
                            .iter()
                            .map(|e| e.id().to_string())
                            .collect(),
                    },
                    message: format!(
                        "generation.engine: unknown value '{}', falling back to 'google'",
                        self.engine
                    ),
                };
                (SearchEngine::default(), vec![issue])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_engine() {
        let config = FileGenerationConfig {
            engine: "Bing".to_string(),
            validate: true,
        };
        let (engine, issues) = config.parse_engine();
        assert_eq!(engine, SearchEngine::Bing);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_unknown_engine_falls_back() {
        let config = FileGenerationConfig {
            engine: "altavista".to_string(),
            ..Default::default()
        };
        let (engine, issues) = config.parse_engine();
        assert_eq!(engine, SearchEngine::Google);
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
    }
}
