//! Output configuration from TOML (`[output]` section)

use dorkforge_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Console format; `None` means text unless `--json` is given
    pub format: Option<OutputFormat>,
    /// Colored terminal output
    pub color: bool,
    /// Per-category progress lines on stderr during batch generation
    pub progress: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            progress: true,
        }
    }
}

impl FileOutputConfig {
    /// Effective format, with the command-line JSON switch taking precedence
    pub fn resolve_format(&self, json_flag: bool) -> OutputFormat {
        if json_flag {
            OutputFormat::Json
        } else {
            self.format.unwrap_or_default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_section() {
        let toml_str = r#"
[output]
format = "json"
color = false
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(config.output.progress);
    }

    #[test]
    fn test_resolve_format() {
        let config = FileOutputConfig::default();
        assert_eq!(config.resolve_format(false), OutputFormat::Text);
        assert_eq!(config.resolve_format(true), OutputFormat::Json);
    }
}
