//! Configuration file loading for dorkforge
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `DORKFORGE_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./dorkforge.toml` or `./.dorkforge.toml`
//! 4. Global: `$XDG_CONFIG_HOME/dorkforge/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, ConfigIssueCode, ConfigValidationError, FileConfig, FileGenerationConfig,
    FileOutputConfig, FilePermutationConfig, FileTemplatesConfig,
};
pub use loader::ConfigLoader;
