//! Application-level configuration.
//!
//! - [`EngineConfig`] - query engine families and generation pipeline switches

pub mod engine_config;

pub use engine_config::EngineConfig;
