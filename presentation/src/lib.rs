//! Presentation layer for dorkforge
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters and exporters for generated dorks.

pub mod cli;
pub mod export;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, ExportFormat, GenerateArgs};
pub use export::{DorkExporter, ExportError, ExportMetadata, exporter_for};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use output::formatter_for;
pub use output::json::JsonFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
