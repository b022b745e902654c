//! Output formatting for command results

pub mod console;
pub mod formatter;
pub mod json;

use dorkforge_domain::OutputFormat;
use formatter::OutputFormatter;

/// Pick the formatter for an output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(console::ConsoleFormatter),
        OutputFormat::Json => Box::new(json::JsonFormatter),
    }
}
