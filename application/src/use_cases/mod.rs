//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod browse_templates;
pub mod generate_dorks;
pub mod inspect_query;
pub mod load_catalog;
