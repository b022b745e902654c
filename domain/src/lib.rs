//! Domain layer for dorkforge
//!
//! This crate contains the dork query engine. It has no dependencies on
//! infrastructure or presentation concerns, performs no I/O and never logs.
//!
//! # Core Concepts
//!
//! ## Queries
//!
//! A dork is a search query built from `operator:value` directives such as
//! `site:example.com` or `intext:"index of"`.
//!
//! - **Validation**: syntax and operator-compatibility checks
//! - **Explanation**: a plain-language description of each operator
//! - **Permutation**: related variants driven by extension and keyword families
//!
//! ## Templates
//!
//! Categories hold parametrized patterns (`site:{domain} inurl:login`) that
//! expand into concrete [`Dork`]s. Templates with unresolved placeholders
//! are skipped silently.

pub mod combine;
pub mod config;
pub mod core;
pub mod permutation;
pub mod query;
pub mod template;
pub mod translate;

// Re-export commonly used types
pub use combine::{QueryCombiner, concat_queries};
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use permutation::{Family, FamilyMap, PermutationFamilies, Permutator};
pub use query::{
    AuditReport, CompatibilityRule, CompatibilityRules, OperatorLexicon, OperatorSet,
    OperatorToken, QueryEngine, QueryIssue, QueryIssueCode, RuleViolation, Severity,
    ValidationResult,
};
pub use template::{
    Category, CategoryDetail, CategorySummary, DESCRIPTION_CONTAINS, Dork, FilterCriterion,
    FilterDef, FilterOption, GenerationRefinements, Template, TemplateCatalog, TemplateMatch,
    filter_dorks,
};
pub use translate::SearchEngine;
