//! Dork query language
//!
//! Tokenizing, validating, explaining and diagnosing `operator:value`
//! search queries.
//!
//! # Pipeline
//!
//! ```text
//! raw text ──▶ tokenize ──▶ OperatorSet ──▶ CompatibilityRules ──▶ ValidationResult
//!                  │
//!                  └──────▶ explain / diagnose / permute
//! ```

pub mod diagnostics;
pub mod engine;
pub mod explain;
pub mod lexicon;
pub mod rule;
pub mod sanitize;
pub mod token;
pub mod validation;

pub use diagnostics::{QueryIssue, QueryIssueCode, Severity, diagnose_query};
pub use engine::QueryEngine;
pub use explain::explain_query;
pub use lexicon::OperatorLexicon;
pub use rule::{CompatibilityRule, CompatibilityRules, RuleViolation};
pub use sanitize::{AuditReport, audit_generated_query, sanitize_generated_query};
pub use token::{OperatorSet, OperatorToken, tokenize};
pub use validation::{ValidationResult, validate_query};
