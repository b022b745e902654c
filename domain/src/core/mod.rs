//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] - domain-level errors
//! - [`string`] - small text helpers (case-insensitive matching, humanized ids)

pub mod error;
pub mod string;
