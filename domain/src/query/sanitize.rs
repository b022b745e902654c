//! Post-processing for externally generated query text.
//!
//! Language models tend to wrap queries in markdown, prefix them with a
//! label, or put a space after operator colons. These helpers clean that
//! text up and audit the result. They never contact a model themselves.

use super::diagnostics::diagnose_query;
use super::lexicon::OperatorLexicon;
use super::rule::CompatibilityRules;
use serde::Serialize;

const LABEL_PREFIXES: &[&str] = &["Dork:", "Query:", "Google Dork:", "Search:"];

/// Clean raw model output into a single query string.
///
/// ```
/// use dorkforge_domain::query::sanitize::sanitize_generated_query;
///
/// assert_eq!(sanitize_generated_query("```site: example.com```"), "site:example.com");
/// assert_eq!(sanitize_generated_query("Dork: `inurl:admin`"), "inurl:admin");
/// ```
pub fn sanitize_generated_query(raw: &str) -> String {
    let text = raw.replace("```", "").replace('`', "");
    let text = text.trim();
    let text = LABEL_PREFIXES
        .iter()
        .find_map(|prefix| text.strip_prefix(prefix))
        .map_or(text, str::trim);

    collapse_operator_spacing(text).trim().to_string()
}

/// Rewrite `word:<whitespace>value` as `word:value`.
fn collapse_operator_spacing(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.char_indices().peekable();
    let mut prev: Option<char> = None;

    while let Some((_, c)) = chars.next() {
        out.push(c);
        if c == ':' && prev.is_some_and(crate::core::string::is_word_char) {
            while chars.peek().is_some_and(|(_, next)| next.is_whitespace()) {
                chars.next();
            }
        }
        prev = Some(c);
    }

    out
}

/// Result of auditing generated query text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub valid: bool,
    pub issues: Vec<String>,
}

/// Audit generated text: any issue at all, warnings included, fails it.
///
/// Unknown operators are treated as invented syntax here.
pub fn audit_generated_query(
    query: &str,
    lexicon: &OperatorLexicon,
    rules: &CompatibilityRules,
) -> AuditReport {
    let issues: Vec<String> = diagnose_query(query, lexicon, rules)
        .into_iter()
        .map(|issue| issue.message)
        .collect();

    AuditReport {
        valid: issues.is_empty(),
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_markdown_and_label() {
        assert_eq!(
            sanitize_generated_query("  Query: ```site:a.com filetype:pdf```  "),
            "site:a.com filetype:pdf"
        );
        assert_eq!(
            sanitize_generated_query("Google Dork: intitle:\"index of\""),
            "intitle:\"index of\""
        );
    }

    #[test]
    fn test_sanitize_strips_only_one_label() {
        assert_eq!(sanitize_generated_query("Dork: Query: x"), "Query:x");
    }

    #[test]
    fn test_sanitize_collapses_spacing() {
        assert_eq!(
            sanitize_generated_query("site:  a.com intext: \"x\""),
            "site:a.com intext:\"x\""
        );
    }

    #[test]
    fn test_sanitize_keeps_clean_query() {
        assert_eq!(sanitize_generated_query("inurl:login"), "inurl:login");
    }

    #[test]
    fn test_audit_flags_invented_operator() {
        let report = audit_generated_query(
            "site:a.com secretop:x",
            &OperatorLexicon::default(),
            &CompatibilityRules::default(),
        );
        assert!(!report.valid);
        assert_eq!(report.issues, vec!["Unknown operator: secretop".to_string()]);
    }

    #[test]
    fn test_audit_passes_clean_query() {
        let report = audit_generated_query(
            "site:a.com ext:sql",
            &OperatorLexicon::default(),
            &CompatibilityRules::default(),
        );
        assert!(report.valid);
        assert!(report.issues.is_empty());
    }
}
