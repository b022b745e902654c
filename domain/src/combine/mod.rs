//! Combining several dorks into fewer queries

use crate::query::token::{OperatorToken, tokenize};

/// Default limit on whitespace-separated terms per combined query
pub const DEFAULT_MAX_TERMS: usize = 32;
/// Default limit on characters per combined query
pub const DEFAULT_MAX_CHARS: usize = 2048;

/// Join queries as `(q1) OR (q2) ...`.
///
/// Returns `None` for fewer than two queries.
///
/// ```
/// use dorkforge_domain::combine::concat_queries;
///
/// assert_eq!(
///     concat_queries(&["site:a.com", "ext:sql"]),
///     Some("(site:a.com) OR (ext:sql)".to_string())
/// );
/// assert_eq!(concat_queries(&["site:a.com"]), None);
/// ```
pub fn concat_queries<S: AsRef<str>>(queries: &[S]) -> Option<String> {
    if queries.len() < 2 {
        return None;
    }
    Some(
        queries
            .iter()
            .map(|q| format!("({})", q.as_ref()))
            .collect::<Vec<_>>()
            .join(" OR "),
    )
}

/// Packs queries into as few combined queries as the limits allow.
///
/// Terms shared by every query (same operator, value and negation) are
/// pulled out into a common prefix; the remaining parts are OR-ed together
/// in parentheses after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryCombiner {
    max_terms: usize,
    max_chars: usize,
}

impl Default for QueryCombiner {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TERMS, DEFAULT_MAX_CHARS)
    }
}

impl QueryCombiner {
    pub fn new(max_terms: usize, max_chars: usize) -> Self {
        Self {
            max_terms,
            max_chars,
        }
    }

    pub fn combine<S: AsRef<str>>(&self, queries: &[S]) -> Vec<String> {
        if queries.is_empty() {
            return Vec::new();
        }

        let common = common_operators(queries);
        let prefix = common
            .iter()
            .map(SharedTerm::format)
            .collect::<Vec<_>>()
            .join(" ");
        let parts: Vec<String> = queries
            .iter()
            .map(|q| strip_operators(q.as_ref(), &common))
            .collect();

        self.chunk(&prefix, &parts)
    }

    fn chunk(&self, prefix: &str, parts: &[String]) -> Vec<String> {
        let prefix_terms = count_terms(prefix);
        let mut chunks = Vec::new();
        let mut current: Vec<String> = Vec::new();
        let mut terms = prefix_terms;
        let mut chars = prefix.len();

        for part in parts.iter().filter(|p| !p.is_empty()) {
            let group = format!("({})", part);
            // one extra term and four extra characters for " OR "
            let part_terms = count_terms(&group) + 1;
            let part_chars = group.len() + 4;

            if terms + part_terms > self.max_terms || chars + part_chars > self.max_chars {
                if !current.is_empty() {
                    chunks.push(build_query(prefix, &current));
                }
                current = vec![group];
                terms = prefix_terms + part_terms;
                chars = prefix.len() + part_chars;
            } else {
                current.push(group);
                terms += part_terms;
                chars += part_chars;
            }
        }

        if !current.is_empty() {
            chunks.push(build_query(prefix, &current));
        }
        if chunks.is_empty() && !prefix.is_empty() {
            chunks.push(prefix.to_string());
        }
        chunks
    }
}

/// An operator term present in every query
#[derive(Debug, Clone, PartialEq, Eq)]
struct SharedTerm {
    operator: String,
    value: String,
    negated: bool,
}

impl SharedTerm {
    fn matches(&self, token: &OperatorToken) -> bool {
        self.operator == token.operator
            && self.value == token.value
            && self.negated == token.negated
    }

    fn format(&self) -> String {
        let sign = if self.negated { "-" } else { "" };
        if self.value.chars().any(char::is_whitespace) {
            format!("{}{}:\"{}\"", sign, self.operator, self.value)
        } else {
            format!("{}{}:{}", sign, self.operator, self.value)
        }
    }
}

/// Terms found in every query, in the order of the first
fn common_operators<S: AsRef<str>>(queries: &[S]) -> Vec<SharedTerm> {
    let token_lists: Vec<Vec<OperatorToken>> =
        queries.iter().map(|q| tokenize(q.as_ref())).collect();
    let Some((first, rest)) = token_lists.split_first() else {
        return Vec::new();
    };

    let mut common: Vec<SharedTerm> = Vec::new();
    for token in first {
        let term = SharedTerm {
            operator: token.operator.clone(),
            value: token.value.clone(),
            negated: token.negated,
        };
        let shared = rest
            .iter()
            .all(|tokens| tokens.iter().any(|t| term.matches(t)));
        if shared && !common.contains(&term) {
            common.push(term);
        }
    }
    common
}

fn strip_operators(query: &str, common: &[SharedTerm]) -> String {
    let mut out = String::with_capacity(query.len());
    let mut last = 0;

    for token in tokenize(query) {
        if common.iter().any(|term| term.matches(&token)) {
            let span = token.term_span();
            out.push_str(&query[last..span.start]);
            last = span.end;
        }
    }
    out.push_str(&query[last..]);

    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn build_query(prefix: &str, parts: &[String]) -> String {
    let combined = parts.join(" OR ");
    match (prefix.is_empty(), combined.is_empty()) {
        (true, _) => combined,
        (false, true) => prefix.to_string(),
        (false, false) => format!("{} ({})", prefix, combined),
    }
}

fn count_terms(text: &str) -> usize {
    text.split_whitespace().count()
}
