//! Query permutation
//!
//! Expands one query into a sorted set of related variants using four
//! independent rewrites:
//!
//! - domain widening on the first `site:` token
//! - path generalization on `inurl:`/`intitle:` values with nested paths
//! - extension-family alternation on `ext:`/`filetype:`
//! - keyword-family alternation on `inurl:`/`intitle:`/`intext:`
//!
//! Rewrites only touch the byte span of the token they target, so other
//! occurrences of the same text elsewhere in the query are left alone.

use super::family::PermutationFamilies;
use crate::query::token::{OperatorToken, tokenize};
use std::collections::BTreeSet;
use std::ops::Range;

const PATH_OPERATORS: &[&str] = &["inurl", "intitle"];
const EXTENSION_OPERATORS: &[&str] = &["ext", "filetype"];
const KEYWORD_OPERATORS: &[&str] = &["inurl", "intitle", "intext"];

/// Generates query variations from injected family tables
#[derive(Debug, Clone, Default)]
pub struct Permutator {
    families: PermutationFamilies,
}

impl Permutator {
    pub fn new(families: PermutationFamilies) -> Self {
        Self { families }
    }

    pub fn families(&self) -> &PermutationFamilies {
        &self.families
    }

    /// All variations of `query`, sorted ascending and deduplicated.
    ///
    /// The original query is always part of the result. Text without any
    /// applicable operator yields just the original.
    pub fn variations(&self, query: &str) -> Vec<String> {
        let tokens = tokenize(query);

        let mut variants = BTreeSet::new();
        variants.insert(query.to_string());
        self.widen_domain(query, &tokens, &mut variants);
        self.generalize_paths(query, &tokens, &mut variants);
        self.expand_extensions(query, &tokens, &mut variants);
        self.expand_keywords(query, &tokens, &mut variants);

        variants.into_iter().collect()
    }

    fn widen_domain(&self, query: &str, tokens: &[OperatorToken], out: &mut BTreeSet<String>) {
        let Some(site) = tokens.iter().find(|t| t.operator == "site") else {
            return;
        };

        let raw = site.raw_value(query);
        let (already_wild, rest) = match raw.strip_prefix("*.") {
            Some(rest) => (true, rest),
            None => (false, raw),
        };
        let host_len = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '.'))
            .unwrap_or(rest.len());
        let host = &rest[..host_len];
        if host.is_empty() {
            return;
        }

        if !already_wild {
            let start = site.value_span.start;
            out.insert(splice(query, start..start + host_len, &format!("*.{}", host)));
        }
        out.insert(format!("{} -site:www.{}", query, host));
    }

    fn generalize_paths(&self, query: &str, tokens: &[OperatorToken], out: &mut BTreeSet<String>) {
        for token in tokens_for(tokens, PATH_OPERATORS) {
            let raw = token.raw_value(query);
            if !is_plain_value(raw, true) || raw.matches('/').count() < 2 {
                continue;
            }

            let segments: Vec<&str> = raw.trim_matches('/').split('/').collect();
            if segments.len() < 2 {
                continue;
            }
            let parent = segments[..segments.len() - 1].join("/");
            out.insert(splice(query, token.value_span.clone(), &format!("/{}", parent)));
        }
    }

    fn expand_extensions(&self, query: &str, tokens: &[OperatorToken], out: &mut BTreeSet<String>) {
        for token in tokens_for(tokens, EXTENSION_OPERATORS) {
            let raw = token.raw_value(query);
            if !is_plain_value(raw, false) {
                continue;
            }

            let related = self.families.extensions.related(&raw.to_lowercase());
            if related.len() > 1 {
                let group = format!("ext:({})", related.join("|"));
                out.insert(splice(query, token.span(), &group));
            }
        }
    }

    fn expand_keywords(&self, query: &str, tokens: &[OperatorToken], out: &mut BTreeSet<String>) {
        for token in tokens_for(tokens, KEYWORD_OPERATORS) {
            let raw = token.raw_value(query);
            if !is_plain_value(raw, true) {
                continue;
            }

            let lowered = raw.to_lowercase();
            let leading = lowered.starts_with('/');
            let trimmed = lowered.strip_prefix('/').unwrap_or(&lowered);
            let trailing = trimmed.ends_with('/');
            let keyword = trimmed.strip_suffix('/').unwrap_or(trimmed);

            let related = self.families.keywords.related(keyword);
            if related.len() <= 1 {
                continue;
            }

            let members: Vec<String> = related
                .into_iter()
                .map(|member| rewrap(member, leading, trailing))
                .collect();
            let group = format!("{}:({})", token.raw_operator(query), members.join("|"));
            out.insert(splice(query, token.span(), &group));
        }
    }
}

fn tokens_for<'a>(
    tokens: &'a [OperatorToken],
    operators: &'a [&'a str],
) -> impl Iterator<Item = &'a OperatorToken> {
    tokens
        .iter()
        .filter(move |t| operators.contains(&t.operator.as_str()))
}

/// Whether a raw value is a bare word that can be swapped for a group.
///
/// Quoted or already-grouped values are left alone.
fn is_plain_value(raw: &str, allow_slash: bool) -> bool {
    !raw.is_empty()
        && raw.chars().all(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_') || (allow_slash && c == '/')
        })
}

fn rewrap(mut member: String, leading: bool, trailing: bool) -> String {
    if leading && !member.starts_with('/') {
        member.insert(0, '/');
    }
    if trailing && !member.ends_with('/') {
        member.push('/');
    }
    member
}

fn splice(query: &str, span: Range<usize>, replacement: &str) -> String {
    let mut out = String::with_capacity(query.len() + replacement.len());
    out.push_str(&query[..span.start]);
    out.push_str(replacement);
    out.push_str(&query[span.end..]);
    out
}
