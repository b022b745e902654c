//! Operator tokenizer
//!
//! Scans raw query text for `name:value` pairs. A value is either a
//! double-quoted run (closed on the same line) or a maximal run of
//! non-whitespace characters. The tokenizer never fails: text that does not
//! form an operator pair is skipped.
//!
//! ```
//! use dorkforge_domain::query::token::tokenize;
//!
//! let tokens = tokenize(r#"site:example.com intext:"index of""#);
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].operator, "site");
//! assert_eq!(tokens[1].value, "index of");
//! ```

use crate::core::string::is_word_char;
use std::ops::Range;

/// A single `name:value` occurrence in a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorToken {
    /// Operator name, lower-cased
    pub operator: String,
    /// Value with surrounding double quotes stripped
    pub value: String,
    /// Whether the value was written as a closed quoted run
    pub quoted: bool,
    /// Whether the pair is excluded with a leading `-`
    pub negated: bool,
    /// Byte range of the operator name in the source text
    pub name_span: Range<usize>,
    /// Byte range of the raw value (quotes included) in the source text
    pub value_span: Range<usize>,
}

impl OperatorToken {
    /// Byte range of the whole `name:value` pair
    pub fn span(&self) -> Range<usize> {
        self.name_span.start..self.value_span.end
    }

    /// Byte range of the whole term, leading `-` included
    pub fn term_span(&self) -> Range<usize> {
        let start = self.name_span.start - usize::from(self.negated);
        start..self.value_span.end
    }

    /// The operator name exactly as written in `source`
    pub fn raw_operator<'a>(&self, source: &'a str) -> &'a str {
        &source[self.name_span.clone()]
    }

    /// The raw value text (quotes included) as written in `source`
    pub fn raw_value<'a>(&self, source: &'a str) -> &'a str {
        &source[self.value_span.clone()]
    }
}

/// Extract every operator token from `query`, in source order.
pub fn tokenize(query: &str) -> Vec<OperatorToken> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while let Some(c) = query[pos..].chars().next() {
        if !is_word_char(c) {
            pos += c.len_utf8();
            continue;
        }

        let name_start = pos;
        let name_end = query[pos..]
            .char_indices()
            .find(|(_, ch)| !is_word_char(*ch))
            .map(|(idx, _)| pos + idx)
            .unwrap_or(query.len());

        if query[name_end..].starts_with(':')
            && let Some((value_end, quoted)) = scan_value(query, name_end + 1)
        {
            let value_start = name_end + 1;
            tokens.push(OperatorToken {
                operator: query[name_start..name_end].to_lowercase(),
                value: query[value_start..value_end].trim_matches('"').to_string(),
                quoted,
                negated: query[..name_start].ends_with('-'),
                name_span: name_start..name_end,
                value_span: value_start..value_end,
            });
            pos = value_end;
            continue;
        }

        pos = name_end;
    }

    tokens
}

/// Find the end of the value starting at `start`.
///
/// Returns `None` when no value follows the colon.
fn scan_value(query: &str, start: usize) -> Option<(usize, bool)> {
    let rest = &query[start..];

    if let Some(after_quote) = rest.strip_prefix('"')
        && let Some(close) = after_quote.find(['"', '\n'])
        && after_quote[close..].starts_with('"')
    {
        return Some((start + 1 + close + 1, true));
    }

    let len = rest
        .char_indices()
        .find(|(_, ch)| ch.is_whitespace())
        .map(|(idx, _)| idx)
        .unwrap_or(rest.len());

    (len > 0).then_some((start + len, false))
}

/// Operators of a query collapsed by name.
///
/// Names keep the position of their first occurrence while a later
/// occurrence overwrites the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperatorSet {
    entries: Vec<(String, String)>,
}

impl OperatorSet {
    /// Tokenize `query` and collapse the tokens
    pub fn parse(query: &str) -> Self {
        Self::from_tokens(&tokenize(query))
    }

    pub fn from_tokens(tokens: &[OperatorToken]) -> Self {
        let mut set = Self::default();
        for token in tokens {
            set.insert(&token.operator, &token.value);
        }
        set
    }

    fn insert(&mut self, operator: &str, value: &str) {
        match self.entries.iter_mut().find(|(name, _)| name == operator) {
            Some(entry) => entry.1 = value.to_string(),
            None => self
                .entries
                .push((operator.to_string(), value.to_string())),
        }
    }

    /// Value of an operator (lookup is case-insensitive)
    pub fn get(&self, operator: &str) -> Option<&str> {
        let operator = operator.to_lowercase();
        self.entries
            .iter()
            .find(|(name, _)| *name == operator)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, operator: &str) -> bool {
        self.get(operator).is_some()
    }

    /// `(name, value)` pairs in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
