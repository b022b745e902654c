//! Search engine dialects
//!
//! Queries are written in Google syntax. Other engines name some operators
//! differently; [`SearchEngine::translate`] rewrites operator names and
//! leaves everything else untouched.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target search engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    #[default]
    Google,
    Bing,
    DuckDuckGo,
    Yahoo,
    Yandex,
    Baidu,
}

impl SearchEngine {
    pub const ALL: [SearchEngine; 6] = [
        SearchEngine::Google,
        SearchEngine::Bing,
        SearchEngine::DuckDuckGo,
        SearchEngine::Yahoo,
        SearchEngine::Yandex,
        SearchEngine::Baidu,
    ];

    /// Lower-case identifier used in configuration and on the command line
    pub fn id(&self) -> &'static str {
        match self {
            SearchEngine::Google => "google",
            SearchEngine::Bing => "bing",
            SearchEngine::DuckDuckGo => "duckduckgo",
            SearchEngine::Yahoo => "yahoo",
            SearchEngine::Yandex => "yandex",
            SearchEngine::Baidu => "baidu",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SearchEngine::Google => "Google",
            SearchEngine::Bing => "Bing",
            SearchEngine::DuckDuckGo => "DuckDuckGo",
            SearchEngine::Yahoo => "Yahoo",
            SearchEngine::Yandex => "Yandex",
            SearchEngine::Baidu => "Baidu",
        }
    }

    /// This engine's name for a Google operator, if it differs or is known
    fn operator_name(&self, operator: &str) -> Option<&'static str> {
        use SearchEngine::*;

        let name = match (operator, *self) {
            (_, Google) => return None,
            ("filetype", Yandex) | ("ext", Yandex) => "mime",
            ("filetype", _) => "filetype",
            ("ext", Bing | Yahoo | Baidu) => "filetype",
            ("ext", DuckDuckGo) => "ext",
            ("inurl" | "allinurl", Bing) => "instreamset:url",
            ("inurl" | "allinurl", _) => "inurl",
            ("intitle" | "allintitle", Yandex) => "title",
            ("intitle" | "allintitle", _) => "intitle",
            ("intext", Bing | Baidu) => "inbody",
            ("intext", _) => "intext",
            ("site", _) => "site",
            _ => return None,
        };
        Some(name)
    }

    /// Rewrite the operator names of `query` for this engine.
    ///
    /// Only ASCII-letter operator names at the start of the text or after
    /// whitespace or `(` are considered. Google is the identity.
    ///
    /// ```
    /// use dorkforge_domain::SearchEngine;
    ///
    /// assert_eq!(
    ///     SearchEngine::Bing.translate("site:a.com intext:secret -inurl:http"),
    ///     "site:a.com inbody:secret -inurl:http"
    /// );
    /// assert_eq!(SearchEngine::Yandex.translate("(ext:pdf)"), "(mime:pdf)");
    /// ```
    pub fn translate(&self, query: &str) -> String {
        if *self == SearchEngine::Google {
            return query.to_string();
        }

        let mut out = String::with_capacity(query.len());
        let mut last = 0;
        let mut prev: Option<char> = None;
        let mut skip_to = 0;

        for (idx, c) in query.char_indices() {
            let at_boundary = prev.is_none_or(|p| p.is_whitespace() || p == '(');
            prev = Some(c);
            if idx < skip_to || !at_boundary || !c.is_ascii_alphabetic() {
                continue;
            }

            let end = query[idx..]
                .find(|ch: char| !ch.is_ascii_alphabetic())
                .map(|len| idx + len)
                .unwrap_or(query.len());
            skip_to = end;

            if !query[end..].starts_with(':') {
                continue;
            }
            if let Some(name) = self.operator_name(&query[idx..end].to_lowercase()) {
                out.push_str(&query[last..idx]);
                out.push_str(name);
                last = end;
            }
        }

        out.push_str(&query[last..]);
        out
    }
}

impl fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for SearchEngine {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        SearchEngine::ALL
            .into_iter()
            .find(|engine| engine.id() == wanted)
            .ok_or_else(|| DomainError::UnknownEngine(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_google_is_identity() {
        let query = "site:a.com ext:php intext:x";
        assert_eq!(SearchEngine::Google.translate(query), query);
    }

    #[test]
    fn test_bing_mapping() {
        assert_eq!(
            SearchEngine::Bing.translate("ext:sql inurl:admin allintitle:x"),
            "filetype:sql instreamset:url:admin intitle:x"
        );
    }

    #[test]
    fn test_yandex_mapping() {
        assert_eq!(
            SearchEngine::Yandex.translate("filetype:pdf intitle:report"),
            "mime:pdf title:report"
        );
    }

    #[test]
    fn test_case_insensitive_operator() {
        assert_eq!(SearchEngine::Baidu.translate("INTEXT:x"), "inbody:x");
    }

    #[test]
    fn test_operator_must_start_token() {
        // preceded by '-' or a letter/digit, so left alone
        assert_eq!(SearchEngine::Bing.translate("-intext:x"), "-intext:x");
        assert_eq!(SearchEngine::Bing.translate("xintext:x"), "xintext:x");
        assert_eq!(SearchEngine::Bing.translate("in_text:x"), "in_text:x");
    }

    #[test]
    fn test_unmapped_operator_unchanged() {
        assert_eq!(SearchEngine::Bing.translate("cache:a.com"), "cache:a.com");
    }

    #[test]
    fn test_grouped_query() {
        assert_eq!(
            SearchEngine::Bing.translate("(intext:a) OR (intext:b)"),
            "(inbody:a) OR (inbody:b)"
        );
    }

    #[test]
    fn test_parse_engine() {
        assert_eq!("DuckDuckGo".parse::<SearchEngine>().unwrap(), SearchEngine::DuckDuckGo);
        assert_eq!(" bing ".parse::<SearchEngine>().unwrap(), SearchEngine::Bing);
        assert!(matches!(
            "altavista".parse::<SearchEngine>(),
            Err(DomainError::UnknownEngine(_))
        ));
        assert_eq!(SearchEngine::DuckDuckGo.to_string(), "DuckDuckGo");
    }
}
