//! Template expansion
//!
//! Every `{...}` in a pattern is a placeholder whose full content is the
//! parameter name; `{{` and `}}` stand for literal braces. A template with an
//! unbalanced brace, an empty `{}`, or a placeholder not backed by a
//! non-blank parameter is skipped, never reported.

use super::entities::{Category, Dork, Template};
use std::collections::HashMap;

/// A parsed piece of a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece<'a> {
    Text(&'a str),
    Placeholder(&'a str),
}

/// Split `pattern` into text and placeholders.
///
/// Returns `None` for a stray `{` or `}`.
fn parse_pattern(pattern: &str) -> Option<Vec<Piece<'_>>> {
    let mut pieces = Vec::new();
    let mut rest = pattern;

    while let Some(idx) = rest.find(['{', '}']) {
        if idx > 0 {
            pieces.push(Piece::Text(&rest[..idx]));
        }
        let tail = &rest[idx..];

        if let Some(after) = tail.strip_prefix("{{") {
            pieces.push(Piece::Text("{"));
            rest = after;
        } else if let Some(after) = tail.strip_prefix("}}") {
            pieces.push(Piece::Text("}"));
            rest = after;
        } else if tail.starts_with('}') {
            return None;
        } else {
            let close = tail.find('}')?;
            let name = &tail[1..close];
            if name.contains('{') {
                return None;
            }
            pieces.push(Piece::Placeholder(name));
            rest = &tail[close + 1..];
        }
    }
    if !rest.is_empty() {
        pieces.push(Piece::Text(rest));
    }

    Some(pieces)
}

/// Placeholder names of `pattern`, in order, repeats included.
///
/// A malformed pattern has none; it never renders anyway.
pub(crate) fn placeholder_names(pattern: &str) -> Vec<&str> {
    parse_pattern(pattern)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|piece| match piece {
            Piece::Placeholder(name) => Some(name),
            Piece::Text(_) => None,
        })
        .collect()
}

/// Substitute every placeholder of `template`.
///
/// Returns `None` when the pattern is malformed or a placeholder has no
/// non-blank parameter. Values are inserted verbatim and are not re-scanned
/// for placeholders.
pub fn render(template: &Template, params: &HashMap<String, String>) -> Option<String> {
    let pieces = parse_pattern(&template.pattern)?;
    let mut out = String::with_capacity(template.pattern.len());

    for piece in pieces {
        match piece {
            Piece::Text(text) => out.push_str(text),
            Piece::Placeholder(name) => {
                let value = params
                    .get(name)
                    .filter(|v| !name.is_empty() && !v.trim().is_empty())?;
                out.push_str(value);
            }
        }
    }

    Some(out)
}

/// Expand every applicable template of `category`
pub fn generate(category: &Category, params: &HashMap<String, String>) -> Vec<Dork> {
    category
        .templates
        .iter()
        .filter_map(|template| {
            let query = render(template, params)?;
            Dork::new(query, template.description.clone()).ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn login_category() -> Category {
        Category::new("login")
            .with_template(Template::new("site:{domain} inurl:login", "Login pages"))
            .with_template(Template::new("site:{domain} intext:{keyword}", "Keyword pages"))
    }

    #[test]
    fn test_generate_skips_unresolved_templates() {
        let dorks = generate(&login_category(), &params(&[("domain", "x.com")]));
        assert_eq!(dorks.len(), 1);
        assert_eq!(dorks[0].query(), "site:x.com inurl:login");
        assert_eq!(dorks[0].description(), "Login pages");
    }

    #[test]
    fn test_generate_all_when_params_complete() {
        let dorks = generate(
            &login_category(),
            &params(&[("domain", "x.com"), ("keyword", "secret")]),
        );
        assert_eq!(dorks.len(), 2);
        assert_eq!(dorks[1].query(), "site:x.com intext:secret");
    }

    #[test]
    fn test_blank_param_counts_as_missing() {
        let dorks = generate(&login_category(), &params(&[("domain", "  ")]));
        assert!(dorks.is_empty());
    }

    #[test]
    fn test_render_replaces_repeated_placeholder() {
        let template = Template::new("site:{domain} -site:www.{domain}", "");
        assert_eq!(
            render(&template, &params(&[("domain", "a.com")])),
            Some("site:a.com -site:www.a.com".to_string())
        );
    }

    #[test]
    fn test_generate_skips_irregular_placeholders() {
        let category = Category::new("odd")
            .with_template(Template::new("site:{domain-name} inurl:login", ""))
            .with_template(Template::new("site:{ domain } inurl:admin", ""))
            .with_template(Template::new("site:{domain} intext:{}", ""))
            .with_template(Template::new("site:{domain.name}", ""))
            .with_template(Template::new("site:{domain} inurl:ok", ""));
        let dorks = generate(&category, &params(&[("domain", "x.com")]));
        assert_eq!(dorks.len(), 1);
        assert_eq!(dorks[0].query(), "site:x.com inurl:ok");
        assert!(dorks.iter().all(|d| !d.query().contains('{')));
    }

    #[test]
    fn test_render_rejects_stray_braces() {
        let domain = params(&[("domain", "x.com")]);
        assert_eq!(render(&Template::new("site:{domain", ""), &domain), None);
        assert_eq!(render(&Template::new("site:domain}", ""), &domain), None);
        assert_eq!(render(&Template::new("intext:\"{ }\"", ""), &domain), None);
    }

    #[test]
    fn test_render_unescapes_doubled_braces() {
        let template = Template::new("site:{domain} intext:\"{{x}}\"", "");
        assert_eq!(
            render(&template, &params(&[("domain", "a.com")])),
            Some("site:a.com intext:\"{x}\"".to_string())
        );
        assert_eq!(template.placeholders(), vec!["domain"]);
    }

    #[test]
    fn test_render_does_not_rescan_values() {
        let template = Template::new("intext:{keyword}", "");
        assert_eq!(
            render(&template, &params(&[("keyword", "{domain}")])),
            Some("intext:{domain}".to_string())
        );
    }

    #[test]
    fn test_template_without_placeholders() {
        let category = Category::new("generic").with_template(Template::new("intitle:\"index of\"", "Listings"));
        let dorks = generate(&category, &HashMap::new());
        assert_eq!(dorks.len(), 1);
    }
}
