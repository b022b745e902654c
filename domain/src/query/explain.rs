//! Plain-language explanation of a query's operators

use super::token::OperatorSet;

pub const EXPLANATION_HEADER: &str = "This dork searches for:";
pub const NO_OPERATORS_MESSAGE: &str = "No specific operators found in query";

/// Explain each distinct operator of `query`, one line per operator.
///
/// Lines follow the first-occurrence order of operator names; a repeated
/// operator shows its last value. Never validates and never fails.
///
/// ```
/// use dorkforge_domain::query::explain::explain_query;
///
/// let text = explain_query("site:example.com filetype:pdf");
/// assert_eq!(
///     text,
///     "This dork searches for:\n- Pages on domain: example.com\n- Files of type: pdf"
/// );
/// ```
pub fn explain_query(query: &str) -> String {
    let operators = OperatorSet::parse(query);

    if operators.is_empty() {
        return NO_OPERATORS_MESSAGE.to_string();
    }

    let mut lines = vec![EXPLANATION_HEADER.to_string()];
    lines.extend(
        operators
            .iter()
            .map(|(op, value)| format!("- {}", describe_operator(op, value))),
    );
    lines.join("\n")
}

/// Describe a single operator/value pair
pub fn describe_operator(operator: &str, value: &str) -> String {
    match operator {
        "site" => format!("Pages on domain: {}", value),
        "filetype" | "ext" => format!("Files of type: {}", value),
        "intext" => format!("Text containing: {}", value),
        "allintext" => format!("Text containing all: {}", value),
        "intitle" => format!("Title containing: {}", value),
        "allintitle" => format!("Title containing all: {}", value),
        "inurl" => format!("URL containing: {}", value),
        "allinurl" => format!("URL containing all: {}", value),
        other => format!("`{}`: {}", other, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_operators() {
        assert_eq!(explain_query("just words"), NO_OPERATORS_MESSAGE);
        assert_eq!(explain_query(""), NO_OPERATORS_MESSAGE);
    }

    #[test]
    fn test_first_occurrence_order_last_value() {
        let text = explain_query("inurl:admin site:a.com inurl:login");
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "- URL containing: login");
        assert_eq!(lines[2], "- Pages on domain: a.com");
    }

    #[test]
    fn test_quoted_and_unknown_operators() {
        let text = explain_query(r#"allintitle:"admin panel" link:a.com"#);
        assert!(text.contains("- Title containing all: admin panel"));
        assert!(text.contains("- `link`: a.com"));
    }

    #[test]
    fn test_invalid_input_does_not_fail() {
        let text = explain_query(r#"site: a.com intext:"unclosed"#);
        assert!(text.contains("Text containing: unclosed"));
    }
}
