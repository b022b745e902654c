//! String utilities for the domain layer.

/// Whether `c` counts as part of an operator word (letters, digits, `_`).
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Start byte of the run of word characters that ends at byte `end`.
///
/// Returns `None` when the character right before `end` is not a word character.
pub fn word_start_before(text: &str, end: usize) -> Option<usize> {
    let mut start = end;
    for (idx, c) in text[..end].char_indices().rev() {
        if !is_word_char(c) {
            break;
        }
        start = idx;
    }
    (start < end).then_some(start)
}

/// Case-insensitive substring test
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Turn an identifier like `api_endpoints` into `Api Endpoints`.
///
/// Each underscore-separated word gets an upper-case first letter and a
/// lower-cased remainder.
pub fn humanize_identifier(id: &str) -> String {
    id.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let mut out: String = first.to_uppercase().collect();
                    out.push_str(&chars.as_str().to_lowercase());
                    out
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
