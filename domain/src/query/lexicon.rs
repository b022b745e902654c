//! Operator lexicon
//!
//! The set of operator names the engine recognizes. Unknown operators are
//! still tokenized and explained; the lexicon only drives diagnostics.

use serde::{Deserialize, Serialize};

/// Operators understood by the major search engines
pub const DEFAULT_OPERATORS: &[&str] = &[
    "site",
    "filetype",
    "ext",
    "intext",
    "allintext",
    "inurl",
    "allinurl",
    "intitle",
    "allintitle",
    "link",
    "cache",
    "related",
    "info",
];

/// Immutable set of recognized operator names (always lower case)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorLexicon {
    operators: Vec<String>,
}

impl OperatorLexicon {
    /// Build a lexicon from a custom list of names
    pub fn new<I, S>(operators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: Vec<String> = Vec::new();
        for op in operators {
            let op = op.as_ref().trim().to_lowercase();
            if !op.is_empty() && !names.contains(&op) {
                names.push(op);
            }
        }
        Self { operators: names }
    }

    /// Whether `operator` is recognized (case-insensitive)
    pub fn is_recognized(&self, operator: &str) -> bool {
        let operator = operator.to_lowercase();
        self.operators.iter().any(|op| *op == operator)
    }

    pub fn operators(&self) -> &[String] {
        &self.operators
    }
}

impl Default for OperatorLexicon {
    fn default() -> Self {
        Self::new(DEFAULT_OPERATORS)
    }
}
