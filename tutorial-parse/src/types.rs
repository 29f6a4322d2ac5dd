use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Parsed `key: value` block. Keys are lowercased, keys and values trimmed.
pub type KeyValues = BTreeMap<String, String>;

/// A parsed tutorial: front matter plus its steps in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Key/value pairs between the two `---` lines.
    pub front_matter: KeyValues,
    /// Steps numbered `1..=steps.len()`.
    pub steps: Vec<Step>,
}

impl Document {
    /// The `title` front matter entry, if present.
    pub fn title(&self) -> Option<&str> {
        self.front_matter.get("title").map(String::as_str)
    }

    /// Look up a step by its 1-based number.
    pub fn step(&self, number: usize) -> Option<&Step> {
        number.checked_sub(1).and_then(|idx| self.steps.get(idx))
    }

    /// Pretty-printed JSON form of the document.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// One `///`-delimited unit of a tutorial.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub number: usize,
    #[serde(default)]
    pub params: KeyValues,
    /// Raw markdown body, newlines preserved.
    pub body: String,
    /// HTML produced from `body` by the markup renderer.
    pub rendered_body: String,
}

impl Step {
    pub(crate) fn new(number: usize) -> Self {
        Step {
            number,
            ..Default::default()
        }
    }

    /// Look up a parameter. Keys are stored lowercase, so any casing matches.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(&key.to_lowercase()).map(String::as_str)
    }
}
