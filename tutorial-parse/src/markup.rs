//! Markdown to HTML conversion for step bodies.

use pulldown_cmark::{Options, Parser, html};
use serde::{Deserialize, Serialize};

/// Converts a step's markup body into HTML.
///
/// Implemented for any `Fn(&str) -> String`, so a closure can stand in for
/// the default [`CommonMark`] renderer.
pub trait MarkupRenderer {
    fn render(&self, text: &str) -> String;
}

impl<F> MarkupRenderer for F
where
    F: Fn(&str) -> String,
{
    fn render(&self, text: &str) -> String {
        self(text)
    }
}

/// Markdown extensions to enable. Deserialized from the `markdown` section
/// of `tutorialize.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarkdownOptions {
    pub tables: bool,
    pub strikethrough: bool,
    pub tasklists: bool,
    pub footnotes: bool,
    pub smart_punctuation: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            tasklists: true,
            footnotes: false,
            smart_punctuation: false,
        }
    }
}

impl MarkdownOptions {
    fn to_cmark(self) -> Options {
        let mut options = Options::empty();
        options.set(Options::ENABLE_TABLES, self.tables);
        options.set(Options::ENABLE_STRIKETHROUGH, self.strikethrough);
        options.set(Options::ENABLE_TASKLISTS, self.tasklists);
        options.set(Options::ENABLE_FOOTNOTES, self.footnotes);
        options.set(Options::ENABLE_SMART_PUNCTUATION, self.smart_punctuation);
        options
    }
}

/// CommonMark renderer backed by pulldown-cmark.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonMark {
    options: MarkdownOptions,
}

impl CommonMark {
    pub fn new(options: MarkdownOptions) -> Self {
        Self { options }
    }
}

impl MarkupRenderer for CommonMark {
    fn render(&self, text: &str) -> String {
        let parser = Parser::new_ext(text, self.options.to_cmark());
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);
        html_output
    }
}
