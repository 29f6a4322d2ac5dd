//! `tutorial-parse`: parser for step-delimited tutorial documents.
//!
//! A tutorial is a `---` front matter block of `key: value` lines followed by
//! steps. Each step opens with a `///` line, may carry `key: value` parameters
//! closed by another `///` line, and continues with a markdown body up to the
//! next step or the end of the input.
//!
//! # Quick start
//!
//! ```
//! let input = "---\ntitle: Hello\n---\n///\nname: One\n///\nSome **bold** text\n";
//! let doc = tutorial_parse::parse(input).unwrap();
//! assert_eq!(doc.title(), Some("Hello"));
//! assert_eq!(doc.steps[0].param("name"), Some("One"));
//! assert_eq!(doc.steps[0].rendered_body, "<p>Some <strong>bold</strong> text</p>\n");
//! ```

pub mod block;
pub mod error;
pub mod markup;
pub mod parse;
pub mod steps;
#[cfg(feature = "templates")]
pub mod template;
pub mod types;

pub use block::parse_block;
pub use error::*;
pub use markup::{CommonMark, MarkdownOptions, MarkupRenderer};
pub use parse::{parse, parse_with};
#[cfg(feature = "templates")]
pub use template::Templates;
pub use types::*;
