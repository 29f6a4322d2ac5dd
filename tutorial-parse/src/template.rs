//! Rendering a [`Document`] through a Jinja-style template (minijinja).
//!
//! Templates see two variables:
//!
//! - `front_matter`: the front matter mapping
//! - `steps`: the steps in order, each with `number`, `params`, `body` and
//!   `rendered_body`
//!
//! Output is not auto-escaped, so `{{ step.rendered_body }}` inserts the
//! step's HTML as is.

use std::path::Path;

use minijinja::{AutoEscape, Environment, context};

use crate::error::TemplateError;
use crate::types::Document;

/// A set of templates available for rendering.
#[derive(Debug)]
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    fn base() -> Environment<'static> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env
    }

    /// Load templates by name from files under `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let mut env = Self::base();
        env.set_loader(minijinja::path_loader(dir.as_ref().to_path_buf()));
        Self { env }
    }

    /// A single in-memory template registered under `name`.
    pub fn from_source(name: &str, source: &str) -> Result<Self, TemplateError> {
        let mut env = Self::base();
        env.add_template_owned(name.to_string(), source.to_string())
            .map_err(|e| TemplateError::from_engine(name, e))?;
        Ok(Self { env })
    }

    /// Render `doc` against the template called `name`.
    pub fn render(&self, name: &str, doc: &Document) -> Result<String, TemplateError> {
        let template = self
            .env
            .get_template(name)
            .map_err(|e| TemplateError::from_engine(name, e))?;

        template
            .render(context! {
                front_matter => &doc.front_matter,
                steps => &doc.steps,
            })
            .map_err(|e| TemplateError::from_engine(name, e))
    }
}

impl Document {
    /// Render this document against the template called `name`.
    pub fn render(&self, templates: &Templates, name: &str) -> Result<String, TemplateError> {
        templates.render(name, self)
    }
}
