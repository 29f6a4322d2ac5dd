/// Errors that abort parsing of a tutorial document.
///
/// Unlike a best-effort markdown parser there is no partial result: the first
/// error wins and no `Document` is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error(
        "Malformed document: front matter must be opened and closed by `---` lines (found {delimiters_found})"
    )]
    MalformedDocument { delimiters_found: usize },

    #[error("Malformed block at line {line}: expected `key: value`, found '{text}'")]
    MalformedBlock { line: usize, text: String },
}

/// Errors surfaced by the template engine.
///
/// The engine's own error is kept as the source so callers see it unchanged.
#[cfg(feature = "templates")]
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Template not found: {name}")]
    NotFound {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("Template syntax error: {0}")]
    Syntax(#[source] minijinja::Error),

    #[error("Template render error: {0}")]
    Render(#[source] minijinja::Error),
}

#[cfg(feature = "templates")]
impl TemplateError {
    pub(crate) fn from_engine(name: &str, err: minijinja::Error) -> Self {
        match err.kind() {
            minijinja::ErrorKind::TemplateNotFound => TemplateError::NotFound {
                name: name.to_string(),
                source: err,
            },
            minijinja::ErrorKind::SyntaxError => TemplateError::Syntax(err),
            _ => TemplateError::Render(err),
        }
    }
}
