//! WASM bindings for `tutorial-parse`.
//!
//! Exposes the tutorial parser to JavaScript via wasm-bindgen.
//! Call `parse()` with a string to get the document as JSON, or `render()`
//! with a template source to get the final output.

use tutorial_parse::Templates;
use wasm_bindgen::prelude::*;

const TEMPLATE_NAME: &str = "tutorial";

/// Parse a tutorial and return `{ document, error }` as a JSON string.
///
/// Exactly one of the two fields is non-null.
#[wasm_bindgen]
pub fn parse(input: &str) -> String {
    let value = match tutorial_parse::parse(input) {
        Ok(doc) => serde_json::json!({ "document": doc, "error": null }),
        Err(e) => serde_json::json!({ "document": null, "error": e.to_string() }),
    };
    value.to_string()
}

/// Parse a tutorial and return the document as a plain JavaScript object.
#[wasm_bindgen(js_name = parseValue)]
pub fn parse_value(input: &str) -> Result<JsValue, JsError> {
    let doc = tutorial_parse::parse(input)?;
    Ok(serde_wasm_bindgen::to_value(&doc)?)
}

/// Parse a tutorial and render it through the given template source.
#[wasm_bindgen]
pub fn render(input: &str, template_source: &str) -> Result<String, JsError> {
    let doc = tutorial_parse::parse(input)?;
    let templates = Templates::from_source(TEMPLATE_NAME, template_source)?;
    Ok(templates.render(TEMPLATE_NAME, &doc)?)
}
