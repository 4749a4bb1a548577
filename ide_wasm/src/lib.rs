//! WASM exports for CodeMirror hosts.
//!
//! Every offset crossing this boundary is in UTF-16 code units.

mod converter;
pub mod dto;
mod offsets;
mod span;

use ide::IdeError;
use js_sys::Error as JsError;
use serde::Serialize;
use syntax::SourceMap;
use wasm_bindgen::prelude::*;

use crate::converter::Converter;

/// Completion at a UTF-16 cursor. Returns `undefined` when nothing should be offered.
#[wasm_bindgen]
pub fn complete(
    source: String,
    cursor_utf16: u32,
    explicit: bool,
    config_json: Option<String>,
) -> Result<JsValue, JsValue> {
    let config = match config_json.as_deref() {
        Some(json) => Converter::parse_config(json).map_err(ide_error)?,
        None => ide::CompletionConfig::default(),
    };
    let cursor = Converter::cursor_utf16_to_byte(&source, cursor_utf16).map_err(ide_error)?;

    let result = ide::complete(&source, cursor, explicit, config).map_err(ide_error)?;
    let view = result
        .as_ref()
        .map(|result| Converter::completion_result_view(&source, result));
    Ok(to_js(&view))
}

/// Styling ranges for every highlighted leaf, in document order.
#[wasm_bindgen]
pub fn highlight(source: String) -> JsValue {
    let output = syntax::parse(&source);
    let highlights: Vec<_> = ide::language::highlight(&output.tree)
        .iter()
        .map(|hl| Converter::highlight_view(&source, hl))
        .collect();
    to_js(&highlights)
}

/// Parse diagnostics with UTF-16 ranges and 1-based line/col.
#[wasm_bindgen]
pub fn diagnostics(source: String) -> JsValue {
    let output = syntax::parse(&source);
    let sm = SourceMap::new(&source);
    let diagnostics: Vec<_> = output
        .diagnostics
        .iter()
        .map(|diag| Converter::diagnostic_view(&source, &sm, diag))
        .collect();
    to_js(&diagnostics)
}

/// Comment tokens and the lexical tables shared with styling.
#[wasm_bindgen]
pub fn language_data() -> JsValue {
    to_js(&Converter::language_data_view())
}

fn ide_error(err: IdeError) -> JsValue {
    JsValue::from(JsError::new(err.message()))
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}
