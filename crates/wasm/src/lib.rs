//! WebAssembly bindings for the tidypaste normalizer.
//!
//! Browser-hosted editors call [`normalize`] for the plain string form, or
//! [`normalize_report`] when they want the change metadata without a
//! second string comparison on the JS side.

use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

/// Summary returned by [`normalize_report`].
/// Mirrors the NAPI `NormalizeReport` for parity.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizeReport {
    /// Normalized text.
    pub text: String,
    /// Whether normalization changed the input at all.
    pub changed: bool,
    /// Line count of the input.
    pub lines_in: usize,
    /// Line count of the output.
    pub lines_out: usize,
}

/// Normalizes pasted multi-line text and returns the tidy string.
///
/// Total over all inputs; there is no error channel.
#[wasm_bindgen]
pub fn normalize(input: &str) -> String {
    tidypaste_core::normalize(input)
}

/// Normalizes pasted text and returns a `{ text, changed, lines_in,
/// lines_out }` object so hosts can skip no-op edits.
#[wasm_bindgen]
pub fn normalize_report(input: &str) -> Result<JsValue, JsError> {
    let text = tidypaste_core::normalize(input);
    let report = NormalizeReport {
        changed: text != input,
        lines_in: input.split('\n').count(),
        lines_out: text.split('\n').count(),
        text,
    };
    serde_wasm_bindgen::to_value(&report)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
