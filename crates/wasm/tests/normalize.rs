//! Browser-side tests for the wasm surface. These exercise the JsValue
//! report path, so they only run under the wasm test runner.

#![cfg(target_arch = "wasm32")]

use serde::Deserialize;
use tidypaste_wasm::{normalize, normalize_report};
use wasm_bindgen_test::*;

#[derive(Deserialize, Debug)]
struct NormalizeReport {
    text: String,
    changed: bool,
    lines_in: usize,
    lines_out: usize,
}

#[wasm_bindgen_test]
fn normalize_returns_tidy_string() {
    let out = normalize("  # Title   \n\n  wrapped prose\n  lines here.");
    assert_eq!(out, "# Title\n\nwrapped prose lines here.");
}

#[wasm_bindgen_test]
fn report_carries_change_metadata() {
    let result = normalize_report("line1\r\nline2").expect("report should serialize");
    let report: NormalizeReport = serde_wasm_bindgen::from_value(result).expect("deserialize");

    assert!(report.changed);
    assert_eq!(report.text, "line1\nline2");
    assert_eq!(report.lines_in, 2);
    assert_eq!(report.lines_out, 2);
}

#[wasm_bindgen_test]
fn report_flags_untouched_input() {
    let result = normalize_report("Already tidy.\n").expect("report should serialize");
    let report: NormalizeReport = serde_wasm_bindgen::from_value(result).expect("deserialize");

    assert!(!report.changed);
    assert_eq!(report.text, "Already tidy.\n");
}
