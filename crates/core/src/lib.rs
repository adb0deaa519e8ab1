#![deny(missing_docs)]
//! tidypaste core: canonical cleanup for pasted LLM output.
//!
//! The engine turns pasted multi-line text (prose mixed with code samples,
//! box-drawing tables, and headings) into a tidy canonical form: LF line
//! endings, no stray indentation or trailing whitespace, bounded blank-line
//! runs, and rejoined paragraphs that were artificially wrapped. Fenced
//! code blocks and table blocks are preserved byte-for-byte apart from
//! dedenting their marker lines.
//!
//! The whole engine is the single total function [`normalize`]; it never
//! fails and holds no state across calls.

/// Blank-run collapsing.
pub mod collapse;
/// Common-indent pre-scan.
pub mod indent;
/// Line splitting and classification predicates.
pub mod lines;
/// The stateful transformer pass.
pub mod transform;

pub use collapse::collapse_blank_runs;
pub use indent::common_indent;
pub use lines::split_lines;
pub use transform::transform_lines;

/// Normalizes pasted multi-line text into a canonical, human-tidy form.
///
/// Four stages run strictly forward: split (CRLF → LF), a read-only scan
/// for the document's common indent, the stateful per-line transform, and
/// a final blank-run collapse. Total over all inputs, including the empty
/// string.
///
/// ```
/// let tidy = tidypaste_core::normalize("  This is a broken\n  paragraph line.\n");
/// assert_eq!(tidy, "This is a broken paragraph line.\n");
/// ```
pub fn normalize(input: &str) -> String {
    let lines = split_lines(input);
    let indent = common_indent(&lines);
    let transformed = transform_lines(&lines, indent);
    let collapsed = collapse_blank_runs(transformed);
    log::debug!(
        "normalized {} lines to {} (common indent {})",
        lines.len(),
        collapsed.len(),
        indent
    );
    collapsed.join("\n")
}
