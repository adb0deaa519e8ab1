//! Common-indent pre-scan.
//!
//! A read-only pass over the full line sequence that yields the global
//! dedent amount used by the transformer. Computed once per document and
//! never revised mid-pass.

use crate::lines::{is_blank, is_code_fence, is_table_line, leading_space_width};

/// Computes the minimum leading-space width among eligible lines.
///
/// Fence marker lines toggle an inside-fence flag and are themselves
/// excluded, as is everything between them. Table lines and blank lines
/// are also skipped. Tabs never count toward this scan. Returns 0 when no
/// line qualifies.
pub fn common_indent(lines: &[String]) -> usize {
    let mut in_code = false;
    let mut min: Option<usize> = None;
    for line in lines {
        if is_code_fence(line) {
            in_code = !in_code;
            continue;
        }
        if in_code || is_table_line(line) || is_blank(line) {
            continue;
        }
        let leading = leading_space_width(line);
        if min.map_or(true, |m| leading < m) {
            min = Some(leading);
        }
    }
    min.unwrap_or(0)
}
