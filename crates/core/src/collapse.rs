//! Blank-run collapsing.
//!
//! The final pass over the transformer's output. Only exactly-empty lines
//! count as blanks here; whitespace-only lines inside fence interiors were
//! kept verbatim upstream and pass through untouched.

use crate::lines::is_heading;

/// Bounds consecutive blank lines: up to three directly after a heading,
/// otherwise up to two. Excess blanks are dropped, never merged from
/// elsewhere. Non-blank lines are emitted unchanged.
pub fn collapse_blank_runs(lines: Vec<String>) -> Vec<String> {
    let mut result = Vec::with_capacity(lines.len());
    let mut blanks = 0usize;
    let mut after_heading = false;
    for line in lines {
        if line.is_empty() {
            blanks += 1;
            let max_blanks = if after_heading { 3 } else { 2 };
            if blanks <= max_blanks {
                result.push(line);
            }
        } else {
            blanks = 0;
            after_heading = is_heading(&line);
            result.push(line);
        }
    }
    result
}
