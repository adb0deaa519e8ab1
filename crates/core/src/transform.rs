//! The stateful transformer pass.
//!
//! One left-to-right pass over the split lines with a three-state machine.
//! Decisions may look back at the last line already pushed to the output,
//! never ahead. Reflow mutates that last line in place; everything else
//! appends.

use crate::lines::{
    closes_fence, ends_with_break, is_blank, is_code_fence, is_heading, is_list_item,
    is_table_line, join_without_space, leading_indent_width, opening_fence, remove_indent,
    starts_with_lowercase,
};

/// Transformer state, one variant active per line.
///
/// `InCodeBlock` carries the exact opening backtick run so a closer of
/// equal or greater length is recognized. `InTableBlock` carries the first
/// table line's leading-space width so the rest of the block dedents
/// against its own margin rather than the document's.
#[derive(Debug, Clone, PartialEq, Eq)]
enum TransformState {
    Normal,
    InCodeBlock { fence: String },
    InTableBlock { table_indent: usize },
}

/// Runs the transformer over `lines`, dedenting by `common_indent`.
///
/// Total over any line sequence. An unclosed fence leaves the machine in
/// the code-block state, so the remainder of the input is copied verbatim
/// rather than silently repaired.
pub fn transform_lines(lines: &[String], common_indent: usize) -> Vec<String> {
    let mut state = TransformState::Normal;
    let mut output: Vec<String> = Vec::with_capacity(lines.len());

    for raw in lines {
        if let TransformState::InCodeBlock { fence } = &state {
            if closes_fence(raw, fence) {
                output.push(remove_indent(raw, common_indent).trim_end().to_string());
                state = TransformState::Normal;
            } else {
                // Fence interiors are sacrosanct: no dedent, no trim.
                output.push(raw.clone());
            }
            continue;
        }

        if let TransformState::InTableBlock { table_indent } = state {
            if is_table_line(raw) {
                let dedented = remove_indent(raw, common_indent).trim_end();
                output.push(remove_indent(dedented, table_indent).to_string());
                continue;
            }
            // Block over: re-evaluate this same line under Normal rules.
            state = TransformState::Normal;
        }

        if let Some(fence) = opening_fence(raw) {
            output.push(remove_indent(raw, common_indent).trim_end().to_string());
            state = TransformState::InCodeBlock { fence };
            continue;
        }

        if is_table_line(raw) {
            let dedented = remove_indent(raw, common_indent).trim_end().to_string();
            let table_indent = leading_indent_width(&dedented);
            output.push(remove_indent(&dedented, table_indent).to_string());
            state = TransformState::InTableBlock { table_indent };
            continue;
        }

        if is_blank(raw) {
            output.push(String::new());
            continue;
        }

        if is_heading(raw) {
            output.push(raw.trim().to_string());
            continue;
        }

        let processed = remove_indent(raw, common_indent).trim_end();
        let content = processed.trim_start();

        let joined = match output.last_mut() {
            Some(prev) if should_reflow(prev, processed, content) => {
                let separator = if join_without_space(prev, content) { "" } else { " " };
                prev.push_str(separator);
                prev.push_str(content);
                true
            }
            _ => false,
        };
        if !joined {
            let paragraph_start = output.last().map_or(true, |prev| {
                is_blank(prev) || is_heading(prev) || is_code_fence(prev) || is_table_line(prev)
            });
            let fresh = if paragraph_start { content } else { processed };
            output.push(fresh.to_string());
        }
    }

    if let TransformState::InCodeBlock { .. } = state {
        log::debug!("code fence still open at end of input, trailing lines kept verbatim");
    }

    output
}

/// Decides whether a text line merges into the previous output line.
///
/// `processed` is the line after document dedent and right-trim; `content`
/// is `processed` with its left margin removed. The thresholds here (4
/// leading columns, 20-character previous line) are deliberate and the
/// overlapping conditions are kept as written.
fn should_reflow(prev: &str, processed: &str, content: &str) -> bool {
    if is_blank(prev)
        || is_heading(prev)
        || is_list_item(prev)
        || is_code_fence(prev)
        || ends_with_break(prev)
    {
        return false;
    }
    let indent = leading_indent_width(processed);
    let indented_continuation =
        indent >= 4 || (indent > 0 && (prev.contains(' ') || prev.chars().count() >= 20));
    let lowercase_continuation = starts_with_lowercase(content) && prev.contains(' ');
    (lowercase_continuation || indented_continuation)
        && !is_heading(content)
        && !is_list_item(content)
}
