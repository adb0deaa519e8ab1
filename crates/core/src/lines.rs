//! Line splitting and single-line classification predicates.
//!
//! Every rule in the transformer is driven by a handful of cheap
//! line-shape checks. They live here as independent pure functions so the
//! transformer composes them instead of inlining character-class logic at
//! each decision point.

/// Box-drawing glyphs that mark a line as part of an ASCII table block.
const TABLE_GLYPHS: [char; 11] = ['┌', '┐', '└', '┘', '─', '│', '├', '┤', '┬', '┴', '┼'];

/// Sentence-terminating punctuation that blocks paragraph reflow.
const BREAK_CHARS: [char; 9] = ['.', ',', ':', '!', '?', '。', '！', '？', '：'];

/// CJK sentence-boundary glyphs that trigger spaceless joining.
const CJK_BOUNDARY: [char; 5] = ['、', '。', '！', '？', '：'];

/// Splits raw input into lines, canonicalizing CRLF pairs to LF first.
///
/// Only the two-byte CRLF sequence is rewritten; a bare carriage return is
/// left in place. The terminator itself is removed by the split, and a
/// final terminator yields a trailing empty element, matching standard
/// split semantics. Any string is valid input; the empty string yields one
/// empty line.
pub fn split_lines(input: &str) -> Vec<String> {
    let text = input.replace("\r\n", "\n");
    text.split('\n').map(str::to_string).collect()
}

/// Returns true when the line, after left-trim, starts with three or more
/// backticks. Both fence openers (any language hint ignored) and fence
/// closers satisfy this.
pub fn is_code_fence(line: &str) -> bool {
    line.trim_start().chars().take_while(|c| *c == '`').count() >= 3
}

/// Returns the exact backtick run opening a fence, or `None` when the
/// line is not a fence marker.
pub fn opening_fence(line: &str) -> Option<String> {
    let run = line.trim_start().chars().take_while(|c| *c == '`').count();
    if run >= 3 { Some("`".repeat(run)) } else { None }
}

/// Returns true when `line` closes a fence opened by `fence`: the
/// left-trimmed line starts with the opening run and contains nothing
/// beyond backticks and trailing whitespace. A longer closing run still
/// closes a shorter opener.
pub fn closes_fence(line: &str, fence: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with(fence) && trimmed.trim_end().chars().all(|c| c == '`')
}

/// Returns true when the line contains at least one box-drawing glyph.
pub fn is_table_line(line: &str) -> bool {
    line.contains(&TABLE_GLYPHS[..])
}

/// Returns true when the line is a heading: optional leading whitespace,
/// one to six `#` characters, then whitespace or end of line.
pub fn is_heading(line: &str) -> bool {
    let trimmed = line.trim_start();
    let hashes = trimmed.chars().take_while(|c| *c == '#').count();
    if hashes == 0 || hashes > 6 {
        return false;
    }
    match trimmed.chars().nth(hashes) {
        None => true,
        Some(c) => c.is_whitespace(),
    }
}

/// Returns true when the line is a list item: a `-`/`*`/`+` bullet or a
/// digit run plus `.`/`)`, followed by whitespace.
pub fn is_list_item(line: &str) -> bool {
    let trimmed = line.trim_start();
    if let Some(rest) = trimmed.strip_prefix(['-', '*', '+']) {
        return rest.starts_with(char::is_whitespace);
    }
    let digits = trimmed.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return false;
    }
    match trimmed[digits..].strip_prefix(['.', ')']) {
        Some(rest) => rest.starts_with(char::is_whitespace),
        None => false,
    }
}

/// Returns true when the line contains only whitespace.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Returns true when the line, after right-trim, ends with sentence
/// punctuation.
pub fn ends_with_break(line: &str) -> bool {
    line.trim_end().ends_with(&BREAK_CHARS[..])
}

/// Returns true when the left-trimmed line starts with a lowercase ASCII
/// letter.
pub fn starts_with_lowercase(line: &str) -> bool {
    line.trim_start().starts_with(|c: char| c.is_ascii_lowercase())
}

/// Counts leading space and tab characters.
pub fn leading_indent_width(line: &str) -> usize {
    line.chars().take_while(|c| *c == ' ' || *c == '\t').count()
}

/// Counts leading space characters only. This is the unit the
/// common-indent scanner works in; tabs do not contribute.
pub fn leading_space_width(line: &str) -> usize {
    line.chars().take_while(|c| *c == ' ').count()
}

/// Removes up to `count` leading space/tab characters.
pub fn remove_indent(line: &str, count: usize) -> &str {
    let bytes = line.as_bytes();
    let mut i = 0;
    while i < bytes.len() && i < count && (bytes[i] == b' ' || bytes[i] == b'\t') {
        i += 1;
    }
    &line[i..]
}

/// Returns true when joining `next` onto `previous` should not insert a
/// space: the previous line carries a CJK sentence-boundary glyph, ends
/// (after right-trim) with an ASCII alphanumeric, and the next line opens
/// with one.
pub fn join_without_space(previous: &str, next: &str) -> bool {
    let prev = previous.trim_end();
    prev.contains(&CJK_BOUNDARY[..])
        && prev.ends_with(|c: char| c.is_ascii_alphanumeric())
        && next.starts_with(|c: char| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_canonicalizes_crlf() {
        assert_eq!(split_lines("a\r\nb\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn split_preserves_trailing_empty_line() {
        assert_eq!(split_lines("a\n"), vec!["a", ""]);
    }

    #[test]
    fn split_of_empty_input_yields_one_empty_line() {
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn split_leaves_bare_carriage_returns() {
        assert_eq!(split_lines("a\rb"), vec!["a\rb"]);
    }

    #[test]
    fn fence_requires_three_backticks() {
        assert!(is_code_fence("```"));
        assert!(is_code_fence("  ```rust"));
        assert!(is_code_fence("`````"));
        assert!(!is_code_fence("``"));
        assert!(!is_code_fence("text ```"));
    }

    #[test]
    fn opening_fence_captures_exact_run() {
        assert_eq!(opening_fence("````markdown"), Some("````".to_string()));
        assert_eq!(opening_fence("  ```ts"), Some("```".to_string()));
        assert_eq!(opening_fence("``"), None);
    }

    #[test]
    fn closer_must_be_at_least_opening_length() {
        assert!(closes_fence("```", "```"));
        assert!(closes_fence("`````", "```"));
        assert!(closes_fence("  ```  ", "```"));
        assert!(!closes_fence("```", "````"));
        assert!(!closes_fence("```rust", "```"));
    }

    #[test]
    fn table_line_needs_a_box_glyph() {
        assert!(is_table_line("│ A │ B │"));
        assert!(is_table_line("┌────┐"));
        assert!(!is_table_line("| A | B |"));
    }

    #[test]
    fn heading_depth_is_capped_at_six() {
        assert!(is_heading("# Title"));
        assert!(is_heading("   ###### deep"));
        assert!(is_heading("##"));
        assert!(!is_heading("####### seven"));
        assert!(!is_heading("#hashtag"));
    }

    #[test]
    fn list_items_cover_bullets_and_ordinals() {
        assert!(is_list_item("- item"));
        assert!(is_list_item("  * item"));
        assert!(is_list_item("+ item"));
        assert!(is_list_item("10. item"));
        assert!(is_list_item("3) item"));
        assert!(!is_list_item("-item"));
        assert!(!is_list_item("1.item"));
        assert!(!is_list_item("a. item"));
    }

    #[test]
    fn break_set_includes_fullwidth_punctuation() {
        assert!(ends_with_break("done."));
        assert!(ends_with_break("done,  "));
        assert!(ends_with_break("終わり。"));
        assert!(!ends_with_break("unfinished"));
    }

    #[test]
    fn remove_indent_stops_at_first_non_whitespace() {
        assert_eq!(remove_indent("    x", 2), "  x");
        assert_eq!(remove_indent("  x", 4), "x");
        assert_eq!(remove_indent("\t x", 2), "x");
        assert_eq!(remove_indent("x", 3), "x");
    }

    #[test]
    fn leading_widths_disagree_on_tabs() {
        assert_eq!(leading_indent_width("\t  x"), 3);
        assert_eq!(leading_space_width("\t  x"), 0);
        assert_eq!(leading_space_width("  \tx"), 2);
    }

    #[test]
    fn spaceless_join_needs_glyph_and_alnum_edges() {
        assert!(join_without_space("これは説明です。see", "also"));
        assert!(!join_without_space("plain ascii text", "next"));
        assert!(!join_without_space("説明です。", "next"));
    }
}
