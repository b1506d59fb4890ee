//! Row formatting for the result tree.
//!
//! Rows are plain strings so that navigation can be tested with exact snapshots;
//! color is applied only when a row is written to a terminal.
//!
//! # Row Shapes
//! - **Header**: `"  <filename> (<n> result[s])"`
//! - **Match**: `"    <line>:<pad><text>"`, line numbers padded to the widest in the group
//! - **Selected**: [`add_line_marker`] applied to either of the above
//!
//! # Public API
//! - [`visible_rows`]: every plain row for a given open set
//! - [`header_row`], [`match_row`]: plain row text
//! - [`add_line_marker`]: selection marker rendering
//! - [`colorize_row`], [`strip_ansi_codes`]: terminal coloring and its inverse

use crate::core::result_index::{FileGroup, MatchRecord, OpenSet, ResultIndex};
use colored::*;

pub const LINE_MARKER: &str = "\u{25b6}";

const ROW_PAD: &str = "  ";
const MATCH_INDENT: &str = "    ";

/// Plain rows in display order: each header, followed by its matches when open
pub fn visible_rows(index: &ResultIndex, open: &OpenSet) -> Vec<String> {
    let mut rows = Vec::with_capacity(index.row_count(open));
    for (i, group) in index.groups().iter().enumerate() {
        rows.push(header_row(group));
        if open.contains(&i) {
            let width = group.line_number_width();
            rows.extend(group.matches.iter().map(|m| match_row(m, width)));
        }
    }
    rows
}

pub fn header_row(group: &FileGroup) -> String {
    let count = group.match_count();
    let plural = if count > 1 { "s" } else { "" };
    format!("{ROW_PAD}{} ({count} result{plural})", group.filename)
}

/// `width` is the widest line number in the owning group
pub fn match_row(record: &MatchRecord, width: usize) -> String {
    let number = format!("{}:", record.line_number);
    format!(
        "{MATCH_INDENT}{number:<pad$}{}",
        record.text,
        pad = width + 1
    )
}

/// Mark a row as selected. The match indent collapses to a two-space gap after
/// the marker so the text column keeps its alignment.
pub fn add_line_marker(text: &str) -> String {
    let gap = if text.starts_with(MATCH_INDENT) {
        ROW_PAD
    } else {
        ""
    };
    format!("{LINE_MARKER} {gap}{}", text.trim_start())
}

/// Apply terminal colors to a plain or marked row
pub fn colorize_row(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 64);

    let body = match text.strip_prefix(LINE_MARKER) {
        Some(rest) => {
            result.push_str(&LINE_MARKER.green().bold().to_string());
            rest
        }
        None => text,
    };

    let trimmed = body.trim_start();
    let indent = &body[..body.len() - trimmed.len()];
    result.push_str(indent);

    // Match rows keep at least two spaces of indent after the marker or pad
    let is_match = indent.len() >= 3;
    if is_match {
        match trimmed.split_once(':') {
            Some((number, rest)) => {
                result.push_str(&format!("{}{}", number.yellow(), ":".bright_black()));
                result.push_str(rest);
            }
            None => result.push_str(trimmed),
        }
    } else {
        match trimmed.rfind(" (") {
            Some(split) => {
                let (filename, count) = trimmed.split_at(split);
                result.push_str(&format!("{}{}", filename.blue(), count.bright_black()));
            }
            None => result.push_str(&trimmed.blue().to_string()),
        }
    }

    result
}

/// Strip ANSI color codes for testing
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for ch in chars.by_ref() {
                if ch.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(lines: &[&str]) -> FileGroup {
        ResultIndex::build(lines.iter().copied()).unwrap().groups()[0].clone()
    }

    #[test]
    fn test_header_row_singular_and_plural() {
        assert_eq!(header_row(&group(&["a.rs:1:x"])), "  a.rs (1 result)");
        assert_eq!(
            header_row(&group(&["a.rs:1:x", "a.rs:2:y"])),
            "  a.rs (2 results)"
        );
    }

    #[test]
    fn test_match_row_aligns_line_numbers() {
        let g = group(&["a.rs:7:short", "a.rs:120:long"]);
        let width = g.line_number_width();
        assert_eq!(match_row(&g.matches[0], width), "    7:  short");
        assert_eq!(match_row(&g.matches[1], width), "    120:long");
    }

    #[test]
    fn test_match_row_keeps_text_verbatim() {
        let g = group(&["a.txt:4:  if (x: y) return"]);
        assert_eq!(match_row(&g.matches[0], 1), "    4:  if (x: y) return");
    }

    #[test]
    fn test_visible_rows_follow_open_set() {
        let index =
            ResultIndex::build(["x.py:10:foo()", "x.py:20:bar()", "y.py:5:baz()"]).unwrap();

        let closed = visible_rows(&index, &OpenSet::new());
        assert_eq!(closed, vec!["  x.py (2 results)", "  y.py (1 result)"]);

        let open: OpenSet = [0].into_iter().collect();
        let rows = visible_rows(&index, &open);
        assert_eq!(
            rows,
            vec![
                "  x.py (2 results)",
                "    10:foo()",
                "    20:bar()",
                "  y.py (1 result)",
            ]
        );
        assert_eq!(rows.len(), index.row_count(&open));
    }

    #[test]
    fn test_marker_on_header() {
        assert_eq!(add_line_marker("  a.rs (2 results)"), "\u{25b6} a.rs (2 results)");
    }

    #[test]
    fn test_marker_on_match_row_preserves_alignment() {
        let plain = "    12: let x = 1;";
        let marked = add_line_marker(plain);
        assert_eq!(marked, "\u{25b6}   12: let x = 1;");
        assert_eq!(marked.chars().count(), plain.chars().count());
    }

    #[test]
    fn test_colorize_round_trips_through_strip() {
        colored::control::set_override(true);
        for row in [
            "  src/main.rs (3 results)",
            "    10: fn main() {",
            "\u{25b6} src/main.rs (3 results)",
            "\u{25b6}   10: fn main() {",
        ] {
            assert_eq!(strip_ansi_codes(&colorize_row(row)), row);
        }
    }

    #[test]
    fn test_strip_ansi_codes_plain_text() {
        assert_eq!(strip_ansi_codes("plain"), "plain");
        assert_eq!(strip_ansi_codes("\x1b[34mblue\x1b[0m"), "blue");
    }
}
