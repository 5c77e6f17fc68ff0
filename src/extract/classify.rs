//! Per-line heuristics.
//!
//! Each predicate looks at one trimmed line using only spacing, punctuation
//! and character classes. The predicates are independent: a line such as
//! `Q1 2024  SALES  TOTAL` passes both [`is_table_row`] and [`is_header`],
//! and each segmenter decides precedence for itself. [`classify`] gives a
//! single tag for display and debugging only.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

const MIN_TABLE_ROW_CHARS: usize = 10;
const MIN_TABLE_ROW_TOKENS: usize = 3;
const MIN_HEADER_CHARS: usize = 3;
const MAX_HEADER_CHARS: usize = 100;
const MAX_HEADER_PUNCTUATION: usize = 1;

/// Single-tag view of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineKind {
    TableRow,
    ListItem,
    Header,
    Plain,
}

/// Tag a trimmed line, checking table row, list item, then header.
pub fn classify(line: &str) -> LineKind {
    if is_table_row(line) {
        LineKind::TableRow
    } else if is_list_item(line) {
        LineKind::ListItem
    } else if is_header(line) {
        LineKind::Header
    } else {
        LineKind::Plain
    }
}

/// Whether a trimmed line looks like a row of tabular data.
///
/// Requires at least 10 characters, a wide gap (two or more whitespace
/// characters, or a tab), a digit, and three or more tokens.
pub fn is_table_row(line: &str) -> bool {
    if line.chars().count() < MIN_TABLE_ROW_CHARS {
        return false;
    }

    let has_gap = column_gap_regex().is_match(line);
    let has_digit = line.bytes().any(|b| b.is_ascii_digit());
    let has_tokens = line.split_whitespace().count() >= MIN_TABLE_ROW_TOKENS;

    has_gap && has_digit && has_tokens
}

/// Whether a trimmed line looks like a section header.
///
/// Either all caps (with at least one uppercase letter) or title case
/// (`[A-Z][a-z]` start, every word capitalized), 3-100 characters, with at
/// most one `.`, `!` or `?`.
pub fn is_header(line: &str) -> bool {
    let len = line.chars().count();
    if !(MIN_HEADER_CHARS..=MAX_HEADER_CHARS).contains(&len) {
        return false;
    }

    let all_caps = line.to_uppercase() == line && line.chars().any(char::is_uppercase);

    let mut chars = line.chars();
    let title_case = matches!(
        (chars.next(), chars.next()),
        (Some(a), Some(b)) if a.is_ascii_uppercase() && b.is_ascii_lowercase()
    ) && line
        .split_whitespace()
        .all(|word| word.starts_with(|c: char| c.is_ascii_uppercase()));

    let punctuation = line.chars().filter(|c| matches!(c, '.' | '!' | '?')).count();

    (all_caps || title_case) && punctuation <= MAX_HEADER_PUNCTUATION
}

/// Whether a trimmed line is a bullet (`-`, `*`, `•`) or `1.` style item.
pub fn is_list_item(line: &str) -> bool {
    list_item_regex().is_match(line)
}

/// Split a table row into trimmed cells.
///
/// Cells are separated by whitespace runs of two or more characters or by
/// tabs. Rows that collapse to a single cell that way (single-spaced after
/// text extraction) are split on every whitespace run instead.
pub fn split_columns(line: &str) -> Vec<String> {
    let cells: Vec<String> = column_gap_regex()
        .split(line)
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(String::from)
        .collect();

    if cells.len() > 1 {
        cells
    } else {
        line.split_whitespace().map(String::from).collect()
    }
}

// Fixed line patterns, compiled once.

fn list_item_regex() -> &'static Regex {
    static RE_LIST_ITEM: OnceLock<Regex> = OnceLock::new();
    RE_LIST_ITEM
        .get_or_init(|| Regex::new(r"^(?:[-*•]|[0-9]+\.)\s").expect("valid list item regex"))
}

fn column_gap_regex() -> &'static Regex {
    static RE_COLUMN_GAP: OnceLock<Regex> = OnceLock::new();
    RE_COLUMN_GAP.get_or_init(|| Regex::new(r"\s{2,}|\t").expect("valid column gap regex"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_row_requires_ten_chars() {
        assert!(!is_table_row("a  1"));
        assert!(!is_table_row("ab  1  cd"));
        assert!(is_table_row("abc  1  def"));
    }

    #[test]
    fn test_table_row_requires_three_tokens() {
        // Long enough, wide gap, digit, but only two tokens.
        assert!(!is_table_row("abcdefghij  1"));
        assert!(is_table_row("abcdefghij  1  x"));
    }

    #[test]
    fn test_table_row_requires_gap_and_digit() {
        assert!(!is_table_row("North 120 340 560"));
        assert!(!is_table_row("North  East  West"));
        assert!(is_table_row("North\t120 340"));
    }

    #[test]
    fn test_header_all_caps() {
        assert!(is_header("SUMMARY"));
        assert!(is_header("Q3 RESULTS 2024"));
        assert!(!is_header("AB"));
        assert!(!is_header("2024 - 12"));
        assert!(!is_header("WAIT... WHAT?"));
    }

    #[test]
    fn test_header_title_case() {
        assert!(is_header("Financial Overview"));
        assert!(is_header("Annual Report."));
        assert!(!is_header("Financial overview"));
        assert!(!is_header("FInancial Data"));
        assert!(!is_header("The results were strong."));
    }

    #[test]
    fn test_header_length_bounds() {
        let long = "A".repeat(101);
        assert!(!is_header(&long));
        assert!(is_header(&long[..100]));
    }

    #[test]
    fn test_list_item() {
        assert!(is_list_item("- first"));
        assert!(is_list_item("* second"));
        assert!(is_list_item("• third"));
        assert!(is_list_item("12. twelfth"));
        assert!(!is_list_item("-dash"));
        assert!(!is_list_item("1.5 million"));
        assert!(!is_list_item("12 items"));
        assert!(!is_list_item(""));
        assert!(!is_list_item("12."));
        assert!(is_list_item("3.\tindented"));
    }

    #[test]
    fn test_split_columns_wide_gaps() {
        assert_eq!(
            split_columns("North Region   1200   3.5%"),
            vec!["North Region", "1200", "3.5%"]
        );
        assert_eq!(split_columns("a\tb c\t\td"), vec!["a", "b c", "d"]);
        assert_eq!(split_columns("x \ty  z"), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_split_columns_falls_back_to_single_spaces() {
        assert_eq!(split_columns("North 1200 3.5"), vec!["North", "1200", "3.5"]);
    }

    #[test]
    fn test_line_can_be_table_row_and_header() {
        // Both heuristics accept this line; classify() reports the table tag
        // but the section segmenter still treats it as a header.
        let line = "Q1 2024  SALES  TOTAL";
        assert!(is_table_row(line));
        assert!(is_header(line));
        assert_eq!(classify(line), LineKind::TableRow);
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("- item"), LineKind::ListItem);
        assert_eq!(classify("OVERVIEW"), LineKind::Header);
        assert_eq!(classify("just some prose here."), LineKind::Plain);
    }
}
