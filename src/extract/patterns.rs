//! Regular expressions used by the raw-text extractors.
//!
//! A [`Patterns`] set is compiled per extractor instance. `regex::Regex`
//! keeps no match cursor between calls, so concurrent extractions never
//! observe each other's scan position.

use regex::Regex;

use crate::error::Result;

/// `Label: Value` on a single line. Labels are letters and spaces only.
const KEY_VALUE: &str = r"^([A-Za-z\s]+):\s*(.+)$";

/// Integers and decimals standing alone. Boundaries are ASCII word
/// boundaries, so a number directly beside a CJK or accented letter still
/// counts.
const NUMBER: &str = r"(?-u:\b)[0-9]+(?:\.[0-9]+)?(?-u:\b)";

/// Date shapes, scanned in this order.
const DATES: [&str; 4] = [
    // MM/DD/YYYY
    r"(?-u:\b)[0-9]{1,2}/[0-9]{1,2}/[0-9]{4}(?-u:\b)",
    // MM-DD-YYYY
    r"(?-u:\b)[0-9]{1,2}-[0-9]{1,2}-[0-9]{4}(?-u:\b)",
    // YYYY-MM-DD
    r"(?-u:\b)[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}(?-u:\b)",
    // Month DD, YYYY (Unicode month word, e.g. `März`)
    r"\b\w+ [0-9]{1,2}, [0-9]{4}(?-u:\b)",
];

/// Compiled extraction patterns.
#[derive(Debug, Clone)]
pub(crate) struct Patterns {
    pub(crate) key_value: Regex,
    pub(crate) number: Regex,
    pub(crate) dates: Vec<Regex>,
}

impl Patterns {
    pub(crate) fn compile() -> Result<Self> {
        Ok(Self {
            key_value: Regex::new(KEY_VALUE)?,
            number: Regex::new(NUMBER)?,
            dates: DATES
                .iter()
                .map(|pattern| Regex::new(pattern))
                .collect::<std::result::Result<Vec<_>, _>>()?,
        })
    }
}
