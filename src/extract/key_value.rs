//! `Label: Value` extraction over raw lines.

use regex::Regex;

use crate::model::KeyValuePair;

/// One pair per matching line, in document order.
///
/// Runs on raw lines, independent of table, list and section segmentation.
/// Duplicate keys are kept as separate pairs.
pub fn extract_key_values(text: &str, pattern: &Regex) -> Vec<KeyValuePair> {
    let pairs: Vec<KeyValuePair> = text
        .split('\n')
        .filter_map(|line| pattern.captures(line))
        .map(|caps| KeyValuePair::new(caps[1].trim(), caps[2].trim()))
        .collect();

    log::debug!("extracted {} key-value pair(s)", pairs.len());
    pairs
}
