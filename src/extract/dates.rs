//! Date occurrences.

use regex::Regex;

use crate::model::DateOccurrence;

use super::context::{context_window, CharOffsets};

/// Dates matched by each pattern in turn.
///
/// Results are grouped by pattern (all `MM/DD/YYYY` matches, then all
/// `MM-DD-YYYY`, ...), so the output is not in document order. Overlapping
/// matches from different patterns are all kept.
pub fn extract_dates(text: &str, patterns: &[Regex], radius: usize) -> Vec<DateOccurrence> {
    let mut dates = Vec::new();

    for pattern in patterns {
        let mut offsets = CharOffsets::new(text);
        dates.extend(pattern.find_iter(text).map(|m| DateOccurrence {
            value: m.as_str().to_string(),
            position: offsets.char_offset(m.start()),
            context: context_window(text, m.start(), radius),
        }));
    }

    log::debug!("extracted {} date(s)", dates.len());
    dates
}
