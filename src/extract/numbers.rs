//! Number occurrences.

use regex::Regex;

use crate::model::NumericOccurrence;

use super::context::{context_window, CharOffsets};

/// Every number in `text`, in document order.
///
/// Matches whose parse fails or yields NaN are dropped without error.
pub fn extract_numbers(text: &str, pattern: &Regex, radius: usize) -> Vec<NumericOccurrence> {
    let mut offsets = CharOffsets::new(text);

    let numbers: Vec<NumericOccurrence> = pattern
        .find_iter(text)
        .filter_map(|m| {
            let value = m.as_str().parse::<f64>().ok().filter(|v| !v.is_nan())?;
            Some(NumericOccurrence {
                value,
                position: offsets.char_offset(m.start()),
                context: context_window(text, m.start(), radius),
            })
        })
        .collect();

    log::debug!("extracted {} number(s)", numbers.len());
    numbers
}
