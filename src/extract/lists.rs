//! List segmentation.

use crate::model::List;

use super::classify::is_list_item;

/// Group contiguous list-item lines into lists.
///
/// Every non-empty run becomes one list, however short.
pub fn segment_lists<'a, I>(lines: I) -> Vec<List>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut lists = Vec::new();
    let mut current: List = Vec::new();

    for line in lines {
        let line = line.trim();
        if is_list_item(line) {
            current.push(line.to_string());
        } else if !current.is_empty() {
            lists.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        lists.push(current);
    }

    log::debug!("segmented {} list(s)", lists.len());
    lists
}
