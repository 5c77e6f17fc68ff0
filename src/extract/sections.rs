//! Section segmentation.

use crate::model::Section;

use super::classify::is_header;

/// Group lines under the header lines that precede them.
///
/// Every line is tested as a header, including lines that also look like
/// table rows. Lines before the first header are dropped and blank lines are
/// skipped.
pub fn segment_sections<'a, I>(lines: I) -> Vec<Section>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut sections = Vec::new();
    let mut current: Option<Section> = None;

    for line in lines {
        let line = line.trim();

        if is_header(line) {
            sections.extend(current.replace(Section::new(line)));
        } else if let Some(section) = current.as_mut() {
            if !line.is_empty() {
                section.content.push(line.to_string());
            }
        }
    }

    sections.extend(current);

    log::debug!("segmented {} section(s)", sections.len());
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_between_headers() {
        let text = "\
preamble is dropped
EXECUTIVE SUMMARY
Revenue grew this year.

Costs were flat.
Next Steps
hire two engineers";
        let sections = segment_sections(text.split('\n'));

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "EXECUTIVE SUMMARY");
        assert_eq!(
            sections[0].content,
            vec!["Revenue grew this year.", "Costs were flat."]
        );
        assert_eq!(sections[1].title, "Next Steps");
        assert_eq!(sections[1].content, vec!["hire two engineers"]);
    }

    #[test]
    fn test_consecutive_headers_make_empty_sections() {
        let sections = segment_sections("PART ONE\nPART TWO\nbody".split('\n'));
        assert_eq!(sections.len(), 2);
        assert!(sections[0].content.is_empty());
        assert_eq!(sections[1].content, vec!["body"]);
    }

    #[test]
    fn test_table_like_header_line_opens_section() {
        // Also a table row; sections do not care.
        let sections = segment_sections("Q1 2024  SALES  TOTAL\nbody".split('\n'));
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Q1 2024  SALES  TOTAL");
    }

    #[test]
    fn test_no_headers() {
        assert!(segment_sections("just one sentence here.".split('\n')).is_empty());
    }
}
