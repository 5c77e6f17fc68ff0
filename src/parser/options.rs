//! Decoding options and configuration.

use std::ops::RangeInclusive;

use crate::error::{Error, Result};

/// Options for decoding PDF documents into text.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Error handling mode
    pub error_mode: ErrorMode,

    /// Page selection (which pages contribute text)
    pub pages: PageSelection,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (skip pages whose text cannot be decoded).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.pages = pages;
        self
    }
}

/// Error handling mode during decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail the document on any page error
    #[default]
    Strict,
    /// Skip failing pages and continue
    Lenient,
}

/// Which pages to decode (1-indexed).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PageSelection {
    #[default]
    All,
    Range(RangeInclusive<u32>),
    Pages(Vec<u32>),
    /// Comma-separated pages and ranges, kept unexpanded
    Ranges(Vec<RangeInclusive<u32>>),
}

impl PageSelection {
    /// Check if a page number should be included.
    pub fn includes(&self, page: u32) -> bool {
        match self {
            PageSelection::All => true,
            PageSelection::Range(range) => range.contains(&page),
            PageSelection::Pages(pages) => pages.contains(&page),
            PageSelection::Ranges(ranges) => ranges.iter().any(|range| range.contains(&page)),
        }
    }

    /// Parse a selection such as `all`, `2-5` or `1,3,7-9`.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(PageSelection::All);
        }

        if !s.contains(',') {
            if let Some((start, end)) = s.split_once('-') {
                return Ok(PageSelection::Range(range(start, end)?));
            }
        }

        let ranges = s
            .split(',')
            .map(|part| match part.split_once('-') {
                Some((start, end)) => range(start, end),
                None => page(part).map(|n| n..=n),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(PageSelection::Ranges(ranges))
    }
}

fn range(start: &str, end: &str) -> Result<RangeInclusive<u32>> {
    let (first, last) = (page(start)?, page(end)?);
    if first > last {
        return Err(Error::Other(format!(
            "Invalid page range: {}-{}",
            first, last
        )));
    }
    Ok(first..=last)
}

fn page(s: &str) -> Result<u32> {
    match s.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(Error::Other(format!("Invalid page number: {:?}", s.trim()))),
    }
}
