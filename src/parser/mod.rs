//! PDF decoding front end.

mod options;
mod pdf_parser;

pub use options::{ErrorMode, PageSelection, ParseOptions};
pub use pdf_parser::PdfParser;
