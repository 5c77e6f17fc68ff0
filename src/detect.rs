//! Input format detection.
//!
//! Documents arrive either as PDF bytes (decoded with `lopdf` before
//! analysis) or as text that was already extracted upstream. Detection only
//! looks at the leading bytes.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// PDF header magic.
const PDF_MAGIC: &[u8] = b"%PDF-";
/// Length of a header version such as `1.7`.
const VERSION_LEN: usize = 3;
/// Bytes inspected when sniffing a file on disk.
const SNIFF_LEN: usize = 1024;

/// Kind of document input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKind {
    /// PDF document with the version from its header.
    Pdf { version: String },
    /// UTF-8 text, already extracted.
    Text,
}

impl InputKind {
    /// Whether this input needs PDF decoding.
    pub fn is_pdf(&self) -> bool {
        matches!(self, InputKind::Pdf { .. })
    }
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputKind::Pdf { version } => write!(f, "PDF {}", version),
            InputKind::Text => write!(f, "text"),
        }
    }
}

/// Read the PDF header version from `data`.
///
/// Returns `Error::UnknownFormat` when the magic is missing and
/// `Error::UnsupportedVersion` when the version is not `d.d`.
pub fn pdf_version(data: &[u8]) -> Result<String> {
    let rest = data.strip_prefix(PDF_MAGIC).ok_or(Error::UnknownFormat)?;
    let raw = rest.get(..VERSION_LEN).ok_or(Error::UnknownFormat)?;

    match raw {
        [major, b'.', minor] if major.is_ascii_digit() && minor.is_ascii_digit() => {
            Ok(String::from_utf8_lossy(raw).into_owned())
        }
        _ => Err(Error::UnsupportedVersion(
            String::from_utf8_lossy(raw).into_owned(),
        )),
    }
}

/// Detect the input kind from leading bytes.
///
/// Anything that is not a PDF must be valid UTF-8 to count as text. A
/// truncated multi-byte sequence at the end of the sniffed prefix is
/// tolerated.
pub fn detect_bytes(data: &[u8]) -> Result<InputKind> {
    if data.starts_with(PDF_MAGIC) {
        return pdf_version(data).map(|version| InputKind::Pdf { version });
    }

    match std::str::from_utf8(data) {
        Ok(_) => Ok(InputKind::Text),
        Err(e) if e.error_len().is_none() => Ok(InputKind::Text),
        Err(_) => Err(Error::UnknownFormat),
    }
}

/// Detect the input kind of a file on disk.
pub fn detect_path<P: AsRef<Path>>(path: P) -> Result<InputKind> {
    let mut head = Vec::with_capacity(SNIFF_LEN);
    File::open(path)?
        .take(SNIFF_LEN as u64)
        .read_to_end(&mut head)?;
    detect_bytes(&head)
}

/// Check whether bytes start with a valid PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    pdf_version(data).is_ok()
}
