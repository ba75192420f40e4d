//! Source format detection.
//!
//! The format is chosen from the file extension alone, before anything is
//! read. Byte-level checks are only used to reject a `.docx` that is not a
//! ZIP container.

use crate::error::{Error, Result};
use std::path::Path;

/// Input formats paperback can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    /// Office Open XML word-processing document (`.docx`).
    Docx,
    /// Markdown text (`.md`).
    Markdown,
}

impl SourceFormat {
    /// Map an extension (case-insensitive, no dot) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "docx" => Some(SourceFormat::Docx),
            "md" => Some(SourceFormat::Markdown),
            _ => None,
        }
    }

    /// Detect the format of a path from its extension.
    ///
    /// # Example
    /// ```
    /// use paperback::detect::SourceFormat;
    ///
    /// assert_eq!(SourceFormat::from_path("book.md").unwrap(), SourceFormat::Markdown);
    /// assert!(SourceFormat::from_path("notes.txt").is_err());
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        Self::from_extension(ext).ok_or_else(|| {
            if ext.is_empty() {
                Error::UnsupportedFormat(format!("{} has no extension", path.display()))
            } else {
                Error::UnsupportedFormat(format!(".{}", ext))
            }
        })
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFormat::Docx => write!(f, "Word document"),
            SourceFormat::Markdown => write!(f, "Markdown"),
        }
    }
}

/// Local file header signature of a ZIP archive: `PK\x03\x04`
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Check if bytes start with a ZIP local file header.
pub fn is_zip_bytes(data: &[u8]) -> bool {
    data.starts_with(ZIP_MAGIC)
}
