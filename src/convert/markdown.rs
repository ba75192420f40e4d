//! Markdown reader.

use crate::detect::SourceFormat;
use crate::error::{Error, Result};
use crate::model::SourceDocument;
use std::fs;
use std::path::Path;

use super::SourceReader;

/// Reads `.md` files as UTF-8 text.
#[derive(Debug, Clone, Default)]
pub struct MarkdownReader {
    _private: (),
}

impl MarkdownReader {
    /// Create a new Markdown reader.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl SourceReader for MarkdownReader {
    fn format(&self) -> SourceFormat {
        SourceFormat::Markdown
    }

    fn supported_extensions(&self) -> &[&str] {
        &["md"]
    }

    fn name(&self) -> &str {
        "markdown"
    }

    fn read(&self, path: &Path) -> Result<SourceDocument> {
        let bytes = fs::read(path)?;
        self.read_bytes(&bytes)
    }

    fn read_bytes(&self, bytes: &[u8]) -> Result<SourceDocument> {
        // A leading byte-order mark is not part of the text
        let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
        let text = std::str::from_utf8(bytes)
            .map_err(|e| Error::Encoding(format!("Markdown source is not UTF-8: {}", e)))?;
        Ok(SourceDocument::Markdown(text.to_string()))
    }
}
