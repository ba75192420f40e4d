//! Word document reader.

use crate::detect::SourceFormat;
use crate::error::Result;
use crate::model::SourceDocument;
use crate::parser::DocxParser;
use std::path::Path;

use super::SourceReader;

/// Reads `.docx` files into styled paragraphs.
#[derive(Debug, Clone, Default)]
pub struct DocxReader {
    _private: (),
}

impl DocxReader {
    /// Create a new Word reader.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl SourceReader for DocxReader {
    fn format(&self) -> SourceFormat {
        SourceFormat::Docx
    }

    fn supported_extensions(&self) -> &[&str] {
        &["docx"]
    }

    fn name(&self) -> &str {
        "docx"
    }

    fn read(&self, path: &Path) -> Result<SourceDocument> {
        let paragraphs = DocxParser::open(path)?.paragraphs()?;
        log::debug!("{}: {} paragraphs", path.display(), paragraphs.len());
        Ok(SourceDocument::Docx(paragraphs))
    }

    fn read_bytes(&self, bytes: &[u8]) -> Result<SourceDocument> {
        let paragraphs = DocxParser::from_bytes(bytes)?.paragraphs()?;
        Ok(SourceDocument::Docx(paragraphs))
    }
}
