//! Source readers with a plugin architecture for input formats.
//!
//! A [`SourceReader`] turns a file (or its bytes) into a
//! [`SourceDocument`]. The [`ReaderRegistry`] maps file extensions to
//! readers and dispatches on the extension of the input path.
//!
//! # Example
//!
//! ```no_run
//! use paperback::convert::ReaderRegistry;
//! use std::path::Path;
//!
//! fn main() -> paperback::Result<()> {
//!     let registry = ReaderRegistry::with_defaults();
//!     let source = registry.read(Path::new("manuscript.docx"))?;
//!     println!("{:?}", source.format());
//!     Ok(())
//! }
//! ```

mod docx;
mod markdown;

pub use docx::DocxReader;
pub use markdown::MarkdownReader;

use crate::detect::SourceFormat;
use crate::error::{Error, Result};
use crate::model::SourceDocument;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Trait for source readers.
///
/// Implement this trait to add support for a new input format.
pub trait SourceReader: Send + Sync {
    /// Format this reader produces.
    fn format(&self) -> SourceFormat;

    /// Get the supported file extensions for this reader.
    ///
    /// Extensions should be lowercase without the leading dot (e.g., `["md"]`).
    fn supported_extensions(&self) -> &[&str];

    /// Get the name of this reader.
    fn name(&self) -> &str;

    /// Read a file at the given path.
    fn read(&self, path: &Path) -> Result<SourceDocument>;

    /// Read from bytes.
    fn read_bytes(&self, bytes: &[u8]) -> Result<SourceDocument>;

    /// Check if this reader supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry for source readers.
pub struct ReaderRegistry {
    readers: HashMap<String, Arc<dyn SourceReader>>,
    by_name: HashMap<String, Arc<dyn SourceReader>>,
}

impl ReaderRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            readers: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the Word and Markdown readers.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(DocxReader::new()));
        registry.register(Arc::new(MarkdownReader::new()));
        registry
    }

    /// Register a reader for all its supported extensions.
    pub fn register(&mut self, reader: Arc<dyn SourceReader>) {
        for ext in reader.supported_extensions() {
            self.readers.insert(ext.to_lowercase(), reader.clone());
        }
        self.by_name.insert(reader.name().to_lowercase(), reader);
    }

    /// Get a reader by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn SourceReader>> {
        self.readers.get(&ext.to_lowercase()).cloned()
    }

    /// Get a reader by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn SourceReader>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.readers.contains_key(&ext.to_lowercase())
    }

    /// Get all supported extensions, sorted.
    pub fn supported_extensions(&self) -> Vec<&str> {
        let mut extensions: Vec<&str> = self.readers.keys().map(|s| s.as_str()).collect();
        extensions.sort_unstable();
        extensions
    }

    /// Find the reader for a path without reading it.
    pub fn reader_for(&self, path: &Path) -> Result<Arc<dyn SourceReader>> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        if ext.is_empty() {
            return Err(Error::UnsupportedFormat(format!(
                "{} has no extension",
                path.display()
            )));
        }

        self.get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedFormat(format!(".{}", ext)))
    }

    /// Read a file using the reader registered for its extension.
    pub fn read(&self, path: &Path) -> Result<SourceDocument> {
        let reader = self.reader_for(path)?;
        log::info!("reading {} with the {} reader", path.display(), reader.name());
        reader.read(path)
    }

    /// Read bytes using the reader registered for `ext`.
    pub fn read_bytes(&self, bytes: &[u8], ext: &str) -> Result<SourceDocument> {
        let reader = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedFormat(format!(".{}", ext)))?;

        reader.read_bytes(bytes)
    }
}

impl Default for ReaderRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
