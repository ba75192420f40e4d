//! # paperback
//!
//! Print-ready paperback PDFs from Word documents and Markdown.
//!
//! This library reads a `.docx` or `.md` manuscript, turns it into HTML,
//! styles it for a paperback trim size with a binding-side gutter and
//! running page numbers, and prints it to PDF through headless Chrome.
//!
//! ## Quick Start
//!
//! ```no_run
//! use paperback::{ChromeRenderer, LayoutParams, Paperback, RenderOptions};
//!
//! fn main() -> paperback::Result<()> {
//!     let renderer = ChromeRenderer::launch(&RenderOptions::default())?;
//!
//!     Paperback::new()
//!         .read("manuscript.docx")?
//!         .write_pdf(&LayoutParams::default(), &renderer, "book.pdf")?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Read**: [`read_source`] picks a reader by file extension
//! - **Synthesize**: [`synthesize`] builds the HTML manuscript, optionally
//!   with the first level-1 heading split off as a title page
//! - **Render**: [`render_manuscript`] prints each part with a
//!   [`PdfRenderer`] and merges the parts with [`assemble()`]
//! - **Write**: [`write_pdf`] replaces the output file atomically

pub mod assemble;
pub mod convert;
pub mod detect;
pub mod error;
pub mod layout;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use assemble::{assemble, page_count};
pub use convert::{DocxReader, MarkdownReader, ReaderRegistry, SourceReader};
pub use detect::SourceFormat;
pub use error::{Error, Result};
pub use layout::{LayoutInput, LayoutParams, LayoutPrompter};
pub use model::{Block, HtmlFragment, ListKind, Manuscript, SourceDocument, StyledParagraph};
pub use parser::{OutputMode, SynthesisOptions, UnknownStylePolicy};
pub use render::{
    ChromeRenderer, HtmlDocument, PageTemplate, PdfRenderer, RenderOptions, Synthesis,
    SynthesisReport, Typography,
};

use std::io::Write;
use std::path::Path;

/// Read a source file with the reader registered for its extension.
///
/// # Example
///
/// ```no_run
/// use paperback::{read_source, SourceFormat};
///
/// let source = read_source("chapter.md").unwrap();
/// assert_eq!(source.format(), SourceFormat::Markdown);
/// ```
pub fn read_source<P: AsRef<Path>>(path: P) -> Result<SourceDocument> {
    ReaderRegistry::with_defaults().read(path.as_ref())
}

/// Turn a source document into an HTML manuscript.
pub fn synthesize(source: &SourceDocument, options: &SynthesisOptions) -> Synthesis {
    match source {
        SourceDocument::Docx(paragraphs) => render::synthesize_paragraphs(paragraphs, options),
        SourceDocument::Markdown(markdown) => render::synthesize_markdown(markdown, options),
    }
}

/// Build the printable documents for a manuscript, title page first.
pub fn html_documents(
    manuscript: &Manuscript,
    layout: &LayoutParams,
    typography: &Typography,
) -> Vec<HtmlDocument> {
    let mut documents = Vec::with_capacity(2);
    if let Some(ref title) = manuscript.title {
        documents.push(HtmlDocument::new(
            title,
            PageTemplate::TitlePage,
            layout,
            typography,
        ));
    }
    documents.push(HtmlDocument::new(
        &manuscript.body,
        PageTemplate::Body,
        layout,
        typography,
    ));
    documents
}

/// Render a manuscript to a single PDF.
///
/// With a title, the title page and the body are rendered separately and
/// the title pages come first in the result. Without one, only the body is
/// rendered.
pub fn render_manuscript(
    manuscript: &Manuscript,
    layout: &LayoutParams,
    typography: &Typography,
    renderer: &dyn PdfRenderer,
) -> Result<Vec<u8>> {
    layout.validate()?;

    let documents = html_documents(manuscript, layout, typography);
    let mut parts = Vec::with_capacity(documents.len());
    for document in &documents {
        log::debug!("rendering {:?}", document.template);
        parts.push(renderer.render(document)?);
    }

    if parts.len() == 1 {
        if let Some(body) = parts.pop() {
            return Ok(body);
        }
    }
    assemble(&parts)
}

/// Write PDF bytes to `path`, replacing any existing file atomically.
///
/// The bytes go to a temporary file in the target directory first, so a
/// failure never leaves a partial PDF behind.
pub fn write_pdf<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(bytes)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| Error::Io(e.error))?;

    log::info!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Builder for turning manuscripts into PDFs.
///
/// # Example
///
/// ```no_run
/// use paperback::{LayoutInput, OutputMode, Paperback, UnknownStylePolicy};
///
/// let result = Paperback::new()
///     .with_mode(OutputMode::Single)
///     .with_unknown_styles(UnknownStylePolicy::Drop)
///     .read("manuscript.docx")?;
///
/// let layout = LayoutInput::new().with_trim_width(5.5).resolve()?;
/// for document in result.html_documents(&layout)? {
///     println!("{}", document.html.len());
/// }
/// # Ok::<(), paperback::Error>(())
/// ```
pub struct Paperback {
    options: SynthesisOptions,
    typography: Typography,
    registry: ReaderRegistry,
}

impl Paperback {
    /// Create a new Paperback builder.
    pub fn new() -> Self {
        Self {
            options: SynthesisOptions::default(),
            typography: Typography::default(),
            registry: ReaderRegistry::with_defaults(),
        }
    }

    /// Set split or single output.
    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.options = self.options.with_mode(mode);
        self
    }

    /// Set how paragraphs with unknown styles are handled.
    pub fn with_unknown_styles(mut self, policy: UnknownStylePolicy) -> Self {
        self.options = self.options.with_unknown_styles(policy);
        self
    }

    /// Set typography.
    pub fn with_typography(mut self, typography: Typography) -> Self {
        self.typography = typography;
        self
    }

    /// Use a custom reader registry.
    pub fn with_registry(mut self, registry: ReaderRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Read and synthesize a source file.
    pub fn read<P: AsRef<Path>>(self, path: P) -> Result<PaperbackResult> {
        let source = self.registry.read(path.as_ref())?;
        Ok(self.finish(&source))
    }

    /// Read and synthesize source bytes of the format given by `ext`.
    pub fn read_bytes(self, data: &[u8], ext: &str) -> Result<PaperbackResult> {
        let source = self.registry.read_bytes(data, ext)?;
        Ok(self.finish(&source))
    }

    fn finish(self, source: &SourceDocument) -> PaperbackResult {
        PaperbackResult {
            format: source.format(),
            synthesis: synthesize(source, &self.options),
            typography: self.typography,
        }
    }
}

impl Default for Paperback {
    fn default() -> Self {
        Self::new()
    }
}

/// A synthesized manuscript, ready to render.
#[derive(Debug, Clone)]
pub struct PaperbackResult {
    format: SourceFormat,
    synthesis: Synthesis,
    typography: Typography,
}

impl PaperbackResult {
    /// Format of the source file.
    pub fn format(&self) -> SourceFormat {
        self.format
    }

    /// Get the manuscript.
    pub fn manuscript(&self) -> &Manuscript {
        &self.synthesis.manuscript
    }

    /// Get the synthesis report.
    pub fn report(&self) -> &SynthesisReport {
        &self.synthesis.report
    }

    /// Build the printable HTML documents, title page first.
    pub fn html_documents(&self, layout: &LayoutParams) -> Result<Vec<HtmlDocument>> {
        layout.validate()?;
        Ok(html_documents(self.manuscript(), layout, &self.typography))
    }

    /// Render to PDF bytes.
    pub fn render(&self, layout: &LayoutParams, renderer: &dyn PdfRenderer) -> Result<Vec<u8>> {
        render_manuscript(self.manuscript(), layout, &self.typography, renderer)
    }

    /// Render and write the PDF to `path`.
    pub fn write_pdf<P: AsRef<Path>>(
        &self,
        layout: &LayoutParams,
        renderer: &dyn PdfRenderer,
        path: P,
    ) -> Result<()> {
        let bytes = self.render(layout, renderer)?;
        write_pdf(path, &bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records the templates it was asked to render.
    #[derive(Default)]
    struct Recorder {
        templates: RefCell<Vec<PageTemplate>>,
    }

    impl PdfRenderer for Recorder {
        fn render(&self, document: &HtmlDocument) -> Result<Vec<u8>> {
            self.templates.borrow_mut().push(document.template);
            Ok(document.html.as_bytes().to_vec())
        }
    }

    #[test]
    fn test_paperback_builder() {
        let paperback = Paperback::new()
            .with_mode(OutputMode::Single)
            .with_unknown_styles(UnknownStylePolicy::Drop)
            .with_typography(Typography::new().with_font_family("Garamond"));

        assert_eq!(paperback.options.mode, OutputMode::Single);
        assert_eq!(paperback.options.unknown_styles, UnknownStylePolicy::Drop);
        assert_eq!(paperback.typography.font_family, "Garamond");
    }

    #[test]
    fn test_synthesize_dispatch() {
        let docx = SourceDocument::Docx(vec![StyledParagraph::normal("Hi")]);
        let markdown = SourceDocument::Markdown("Hi".into());
        let options = SynthesisOptions::new().single();

        assert_eq!(synthesize(&docx, &options).manuscript.body.as_str(), "<p>Hi</p>\n");
        assert_eq!(
            synthesize(&markdown, &options).manuscript.body.as_str(),
            "<p>Hi</p>\n"
        );
    }

    #[test]
    fn test_render_without_title_renders_body_only() {
        let recorder = Recorder::default();
        let manuscript = Manuscript::single("<p>Body</p>\n");

        let bytes = render_manuscript(
            &manuscript,
            &LayoutParams::default(),
            &Typography::default(),
            &recorder,
        )
        .unwrap();

        assert_eq!(*recorder.templates.borrow(), vec![PageTemplate::Body]);
        assert!(String::from_utf8(bytes).unwrap().contains("<p>Body</p>"));
    }

    #[test]
    fn test_render_rejects_invalid_layout() {
        let recorder = Recorder::default();
        let layout = LayoutParams {
            trim_width: 0.5,
            ..LayoutParams::default()
        };

        let result = render_manuscript(
            &Manuscript::single("<p>x</p>"),
            &layout,
            &Typography::default(),
            &recorder,
        );
        assert!(matches!(result, Err(Error::InvalidLayout(_))));
        assert!(recorder.templates.borrow().is_empty());
    }

    #[test]
    fn test_html_documents_title_first() {
        let manuscript = Manuscript::split("<h1>T</h1>\n", "<p>B</p>\n");
        let documents = html_documents(&manuscript, &LayoutParams::default(), &Typography::default());

        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].template, PageTemplate::TitlePage);
        assert_eq!(documents[1].template, PageTemplate::Body);
    }

    #[test]
    fn test_write_pdf_replaces_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pdf");
        std::fs::write(&path, b"old").unwrap();

        write_pdf(&path, b"%PDF-new").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-new");
    }

    #[test]
    fn test_write_pdf_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.pdf");

        assert!(matches!(write_pdf(&path, b"%PDF"), Err(Error::Io(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_read_bytes_unsupported() {
        let result = Paperback::new().read_bytes(b"text", "txt");
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }
}
