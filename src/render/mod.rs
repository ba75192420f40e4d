//! Rendering module: HTML synthesis, print stylesheets and PDF output.

mod document;
pub mod html;
pub mod markdown;
mod options;
mod pdf;
mod result;
mod stylesheet;

pub use document::HtmlDocument;
pub use html::{blocks_to_html, split_title, synthesize_paragraphs, HtmlSynthesizer, ParagraphKind};
pub use markdown::{markdown_to_html, split_markdown, synthesize_markdown};
pub use options::RenderOptions;
pub use pdf::{ChromeRenderer, PdfRenderer};
pub use result::{Synthesis, SynthesisReport};
pub use stylesheet::{stylesheet, PageTemplate, Typography};
