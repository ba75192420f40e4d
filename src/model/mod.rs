//! Document model types.
//!
//! The model sits between reading a source document and producing HTML:
//! styled paragraphs come in from `.docx` files, blocks and fragments go out
//! to the PDF renderer.

mod block;
mod manuscript;
mod paragraph;

pub use block::Block;
pub use manuscript::{HtmlFragment, Manuscript, SourceDocument};
pub use paragraph::{ListKind, StyledParagraph, LIST_PARAGRAPH_STYLE, NORMAL_STYLE};
