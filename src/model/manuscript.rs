//! Source documents and the HTML they are converted into.

use super::StyledParagraph;
use crate::detect::SourceFormat;

/// A source document, read once and never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceDocument {
    /// Ordered paragraphs of a word-processing document
    Docx(Vec<StyledParagraph>),

    /// Raw Markdown text
    Markdown(String),
}

impl SourceDocument {
    /// Format the document was read from.
    pub fn format(&self) -> SourceFormat {
        match self {
            SourceDocument::Docx(_) => SourceFormat::Docx,
            SourceDocument::Markdown(_) => SourceFormat::Markdown,
        }
    }

    /// Check if the document has no content at all.
    pub fn is_empty(&self) -> bool {
        match self {
            SourceDocument::Docx(paragraphs) => paragraphs.is_empty(),
            SourceDocument::Markdown(text) => text.trim().is_empty(),
        }
    }
}

/// A piece of converted HTML.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlFragment(String);

impl HtmlFragment {
    /// Borrow the HTML text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the HTML text.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Check if the fragment is empty or whitespace only.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<String> for HtmlFragment {
    fn from(html: String) -> Self {
        Self(html)
    }
}

impl From<&str> for HtmlFragment {
    fn from(html: &str) -> Self {
        Self(html.to_string())
    }
}

impl std::fmt::Display for HtmlFragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Converted content, optionally split into a title page and a body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manuscript {
    /// Title page HTML (split mode with a level-1 heading only)
    pub title: Option<HtmlFragment>,

    /// Body HTML
    pub body: HtmlFragment,
}

impl Manuscript {
    /// A manuscript with a body only.
    pub fn single(body: impl Into<HtmlFragment>) -> Self {
        Self {
            title: None,
            body: body.into(),
        }
    }

    /// A manuscript with a title page. An empty title is dropped.
    pub fn split(title: impl Into<HtmlFragment>, body: impl Into<HtmlFragment>) -> Self {
        let title = title.into();
        Self {
            title: (!title.is_empty()).then_some(title),
            body: body.into(),
        }
    }

    /// Check if a separate title page will be rendered.
    pub fn has_title(&self) -> bool {
        self.title.is_some()
    }
}
