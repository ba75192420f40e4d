//! Paragraph-level types read from word-processing documents.

use serde::{Deserialize, Serialize};

/// Name of the built-in body text style.
pub const NORMAL_STYLE: &str = "Normal";

/// Prefix shared by the built-in list paragraph styles.
pub const LIST_PARAGRAPH_STYLE: &str = "List Paragraph";

/// A paragraph as the word processor sees it: a style name plus plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledParagraph {
    /// Style UI name (e.g. "Heading 2", "Normal", "List Paragraph")
    pub style: String,

    /// Plain text of all runs, in document order
    pub text: String,

    /// List kind resolved from the document's numbering definitions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numbering: Option<ListKind>,
}

impl StyledParagraph {
    /// Create a paragraph with the given style name and text.
    pub fn new(style: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            style: style.into(),
            text: text.into(),
            numbering: None,
        }
    }

    /// Create a body text paragraph.
    pub fn normal(text: impl Into<String>) -> Self {
        Self::new(NORMAL_STYLE, text)
    }

    /// Create a "Heading N" paragraph.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::new(format!("Heading {}", level), text)
    }

    /// Create a "List Paragraph" item.
    pub fn list_item(text: impl Into<String>) -> Self {
        Self::new(LIST_PARAGRAPH_STYLE, text)
    }

    /// Attach resolved numbering information.
    pub fn with_numbering(mut self, kind: ListKind) -> Self {
        self.numbering = Some(kind);
        self
    }

    /// Check if the paragraph has no visible text.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Kind of list container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    /// Bulleted list (`<ul>`)
    #[default]
    Unordered,
    /// Numbered list (`<ol>`)
    Ordered,
}

impl ListKind {
    /// HTML element name of the container.
    pub fn tag(&self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }

    /// Map an OOXML `w:numFmt` value to a list kind.
    pub fn from_num_fmt(num_fmt: &str) -> Self {
        match num_fmt {
            "bullet" | "none" | "" => ListKind::Unordered,
            _ => ListKind::Ordered,
        }
    }
}
