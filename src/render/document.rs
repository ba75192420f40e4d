//! Standalone HTML documents ready for printing.

use std::fmt;

use crate::layout::LayoutParams;
use crate::model::HtmlFragment;

use super::stylesheet::{stylesheet, PageTemplate, Typography};

/// A complete HTML page plus the page size it prints at.
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlDocument {
    /// Stylesheet used for this page
    pub template: PageTemplate,

    /// Full HTML source including doctype and `<style>`
    pub html: String,

    /// Page width in inches
    pub page_width_in: f64,

    /// Page height in inches
    pub page_height_in: f64,
}

impl HtmlDocument {
    /// Wrap a fragment in a document styled with `template`.
    pub fn new(
        fragment: &HtmlFragment,
        template: PageTemplate,
        layout: &LayoutParams,
        typography: &Typography,
    ) -> Self {
        let css = stylesheet(template, layout, typography);
        let html = format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<style>\n{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
            css,
            fragment.as_str()
        );

        Self {
            template,
            html,
            page_width_in: layout.trim_width,
            page_height_in: layout.trim_height,
        }
    }

    /// The HTML source.
    pub fn as_str(&self) -> &str {
        &self.html
    }
}

impl fmt::Display for HtmlDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_wraps_fragment() {
        let fragment = HtmlFragment::from("<p>Hello</p>\n");
        let doc = HtmlDocument::new(
            &fragment,
            PageTemplate::Body,
            &LayoutParams::default(),
            &Typography::default(),
        );

        assert!(doc.html.starts_with("<!DOCTYPE html>"));
        assert!(doc.html.contains("<meta charset=\"utf-8\">"));
        assert!(doc.html.contains("<body>\n<p>Hello</p>\n</body>"));
        assert!(doc.html.contains("counter(page)"));
        assert_eq!(doc.page_width_in, 6.0);
        assert_eq!(doc.page_height_in, 9.0);
    }
}
