//! Print stylesheets for the title page and the body.

use serde::{Deserialize, Serialize};

use crate::layout::LayoutParams;

/// Which stylesheet a rendered document uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageTemplate {
    /// Page geometry and a centered title; no page numbers
    TitlePage,
    /// Page geometry, justified indented paragraphs, chapter breaks and page numbers
    Body,
}

/// Typography applied by both templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    /// Font family for all text
    pub font_family: String,

    /// First-line indent for body paragraphs, as a CSS length
    pub paragraph_indent: String,
}

impl Typography {
    /// Create typography with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font family.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Set the paragraph indent.
    pub fn with_paragraph_indent(mut self, indent: impl Into<String>) -> Self {
        self.paragraph_indent = indent.into();
        self
    }
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_family: "Times New Roman".to_string(),
            paragraph_indent: "20px".to_string(),
        }
    }
}

/// Build the stylesheet for `template`.
///
/// Pages on the right (recto) get the gutter on their left edge and pages
/// on the left (verso) get it on their right edge, so it always lands on
/// the bound side.
pub fn stylesheet(template: PageTemplate, layout: &LayoutParams, typography: &Typography) -> String {
    let mut css = String::new();

    css.push_str(&format!(
        "@page {{ size: {}in {}in; margin: {}in; }}\n",
        layout.trim_width, layout.trim_height, layout.outside_margin
    ));
    css.push_str(&format!(
        "@page :right {{ margin-left: {}in; }}\n",
        layout.inside_gutter
    ));
    css.push_str(&format!(
        "@page :left {{ margin-right: {}in; }}\n",
        layout.inside_gutter
    ));
    css.push_str(&format!(
        "body {{ font-family: '{}'; font-size: {}pt; }}\n",
        css_string(&typography.font_family),
        layout.font_size
    ));
    match template {
        PageTemplate::TitlePage => css.push_str("h1 { text-align: center; }\n"),
        PageTemplate::Body => css.push_str("h1, h2 { text-align: center; }\n"),
    }

    if template == PageTemplate::Body {
        css.push_str("h2 { page-break-before: always; }\n");
        css.push_str(&format!(
            "p {{ text-indent: {}; text-align: justify; }}\n",
            typography.paragraph_indent
        ));
        css.push_str("@page :left { @bottom-left { content: \"Page \" counter(page); } }\n");
        css.push_str("@page :right { @bottom-right { content: \"Page \" counter(page); } }\n");
    }

    css
}

/// Escape a value for use inside a single-quoted CSS string.
fn css_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}
