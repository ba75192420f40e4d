//! HTML synthesis for word-processing paragraphs.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{
    Block, HtmlFragment, ListKind, Manuscript, StyledParagraph, LIST_PARAGRAPH_STYLE, NORMAL_STYLE,
};
use crate::parser::{OutputMode, SynthesisOptions, UnknownStylePolicy};

use super::{Synthesis, SynthesisReport};

static HEADING_STYLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Heading ([1-9])$").expect("heading style pattern"));

/// Convert styled paragraphs to a manuscript.
pub fn synthesize_paragraphs(
    paragraphs: &[StyledParagraph],
    options: &SynthesisOptions,
) -> Synthesis {
    HtmlSynthesizer::new(options.clone()).synthesize(paragraphs)
}

/// What a paragraph style turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphKind {
    /// `<h1>`..`<h6>`; levels above 6 are already collapsed
    Heading(u8),
    /// `<p>`
    Body,
    /// `<li>` inside a list container of the given kind
    ListItem(ListKind),
    /// No mapping for this style
    Unmapped,
}

impl ParagraphKind {
    /// Classify a paragraph by its style name.
    pub fn classify(paragraph: &StyledParagraph) -> Self {
        let style = paragraph.style.as_str();

        if style.starts_with(LIST_PARAGRAPH_STYLE) {
            return ParagraphKind::ListItem(paragraph.numbering.unwrap_or_default());
        }
        if style.starts_with("List Bullet") {
            return ParagraphKind::ListItem(ListKind::Unordered);
        }
        if style.starts_with("List Number") {
            return ParagraphKind::ListItem(ListKind::Ordered);
        }
        if let Some(level) = HEADING_STYLE
            .captures(style)
            .and_then(|caps| caps[1].parse::<u8>().ok())
        {
            return ParagraphKind::Heading(level.min(6));
        }
        if style == NORMAL_STYLE {
            return ParagraphKind::Body;
        }

        ParagraphKind::Unmapped
    }
}

/// Walks paragraphs and emits block elements.
pub struct HtmlSynthesizer {
    options: SynthesisOptions,
    report: SynthesisReport,
}

impl HtmlSynthesizer {
    /// Create a new synthesizer.
    pub fn new(options: SynthesisOptions) -> Self {
        Self {
            options,
            report: SynthesisReport::new(),
        }
    }

    /// Convert paragraphs to a manuscript, splitting off the title in split mode.
    pub fn synthesize(mut self, paragraphs: &[StyledParagraph]) -> Synthesis {
        let blocks = self.to_blocks(paragraphs);

        let manuscript = match self.options.mode {
            OutputMode::Split => {
                let (title, body) = split_title(blocks);
                let title = title
                    .map(|block| blocks_to_html(std::slice::from_ref(&block)))
                    .unwrap_or_default();
                Manuscript::split(title, blocks_to_html(&body))
            }
            OutputMode::Single => Manuscript::single(blocks_to_html(&blocks)),
        };

        Synthesis::new(manuscript, self.report)
    }

    /// Convert paragraphs to blocks.
    ///
    /// Each run of consecutive list paragraphs becomes exactly one
    /// `Block::List`; the first item decides the list kind.
    pub fn to_blocks(&mut self, paragraphs: &[StyledParagraph]) -> Vec<Block> {
        let mut blocks = Vec::new();
        let mut in_list = false;

        for paragraph in paragraphs {
            let kind = ParagraphKind::classify(paragraph);

            if let ParagraphKind::ListItem(list_kind) = kind {
                match blocks.last_mut() {
                    Some(Block::List { items, .. }) if in_list => items.push(paragraph.text.clone()),
                    _ => {
                        blocks.push(Block::list(list_kind, paragraph.text.clone()));
                        self.report.add_list();
                    }
                }
                self.report.add_list_item();
                in_list = true;
                continue;
            }

            // Any other paragraph closes the open list
            in_list = false;

            match kind {
                ParagraphKind::Heading(level) => {
                    blocks.push(Block::heading(level, paragraph.text.clone()));
                    self.report.add_heading();
                }
                ParagraphKind::Body => {
                    blocks.push(Block::paragraph(paragraph.text.clone()));
                    self.report.add_paragraph();
                }
                ParagraphKind::Unmapped => self.handle_unmapped(paragraph, &mut blocks),
                ParagraphKind::ListItem(_) => unreachable!("list items handled above"),
            }
        }

        blocks
    }

    fn handle_unmapped(&mut self, paragraph: &StyledParagraph, blocks: &mut Vec<Block>) {
        let first_sighting = !self.report.unmapped_styles.contains_key(&paragraph.style);
        let drop = self.options.unknown_styles == UnknownStylePolicy::Drop;

        if first_sighting {
            if drop {
                log::warn!("dropping paragraphs with unmapped style {:?}", paragraph.style);
            } else {
                log::warn!(
                    "rendering paragraphs with unmapped style {:?} as body text",
                    paragraph.style
                );
            }
        }

        self.report.add_unmapped(&paragraph.style, drop);
        if !drop {
            blocks.push(Block::paragraph(paragraph.text.clone()));
            self.report.add_paragraph();
        }
    }
}

/// Remove the first level-1 heading from `blocks` and return it separately.
pub fn split_title(mut blocks: Vec<Block>) -> (Option<Block>, Vec<Block>) {
    match blocks.iter().position(Block::is_title_heading) {
        Some(index) => {
            let title = blocks.remove(index);
            (Some(title), blocks)
        }
        None => (None, blocks),
    }
}

/// Render blocks to an HTML fragment, one block per line.
pub fn blocks_to_html(blocks: &[Block]) -> HtmlFragment {
    let mut html = String::new();
    for block in blocks {
        push_block(&mut html, block);
        html.push('\n');
    }
    HtmlFragment::from(html)
}

fn push_block(out: &mut String, block: &Block) {
    match block {
        Block::Heading { level, text } => {
            out.push_str(&format!("<h{0}>{1}</h{0}>", level, escape_text(text)));
        }
        Block::Paragraph { text } => {
            out.push_str(&format!("<p>{}</p>", escape_text(text)));
        }
        Block::List { kind, items } => {
            out.push_str(&format!("<{}>", kind.tag()));
            for item in items {
                out.push_str(&format!("<li>{}</li>", escape_text(item)));
            }
            out.push_str(&format!("</{}>", kind.tag()));
        }
    }
}

/// Escape text for HTML and turn manual line breaks into `<br>`.
fn escape_text(text: &str) -> String {
    escape_html(text).replace('\n', "<br>")
}

/// Escape the five HTML-special characters.
pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
