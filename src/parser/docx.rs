//! Word document (`.docx`) parser.
//!
//! Reads the paragraph list of `word/document.xml`, resolving each
//! paragraph's style id to its display name through `word/styles.xml` and
//! its list numbering through `word/numbering.xml`.

use std::collections::HashMap;
use std::fs;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use roxmltree::Node;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::detect::is_zip_bytes;
use crate::error::{Error, Result};
use crate::model::{ListKind, StyledParagraph, NORMAL_STYLE};

const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const DOCUMENT_PART: &str = "word/document.xml";
const STYLES_PART: &str = "word/styles.xml";
const NUMBERING_PART: &str = "word/numbering.xml";

/// Parser for `.docx` files.
#[derive(Debug, Default)]
pub struct DocxParser {
    styles: StyleTable,
    numbering: Numbering,
    document_xml: String,
}

impl DocxParser {
    /// Open a `.docx` file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Load a `.docx` from memory.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if !is_zip_bytes(data) {
            return Err(Error::InvalidDocx("file is not a ZIP archive".to_string()));
        }

        let mut zip = ZipArchive::new(Cursor::new(data))?;

        let styles = match read_part(&mut zip, STYLES_PART)? {
            Some(xml) => StyleTable::parse(&xml)?,
            None => StyleTable::default(),
        };
        let numbering = match read_part(&mut zip, NUMBERING_PART)? {
            Some(xml) => Numbering::parse(&xml)?,
            None => Numbering::default(),
        };
        let document_xml = read_part(&mut zip, DOCUMENT_PART)?.ok_or_else(|| {
            Error::InvalidDocx(format!("missing {} (is this a .docx file?)", DOCUMENT_PART))
        })?;

        log::debug!(
            "docx: {} paragraph styles, {} numbering definitions",
            styles.names.len(),
            numbering.num_to_abstract.len()
        );

        Ok(Self {
            styles,
            numbering,
            document_xml,
        })
    }

    /// Extract the body paragraphs in document order.
    pub fn paragraphs(&self) -> Result<Vec<StyledParagraph>> {
        let xml = roxmltree::Document::parse(&self.document_xml)?;
        let body = wml(xml.root_element(), "body")
            .ok_or_else(|| Error::InvalidDocx("missing w:body".to_string()))?;

        let mut paragraphs = Vec::new();
        for node in body.children().filter(|n| n.is_element()) {
            match node.tag_name().name() {
                "p" if is_wml(node) => paragraphs.push(self.parse_paragraph(node)),
                "sectPr" => {}
                other => log::debug!("docx: skipping body element <{}>", other),
            }
        }

        Ok(paragraphs)
    }

    fn parse_paragraph(&self, p: Node) -> StyledParagraph {
        let ppr = wml(p, "pPr");
        let style_id = ppr.and_then(|n| wml_attr(n, "pStyle"));
        let style = self.styles.display_name(style_id);

        let num_ref = match ppr.and_then(|n| wml(n, "numPr")) {
            Some(num_pr) => NumRef::from_node(num_pr),
            None => style_id.and_then(|id| self.styles.num_refs.get(id).cloned()),
        };

        let mut text = String::new();
        collect_text(p, &mut text);

        let mut paragraph = StyledParagraph::new(style, text);
        if let Some(kind) = num_ref.and_then(|r| self.numbering.kind(&r)) {
            paragraph = paragraph.with_numbering(kind);
        }
        paragraph
    }
}

/// Parse a `.docx` file into styled paragraphs.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<StyledParagraph>> {
    DocxParser::open(path)?.paragraphs()
}

/// Parse `.docx` bytes into styled paragraphs.
pub fn parse_bytes(data: &[u8]) -> Result<Vec<StyledParagraph>> {
    DocxParser::from_bytes(data)?.paragraphs()
}

fn read_part<R: Read + Seek>(zip: &mut ZipArchive<R>, name: &str) -> Result<Option<String>> {
    let mut file = match zip.by_name(name) {
        Ok(file) => file,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| Error::InvalidDocx(format!("{}: {}", name, e)))?;
    Ok(Some(content))
}

fn is_wml(node: Node) -> bool {
    node.tag_name().namespace() == Some(WML_NS)
}

fn wml<'a>(node: Node<'a, 'a>, name: &str) -> Option<Node<'a, 'a>> {
    node.children()
        .find(|n| n.tag_name().name() == name && is_wml(*n))
}

fn wml_attr<'a>(node: Node<'a, 'a>, child: &str) -> Option<&'a str> {
    wml(node, child).and_then(|n| n.attribute((WML_NS, "val")))
}

/// Append the visible text of a paragraph subtree.
fn collect_text(node: Node, out: &mut String) {
    for child in node.children().filter(|n| n.is_element() && is_wml(*n)) {
        match child.tag_name().name() {
            "t" => out.push_str(child.text().unwrap_or_default()),
            "tab" => out.push('\t'),
            "br" if child.attribute((WML_NS, "type")) == Some("page") => {}
            "br" | "cr" => out.push('\n'),
            "noBreakHyphen" => out.push('-'),
            // Properties, deleted revisions and text boxes carry no paragraph text.
            "pPr" | "rPr" | "del" | "txbxContent" => {}
            _ => collect_text(child, out),
        }
    }
}

/// Map an internal built-in style name to the name Word shows in its UI.
fn ui_style_name(name: &str) -> String {
    let lower = name.to_ascii_lowercase();
    let builtin = matches!(lower.as_str(), "caption" | "footer" | "header" | "title")
        || lower
            .strip_prefix("heading ")
            .is_some_and(|n| n.len() == 1 && n.as_bytes()[0].is_ascii_digit());

    if builtin && name == lower {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    } else {
        name.to_string()
    }
}

/// Reference from a paragraph (or style) into the numbering definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
struct NumRef {
    num_id: String,
    level: u8,
}

impl NumRef {
    fn from_node(num_pr: Node) -> Option<Self> {
        let num_id = wml_attr(num_pr, "numId")?;
        // numId 0 removes numbering inherited from the style
        if num_id == "0" {
            return None;
        }
        let level = wml_attr(num_pr, "ilvl")
            .and_then(|v| v.parse::<u8>().ok())
            .unwrap_or(0);
        Some(Self {
            num_id: num_id.to_string(),
            level,
        })
    }
}

/// Paragraph style names from `word/styles.xml`.
#[derive(Debug, Default)]
struct StyleTable {
    names: HashMap<String, String>,
    num_refs: HashMap<String, NumRef>,
    default_paragraph: Option<String>,
}

impl StyleTable {
    fn parse(xml: &str) -> Result<Self> {
        let doc = roxmltree::Document::parse(xml)?;
        let mut table = Self::default();

        for style in doc.root_element().children() {
            if style.tag_name().name() != "style" || !is_wml(style) {
                continue;
            }
            if style.attribute((WML_NS, "type")) != Some("paragraph") {
                continue;
            }
            let Some(style_id) = style.attribute((WML_NS, "styleId")) else {
                continue;
            };

            let name = ui_style_name(wml_attr(style, "name").unwrap_or(style_id));
            if matches!(style.attribute((WML_NS, "default")), Some("1") | Some("true")) {
                table.default_paragraph = Some(name.clone());
            }
            if let Some(num_ref) = wml(style, "pPr")
                .and_then(|n| wml(n, "numPr"))
                .and_then(NumRef::from_node)
            {
                table.num_refs.insert(style_id.to_string(), num_ref);
            }
            table.names.insert(style_id.to_string(), name);
        }

        Ok(table)
    }

    fn default_name(&self) -> String {
        self.default_paragraph
            .clone()
            .unwrap_or_else(|| NORMAL_STYLE.to_string())
    }

    /// Resolve a paragraph's style id to a display name.
    ///
    /// Unknown ids resolve to the default paragraph style, unless the
    /// package has no style definitions at all.
    fn display_name(&self, style_id: Option<&str>) -> String {
        match style_id {
            None => self.default_name(),
            Some(id) => match self.names.get(id) {
                Some(name) => name.clone(),
                None if self.names.is_empty() => ui_style_name(id),
                None => self.default_name(),
            },
        }
    }
}

/// List formats from `word/numbering.xml`.
#[derive(Debug, Default)]
struct Numbering {
    abstract_formats: HashMap<String, HashMap<u8, String>>,
    num_to_abstract: HashMap<String, String>,
}

impl Numbering {
    fn parse(xml: &str) -> Result<Self> {
        let doc = roxmltree::Document::parse(xml)?;
        let mut numbering = Self::default();

        for node in doc.root_element().children().filter(|n| is_wml(*n)) {
            match node.tag_name().name() {
                "abstractNum" => {
                    let Some(abstract_id) = node.attribute((WML_NS, "abstractNumId")) else {
                        continue;
                    };
                    let levels = node
                        .children()
                        .filter(|n| n.tag_name().name() == "lvl" && is_wml(*n))
                        .filter_map(|lvl| {
                            let level = lvl.attribute((WML_NS, "ilvl"))?.parse::<u8>().ok()?;
                            let num_fmt = wml_attr(lvl, "numFmt").unwrap_or("bullet");
                            Some((level, num_fmt.to_string()))
                        })
                        .collect();
                    numbering
                        .abstract_formats
                        .insert(abstract_id.to_string(), levels);
                }
                "num" => {
                    let Some(num_id) = node.attribute((WML_NS, "numId")) else {
                        continue;
                    };
                    if let Some(abstract_id) = wml_attr(node, "abstractNumId") {
                        numbering
                            .num_to_abstract
                            .insert(num_id.to_string(), abstract_id.to_string());
                    }
                }
                _ => {}
            }
        }

        Ok(numbering)
    }

    fn kind(&self, num_ref: &NumRef) -> Option<ListKind> {
        let abstract_id = self.num_to_abstract.get(&num_ref.num_id)?;
        let levels = self.abstract_formats.get(abstract_id)?;
        levels
            .get(&num_ref.level)
            .map(|fmt| ListKind::from_num_fmt(fmt))
    }
}
