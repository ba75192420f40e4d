//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::io::{Cursor, Write};

use lopdf::{dictionary, Document, Object, Stream};
use paperback::error::Result;
use paperback::{HtmlDocument, PageTemplate, PdfRenderer};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Build a PDF with one page per marker. Each page stores its marker under
/// a custom `Marker` key so tests can check page order after merging.
pub fn marked_pdf(markers: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let kids: Vec<Object> = markers
        .iter()
        .map(|marker| {
            let content_id = doc.add_object(Stream::new(dictionary! {}, Vec::new()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Marker" => Object::string_literal(*marker),
            });
            Object::Reference(page_id)
        })
        .collect();

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Count" => kids.len() as i64,
            "Kids" => kids,
            "MediaBox" => vec![0.into(), 0.into(), 432.into(), 648.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

/// Markers of every page in order.
pub fn page_markers(bytes: &[u8]) -> Vec<String> {
    let doc = Document::load_mem(bytes).unwrap();
    doc.get_pages()
        .into_values()
        .map(|id| {
            let page = doc.get_object(id).and_then(Object::as_dict).unwrap();
            let marker = page.get(b"Marker").and_then(Object::as_str).unwrap();
            String::from_utf8_lossy(marker).into_owned()
        })
        .collect()
}

/// Renderer that skips the browser.
///
/// Title pages become one page marked `title`; bodies become `pages`
/// pages marked `body-1`, `body-2`, ... Every rendered document is kept.
pub struct MockRenderer {
    pub body_pages: usize,
    pub rendered: RefCell<Vec<HtmlDocument>>,
}

impl MockRenderer {
    pub fn new(body_pages: usize) -> Self {
        Self {
            body_pages,
            rendered: RefCell::new(Vec::new()),
        }
    }

    pub fn templates(&self) -> Vec<PageTemplate> {
        self.rendered.borrow().iter().map(|d| d.template).collect()
    }
}

impl PdfRenderer for MockRenderer {
    fn render(&self, document: &HtmlDocument) -> Result<Vec<u8>> {
        self.rendered.borrow_mut().push(document.clone());
        let bytes = match document.template {
            PageTemplate::TitlePage => marked_pdf(&["title"]),
            PageTemplate::Body => {
                let names: Vec<String> = (1..=self.body_pages).map(|i| format!("body-{}", i)).collect();
                let refs: Vec<&str> = names.iter().map(String::as_str).collect();
                marked_pdf(&refs)
            }
        };
        Ok(bytes)
    }
}

const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/></w:style>
  <w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/></w:style>
  <w:style w:type="paragraph" w:styleId="Heading2"><w:name w:val="heading 2"/></w:style>
  <w:style w:type="paragraph" w:styleId="Heading7"><w:name w:val="heading 7"/></w:style>
  <w:style w:type="paragraph" w:styleId="ListParagraph"><w:name w:val="List Paragraph"/></w:style>
  <w:style w:type="paragraph" w:styleId="Quote"><w:name w:val="Quote"/></w:style>
</w:styles>"#;

const NUMBERING_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:numbering xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:abstractNum w:abstractNumId="0"><w:lvl w:ilvl="0"><w:numFmt w:val="bullet"/></w:lvl></w:abstractNum>
  <w:abstractNum w:abstractNumId="1"><w:lvl w:ilvl="0"><w:numFmt w:val="decimal"/></w:lvl></w:abstractNum>
  <w:num w:numId="1"><w:abstractNumId w:val="0"/></w:num>
  <w:num w:numId="2"><w:abstractNumId w:val="1"/></w:num>
</w:numbering>"#;

/// One paragraph of a docx fixture.
pub struct Para<'a> {
    pub style_id: Option<&'a str>,
    pub text: &'a str,
    pub num_id: Option<u32>,
}

pub fn para<'a>(style_id: &'a str, text: &'a str) -> Para<'a> {
    Para {
        style_id: Some(style_id),
        text,
        num_id: None,
    }
}

pub fn numbered<'a>(text: &'a str, num_id: u32) -> Para<'a> {
    Para {
        style_id: Some("ListParagraph"),
        text,
        num_id: Some(num_id),
    }
}

fn paragraph_xml(p: &Para) -> String {
    let mut ppr = String::new();
    if let Some(style) = p.style_id {
        ppr.push_str(&format!(r#"<w:pStyle w:val="{}"/>"#, style));
    }
    if let Some(num_id) = p.num_id {
        ppr.push_str(&format!(
            r#"<w:numPr><w:ilvl w:val="0"/><w:numId w:val="{}"/></w:numPr>"#,
            num_id
        ));
    }
    format!(
        r#"<w:p><w:pPr>{}</w:pPr><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
        ppr, p.text
    )
}

/// Build a `.docx` with the styles and numbering above.
pub fn docx_bytes(paragraphs: &[Para]) -> Vec<u8> {
    let body: String = paragraphs.iter().map(paragraph_xml).collect();
    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}<w:sectPr/></w:body></w:document>"#,
        body
    );

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in [
        ("word/document.xml", document.as_str()),
        ("word/styles.xml", STYLES_XML),
        ("word/numbering.xml", NUMBERING_XML),
    ] {
        zip.start_file(name, SimpleFileOptions::default()).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    }
    zip.finish().unwrap().into_inner()
}
