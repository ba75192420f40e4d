//! PDF assembly.
//!
//! Concatenates rendered PDFs into one document, keeping every page of
//! every part in order. Parts are renumbered into a shared object space,
//! their pages are re-parented under a fresh page tree, and the old
//! catalogs, page trees and outlines are discarded.

use std::collections::BTreeMap;

use lopdf::{dictionary, Dictionary, Document, Object, ObjectId};

use crate::error::{Error, Result};

/// Page attributes a page may inherit from its ancestors in the page tree.
const INHERITED_KEYS: [&[u8]; 4] = [b"MediaBox", b"CropBox", b"Resources", b"Rotate"];

/// Guard against cyclic `Parent` chains in malformed input.
const MAX_TREE_DEPTH: usize = 64;

/// Merge PDF byte buffers, first part first.
pub fn assemble(parts: &[Vec<u8>]) -> Result<Vec<u8>> {
    if parts.is_empty() {
        return Err(Error::Pdf("no documents to assemble".into()));
    }

    let mut next_id = 1;
    let mut pages: Vec<(ObjectId, Dictionary)> = Vec::new();
    let mut objects: BTreeMap<ObjectId, Object> = BTreeMap::new();

    for (index, bytes) in parts.iter().enumerate() {
        let mut doc = Document::load_mem(bytes)
            .map_err(|e| Error::Pdf(format!("part {} is not a readable PDF: {}", index + 1, e)))?;
        doc.renumber_objects_with(next_id);
        next_id = doc.max_id + 1;

        let part_pages = doc.get_pages();
        log::debug!("part {}: {} pages", index + 1, part_pages.len());
        for page_id in part_pages.into_values() {
            pages.push((page_id, flatten_page(&doc, page_id)?));
        }

        objects.extend(doc.objects);
    }

    let mut merged = Document::with_version("1.5");
    for (id, object) in objects {
        match object.type_name().unwrap_or("") {
            "Catalog" | "Pages" | "Page" | "Outlines" | "Outline" => {}
            _ => {
                merged.objects.insert(id, object);
            }
        }
    }
    merged.max_id = next_id - 1;

    let pages_id = merged.new_object_id();
    let kids: Vec<Object> = pages.iter().map(|(id, _)| Object::Reference(*id)).collect();
    let count = kids.len() as i64;

    for (id, mut page) in pages {
        page.set("Parent", Object::Reference(pages_id));
        merged.objects.insert(id, Object::Dictionary(page));
    }

    merged.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Count" => count,
            "Kids" => kids,
        }),
    );
    let catalog_id = merged.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    merged.trailer.set("Root", Object::Reference(catalog_id));

    merged.renumber_objects();
    merged.compress();

    let mut output = Vec::new();
    merged
        .save_to(&mut output)
        .map_err(|e| Error::Pdf(format!("failed to write merged PDF: {}", e)))?;
    Ok(output)
}

/// Number of pages in a PDF.
pub fn page_count(bytes: &[u8]) -> Result<usize> {
    let doc = Document::load_mem(bytes)?;
    Ok(doc.get_pages().len())
}

/// Copy a page dictionary with inherited attributes made explicit.
fn flatten_page(doc: &Document, page_id: ObjectId) -> Result<Dictionary> {
    let mut page = doc
        .get_object(page_id)
        .and_then(Object::as_dict)
        .map_err(|e| Error::Pdf(format!("page {:?}: {}", page_id, e)))?
        .clone();

    let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();
    let mut depth = 0;

    while let Some(parent_id) = parent {
        let Ok(node) = doc.get_object(parent_id).and_then(Object::as_dict) else {
            break;
        };
        for key in INHERITED_KEYS {
            if !page.has(key) {
                if let Ok(value) = node.get(key) {
                    page.set(key, value.clone());
                }
            }
        }

        depth += 1;
        if depth >= MAX_TREE_DEPTH {
            log::warn!("page tree deeper than {} levels; stopped walking", MAX_TREE_DEPTH);
            break;
        }
        parent = node.get(b"Parent").and_then(Object::as_reference).ok();
    }

    Ok(page)
}
