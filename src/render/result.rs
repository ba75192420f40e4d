//! Synthesis result with the converted manuscript and a report.

use crate::model::Manuscript;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Result of synthesizing HTML from a source document.
#[derive(Debug, Clone)]
pub struct Synthesis {
    /// Converted content
    pub manuscript: Manuscript,

    /// What the synthesizer saw along the way
    pub report: SynthesisReport,
}

impl Synthesis {
    /// Create a new synthesis result.
    pub fn new(manuscript: Manuscript, report: SynthesisReport) -> Self {
        Self { manuscript, report }
    }
}

/// Counters collected while converting paragraphs to HTML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisReport {
    /// Number of headings emitted (title included)
    pub heading_count: u32,

    /// Number of body paragraphs emitted
    pub paragraph_count: u32,

    /// Number of list containers emitted
    pub list_count: u32,

    /// Number of list items emitted
    pub list_item_count: u32,

    /// Paragraphs left out under the drop policy
    pub dropped_count: u32,

    /// Unmapped style names with the number of paragraphs using each
    pub unmapped_styles: BTreeMap<String, u32>,
}

impl SynthesisReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment heading count.
    pub fn add_heading(&mut self) {
        self.heading_count += 1;
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Increment list count.
    pub fn add_list(&mut self) {
        self.list_count += 1;
    }

    /// Increment list item count.
    pub fn add_list_item(&mut self) {
        self.list_item_count += 1;
    }

    /// Record a paragraph whose style has no mapping.
    pub fn add_unmapped(&mut self, style: &str, dropped: bool) {
        *self.unmapped_styles.entry(style.to_string()).or_insert(0) += 1;
        if dropped {
            self.dropped_count += 1;
        }
    }

    /// Check if any paragraph had an unmapped style.
    pub fn has_unmapped_styles(&self) -> bool {
        !self.unmapped_styles.is_empty()
    }
}
