//! Block elements of synthesized HTML.

use super::ListKind;
use serde::{Deserialize, Serialize};

/// A block-level element in converted content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Heading with level 1-6
    Heading {
        /// Heading level (1-6)
        level: u8,
        /// Heading text
        text: String,
    },

    /// Body text paragraph
    Paragraph {
        /// Paragraph text
        text: String,
    },

    /// A flat list; nested lists are not modeled
    List {
        /// Container kind
        kind: ListKind,
        /// Item texts in order
        items: Vec<String>,
    },
}

impl Block {
    /// Create a heading, clamping the level to 1-6.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level: level.clamp(1, 6),
            text: text.into(),
        }
    }

    /// Create a paragraph.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }

    /// Create a list with a single item.
    pub fn list(kind: ListKind, first_item: impl Into<String>) -> Self {
        Block::List {
            kind,
            items: vec![first_item.into()],
        }
    }

    /// Check if this is a level-1 heading.
    pub fn is_title_heading(&self) -> bool {
        matches!(self, Block::Heading { level: 1, .. })
    }

    /// Check if this is a list container.
    pub fn is_list(&self) -> bool {
        matches!(self, Block::List { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_clamps_level() {
        assert_eq!(
            Block::heading(9, "Deep"),
            Block::Heading {
                level: 6,
                text: "Deep".to_string()
            }
        );
        assert!(Block::heading(0, "Zero").is_title_heading());
    }

    #[test]
    fn test_block_serialization() {
        let block = Block::list(ListKind::Ordered, "one");
        let json = serde_json::to_string(&block).unwrap();
        assert!(json.contains("\"type\":\"list\""));
        assert!(json.contains("\"kind\":\"ordered\""));
    }
}
