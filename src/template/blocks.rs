//! Renderable block tree produced by templates

use crate::content::SectionId;
use crate::measure::font::FontId;

/// Visual content of a single block
#[derive(Debug, Clone, PartialEq)]
pub enum BlockContent {
    /// A run of wrappable text set in one font
    Text { text: String, font: FontId },
    /// A horizontal rule
    Rule { thickness_px: f32 },
    /// A fixed vertical gap
    Spacer { height_px: f32 },
}

/// One block in the rendered document flow.
///
/// Blocks stack vertically in order. A block tagged with a section id is part
/// of that section's measurable span; untagged blocks (header, gaps between
/// sections) belong to no section.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderBlock {
    /// Section this block belongs to, if any
    pub section: Option<SectionId>,
    /// What the block displays
    pub content: BlockContent,
    /// Left indent in pixels (reduces wrap width)
    pub indent_px: f32,
    /// Vertical space after the block in pixels
    pub spacing_after_px: f32,
}

impl RenderBlock {
    /// Create a text block
    pub fn text(section: Option<SectionId>, font: FontId, text: impl Into<String>) -> Self {
        Self {
            section,
            content: BlockContent::Text {
                text: text.into(),
                font,
            },
            indent_px: 0.0,
            spacing_after_px: 0.0,
        }
    }

    /// Create a horizontal rule
    pub fn rule(section: Option<SectionId>, thickness_px: f32) -> Self {
        Self {
            section,
            content: BlockContent::Rule { thickness_px },
            indent_px: 0.0,
            spacing_after_px: 0.0,
        }
    }

    /// Create an untagged vertical gap
    pub fn spacer(height_px: f32) -> Self {
        Self {
            section: None,
            content: BlockContent::Spacer { height_px },
            indent_px: 0.0,
            spacing_after_px: 0.0,
        }
    }

    /// Set the left indent
    pub fn with_indent(mut self, indent_px: f32) -> Self {
        self.indent_px = indent_px;
        self
    }

    /// Set the spacing after the block
    pub fn with_spacing(mut self, spacing_after_px: f32) -> Self {
        self.spacing_after_px = spacing_after_px;
        self
    }
}

/// The full block tree a template emits for one render pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderDocument {
    /// Blocks in top-to-bottom flow order
    pub blocks: Vec<RenderBlock>,
}

impl RenderDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Append a block
    pub fn push(&mut self, block: RenderBlock) {
        self.blocks.push(block);
    }

    /// Check whether the template emitted anything
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::font::FONT_BODY;

    #[test]
    fn test_block_builders() {
        let block = RenderBlock::text(Some(SectionId(3)), FONT_BODY, "hello")
            .with_indent(16.0)
            .with_spacing(4.0);
        assert_eq!(block.section, Some(SectionId(3)));
        assert_eq!(block.indent_px, 16.0);
        assert_eq!(block.spacing_after_px, 4.0);

        let gap = RenderBlock::spacer(12.0);
        assert_eq!(gap.section, None);
        assert_eq!(gap.content, BlockContent::Spacer { height_px: 12.0 });
    }

    #[test]
    fn test_document_push() {
        let mut doc = RenderDocument::new();
        assert!(doc.is_empty());
        doc.push(RenderBlock::rule(None, 1.0));
        assert_eq!(doc.blocks.len(), 1);
    }
}
