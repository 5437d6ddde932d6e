//! Off-screen measurement pass over the rendered block tree

use log::trace;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::content::SectionId;
use crate::template::{BlockContent, RenderDocument};

use super::font::FontLibrary;
use super::wrap::text_height;

/// Measured span of one named section, in content-space pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionExtent {
    /// Section this span belongs to
    pub id: SectionId,
    /// Distance from the top of the content flow
    pub top: f32,
    /// Measured height of the span
    pub height: f32,
}

impl SectionExtent {
    pub fn new(id: SectionId, top: f32, height: f32) -> Self {
        Self { id, top, height }
    }

    /// Bottom edge of the span
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// A source of section measurements.
///
/// Anything able to report `(id, top, height)` for its named regions can
/// drive pagination; the calculator itself sees only plain numbers, so a
/// DOM-side measurement can stand in for the built-in layout pass.
pub trait Measurable {
    /// Section spans, in any order
    fn section_extents(&self) -> Vec<SectionExtent>;
    /// Natural height of the full content flow
    fn natural_height(&self) -> f32;
}

/// The measured document: ordered section spans plus total extent.
///
/// Rebuilt wholesale on every measurement pass; no identity is preserved
/// between passes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasuredDocument {
    /// Section spans ordered by top offset
    pub sections: SmallVec<[SectionExtent; 8]>,
    /// Greatest section bottom, or the raw measured extent if larger
    pub total_height: f32,
}

impl MeasuredDocument {
    /// A document with nothing measured
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from raw extents: orders spans by top offset and extends the
    /// total to cover every bottom. When no spans were marked but content
    /// exists, a single full-height span is synthesized so pagination
    /// degrades to plain height division.
    pub fn from_extents(extents: Vec<SectionExtent>, raw_extent: f32) -> Self {
        let mut sections: SmallVec<[SectionExtent; 8]> = extents.into_iter().collect();
        sections.sort_by(|a, b| a.top.total_cmp(&b.top));

        let mut total = raw_extent.max(0.0);
        for extent in &sections {
            total = total.max(extent.bottom());
        }

        if sections.is_empty() && total > 0.0 {
            sections.push(SectionExtent::new(SectionId(0), 0.0, total));
        }

        Self {
            sections,
            total_height: total,
        }
    }

    /// Build from any measurement source
    pub fn from_source(source: &impl Measurable) -> Self {
        Self::from_extents(source.section_extents(), source.natural_height())
    }

    /// Whether the pass measured nothing at all
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.total_height <= 0.0
    }
}

/// Geometry of one laid-out block
#[derive(Debug, Clone, Copy)]
pub struct BlockExtent {
    /// Section tag carried over from the render block
    pub section: Option<SectionId>,
    /// Top edge in content space
    pub top: f32,
    /// Block height, excluding spacing after
    pub height: f32,
}

/// Block positions produced by one off-screen layout pass
#[derive(Debug, Clone)]
pub struct LayoutPass {
    blocks: Vec<BlockExtent>,
    total_height: f32,
}

impl LayoutPass {
    /// Lay the block tree out at the given content width.
    ///
    /// Text heights come from wrap measurement with the library's metrics;
    /// the y cursor accumulates block heights and spacing in one pass.
    pub fn run(doc: &RenderDocument, fonts: &FontLibrary, content_width: f32) -> Self {
        let mut blocks = Vec::with_capacity(doc.blocks.len());
        let mut y: f32 = 0.0;

        for block in &doc.blocks {
            let wrap_width = (content_width - block.indent_px).max(0.0);
            let height = match &block.content {
                BlockContent::Text { text, font } => match fonts.get(*font) {
                    Some(metrics) => text_height(text, metrics, wrap_width),
                    None => 0.0,
                },
                BlockContent::Rule { thickness_px } => *thickness_px,
                BlockContent::Spacer { height_px } => *height_px,
            };

            blocks.push(BlockExtent {
                section: block.section,
                top: y,
                height,
            });
            y += height + block.spacing_after_px;
        }

        Self {
            blocks,
            total_height: y,
        }
    }

    /// Laid-out blocks in flow order
    pub fn blocks(&self) -> &[BlockExtent] {
        &self.blocks
    }
}

impl Measurable for LayoutPass {
    fn section_extents(&self) -> Vec<SectionExtent> {
        // The first tagged block opens a section's span; later blocks with
        // the same tag extend its bottom. Untagged blocks in between are
        // covered by the span without contributing edges.
        let mut order: Vec<SectionId> = Vec::new();
        let mut spans: FxHashMap<SectionId, (f32, f32)> = FxHashMap::default();

        for block in &self.blocks {
            if let Some(id) = block.section {
                let bottom = block.top + block.height;
                match spans.get_mut(&id) {
                    Some(span) => span.1 = span.1.max(bottom),
                    None => {
                        order.push(id);
                        spans.insert(id, (block.top, bottom));
                    }
                }
            }
        }

        order
            .into_iter()
            .filter_map(|id| {
                spans
                    .get(&id)
                    .map(|&(top, bottom)| SectionExtent::new(id, top, bottom - top))
            })
            .collect()
    }

    fn natural_height(&self) -> f32 {
        self.total_height
    }
}

/// Measure the rendered document once at the page's usable content width
pub fn measure_document(
    doc: &RenderDocument,
    fonts: &FontLibrary,
    content_width: f32,
) -> MeasuredDocument {
    let pass = LayoutPass::run(doc, fonts, content_width);
    let measured = MeasuredDocument::from_source(&pass);
    trace!(
        "measured {} sections over {:.1}px",
        measured.sections.len(),
        measured.total_height
    );
    measured
}
