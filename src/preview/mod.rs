//! Page frames: fixed-size views over one shared content layout

use crate::content::SectionId;
use crate::measure::{MeasuredDocument, PageGeometry, SectionExtent};
use crate::paginate::PageWindow;
use crate::{Point, Rect};

/// Vertical gap between page frames in the preview stack
pub const PAGE_STACK_GAP: f32 = 24.0;

/// One fixed-size page frame showing a slice of the shared content.
///
/// Every frame displays the same rendered copy of the document, shifted so
/// its window lands inside the frame margins and clipped to the window
/// height. Nothing is re-flowed per page, so a section cut across two pages
/// renders pixel-identically to its uncut form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageFrame {
    /// Page index (0-based)
    pub index: usize,
    /// Frame rectangle in preview-stack space
    pub bounds: Rect,
    /// Content slice this frame displays
    pub window: PageWindow,
}

impl PageFrame {
    /// Vertical shift applied to the shared content copy inside this frame
    pub fn content_shift(&self, geometry: &PageGeometry) -> f32 {
        geometry.margin_top - self.window.start
    }

    /// Clip rectangle in frame-local coordinates
    pub fn clip_rect(&self, geometry: &PageGeometry) -> Rect {
        Rect {
            x: geometry.margin_left,
            y: geometry.margin_top,
            width: geometry.content_width(),
            height: self.window.height(),
        }
    }

    /// Map a frame-local point to a content-space offset.
    ///
    /// Returns `None` outside the clipped slice, where a click hits page
    /// chrome rather than content. Inside it, the offset lets the hosting
    /// editor route the click to whatever it rendered there.
    pub fn content_y_at(&self, geometry: &PageGeometry, local: Point) -> Option<f32> {
        let clip = self.clip_rect(geometry);
        if !clip.contains_point(local) {
            return None;
        }
        Some(self.window.start + (local.y - clip.y))
    }
}

/// The preview state: measured sections, total extent, and the page windows
/// derived from them.
///
/// The engine replaces the entire value on every recompute; readers never
/// observe a partially updated window list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewLayout {
    measured: MeasuredDocument,
    windows: Vec<PageWindow>,
    version: u64,
}

impl PreviewLayout {
    /// The state before anything has been measured
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(measured: MeasuredDocument, windows: Vec<PageWindow>, version: u64) -> Self {
        Self {
            measured,
            windows,
            version,
        }
    }

    /// Page windows in order
    pub fn windows(&self) -> &[PageWindow] {
        &self.windows
    }

    /// Measured section spans in top order
    pub fn sections(&self) -> &[SectionExtent] {
        &self.measured.sections
    }

    /// Total content height, for outer-container sizing
    pub fn total_content_height(&self) -> f32 {
        self.measured.total_height
    }

    /// Bumped on every successful recompute
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Number of pages; an empty layout still previews one blank page
    pub fn page_count(&self) -> usize {
        self.windows.len().max(1)
    }

    /// Label for one page, as shown under its frame
    pub fn page_label(&self, index: usize) -> String {
        format!("Page {} of {}", index + 1, self.page_count())
    }

    /// Build the fixed-size frames for the current windows
    pub fn frames(&self, geometry: &PageGeometry) -> Vec<PageFrame> {
        self.windows
            .iter()
            .enumerate()
            .map(|(index, &window)| PageFrame {
                index,
                bounds: Rect {
                    x: 0.0,
                    y: index as f32 * (geometry.page_height + PAGE_STACK_GAP),
                    width: geometry.page_width,
                    height: geometry.page_height,
                },
                window,
            })
            .collect()
    }

    /// Height of the stacked preview including inter-page gaps
    pub fn stack_height(&self, geometry: &PageGeometry) -> f32 {
        let pages = self.page_count() as f32;
        pages * geometry.page_height + (pages - 1.0) * PAGE_STACK_GAP
    }

    /// Index of the frame showing the given content offset.
    /// The document's very end belongs to the last page.
    pub fn frame_of(&self, content_y: f32) -> Option<usize> {
        if let Some(index) = self.windows.iter().position(|w| w.contains(content_y)) {
            return Some(index);
        }
        if !self.windows.is_empty() && content_y == self.total_content_height() {
            return Some(self.windows.len() - 1);
        }
        None
    }

    /// Section under a content offset, for click-to-edit routing
    pub fn section_at(&self, content_y: f32) -> Option<SectionId> {
        self.measured
            .sections
            .iter()
            .find(|s| content_y >= s.top && content_y < s.bottom())
            .map(|s| s.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::SectionExtent;

    fn two_page_layout() -> PreviewLayout {
        let measured = MeasuredDocument::from_extents(
            vec![
                SectionExtent::new(SectionId(1), 0.0, 900.0),
                SectionExtent::new(SectionId(2), 995.0, 55.0),
            ],
            1800.0,
        );
        let windows = vec![PageWindow::new(0.0, 995.0), PageWindow::new(995.0, 1800.0)];
        PreviewLayout::new(measured, windows, 1)
    }

    #[test]
    fn test_frames_stack_with_gaps() {
        let geometry = PageGeometry::a4();
        let frames = two_page_layout().frames(&geometry);
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].bounds.y, 0.0);
        assert_eq!(frames[1].bounds.y, geometry.page_height + PAGE_STACK_GAP);
        assert_eq!(frames[1].window, PageWindow::new(995.0, 1800.0));
    }

    #[test]
    fn test_content_shift_moves_slice_into_margins() {
        let geometry = PageGeometry::a4();
        let frames = two_page_layout().frames(&geometry);
        assert_eq!(frames[0].content_shift(&geometry), geometry.margin_top);
        assert_eq!(frames[1].content_shift(&geometry), geometry.margin_top - 995.0);
    }

    #[test]
    fn test_clip_rect_matches_window_height() {
        let geometry = PageGeometry::a4();
        let frames = two_page_layout().frames(&geometry);
        let clip = frames[0].clip_rect(&geometry);
        assert_eq!(clip.height, 995.0);
        assert_eq!(clip.x, geometry.margin_left);
        let clip = frames[1].clip_rect(&geometry);
        assert_eq!(clip.height, 805.0);
    }

    #[test]
    fn test_hit_inside_clip_maps_to_content() {
        let geometry = PageGeometry::a4();
        let frames = two_page_layout().frames(&geometry);
        let local = Point {
            x: geometry.margin_left + 10.0,
            y: geometry.margin_top + 25.0,
        };
        assert_eq!(frames[1].content_y_at(&geometry, local), Some(1020.0));
    }

    #[test]
    fn test_hit_in_margin_is_chrome() {
        let geometry = PageGeometry::a4();
        let frames = two_page_layout().frames(&geometry);
        let local = Point { x: 5.0, y: 5.0 };
        assert_eq!(frames[0].content_y_at(&geometry, local), None);
    }

    #[test]
    fn test_frame_of_boundary_belongs_to_next_page() {
        let layout = two_page_layout();
        assert_eq!(layout.frame_of(0.0), Some(0));
        assert_eq!(layout.frame_of(994.9), Some(0));
        assert_eq!(layout.frame_of(995.0), Some(1));
        assert_eq!(layout.frame_of(1800.0), Some(1));
        assert_eq!(layout.frame_of(2000.0), None);
    }

    #[test]
    fn test_section_at_routes_clicks() {
        let layout = two_page_layout();
        assert_eq!(layout.section_at(100.0), Some(SectionId(1)));
        assert_eq!(layout.section_at(1000.0), Some(SectionId(2)));
        assert_eq!(layout.section_at(950.0), None);
    }

    #[test]
    fn test_page_labels() {
        let layout = two_page_layout();
        assert_eq!(layout.page_count(), 2);
        assert_eq!(layout.page_label(0), "Page 1 of 2");
        assert_eq!(layout.page_label(1), "Page 2 of 2");
    }

    #[test]
    fn test_empty_layout_previews_one_blank_page() {
        let layout = PreviewLayout::empty();
        assert_eq!(layout.page_count(), 1);
        assert_eq!(layout.page_label(0), "Page 1 of 1");
        assert!(layout.frames(&PageGeometry::a4()).is_empty());
        assert_eq!(layout.total_content_height(), 0.0);
    }

    #[test]
    fn test_stack_height() {
        let geometry = PageGeometry::a4();
        let layout = two_page_layout();
        assert_eq!(
            layout.stack_height(&geometry),
            2.0 * geometry.page_height + PAGE_STACK_GAP
        );
    }
}
