//! Vitae: the dynamic pagination engine behind a résumé preview
//!
//! This crate turns résumé content into fixed-size preview pages:
//! - Templates render content into a block tree with named section spans
//! - A measurement pass reads back section extents at real wrap widths
//! - A pure calculator splits the measured space into page windows,
//!   deferring sections that would show only a sliver at a page edge
//! - Page frames display shifted, clipped slices of one shared layout

pub mod content;
pub mod measure;
pub mod paginate;
pub mod preview;
pub mod template;
pub mod wasm;
pub mod watch;

// Re-export WASM types for direct use
pub use wasm::WasmPreview;

// Re-export primary types
pub use content::{Entry, Resume, ResumeSection, SectionId};
pub use measure::{
    measure_document, FontId, FontLibrary, FontMetrics, Measurable, MeasuredDocument,
    PageGeometry, SectionExtent,
};
pub use paginate::{page_windows, BreakRules, PageWindow, MIN_VISIBLE_FRACTION};
pub use preview::{PageFrame, PreviewLayout, PAGE_STACK_GAP};
pub use template::{render_resume, LayoutSettings, RenderDocument, TemplateKind};
pub use watch::{ChangeKind, RecomputeTimer, DEBOUNCE_DELAY_MS};

use log::debug;
use watch::current_timestamp;

/// Preview coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Preview rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// The preview engine combining all components.
///
/// Owns the content, settings, fonts, and the current [`PreviewLayout`], and
/// runs the debounced render → measure → paginate pipeline. All state lives
/// here; nothing is global.
pub struct PreviewEngine {
    resume: Resume,
    settings: LayoutSettings,
    geometry: PageGeometry,
    fonts: FontLibrary,
    rules: BreakRules,
    layout: PreviewLayout,
    timer: RecomputeTimer,
    version: u64,
}

impl Default for PreviewEngine {
    fn default() -> Self {
        Self::new(PageGeometry::default())
    }
}

impl PreviewEngine {
    /// Create an engine with empty content; the preview shows a single
    /// blank page until content arrives
    pub fn new(geometry: PageGeometry) -> Self {
        Self::with_resume(Resume::default(), LayoutSettings::default(), geometry)
    }

    /// Create an engine with initial content, measured immediately
    pub fn with_resume(resume: Resume, settings: LayoutSettings, geometry: PageGeometry) -> Self {
        let mut engine = Self {
            resume,
            fonts: FontLibrary::from_settings(&settings),
            settings,
            geometry,
            rules: BreakRules::default(),
            layout: PreviewLayout::empty(),
            timer: RecomputeTimer::new(),
            version: 0,
        };
        engine.refresh_now();
        engine
    }

    /// Replace the résumé content and schedule a recompute
    pub fn set_resume(&mut self, resume: Resume) {
        self.resume = resume;
        self.note_change(ChangeKind::Content);
    }

    /// Replace template and style settings and schedule a recompute.
    ///
    /// Font metrics are re-derived from the new typography; a host that
    /// measured real glyph widths should re-send them afterwards.
    pub fn set_settings(&mut self, settings: LayoutSettings) {
        self.fonts = FontLibrary::from_settings(&settings);
        self.settings = settings;
        self.note_change(ChangeKind::Settings);
    }

    /// Replace the page geometry and schedule a recompute
    pub fn set_geometry(&mut self, geometry: PageGeometry) {
        self.geometry = geometry;
        self.note_change(ChangeKind::Geometry);
    }

    /// Override one font role with metrics measured from the real font
    pub fn set_font_metrics(&mut self, id: FontId, metrics: FontMetrics) {
        self.fonts.set(id, metrics);
        self.note_change(ChangeKind::FontMetrics);
    }

    /// Replace the page-break rules and schedule a recompute
    pub fn set_break_rules(&mut self, rules: BreakRules) {
        self.rules = rules;
        self.note_change(ChangeKind::Settings);
    }

    fn note_change(&mut self, kind: ChangeKind) {
        debug!("{:?} change; recompute in {}ms", kind, DEBOUNCE_DELAY_MS);
        self.timer.schedule(current_timestamp());
    }

    /// Fire the pending recompute if its delay has elapsed
    pub fn tick(&mut self) -> bool {
        self.tick_at(current_timestamp())
    }

    /// Clock-explicit variant of [`tick`](Self::tick) for hosts that drive
    /// their own time
    pub fn tick_at(&mut self, now_ms: u64) -> bool {
        if self.timer.fire_if_due(now_ms) {
            self.recompute();
            true
        } else {
            false
        }
    }

    /// Milliseconds until the pending recompute, if one is scheduled
    pub fn pending_delay_ms(&self) -> Option<u64> {
        self.timer.remaining_ms(current_timestamp())
    }

    /// Whether a debounced recompute is waiting
    pub fn is_recompute_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// Recompute immediately, cancelling any pending debounce
    pub fn refresh_now(&mut self) {
        self.timer.cancel();
        self.recompute();
    }

    fn recompute(&mut self) {
        let rendered = render_resume(&self.resume, &self.settings);
        let measured = measure_document(&rendered, &self.fonts, self.geometry.content_width());

        // A zero measurement is a transient glitch (content mid-swap, fonts
        // not ready). Keep the previous windows instead of collapsing the
        // preview to an empty page.
        if measured.total_height <= 0.0 {
            debug!("zero-extent measurement; keeping previous layout");
            return;
        }

        let windows = page_windows(
            &measured.sections,
            measured.total_height,
            self.geometry.content_height(),
            &self.rules,
        );

        self.version += 1;
        debug!(
            "recompute v{}: {} sections, {:.1}px across {} pages",
            self.version,
            measured.sections.len(),
            measured.total_height,
            windows.len()
        );
        self.layout = PreviewLayout::new(measured, windows, self.version);
    }

    /// Current preview layout; replaced wholesale by every recompute
    pub fn layout(&self) -> &PreviewLayout {
        &self.layout
    }

    /// Page geometry in force
    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Total page count
    pub fn page_count(&self) -> usize {
        self.layout.page_count()
    }

    /// Height of the full content flow, for outer-container sizing
    pub fn total_content_height(&self) -> f32 {
        self.layout.total_content_height()
    }

    /// Route a click inside a page frame to the section under it
    pub fn section_at_point(&self, page_index: usize, local: Point) -> Option<SectionId> {
        let frames = self.layout.frames(&self.geometry);
        let frame = frames.get(page_index)?;
        let content_y = frame.content_y_at(&self.geometry, local)?;
        self.layout.section_at(content_y)
    }
}
