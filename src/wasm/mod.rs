//! WASM bindings for the preview engine

pub mod frame_buffer;

use wasm_bindgen::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    BreakRules, FontId, FontMetrics, LayoutSettings, PageGeometry, Point, PreviewEngine, Resume,
    PAGE_STACK_GAP,
};
use frame_buffer::FrameBuffer;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// WASM-exposed preview wrapper
#[wasm_bindgen]
pub struct WasmPreview {
    engine: PreviewEngine,
    buffer: FrameBuffer,
}

#[wasm_bindgen]
impl WasmPreview {
    /// Create a preview over an empty résumé with default page size (A4)
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            engine: PreviewEngine::new(PageGeometry::default()),
            buffer: FrameBuffer::new(),
        }
    }

    /// Create a preview with custom page dimensions
    #[wasm_bindgen(js_name = withDimensions)]
    pub fn with_dimensions(
        page_width: f32,
        page_height: f32,
        margin_top: f32,
        margin_bottom: f32,
        margin_left: f32,
        margin_right: f32,
    ) -> Self {
        let geometry = PageGeometry {
            page_width,
            page_height,
            margin_top,
            margin_bottom,
            margin_left,
            margin_right,
        };

        Self {
            engine: PreviewEngine::new(geometry),
            buffer: FrameBuffer::new(),
        }
    }

    /// Replace the résumé content from JSON.
    /// Returns false (and keeps the current content) if the JSON is invalid.
    #[wasm_bindgen(js_name = setResume)]
    pub fn set_resume(&mut self, json: &str) -> bool {
        match serde_json::from_str::<Resume>(json) {
            Ok(resume) => {
                self.engine.set_resume(resume);
                true
            }
            Err(_) => false,
        }
    }

    /// Replace template and style settings from JSON.
    /// Returns false (and keeps the current settings) if the JSON is invalid.
    #[wasm_bindgen(js_name = setSettings)]
    pub fn set_settings(&mut self, json: &str) -> bool {
        match serde_json::from_str::<LayoutSettings>(json) {
            Ok(settings) => {
                self.engine.set_settings(settings);
                true
            }
            Err(_) => false,
        }
    }

    /// Replace the page geometry
    #[wasm_bindgen(js_name = setGeometry)]
    pub fn set_geometry(
        &mut self,
        page_width: f32,
        page_height: f32,
        margin_top: f32,
        margin_bottom: f32,
        margin_left: f32,
        margin_right: f32,
    ) {
        self.engine.set_geometry(PageGeometry {
            page_width,
            page_height,
            margin_top,
            margin_bottom,
            margin_left,
            margin_right,
        });
    }

    /// Install glyph widths measured from the real font for one font role.
    /// `char_widths` is indexed by ASCII codepoint (up to 128 entries);
    /// characters past its end fall back to `default_width`.
    #[wasm_bindgen(js_name = updateFontMetrics)]
    pub fn update_font_metrics(
        &mut self,
        font_id: u32,
        line_height: f32,
        default_width: f32,
        char_widths: &[f32],
    ) {
        let metrics = FontMetrics::new(line_height, char_widths.to_vec(), default_width);
        self.engine.set_font_metrics(FontId(font_id), metrics);
    }

    /// Adjust the minimum visible fraction before a section defers to the
    /// next page
    #[wasm_bindgen(js_name = setMinVisibleFraction)]
    pub fn set_min_visible_fraction(&mut self, fraction: f32) {
        self.engine.set_break_rules(BreakRules {
            min_visible_fraction: fraction,
        });
    }

    /// Fire the pending debounced recompute if its delay has elapsed.
    /// Call from requestAnimationFrame or a short interval; returns true
    /// when the layout was replaced.
    pub fn tick(&mut self) -> bool {
        self.engine.tick()
    }

    /// Recompute immediately, cancelling any pending debounce
    #[wasm_bindgen(js_name = refreshNow)]
    pub fn refresh_now(&mut self) {
        self.engine.refresh_now();
    }

    /// Milliseconds until the pending recompute, or -1 when idle
    #[wasm_bindgen(js_name = pendingDelayMs)]
    pub fn pending_delay_ms(&self) -> f64 {
        self.engine
            .pending_delay_ms()
            .map(|ms| ms as f64)
            .unwrap_or(-1.0)
    }

    /// Get page count
    #[wasm_bindgen(js_name = pageCount)]
    pub fn page_count(&self) -> usize {
        self.engine.page_count()
    }

    /// Get the height of the full content flow in px
    #[wasm_bindgen(js_name = totalContentHeight)]
    pub fn total_content_height(&self) -> f32 {
        self.engine.total_content_height()
    }

    /// Get the layout version; bumps on every recompute
    #[wasm_bindgen(js_name = layoutVersion)]
    pub fn layout_version(&self) -> f64 {
        self.engine.layout().version() as f64
    }

    /// Get the label for a page, e.g. "Page 2 of 3"
    #[wasm_bindgen(js_name = pageLabel)]
    pub fn page_label(&self, page_index: usize) -> String {
        self.engine.layout().page_label(page_index)
    }

    /// Get the section under a point in frame-local coordinates
    #[wasm_bindgen(js_name = sectionAt)]
    pub fn section_at(&self, page_index: usize, x: f32, y: f32) -> Option<u32> {
        self.engine
            .section_at_point(page_index, Point { x, y })
            .map(|id| id.0)
    }

    /// Get the frame list (returns JSON)
    #[wasm_bindgen(js_name = framesJson)]
    pub fn frames_json(&self) -> String {
        let frames = FrameListData::from_engine(&self.engine);
        serde_json::to_string(&frames).unwrap_or_else(|_| String::from("null"))
    }

    /// Get the page geometry and stack dimensions (returns JSON)
    #[wasm_bindgen(js_name = geometryJson)]
    pub fn geometry_json(&self) -> String {
        let geometry = self.engine.geometry();
        let data = GeometryData {
            page_width: geometry.page_width,
            page_height: geometry.page_height,
            margin_top: geometry.margin_top,
            margin_bottom: geometry.margin_bottom,
            margin_left: geometry.margin_left,
            margin_right: geometry.margin_right,
            content_width: geometry.content_width(),
            content_height: geometry.content_height(),
            stack_height: self.engine.layout().stack_height(geometry),
            page_gap: PAGE_STACK_GAP,
        };

        serde_json::to_string(&data).unwrap_or_else(|_| String::from("null"))
    }

    /// Encode the frame list into the flat buffers for zero-copy reads
    #[wasm_bindgen(js_name = encodeFrames)]
    pub fn encode_frames(&mut self) {
        let layout = self.engine.layout();
        let geometry = self.engine.geometry();
        let frames = layout.frames(geometry);
        let labels: Vec<String> = (0..frames.len()).map(|i| layout.page_label(i)).collect();
        let label_bytes = labels.iter().map(|label| label.len()).sum();

        self.buffer.prepare(frames.len(), label_bytes);
        self.buffer.write_header(layout.version(), frames.len() as u32);

        for (frame, label) in frames.iter().zip(&labels) {
            let clip = frame.clip_rect(geometry);
            self.buffer.push_frame(
                frame.index,
                frame.bounds.y,
                frame.window,
                frame.content_shift(geometry),
                clip.y,
                clip.height,
                label,
            );
        }

        self.buffer.finalize();
    }

    // Flat buffer accessors; pointers into WASM linear memory, valid until
    // the next encodeFrames() call

    #[wasm_bindgen(js_name = framesU32Ptr)]
    pub fn frames_u32_ptr(&self) -> u32 {
        self.buffer.u32_ptr()
    }

    #[wasm_bindgen(js_name = framesU32Len)]
    pub fn frames_u32_len(&self) -> u32 {
        self.buffer.u32_len()
    }

    #[wasm_bindgen(js_name = framesF32Ptr)]
    pub fn frames_f32_ptr(&self) -> u32 {
        self.buffer.f32_ptr()
    }

    #[wasm_bindgen(js_name = framesF32Len)]
    pub fn frames_f32_len(&self) -> u32 {
        self.buffer.f32_len()
    }

    #[wasm_bindgen(js_name = labelsPtr)]
    pub fn labels_ptr(&self) -> u32 {
        self.buffer.label_ptr()
    }

    #[wasm_bindgen(js_name = labelsLen)]
    pub fn labels_len(&self) -> u32 {
        self.buffer.label_len()
    }
}

impl Default for WasmPreview {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable frame list for JS
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameListData {
    pub version: u64,
    pub page_count: usize,
    pub total_content_height: f32,
    pub frames: Vec<FrameData>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameData {
    pub page_index: usize,
    pub stack_y: f32,
    pub window_start: f32,
    pub window_end: f32,
    pub content_shift: f32,
    pub clip_x: f32,
    pub clip_y: f32,
    pub clip_width: f32,
    pub clip_height: f32,
    pub label: String,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometryData {
    pub page_width: f32,
    pub page_height: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    pub content_width: f32,
    pub content_height: f32,
    pub stack_height: f32,
    pub page_gap: f32,
}

impl FrameListData {
    fn from_engine(engine: &PreviewEngine) -> Self {
        let geometry = engine.geometry();
        let layout = engine.layout();

        let frames = layout
            .frames(geometry)
            .iter()
            .map(|frame| {
                let clip = frame.clip_rect(geometry);
                FrameData {
                    page_index: frame.index,
                    stack_y: frame.bounds.y,
                    window_start: frame.window.start,
                    window_end: frame.window.end,
                    content_shift: frame.content_shift(geometry),
                    clip_x: clip.x,
                    clip_y: clip.y,
                    clip_width: clip.width,
                    clip_height: clip.height,
                    label: layout.page_label(frame.index),
                }
            })
            .collect();

        FrameListData {
            version: layout.version(),
            page_count: layout.page_count(),
            total_content_height: layout.total_content_height(),
            frames,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::frame_buffer::{HEADER_SIZE, MAGIC, U32_PER_FRAME};
    use crate::{Entry, ResumeSection, SectionId};

    fn resume_json() -> String {
        let resume = Resume {
            full_name: "Grace Hopper".to_string(),
            headline: "Compiler Pioneer".to_string(),
            contact: vec!["grace@example.com".to_string()],
            sections: vec![
                ResumeSection::new(SectionId(1), "Experience").with_entry(
                    Entry::new("United States Navy", "1943-1986")
                        .with_bullet("Wrote the first compiler")
                        .with_bullet("Coined the term debugging"),
                ),
                ResumeSection::new(SectionId(2), "Education")
                    .with_entry(Entry::new("Yale University", "PhD Mathematics, 1934")),
            ],
        };
        serde_json::to_string(&resume).unwrap()
    }

    #[test]
    fn test_set_resume_validates_json() {
        let mut preview = WasmPreview::new();
        assert!(!preview.set_resume("not json"));
        assert!(preview.set_resume(&resume_json()));

        preview.refresh_now();
        assert!(preview.page_count() >= 1);
        assert!(preview.total_content_height() > 0.0);
    }

    #[test]
    fn test_frames_json_uses_camel_case() {
        let mut preview = WasmPreview::new();
        preview.set_resume(&resume_json());
        preview.refresh_now();

        let parsed: serde_json::Value = serde_json::from_str(&preview.frames_json()).unwrap();
        assert!(parsed["totalContentHeight"].as_f64().unwrap() > 0.0);

        let first = &parsed["frames"][0];
        assert_eq!(first["pageIndex"], 0);
        assert_eq!(first["windowStart"], 0.0);
        assert!(first["contentShift"].is_number());
        assert!(first["label"].as_str().unwrap().starts_with("Page 1 of"));
    }

    #[test]
    fn test_encode_frames_fills_buffers() {
        let mut preview = WasmPreview::new();
        preview.set_resume(&resume_json());
        preview.refresh_now();
        preview.encode_frames();

        let frame_count = preview.page_count();
        let expected_u32 = (HEADER_SIZE + frame_count * U32_PER_FRAME) as u32;
        assert_eq!(preview.frames_u32_len(), expected_u32);
        assert_eq!(preview.buffer.u32_data[0], MAGIC);
        assert_eq!(preview.buffer.u32_data[4], frame_count as u32);
        assert!(preview.labels_len() > 0);
    }
}
