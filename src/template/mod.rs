//! Templates: an opaque function from content and settings to a block tree

mod blocks;
mod classic;
mod compact;

pub use blocks::{BlockContent, RenderBlock, RenderDocument};

use serde::{Deserialize, Serialize};

use crate::content::Resume;

/// Built-in template designs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TemplateKind {
    /// Ruled section titles, roomy spacing
    #[default]
    Classic,
    /// Inline entry metadata, tight spacing
    Compact,
}

/// Style knobs shared by every template.
///
/// A settings change is a full re-render: the engine never patches a
/// previously rendered block tree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSettings {
    /// Which template renders the content
    pub template: TemplateKind,
    /// Body text size in pixels
    pub base_font_px: f32,
    /// Line height as a multiple of font size
    pub line_height_factor: f32,
    /// Vertical gap between sections in pixels
    pub section_gap_px: f32,
    /// Vertical gap between entries in pixels
    pub entry_gap_px: f32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            template: TemplateKind::Classic,
            base_font_px: 14.0,
            line_height_factor: 1.45,
            section_gap_px: 18.0,
            entry_gap_px: 10.0,
        }
    }
}

/// Render the résumé with the template selected in the settings
pub fn render_resume(resume: &Resume, settings: &LayoutSettings) -> RenderDocument {
    match settings.template {
        TemplateKind::Classic => classic::render(resume, settings),
        TemplateKind::Compact => compact::render(resume, settings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_json_decode() {
        let json = r#"{
            "template": "compact",
            "baseFontPx": 12.0,
            "lineHeightFactor": 1.3,
            "sectionGapPx": 14.0,
            "entryGapPx": 8.0
        }"#;
        let settings: LayoutSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.template, TemplateKind::Compact);
        assert_eq!(settings.base_font_px, 12.0);
    }

    #[test]
    fn test_default_template_is_classic() {
        assert_eq!(LayoutSettings::default().template, TemplateKind::Classic);
    }
}
