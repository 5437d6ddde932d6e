//! Font metrics for measurement

use rustc_hash::FxHashMap;

use crate::template::LayoutSettings;

/// Body text font role
pub const FONT_BODY: FontId = FontId(0);
/// Candidate name in the header
pub const FONT_NAME: FontId = FontId(1);
/// Section titles
pub const FONT_SECTION: FontId = FontId(2);
/// Entry headings
pub const FONT_HEADING: FontId = FontId(3);
/// Secondary text: headline, contact, dates
pub const FONT_META: FontId = FontId(4);

/// Average glyph advance as a fraction of font size, used until the host
/// supplies widths measured from the real font
const ADVANCE_FACTOR: f32 = 0.5;

/// Metrics needed to measure text
#[derive(Debug, Clone)]
pub struct FontMetrics {
    /// Line height in logical pixels
    pub line_height: f32,
    /// Width of ASCII characters (0-127)
    pub char_widths: Vec<f32>,
    /// Default width for non-ASCII characters
    pub default_width: f32,
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self::estimate(14.0, 1.45)
    }
}

impl FontMetrics {
    pub fn new(line_height: f32, char_widths: Vec<f32>, default_width: f32) -> Self {
        Self {
            line_height,
            char_widths,
            default_width,
        }
    }

    /// Estimated metrics for a font of the given pixel size
    pub fn estimate(size_px: f32, line_height_factor: f32) -> Self {
        let default_width = size_px * ADVANCE_FACTOR;
        Self {
            line_height: size_px * line_height_factor,
            char_widths: vec![default_width; 128],
            default_width,
        }
    }

    /// Get width of a character
    pub fn width(&self, c: char) -> f32 {
        if c.is_ascii() {
            if let Some(w) = self.char_widths.get(c as usize) {
                return *w;
            }
        }
        self.default_width
    }
}

/// Unique identifier for a font role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontId(pub u32);

/// Metrics for every font role the templates use
#[derive(Debug, Clone)]
pub struct FontLibrary {
    fonts: FxHashMap<FontId, FontMetrics>,
    next_id: u32,
}

impl Default for FontLibrary {
    fn default() -> Self {
        Self::from_settings(&LayoutSettings::default())
    }
}

impl FontLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive metrics for every template font role from the typography
    /// settings. Widths are estimates until the host overrides them with
    /// `set` once real fonts have loaded.
    pub fn from_settings(settings: &LayoutSettings) -> Self {
        let roles = [
            (FONT_BODY, 1.0),
            (FONT_NAME, 2.0),
            (FONT_SECTION, 1.2),
            (FONT_HEADING, 1.1),
            (FONT_META, 0.9),
        ];

        let mut fonts = FxHashMap::default();
        for (id, scale) in roles {
            fonts.insert(
                id,
                FontMetrics::estimate(settings.base_font_px * scale, settings.line_height_factor),
            );
        }

        Self {
            fonts,
            next_id: FONT_META.0 + 1,
        }
    }

    /// Add a new font and return its ID
    pub fn add(&mut self, metrics: FontMetrics) -> FontId {
        let id = FontId(self.next_id);
        self.next_id += 1;
        self.fonts.insert(id, metrics);
        id
    }

    /// Set font metrics for a specific ID
    pub fn set(&mut self, id: FontId, metrics: FontMetrics) {
        self.fonts.insert(id, metrics);
    }

    /// Get font metrics by ID
    pub fn get(&self, id: FontId) -> Option<&FontMetrics> {
        self.fonts.get(&id)
    }

    /// Get mutable font metrics by ID (for updates)
    pub fn get_mut(&mut self, id: FontId) -> Option<&mut FontMetrics> {
        self.fonts.get_mut(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_present_after_derivation() {
        let lib = FontLibrary::from_settings(&LayoutSettings::default());
        for id in [FONT_BODY, FONT_NAME, FONT_SECTION, FONT_HEADING, FONT_META] {
            assert!(lib.get(id).is_some());
        }
    }

    #[test]
    fn test_name_font_larger_than_body() {
        let lib = FontLibrary::default();
        let body = lib.get(FONT_BODY).unwrap().line_height;
        let name = lib.get(FONT_NAME).unwrap().line_height;
        assert!(name > body);
    }

    #[test]
    fn test_char_width_lookup() {
        let metrics = FontMetrics::new(10.0, vec![4.0; 128], 7.0);
        assert_eq!(metrics.width('a'), 4.0);
        assert_eq!(metrics.width('你'), 7.0);
    }

    #[test]
    fn test_add_assigns_fresh_ids() {
        let mut lib = FontLibrary::new();
        let id = lib.add(FontMetrics::estimate(20.0, 1.2));
        assert!(id.0 > FONT_META.0);
        assert!(lib.get(id).is_some());
    }
}
