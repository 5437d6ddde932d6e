//! Physical page geometry

/// Fixed page dimensions and margins in logical pixels.
///
/// The usable content height doubles as the pagination window height. It is
/// configuration input; nothing here is derived from content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    /// Page width in pixels
    pub page_width: f32,
    /// Page height in pixels
    pub page_height: f32,
    /// Top margin in pixels
    pub margin_top: f32,
    /// Bottom margin in pixels
    pub margin_bottom: f32,
    /// Left margin in pixels
    pub margin_left: f32,
    /// Right margin in pixels
    pub margin_right: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

impl PageGeometry {
    /// A4 at 96 DPI with half-inch margins
    pub fn a4() -> Self {
        Self {
            page_width: 794.0,
            page_height: 1123.0,
            margin_top: 48.0,
            margin_bottom: 48.0,
            margin_left: 48.0,
            margin_right: 48.0,
        }
    }

    /// US Letter at 96 DPI with half-inch margins
    pub fn us_letter() -> Self {
        Self {
            page_width: 816.0,
            page_height: 1056.0,
            margin_top: 48.0,
            margin_bottom: 48.0,
            margin_left: 48.0,
            margin_right: 48.0,
        }
    }

    /// Width available to content
    pub fn content_width(&self) -> f32 {
        self.page_width - self.margin_left - self.margin_right
    }

    /// Height available to content on one page
    pub fn content_height(&self) -> f32 {
        self.page_height - self.margin_top - self.margin_bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_dimensions() {
        let geometry = PageGeometry::a4();
        assert_eq!(geometry.content_width(), 794.0 - 96.0);
        assert_eq!(geometry.content_height(), 1123.0 - 96.0);
    }

    #[test]
    fn test_default_is_a4() {
        assert_eq!(PageGeometry::default(), PageGeometry::a4());
    }

    #[test]
    fn test_us_letter_shorter_than_a4() {
        assert!(PageGeometry::us_letter().page_height < PageGeometry::a4().page_height);
    }
}
