//! Greedy line-wrap measurement

use unicode_linebreak::{linebreaks, BreakOpportunity};
use unicode_segmentation::UnicodeSegmentation;

use super::font::FontMetrics;

/// Number of lines the text occupies when wrapped greedily at the given
/// width.
///
/// Break opportunities follow UAX #14, so CJK text wraps between ideographs
/// and Latin text wraps at spaces and hyphens. Trailing whitespace on a
/// fragment hangs past the edge instead of forcing a wrap, matching how
/// browsers fit text. A fragment with no break opportunity that overflows on
/// its own is broken per grapheme.
pub fn wrapped_line_count(text: &str, metrics: &FontMetrics, max_width: f32) -> u32 {
    if text.is_empty() {
        return 1;
    }

    let mut lines: u32 = 1;
    let mut x: f32 = 0.0;
    let mut fragment_start = 0;

    for (end, opportunity) in linebreaks(text) {
        let fragment = &text[fragment_start..end];
        fragment_start = end;

        let advance = advance_width(fragment, metrics);
        let fit = advance_width(fragment.trim_end(), metrics);

        if x > 0.0 && x + fit > max_width {
            lines += 1;
            x = 0.0;
        }

        if fit > max_width {
            let (extra, rest) = grapheme_wrap(fragment, metrics, max_width);
            lines += extra;
            x = rest;
        } else {
            x += advance;
        }

        // The iterator always ends with a mandatory break at text.len();
        // only breaks inside the text start a new line.
        if opportunity == BreakOpportunity::Mandatory && end < text.len() {
            lines += 1;
            x = 0.0;
        }
    }

    lines
}

/// Height of the text when wrapped at the given width
pub fn text_height(text: &str, metrics: &FontMetrics, max_width: f32) -> f32 {
    wrapped_line_count(text, metrics, max_width) as f32 * metrics.line_height
}

/// Emergency per-grapheme wrap for a fragment wider than the line.
/// Returns the number of extra lines started plus the width of the last one.
fn grapheme_wrap(fragment: &str, metrics: &FontMetrics, max_width: f32) -> (u32, f32) {
    let mut extra: u32 = 0;
    let mut x: f32 = 0.0;

    for grapheme in fragment.graphemes(true) {
        let w = grapheme_width(grapheme, metrics);
        if x > 0.0 && x + w > max_width {
            extra += 1;
            x = 0.0;
        }
        x += w;
    }

    (extra, x)
}

/// Advance width of a whole fragment
fn advance_width(fragment: &str, metrics: &FontMetrics) -> f32 {
    fragment
        .graphemes(true)
        .map(|g| grapheme_width(g, metrics))
        .sum()
}

/// Advance width of one grapheme cluster
fn grapheme_width(grapheme: &str, metrics: &FontMetrics) -> f32 {
    if grapheme == "\t" {
        metrics.default_width * 4.0
    } else if grapheme.chars().all(|c| c.is_control()) {
        0.0
    } else {
        grapheme.chars().map(|c| metrics.width(c)).sum()
    }
}
