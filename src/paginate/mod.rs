//! Page window computation over measured content

use log::debug;

use crate::measure::SectionExtent;

/// Fraction of a straddling section that must be visible on the current page
/// for the boundary to stay put; anything thinner is pushed to the next page
pub const MIN_VISIBLE_FRACTION: f32 = 0.15;

/// Rules controlling where a page boundary may fall
#[derive(Debug, Clone, Copy)]
pub struct BreakRules {
    /// Sliver threshold: a straddling section showing less than this
    /// fraction of itself is deferred whole to the next page, provided it
    /// could fit on a page at all
    pub min_visible_fraction: f32,
}

impl Default for BreakRules {
    fn default() -> Self {
        Self {
            min_visible_fraction: MIN_VISIBLE_FRACTION,
        }
    }
}

/// One page's half-open slice of content space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageWindow {
    /// Top of the slice, inclusive
    pub start: f32,
    /// Bottom of the slice, exclusive
    pub end: f32,
}

impl PageWindow {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Visible height of the slice
    pub fn height(&self) -> f32 {
        self.end - self.start
    }

    /// Whether a content offset falls inside the slice
    pub fn contains(&self, offset: f32) -> bool {
        offset >= self.start && offset < self.end
    }
}

/// Split measured content into page windows.
///
/// Greedy forward walk: each page tentatively ends one page height below its
/// start. If that boundary would slice a section into a sliver thinner than
/// `min_visible_fraction`, and the section could fit on a page of its own,
/// the boundary moves up to the section's top so the whole section opens the
/// next page. Sections taller than a page are never deferred; they split.
///
/// Pure in its inputs: no clock, no prior state, identical inputs yield
/// identical windows. `sections` must be ordered by top offset; only the
/// first section straddling a candidate boundary is considered.
pub fn page_windows(
    sections: &[SectionExtent],
    total_height: f32,
    page_height: f32,
    rules: &BreakRules,
) -> Vec<PageWindow> {
    debug_assert!(page_height > 0.0, "page height must be positive");

    if total_height <= page_height {
        return vec![PageWindow::new(0.0, total_height.max(0.0))];
    }

    let mut windows = Vec::new();
    let mut current_start: f32 = 0.0;

    while current_start < total_height {
        let candidate_end = current_start + page_height;
        let mut adjusted_end = candidate_end;

        if let Some(section) = sections
            .iter()
            .find(|s| s.top < candidate_end && candidate_end < s.bottom())
        {
            let visible_fraction = (candidate_end - section.top) / section.height;
            if section.height <= page_height && visible_fraction < rules.min_visible_fraction {
                // A deferred section always starts below current_start, so
                // the walk still makes progress.
                adjusted_end = section.top;
                debug!(
                    "deferring section {:?} to next page ({:.1}% visible)",
                    section.id,
                    visible_fraction * 100.0
                );
            }
        }

        windows.push(PageWindow::new(
            current_start,
            adjusted_end.min(total_height),
        ));
        current_start = adjusted_end;
    }

    windows
}
