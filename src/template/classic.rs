//! Classic template: ruled section titles, generous spacing

use crate::content::Resume;
use crate::measure::font::{FONT_BODY, FONT_HEADING, FONT_META, FONT_NAME, FONT_SECTION};

use super::blocks::{RenderBlock, RenderDocument};
use super::LayoutSettings;

/// Left indent for bullet lines
const BULLET_INDENT_PX: f32 = 16.0;

/// Render the résumé as a classic single-column layout
pub fn render(resume: &Resume, settings: &LayoutSettings) -> RenderDocument {
    let mut doc = RenderDocument::new();

    if !resume.full_name.is_empty() {
        doc.push(RenderBlock::text(None, FONT_NAME, resume.full_name.as_str()).with_spacing(4.0));
    }
    if !resume.headline.is_empty() {
        doc.push(RenderBlock::text(None, FONT_META, resume.headline.as_str()).with_spacing(6.0));
    }
    if !resume.contact.is_empty() {
        doc.push(
            RenderBlock::text(None, FONT_META, resume.contact.join("  ·  "))
                .with_spacing(settings.section_gap_px),
        );
    }

    for (i, section) in resume.sections.iter().enumerate() {
        let tag = Some(section.id);
        doc.push(RenderBlock::text(tag, FONT_SECTION, section.title.to_uppercase()).with_spacing(3.0));
        doc.push(RenderBlock::rule(tag, 1.0).with_spacing(8.0));

        for (j, entry) in section.entries.iter().enumerate() {
            doc.push(RenderBlock::text(tag, FONT_HEADING, entry.heading.as_str()).with_spacing(2.0));
            if !entry.meta.is_empty() {
                doc.push(RenderBlock::text(tag, FONT_META, entry.meta.as_str()).with_spacing(4.0));
            }
            for bullet in &entry.bullets {
                doc.push(
                    RenderBlock::text(tag, FONT_BODY, format!("• {}", bullet))
                        .with_indent(BULLET_INDENT_PX)
                        .with_spacing(2.0),
                );
            }
            if j + 1 < section.entries.len() {
                doc.push(RenderBlock::spacer(settings.entry_gap_px));
            }
        }

        if i + 1 < resume.sections.len() {
            doc.push(RenderBlock::spacer(settings.section_gap_px));
        }
    }

    doc
}
