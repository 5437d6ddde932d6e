//! Compact template: inline entry metadata, tight spacing

use crate::content::Resume;
use crate::measure::font::{FONT_BODY, FONT_HEADING, FONT_META, FONT_NAME, FONT_SECTION};

use super::blocks::{RenderBlock, RenderDocument};
use super::LayoutSettings;

/// Left indent for bullet lines
const BULLET_INDENT_PX: f32 = 12.0;

/// Compact gaps are this fraction of the configured ones
const GAP_SCALE: f32 = 0.6;

/// Render the résumé as a dense single-column layout
pub fn render(resume: &Resume, settings: &LayoutSettings) -> RenderDocument {
    let mut doc = RenderDocument::new();

    if !resume.full_name.is_empty() {
        doc.push(RenderBlock::text(None, FONT_NAME, resume.full_name.as_str()).with_spacing(2.0));
    }

    // Headline and contact collapse into one line when both are present.
    let mut header_line = resume.headline.clone();
    if !resume.contact.is_empty() {
        if !header_line.is_empty() {
            header_line.push_str(" | ");
        }
        header_line.push_str(&resume.contact.join(" | "));
    }
    if !header_line.is_empty() {
        doc.push(
            RenderBlock::text(None, FONT_META, header_line)
                .with_spacing(settings.section_gap_px * GAP_SCALE),
        );
    }

    for (i, section) in resume.sections.iter().enumerate() {
        let tag = Some(section.id);
        doc.push(RenderBlock::text(tag, FONT_SECTION, section.title.as_str()).with_spacing(4.0));

        for (j, entry) in section.entries.iter().enumerate() {
            let mut heading = entry.heading.clone();
            if !entry.meta.is_empty() {
                heading.push_str(" — ");
                heading.push_str(&entry.meta);
            }
            doc.push(RenderBlock::text(tag, FONT_HEADING, heading).with_spacing(2.0));

            for bullet in &entry.bullets {
                doc.push(
                    RenderBlock::text(tag, FONT_BODY, format!("• {}", bullet))
                        .with_indent(BULLET_INDENT_PX)
                        .with_spacing(1.0),
                );
            }
            if j + 1 < section.entries.len() {
                doc.push(RenderBlock::spacer(settings.entry_gap_px * GAP_SCALE));
            }
        }

        if i + 1 < resume.sections.len() {
            doc.push(RenderBlock::spacer(settings.section_gap_px * GAP_SCALE));
        }
    }

    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Entry, ResumeSection, SectionId};
    use crate::template::{render_resume, BlockContent, TemplateKind};

    fn sample() -> Resume {
        Resume {
            full_name: "Ada Lovelace".to_string(),
            headline: "Analyst".to_string(),
            contact: vec!["ada@example.com".to_string()],
            sections: vec![ResumeSection::new(SectionId(1), "Experience").with_entry(
                Entry::new("Engine Programmer", "1842-1843").with_bullet("First program"),
            )],
        }
    }

    #[test]
    fn test_no_rules_emitted() {
        let doc = render(&sample(), &LayoutSettings::default());
        assert!(!doc
            .blocks
            .iter()
            .any(|b| matches!(b.content, BlockContent::Rule { .. })));
    }

    #[test]
    fn test_meta_folded_into_heading() {
        let doc = render(&sample(), &LayoutSettings::default());
        assert!(doc.blocks.iter().any(|b| matches!(
            &b.content,
            BlockContent::Text { text, .. } if text == "Engine Programmer — 1842-1843"
        )));
    }

    #[test]
    fn test_fewer_blocks_than_classic() {
        let resume = sample();
        let mut settings = LayoutSettings::default();
        settings.template = TemplateKind::Classic;
        let classic = render_resume(&resume, &settings);
        settings.template = TemplateKind::Compact;
        let compact = render_resume(&resume, &settings);
        assert!(compact.blocks.len() < classic.blocks.len());
    }
}
