//! Benchmarks for the preview engine core

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vitae_core::{
    measure_document, page_windows, render_resume, BreakRules, Entry, FontLibrary, LayoutSettings,
    PageGeometry, PreviewEngine, Resume, ResumeSection, SectionExtent, SectionId, TemplateKind,
};

fn sample_resume(section_count: u32, entries_per_section: usize) -> Resume {
    let mut sections = Vec::new();
    for s in 0..section_count {
        let mut section = ResumeSection::new(SectionId(s + 1), format!("Section {}", s + 1));
        for e in 0..entries_per_section {
            let mut entry = Entry::new(
                format!("Role {} with a reasonably long title", e + 1),
                "Employer Name · City · 2019-2024",
            );
            for i in 0..4 {
                entry = entry.with_bullet(format!(
                    "Delivered outcome number {} across several teams and kept it in production",
                    i + 1
                ));
            }
            section = section.with_entry(entry);
        }
        sections.push(section);
    }

    Resume {
        full_name: "Ada Lovelace".to_string(),
        headline: "Analyst & Programmer".to_string(),
        contact: vec!["ada@example.com".to_string(), "London".to_string()],
        sections,
    }
}

fn bench_render_classic(c: &mut Criterion) {
    c.bench_function("render_classic_template", |b| {
        let resume = sample_resume(4, 6);
        let settings = LayoutSettings::default();

        b.iter(|| {
            black_box(render_resume(black_box(&resume), &settings));
        });
    });
}

fn bench_render_compact(c: &mut Criterion) {
    c.bench_function("render_compact_template", |b| {
        let resume = sample_resume(4, 6);
        let mut settings = LayoutSettings::default();
        settings.template = TemplateKind::Compact;

        b.iter(|| {
            black_box(render_resume(black_box(&resume), &settings));
        });
    });
}

fn bench_measure_document(c: &mut Criterion) {
    c.bench_function("measure_document", |b| {
        let settings = LayoutSettings::default();
        let rendered = render_resume(&sample_resume(4, 6), &settings);
        let fonts = FontLibrary::from_settings(&settings);
        let width = PageGeometry::a4().content_width();

        b.iter(|| {
            black_box(measure_document(black_box(&rendered), &fonts, width));
        });
    });
}

fn bench_page_windows(c: &mut Criterion) {
    c.bench_function("page_windows", |b| {
        let sections: Vec<SectionExtent> = (0u32..20)
            .map(|i| SectionExtent::new(SectionId(i + 1), i as f32 * 150.0, 140.0))
            .collect();
        let total = 20.0 * 150.0;
        let rules = BreakRules::default();

        b.iter(|| {
            black_box(page_windows(black_box(&sections), total, 1000.0, &rules));
        });
    });
}

fn bench_page_windows_many_sections(c: &mut Criterion) {
    c.bench_function("page_windows_many_sections", |b| {
        // A resume this long would paginate into ~50 pages
        let sections: Vec<SectionExtent> = (0u32..400)
            .map(|i| SectionExtent::new(SectionId(i + 1), i as f32 * 120.0, 110.0))
            .collect();
        let total = 400.0 * 120.0;
        let rules = BreakRules::default();

        b.iter(|| {
            black_box(page_windows(black_box(&sections), total, 1000.0, &rules));
        });
    });
}

fn bench_full_refresh(c: &mut Criterion) {
    c.bench_function("full_refresh", |b| {
        let mut engine = PreviewEngine::with_resume(
            sample_resume(6, 8),
            LayoutSettings::default(),
            PageGeometry::a4(),
        );

        b.iter(|| {
            engine.refresh_now();
        });
    });
}

criterion_group!(
    benches,
    bench_render_classic,
    bench_render_compact,
    bench_measure_document,
    bench_page_windows,
    bench_page_windows_many_sections,
    bench_full_refresh,
);

criterion_main!(benches);
